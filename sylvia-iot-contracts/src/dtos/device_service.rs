//! Device service DTOs for creating, patching and answering.

use serde::{Deserialize, Serialize};

use crate::models::DeviceService as DeviceServiceModel;

/// The complete device service content of create requests and responses.
///
/// Missing and `null` fields are decoded as empty values and reported by the request validators.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct DeviceService {
    #[serde(deserialize_with = "super::nullable", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(deserialize_with = "super::nullable")]
    pub name: String,
    #[serde(deserialize_with = "super::nullable", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(deserialize_with = "super::nullable")]
    pub labels: Vec<String>,
    #[serde(rename = "baseAddress", deserialize_with = "super::nullable")]
    pub base_address: String,
    #[serde(rename = "operatingState", deserialize_with = "super::nullable")]
    pub operating_state: String,
    #[serde(rename = "adminState", deserialize_with = "super::nullable")]
    pub admin_state: String,
}

/// The patch content of update requests. [`None`] fields are not changed.
///
/// `labels` and `description` keep the difference between an absent field (`None`) and an explicit
/// empty value or `null` (`Some` empty), which clears the stored field. The other fields are
/// mandatory in the model, so `null` is the same as absent for them.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UpdateDeviceService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::clearable",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::clearable",
        skip_serializing_if = "Option::is_none"
    )]
    pub labels: Option<Vec<String>>,
    #[serde(rename = "baseAddress", skip_serializing_if = "Option::is_none")]
    pub base_address: Option<String>,
    #[serde(rename = "operatingState", skip_serializing_if = "Option::is_none")]
    pub operating_state: Option<String>,
    #[serde(rename = "adminState", skip_serializing_if = "Option::is_none")]
    pub admin_state: Option<String>,
}

impl DeviceService {
    /// To create the storage model with all fields copied.
    pub fn to_model(&self) -> DeviceServiceModel {
        DeviceServiceModel {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            labels: self.labels.clone(),
            base_address: self.base_address.clone(),
            operating_state: self.operating_state.clone(),
            admin_state: self.admin_state.clone(),
        }
    }
}

impl From<&DeviceServiceModel> for DeviceService {
    fn from(model: &DeviceServiceModel) -> Self {
        DeviceService {
            id: model.id.clone(),
            name: model.name.clone(),
            description: model.description.clone(),
            labels: model.labels.clone(),
            base_address: model.base_address.clone(),
            operating_state: model.operating_state.clone(),
            admin_state: model.admin_state.clone(),
        }
    }
}

impl UpdateDeviceService {
    /// To check if no field other than the lookup keys (`id`, `name`) is present.
    pub fn is_empty_patch(&self) -> bool {
        self.description.is_none()
            && self.labels.is_none()
            && self.base_address.is_none()
            && self.operating_state.is_none()
            && self.admin_state.is_none()
    }
}
