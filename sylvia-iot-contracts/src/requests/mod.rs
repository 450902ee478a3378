//! Request envelopes and their decoding/validation.

use log::debug;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    constants::{AdminState, OperatingState},
    err::ErrResp,
    strings,
};

pub mod device_service;

pub use device_service::{
    AddDeviceServiceRequest, UpdateDeviceServiceRequest, add_requests_to_models,
    replace_device_service_model_fields_with_dto,
};

/// The common part of all requests.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct BaseRequest {
    /// The correlation identifier. Empty to let the receiver assign one.
    #[serde(
        rename = "requestId",
        default,
        deserialize_with = "crate::dtos::nullable",
        skip_serializing_if = "String::is_empty"
    )]
    pub request_id: String,
}

impl BaseRequest {
    /// To validate the correlation identifier format.
    pub fn validate(&self) -> Result<(), ErrResp> {
        if self.request_id.len() > 0 && !strings::is_uuid(self.request_id.as_str()) {
            return Err(ErrResp::ErrInvalid(Some(
                "`requestId` must be an UUID".to_string(),
            )));
        }
        Ok(())
    }

    /// To get the correlation identifier, or generate a new one if it is empty.
    pub fn request_id_or_new(&self) -> String {
        match self.request_id.len() {
            0 => strings::new_uuid(),
            _ => self.request_id.clone(),
        }
    }
}

/// To decode a JSON document into `T` and map all failures to [`ErrResp::ErrDecode`].
///
/// Empty input is an error instead of a default value.
pub(crate) fn decode<T: DeserializeOwned>(fn_name: &str, data: &[u8]) -> Result<T, ErrResp> {
    if data.len() == 0 {
        debug!("[{}] empty input", fn_name);
        return Err(ErrResp::ErrDecode(Some("empty input".to_string())));
    }
    match serde_json::from_slice::<T>(data) {
        Err(e) => {
            debug!("[{}] decode error: {}", fn_name, e);
            Err(ErrResp::ErrDecode(Some(e.to_string())))
        }
        Ok(value) => Ok(value),
    }
}

/// To check a mandatory operating state.
pub(crate) fn check_operating_state(state: &str) -> Result<(), ErrResp> {
    if state.len() == 0 {
        return Err(ErrResp::ErrRequired(Some(
            "`operatingState` is required".to_string(),
        )));
    }
    check_operating_state_value(state)
}

/// To check an operating state which is present.
pub(crate) fn check_operating_state_value(state: &str) -> Result<(), ErrResp> {
    if !OperatingState::is_valid(state) {
        return Err(ErrResp::ErrInvalid(Some(format!(
            "`operatingState` must be {} or {}",
            OperatingState::ENABLED,
            OperatingState::DISABLED
        ))));
    }
    Ok(())
}

/// To check a mandatory administrative state.
pub(crate) fn check_admin_state(state: &str) -> Result<(), ErrResp> {
    if state.len() == 0 {
        return Err(ErrResp::ErrRequired(Some(
            "`adminState` is required".to_string(),
        )));
    }
    check_admin_state_value(state)
}

/// To check an administrative state which is present.
pub(crate) fn check_admin_state_value(state: &str) -> Result<(), ErrResp> {
    if !AdminState::is_valid(state) {
        return Err(ErrResp::ErrInvalid(Some(format!(
            "`adminState` must be {} or {}",
            AdminState::LOCKED,
            AdminState::UNLOCKED
        ))));
    }
    Ok(())
}

/// To check a base address which is present.
pub(crate) fn check_base_address_value(addr: &str) -> Result<(), ErrResp> {
    if !strings::is_uri(addr) {
        return Err(ErrResp::ErrInvalid(Some(
            "`baseAddress` must be an URI".to_string(),
        )));
    }
    Ok(())
}

/// To check a resource ID which is present.
pub(crate) fn check_id_value(id: &str) -> Result<(), ErrResp> {
    if !strings::is_uuid(id) {
        return Err(ErrResp::ErrInvalid(Some("`id` must be an UUID".to_string())));
    }
    Ok(())
}
