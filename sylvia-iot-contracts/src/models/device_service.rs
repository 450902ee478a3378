//! The device service storage model.

use serde::{Deserialize, Serialize};

/// The item content.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DeviceService {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(rename = "baseAddress")]
    pub base_address: String,
    #[serde(rename = "operatingState")]
    pub operating_state: String, // One of `OperatingState` constants.
    #[serde(rename = "adminState")]
    pub admin_state: String, // One of `AdminState` constants.
}
