//! Response envelopes.

use serde::{Deserialize, Serialize};

pub mod device_service;

pub use device_service::{DeviceServiceResponse, MultiDeviceServicesResponse};

/// The common part of all responses.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct BaseResponse {
    /// The correlation identifier of the request.
    #[serde(rename = "requestId", default, skip_serializing_if = "String::is_empty")]
    pub request_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl BaseResponse {
    pub fn new(request_id: &str, message: &str, status_code: u16) -> Self {
        BaseResponse {
            request_id: request_id.to_string(),
            message: message.to_string(),
            status_code,
        }
    }
}
