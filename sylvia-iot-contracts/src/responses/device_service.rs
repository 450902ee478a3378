use serde::{Deserialize, Serialize};

use super::BaseResponse;
use crate::{dtos::DeviceService, models::DeviceService as DeviceServiceModel};

/// The body of `GET /deviceservice/...` for one item.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DeviceServiceResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    pub service: DeviceService,
}

/// The body of `GET /deviceservice/...` for a list.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MultiDeviceServicesResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    pub services: Vec<DeviceService>,
}

impl DeviceServiceResponse {
    pub fn new(
        request_id: &str,
        message: &str,
        status_code: u16,
        service: &DeviceServiceModel,
    ) -> Self {
        DeviceServiceResponse {
            base: BaseResponse::new(request_id, message, status_code),
            service: DeviceService::from(service),
        }
    }
}

impl MultiDeviceServicesResponse {
    pub fn new(
        request_id: &str,
        message: &str,
        status_code: u16,
        services: &[DeviceServiceModel],
    ) -> Self {
        MultiDeviceServicesResponse {
            base: BaseResponse::new(request_id, message, status_code),
            services: services.iter().map(DeviceService::from).collect(),
        }
    }
}
