//! Requests for adding and updating device services.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    BaseRequest, check_admin_state, check_admin_state_value, check_base_address_value,
    check_id_value, check_operating_state, check_operating_state_value, decode,
};
use crate::{
    dtos::{DeviceService, UpdateDeviceService},
    err::ErrResp,
    models::DeviceService as DeviceServiceModel,
};

/// The body of `POST /deviceservice`. Endpoints accept an array of these.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AddDeviceServiceRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    #[serde(default, deserialize_with = "crate::dtos::nullable")]
    pub service: DeviceService,
}

/// The body of `PATCH /deviceservice`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UpdateDeviceServiceRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    #[serde(default, deserialize_with = "crate::dtos::nullable")]
    pub service: UpdateDeviceService,
}

impl AddDeviceServiceRequest {
    /// To decode and validate one request.
    pub fn from_json(data: &[u8]) -> Result<Self, ErrResp> {
        const FN_NAME: &'static str = "AddDeviceServiceRequest::from_json";

        let req: Self = decode(FN_NAME, data)?;
        if let Err(e) = req.validate() {
            debug!("[{}] validate error: {}", FN_NAME, e);
            return Err(e);
        }
        Ok(req)
    }

    /// To decode and validate an array of requests.
    ///
    /// The first invalid request fails the whole batch and its index is reported.
    pub fn from_json_batch(data: &[u8]) -> Result<Vec<Self>, ErrResp> {
        const FN_NAME: &'static str = "AddDeviceServiceRequest::from_json_batch";

        let reqs: Vec<Self> = decode(FN_NAME, data)?;
        for (index, req) in reqs.iter().enumerate() {
            if let Err(e) = req.validate() {
                debug!("[{}] validate error at {}: {}", FN_NAME, index, e);
                let desc = format!("[{}] {}", index, e.message().unwrap_or(e.code()));
                return Err(match e {
                    ErrResp::ErrDecode(_) => ErrResp::ErrDecode(Some(desc)),
                    ErrResp::ErrRequired(_) => ErrResp::ErrRequired(Some(desc)),
                    ErrResp::ErrInvalid(_) => ErrResp::ErrInvalid(Some(desc)),
                });
            }
        }
        Ok(reqs)
    }

    /// To validate all fields. The first violation is returned.
    pub fn validate(&self) -> Result<(), ErrResp> {
        self.base.validate()?;

        let service = &self.service;
        if service.name.len() == 0 {
            return Err(ErrResp::ErrRequired(Some("`name` is required".to_string())));
        }
        check_operating_state(service.operating_state.as_str())?;
        check_admin_state(service.admin_state.as_str())?;
        if service.base_address.len() == 0 {
            return Err(ErrResp::ErrRequired(Some(
                "`baseAddress` is required".to_string(),
            )));
        }
        check_base_address_value(service.base_address.as_str())?;
        if service.id.len() > 0 {
            check_id_value(service.id.as_str())?;
        }
        Ok(())
    }
}

impl UpdateDeviceServiceRequest {
    /// To decode and validate one request.
    pub fn from_json(data: &[u8]) -> Result<Self, ErrResp> {
        const FN_NAME: &'static str = "UpdateDeviceServiceRequest::from_json";

        let req: Self = decode(FN_NAME, data)?;
        if let Err(e) = req.validate() {
            debug!("[{}] validate error: {}", FN_NAME, e);
            return Err(e);
        }
        Ok(req)
    }

    /// To validate present fields. The first violation is returned.
    pub fn validate(&self) -> Result<(), ErrResp> {
        self.base.validate()?;

        let service = &self.service;
        if service.id.is_none() && service.name.is_none() {
            return Err(ErrResp::ErrRequired(Some(
                "`id` or `name` is required".to_string(),
            )));
        }
        if let Some(id) = service.id.as_ref() {
            check_id_value(id.as_str())?;
        }
        if let Some(name) = service.name.as_ref() {
            if name.len() == 0 {
                return Err(ErrResp::ErrInvalid(Some(
                    "`name` must with at least one character".to_string(),
                )));
            }
        }
        if let Some(base_address) = service.base_address.as_ref() {
            check_base_address_value(base_address.as_str())?;
        }
        if let Some(state) = service.operating_state.as_ref() {
            check_operating_state_value(state.as_str())?;
        }
        if let Some(state) = service.admin_state.as_ref() {
            check_admin_state_value(state.as_str())?;
        }
        Ok(())
    }
}

/// To map validated add requests to storage models in the same order.
pub fn add_requests_to_models(reqs: &[AddDeviceServiceRequest]) -> Vec<DeviceServiceModel> {
    reqs.iter().map(|req| req.service.to_model()).collect()
}

/// To overwrite the model fields which are present in the patch.
///
/// `id` and `name` are lookup keys and will not be changed.
pub fn replace_device_service_model_fields_with_dto(
    model: &mut DeviceServiceModel,
    patch: &UpdateDeviceService,
) {
    if let Some(description) = patch.description.as_ref() {
        model.description = description.clone();
    }
    if let Some(labels) = patch.labels.as_ref() {
        model.labels = labels.clone();
    }
    if let Some(base_address) = patch.base_address.as_ref() {
        model.base_address = base_address.clone();
    }
    if let Some(state) = patch.operating_state.as_ref() {
        model.operating_state = state.clone();
    }
    if let Some(state) = patch.admin_state.as_ref() {
        model.admin_state = state.clone();
    }
}
