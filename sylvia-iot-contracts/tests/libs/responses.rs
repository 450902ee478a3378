use laboratory::{SpecContext, expect};
use serde_json::{Value, json};

use sylvia_iot_contracts::{
    dtos::DeviceService,
    responses::{DeviceServiceResponse, MultiDeviceServicesResponse},
};

use crate::{
    TestState,
    requests::{TEST_REQ_ID, stored_model},
};

/// Test [`DeviceServiceResponse::new`].
pub fn device_service_new(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let model = stored_model();
    let resp = DeviceServiceResponse::new(TEST_REQ_ID, "", 200, &model);
    expect(resp.base.request_id.as_str()).to_equal(TEST_REQ_ID)?;
    expect(resp.base.status_code).to_equal(200)?;
    expect(resp.service.clone()).to_equal(DeviceService::from(&model))?;

    let value = match serde_json::to_value(&resp) {
        Err(e) => return Err(format!("serialize error: {}", e)),
        Ok(value) => value,
    };
    expect(value.get("message").is_none()).to_equal(true)?;
    expect(value.get("requestId").cloned()).to_equal(Some(json!(TEST_REQ_ID)))?;
    expect(value.get("statusCode").cloned()).to_equal(Some(json!(200)))?;
    expect(value["service"]["baseAddress"].clone()).to_equal(json!(model.base_address))?;

    let resp = DeviceServiceResponse::new("", "not found", 404, &model);
    let value = match serde_json::to_value(&resp) {
        Err(e) => return Err(format!("serialize error: {}", e)),
        Ok(value) => value,
    };
    expect(value.get("requestId").is_none()).to_equal(true)?;
    expect(value.get("message").cloned()).to_equal(Some(Value::from("not found")))
}

/// Test [`MultiDeviceServicesResponse::new`].
pub fn multi_device_services_new(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let resp = MultiDeviceServicesResponse::new(TEST_REQ_ID, "", 200, &[]);
    expect(resp.services.len()).to_equal(0)?;

    let first = stored_model();
    let mut second = stored_model();
    second.name = "second".to_string();
    let resp = MultiDeviceServicesResponse::new(TEST_REQ_ID, "", 200, &[first, second]);
    expect(resp.services.len()).to_equal(2)?;
    expect(resp.services[1].name.as_str()).to_equal("second")?;

    let str = match serde_json::to_string(&resp) {
        Err(e) => return Err(format!("serialize error: {}", e)),
        Ok(str) => str,
    };
    match serde_json::from_str::<MultiDeviceServicesResponse>(str.as_str()) {
        Err(e) => Err(format!("deserialize error: {}", e)),
        Ok(decoded) => expect(decoded).to_equal(resp),
    }
}
