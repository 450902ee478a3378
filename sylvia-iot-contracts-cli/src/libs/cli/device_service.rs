use std::error::Error as StdError;

use clap::{Arg, ArgMatches, Command};
use log::{info, warn};

use sylvia_iot_contracts::{
    err::ErrResp,
    models::DeviceService,
    requests::{self, AddDeviceServiceRequest, UpdateDeviceServiceRequest},
};

use super::{Config, input_arg, read_file, to_output};

pub fn reg_add_args(cmd: Command) -> Command {
    cmd.about("Validate add requests (one object or an array) and print the mapped models")
        .arg(input_arg())
}

pub fn reg_update_args(cmd: Command) -> Command {
    cmd.about("Validate an update request and print it").arg(input_arg())
}

pub fn reg_merge_args(cmd: Command) -> Command {
    cmd.about("Merge an update request into a stored model and print the result")
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .help("stored model JSON file")
                .num_args(1)
                .required(true),
        )
        .arg(input_arg())
}

pub fn add(conf: &Config, args: &ArgMatches) -> Result<String, Box<dyn StdError>> {
    const FN_NAME: &'static str = "add";

    let data = read_file(args, "input")?;
    let is_batch = data
        .iter()
        .find(|c| !c.is_ascii_whitespace())
        .is_some_and(|c| *c == b'[');
    let reqs = match is_batch {
        false => vec![AddDeviceServiceRequest::from_json(data.as_slice())?],
        true => AddDeviceServiceRequest::from_json_batch(data.as_slice())?,
    };
    for req in reqs.iter() {
        info!(
            "[{}] requestId={} name={}",
            FN_NAME, req.base.request_id, req.service.name
        );
    }
    to_output(conf, &requests::add_requests_to_models(&reqs))
}

pub fn update(conf: &Config, args: &ArgMatches) -> Result<String, Box<dyn StdError>> {
    const FN_NAME: &'static str = "update";

    let data = read_file(args, "input")?;
    let req = UpdateDeviceServiceRequest::from_json(data.as_slice())?;
    if req.service.is_empty_patch() {
        warn!("[{}] no field to update", FN_NAME);
    }
    to_output(conf, &req)
}

pub fn merge(conf: &Config, args: &ArgMatches) -> Result<String, Box<dyn StdError>> {
    const FN_NAME: &'static str = "merge";

    let model_data = read_file(args, "model")?;
    let mut model: DeviceService = match serde_json::from_slice(model_data.as_slice()) {
        Err(e) => return Err(Box::new(ErrResp::ErrDecode(Some(format!("model: {}", e))))),
        Ok(model) => model,
    };
    let data = read_file(args, "input")?;
    let req = UpdateDeviceServiceRequest::from_json(data.as_slice())?;

    // The request is looked up by `id` first, then by `name`.
    let matched = match req.service.id.as_ref() {
        Some(id) => id.eq(&model.id),
        None => req.service.name.as_ref() == Some(&model.name),
    };
    if !matched {
        warn!("[{}] request key does not match model {}", FN_NAME, model.name);
        return Err(Box::new(ErrResp::ErrInvalid(Some(
            "`id` or `name` does not match the model".to_string(),
        ))));
    }

    requests::replace_device_service_model_fields_with_dto(&mut model, &req.service);
    info!(
        "[{}] requestId={} name={}",
        FN_NAME, req.base.request_id, model.name
    );
    to_output(conf, &model)
}
