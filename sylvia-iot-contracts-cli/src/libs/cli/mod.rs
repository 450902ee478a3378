use std::{error::Error as StdError, fs};

use clap::{Arg, ArgMatches, Command};
use serde::{Deserialize, Serialize};

pub mod config;
mod device_service;

/// Application configurations.
#[derive(Default, Deserialize)]
pub struct Config {
    /// To print JSON output with indentation.
    ///
    /// Default is `true`.
    pub pretty: Option<bool>,
}

/// To register Clap arguments.
pub fn reg_args(cmd: Command) -> Command {
    config::reg_args(cmd)
        .subcommand(device_service::reg_add_args(Command::new("add")))
        .subcommand(device_service::reg_update_args(Command::new("update")))
        .subcommand(device_service::reg_merge_args(Command::new("merge")))
}

/// To run the sub-command. Returns the output text, or `None` for unknown sub-commands.
pub fn run(conf: &Config, args: &ArgMatches) -> Result<Option<String>, Box<dyn StdError>> {
    let output = match args.subcommand() {
        Some(("add", args)) => device_service::add(conf, args)?,
        Some(("update", args)) => device_service::update(conf, args)?,
        Some(("merge", args)) => device_service::merge(conf, args)?,
        _ => return Ok(None),
    };
    Ok(Some(output))
}

fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .help("request JSON file")
        .num_args(1)
        .required(true)
}

fn read_file(args: &ArgMatches, id: &str) -> Result<Vec<u8>, Box<dyn StdError>> {
    match args.get_one::<String>(id) {
        None => Err(format!("missing `{}`", id).into()),
        Some(path) => Ok(fs::read(path)?),
    }
}

fn to_output<T: Serialize>(conf: &Config, value: &T) -> Result<String, Box<dyn StdError>> {
    match conf.pretty {
        Some(false) => Ok(serde_json::to_string(value)?),
        _ => Ok(serde_json::to_string_pretty(value)?),
    }
}
