use std::{
    error::Error as StdError,
    fs,
    io::{Error as IoError, ErrorKind},
};

use chrono::Utc;
use clap::{Arg, ArgMatches, Command};
use log::error;
use serde::Deserialize;

use sylvia_iot_contracts::logger::{self, Config as LogConfig};
use sylvia_iot_contracts_cli::libs::cli::{self as libs, Config};

#[derive(Default, Deserialize)]
#[serde(default)]
struct AppConfig {
    log: LogConfig,
    cli: Config,
}

const PROJ_NAME: &'static str = env!("CARGO_BIN_NAME");
const PROJ_VER: &'static str = env!("CARGO_PKG_VERSION");

fn main() -> Result<(), Box<dyn StdError>> {
    let (conf, args) = match init_config() {
        Err(e) => return Err(e),
        Ok((conf, args)) => (conf, args),
    };
    if let Err(e) = logger::init(PROJ_NAME, &conf.log) {
        return Err(Box::new(IoError::new(ErrorKind::Other, e.to_string())));
    }

    let start = Utc::now().timestamp_millis();
    match libs::run(&conf.cli, &args) {
        Err(e) => {
            let diff = Utc::now().timestamp_millis() - start;
            error!("[main] run error ({} ms): {}", diff, e);
            Err(e)
        }
        Ok(None) => {
            println!("Sub-command not support");
            Err(Box::new(IoError::new(
                ErrorKind::InvalidInput,
                "sub-command not support",
            )))
        }
        Ok(Some(output)) => {
            println!("{}", output);
            Ok(())
        }
    }
}

fn init_config() -> Result<(AppConfig, ArgMatches), Box<dyn StdError>> {
    let mut args = Command::new(PROJ_NAME).version(PROJ_VER).arg(
        Arg::new("file")
            .short('f')
            .long("file")
            .help("config file")
            .num_args(1),
    );
    args = logger::reg_args(args);
    args = libs::reg_args(args);
    let args = args.get_matches();

    if let Some(value) = args.get_one::<String>("file") {
        let conf_str = fs::read_to_string(value)?;
        let conf: AppConfig = json5::from_str(conf_str.as_str())?;
        return Ok((
            AppConfig {
                log: logger::apply_default(&conf.log),
                cli: libs::config::apply_default(&conf.cli),
            },
            args,
        ));
    }

    Ok((
        AppConfig {
            log: logger::read_args(&args),
            cli: libs::config::read_args(&args),
        },
        args,
    ))
}
