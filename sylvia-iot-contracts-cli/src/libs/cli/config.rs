//! Program configurations.

use std::env;

use clap::{Arg, ArgMatches, Command, builder::BoolishValueParser};

use super::Config;

pub const DEF_PRETTY: bool = true;

/// To register Clap arguments.
pub fn reg_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("cli.pretty")
            .long("cli.pretty")
            .help("print JSON with indentation")
            .num_args(1)
            .value_parser(BoolishValueParser::new()),
    )
}

/// To read input arguments from command-line arguments and environment variables.
///
/// This function will call [`apply_default()`] to fill missing values so you do not need call it
/// again.
pub fn read_args(args: &ArgMatches) -> Config {
    apply_default(&Config {
        pretty: match args.get_one::<bool>("cli.pretty") {
            None => match env::var("CONTRACTSCLI_PRETTY") {
                Err(_) => None,
                Ok(v) => match v.as_str() {
                    "true" | "1" => Some(true),
                    "false" | "0" => Some(false),
                    _ => None,
                },
            },
            Some(v) => Some(*v),
        },
    })
}

/// Fill missing configuration with default values.
pub fn apply_default(config: &Config) -> Config {
    Config {
        pretty: match config.pretty {
            None => Some(DEF_PRETTY),
            Some(v) => Some(v),
        },
    }
}
