//! Clap argument definition for the `flatstore` binary.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use crate::config::Overrides;

/// Build the command-line interface.
pub fn build_cli() -> Command {
    Command::new("flatstore")
        .about("REST API over flat JSON files")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .help("Path to flatstore.toml"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding the JSON files (default: data)"),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .help("Address to bind (default: 0.0.0.0)"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .short('p')
                .env("PORT")
                .value_parser(value_parser!(u16))
                .help("Port to listen on (default: 3000)"),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .help("Path prefix for every route (default: /api)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .help("Maximum log level (default: info)"),
        )
        .arg(
            Arg::new("print-config")
                .long("print-config")
                .action(ArgAction::SetTrue)
                .help("Print the resolved configuration and exit"),
        )
        .arg(
            Arg::new("print-default-config")
                .long("print-default-config")
                .action(ArgAction::SetTrue)
                .conflicts_with("print-config")
                .help("Print a commented default flatstore.toml and exit"),
        )
}

/// Config file given with `--config`, if any
pub fn config_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<PathBuf>("config").cloned()
}

/// Whether `--print-config` was given
pub fn print_config(matches: &ArgMatches) -> bool {
    matches.get_flag("print-config")
}

/// Whether `--print-default-config` was given
pub fn print_default_config(matches: &ArgMatches) -> bool {
    matches.get_flag("print-default-config")
}

/// Collect the flags that override config file values.
pub fn overrides(matches: &ArgMatches) -> Overrides {
    Overrides {
        data_dir: matches.get_one::<PathBuf>("data-dir").cloned(),
        host: matches.get_one::<String>("host").cloned(),
        port: matches.get_one::<u16>("port").copied(),
        prefix: matches.get_one::<String>("prefix").cloned(),
        log_level: matches.get_one::<String>("log-level").cloned(),
    }
}
