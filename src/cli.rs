use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, value_parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Connect, then launch the HTTP host.
    Serve,
    /// Connect, then exit.
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub env_file: Option<PathBuf>,
}

pub fn cli() -> Command {
    Command::new("weatherdb")
        .about("Connects to the weatherData MongoDB database and serves it")
        .arg(
            Arg::new("env-file")
                .long("env-file")
                .help("Load environment variables from this file instead of ./.env")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf)),
        )
        .subcommand(Command::new("check").about("Connect to the cluster and exit"))
}

pub fn parse() -> Options {
    options_from(&cli().get_matches())
}

fn options_from(matches: &ArgMatches) -> Options {
    let mode = match matches.subcommand() {
        Some(("check", _)) => Mode::Check,
        _ => Mode::Serve,
    };

    Options {
        mode,
        env_file: matches.get_one::<PathBuf>("env-file").cloned(),
    }
}
