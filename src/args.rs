use clap::{Arg, Command};
use std::ffi::OsString;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainArgs {
    pub debug: bool,
}

pub fn build_cli_command() -> Command {
    Command::new("hostpick")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pick a host from your SSH config and connect to it.")
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging to ~/.hostpick/logs")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Parses `args` against `cmd`; clap exits on `--help`, `--version`, or bad input.
pub fn parse_main_args_from<I, T>(cmd: &Command, args: I) -> MainArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = cmd.clone().get_matches_from(args);
    MainArgs {
        debug: matches.get_flag("debug"),
    }
}

/// Parses the process command line.
pub fn main_args() -> MainArgs {
    parse_main_args_from(&build_cli_command(), std::env::args_os())
}

#[cfg(test)]
#[path = "test/args.rs"]
mod tests;
