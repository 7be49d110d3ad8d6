//! Command-line interface for bpretty.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Files to format (empty or `-` means stdin)
    pub inputs: Vec<PathBuf>,

    /// Number of spaces per indent level
    pub indent: Option<usize>,

    /// Write transition-trace lines to stderr
    pub trace: bool,

    /// Config file path
    pub config: Option<PathBuf>,
}

/// Build the clap command definition
#[must_use]
pub fn build_cli() -> Command {
    Command::new("bpretty")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Streaming pretty-printer for bracketed, comma/semicolon separated text")
        .arg(
            Arg::new("inputs")
                .help("Files to format (reads stdin when omitted or '-')")
                .value_name("FILE")
                .num_args(0..)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("indent")
                .short('i')
                .long("indent")
                .help("Number of spaces per indent level [default: 4]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("trace")
                .short('t')
                .long("trace")
                .help("Print state transitions to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Config file path (default: discover bpretty.toml)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

/// Parse arguments from the process command line
#[must_use]
pub fn parse_args() -> CliArgs {
    let matches = build_cli().get_matches();
    extract_args(&matches)
}

/// Parse arguments from an explicit vector (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_cli().get_matches_from(args);
    extract_args(&matches)
}

fn extract_args(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        inputs: matches
            .get_many::<PathBuf>("inputs")
            .map(|v| v.cloned().collect())
            .unwrap_or_default(),
        indent: matches.get_one::<usize>("indent").copied(),
        trace: matches.get_flag("trace"),
        config: matches.get_one::<PathBuf>("config").cloned(),
    }
}
