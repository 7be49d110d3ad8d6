//! bpretty - Streaming pretty-printer for bracketed text

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use bpretty::process::format_stream;
use bpretty::{parse_args, CliArgs, Config, Result};

fn main() -> Result<()> {
    let args = parse_args();
    let config = build_config(&args)?;

    // Treat no inputs, or a single "-", as a stdin filter
    let use_stdin =
        args.inputs.is_empty() || (args.inputs.len() == 1 && args.inputs[0].as_os_str() == "-");

    if use_stdin {
        let stdin = io::stdin();
        let mut stdout = io::stdout().lock();
        return format_stream(stdin.lock(), &mut stdout, &config);
    }

    for path in &args.inputs {
        process_file(path, &config)?;
    }

    Ok(())
}

/// Build configuration: discovered/explicit config file, then CLI overrides
fn build_config(args: &CliArgs) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        Config::from_toml_file(config_path)?
    } else {
        Config::from_discovered_files()
    };
    config.apply_cli_args(args);
    Ok(config)
}

/// Format one named file to stdout
fn process_file(path: &Path, config: &Config) -> Result<()> {
    let file = File::open(path)
        .map_err(|e| anyhow::anyhow!("failed to open {}: {e}", path.display()))?;
    let reader = BufReader::new(file);
    let mut stdout = io::stdout().lock();
    format_stream(reader, &mut stdout, config)
}
