//! Configuration management for bpretty.
//!
//! This module provides the [`Config`] struct which controls formatting
//! behavior. Configuration can be loaded from:
//! - TOML files (`bpretty.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered in the user's home directory and the
//! current working directory (later overrides earlier); since the tool is
//! a stream filter there is no per-input-file discovery walk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::CliArgs;

/// Config file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["bpretty.toml"];

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    // HOME works on Unix and some Windows setups
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

// Serde default functions
fn default_indent() -> usize {
    4
}

/// Main configuration struct for bpretty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of spaces per indent level (default: 4)
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Write transition-trace lines to stderr (default: false)
    #[serde(default)]
    pub trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            trace: false,
        }
    }
}

/// Partial config as parsed from a TOML file; only the fields actually
/// present override the running config.
#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    indent: Option<usize>,
    trace: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file, with defaults for missing fields
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.indent {
            self.indent = v;
        }
        if let Some(v) = partial.trace {
            self.trace = v;
        }
    }

    /// Find config files to load, lowest priority first
    #[must_use]
    pub fn discover_config_files() -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        if let Ok(cwd) = std::env::current_dir() {
            for config_name in CONFIG_FILE_NAMES {
                let cwd_config = cwd.join(config_name);
                if cwd_config.is_file() && !config_files.contains(&cwd_config) {
                    config_files.push(cwd_config);
                }
            }
        }

        config_files
    }

    /// Build a config from discovered files, warning (not failing) on
    /// unreadable or unparsable ones
    #[must_use]
    pub fn from_discovered_files() -> Self {
        let config_files = Self::discover_config_files();

        let mut config = Self::default();
        for path in &config_files {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => config.apply_partial(&partial),
                    Err(e) => eprintln!("Warning: failed to parse {}: {e}", path.display()),
                },
                Err(e) => eprintln!("Warning: failed to read {}: {e}", path.display()),
            }
        }
        config
    }

    /// Overlay CLI arguments; explicit flags beat file settings
    pub fn apply_cli_args(&mut self, args: &CliArgs) {
        if let Some(indent) = args.indent {
            self.indent = indent;
        }
        if args.trace {
            self.trace = true;
        }
    }
}
