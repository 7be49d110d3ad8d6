//! bpretty - Streaming pretty-printer for bracketed text
//!
//! Reformats JSON-like or Lisp-like byte streams: one token per line,
//! whitespace collapsed, indentation tracking bracket nesting depth.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod fsm;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use error::Result;
pub use process::format_stream;
