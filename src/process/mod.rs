//! Stream processing entry point.
//!
//! The main entry point is [`format_stream`], which drives the state
//! machine over any `Read` source and writes reformatted output to any
//! `Write` sink. Output is buffered here so the byte-at-a-time engine
//! does not issue one write syscall per byte.

use std::io::{BufWriter, Read, Write};

use crate::config::Config;
use crate::error::Result;
use crate::fsm::Runner;

/// Reformat `input` into `output` according to `config`.
pub fn format_stream<R: Read, W: Write>(input: R, output: &mut W, config: &Config) -> Result<()> {
    let mut writer = BufWriter::new(output);
    Runner::new(input, &mut writer, config).run()?;
    writer.flush()?;
    Ok(())
}
