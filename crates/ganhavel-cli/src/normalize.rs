//! # Normalize Subcommand
//!
//! Prints each input with every non-digit removed. Never fails per input;
//! an input without digits prints an empty line.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use crate::{EXIT_OK, EXIT_USAGE};

/// Arguments for the `ganhavel normalize` subcommand.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Raw inputs to normalize.
    #[arg(value_name = "DOCUMENT")]
    pub documents: Vec<String>,

    /// Also read inputs from stdin, one per line.
    #[arg(long)]
    pub stdin: bool,
}

/// Execute the normalize subcommand.
pub fn run_normalize(inputs: &[String], out: &mut impl Write) -> Result<u8> {
    if inputs.is_empty() {
        writeln!(out, "Usage: ganhavel normalize [--stdin] [DOCUMENT]...")?;
        return Ok(EXIT_USAGE);
    }
    for raw in inputs {
        writeln!(out, "{}", ganhavel_core::normalize(Some(raw)))?;
    }
    Ok(EXIT_OK)
}
