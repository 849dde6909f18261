//! # Format Subcommand
//!
//! Prints valid documents in their punctuated form (`XXX.XXX.XXX-XX` for a
//! CPF, `XX.XXX.XXX/XXXX-XX` for a CNPJ). Invalid inputs are reported on
//! the same stream and make the command exit 1. Formatting always requires
//! a verified document, regardless of the validation mode.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use ganhavel_core::TaxDocument;

use crate::{EXIT_OK, EXIT_REJECTED, EXIT_USAGE};

/// Arguments for the `ganhavel format` subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Documents to format.
    #[arg(value_name = "DOCUMENT")]
    pub documents: Vec<String>,

    /// Also read documents from stdin, one per line.
    #[arg(long)]
    pub stdin: bool,

    /// Print the masked form instead, hiding the middle digits.
    #[arg(long)]
    pub masked: bool,
}

/// Execute the format subcommand.
pub fn run_format(args: &FormatArgs, inputs: &[String], out: &mut impl Write) -> Result<u8> {
    if inputs.is_empty() {
        writeln!(out, "Usage: ganhavel format [--stdin] [--masked] [DOCUMENT]...")?;
        return Ok(EXIT_USAGE);
    }

    let mut code = EXIT_OK;
    for raw in inputs {
        match TaxDocument::new(raw.as_str()) {
            Ok(doc) if args.masked => writeln!(out, "{}", doc.masked())?,
            Ok(doc) => writeln!(out, "{doc}")?,
            Err(err) => {
                writeln!(out, "ERROR {err}")?;
                code = EXIT_REJECTED;
            }
        }
    }
    Ok(code)
}
