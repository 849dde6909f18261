//! # ganhavel-cli — Taxpayer Document CLI
//!
//! Provides the `ganhavel` command-line interface over `ganhavel-core`.
//!
//! ## Subcommands
//!
//! - `ganhavel validate` — Classify CPF/CNPJ documents under a validation mode.
//! - `ganhavel normalize` — Strip everything but digits.
//! - `ganhavel format` — Print valid documents in punctuated form.
//!
//! ```bash
//! ganhavel validate 529.982.247-25 11222333000181
//! ganhavel --mode loose validate --json --stdin < documents.txt
//! ```
//!
//! Handlers take their inputs and an output writer explicitly and return a
//! process exit code: 0 when every document is accepted, 1 when any is
//! rejected, 2 on usage errors.

pub mod format;
pub mod normalize;
pub mod validate;

use std::io::BufRead;

use anyhow::{Context, Result};

use ganhavel_core::{ConfigError, ValidationMode, ValidatorConfig};

/// Exit code when every input was accepted.
pub const EXIT_OK: u8 = 0;

/// Exit code when at least one input was rejected.
pub const EXIT_REJECTED: u8 = 1;

/// Exit code for usage errors.
pub const EXIT_USAGE: u8 = 2;

/// Collect inputs from positional arguments, then from `reader` when
/// `read_stdin` is set (one document per non-blank line).
pub fn collect_inputs(
    args: &[String],
    read_stdin: bool,
    reader: impl BufRead,
) -> Result<Vec<String>> {
    let mut inputs = args.to_vec();
    if read_stdin {
        for line in reader.lines() {
            let line = line.context("failed to read document from stdin")?;
            if !line.trim().is_empty() {
                inputs.push(line);
            }
        }
    }
    Ok(inputs)
}

/// Resolve the validator configuration for a command.
///
/// An explicit `--mode` wins and the environment is not consulted, so a
/// malformed `GANHAVEL_DOCUMENT_MODE` cannot block it.
pub fn resolve_config<F>(flag: Option<ValidationMode>, lookup: F) -> Result<ValidatorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match flag {
        Some(mode) => Ok(ValidatorConfig::default().with_mode(mode)),
        None => ValidatorConfig::from_lookup(lookup),
    }
}
