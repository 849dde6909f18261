//! # ganhavel CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Only `validate` resolves the validator configuration: `--mode` when
//! given, otherwise the environment.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ganhavel_cli::{collect_inputs, resolve_config};
use ganhavel_cli::format::{run_format, FormatArgs};
use ganhavel_cli::normalize::{run_normalize, NormalizeArgs};
use ganhavel_cli::validate::{run_validate, ValidateArgs};
use ganhavel_core::ValidationMode;

/// Ganhavel taxpayer document toolkit.
///
/// Validates, normalizes, and formats Brazilian CPF and CNPJ numbers.
#[derive(Parser, Debug)]
#[command(name = "ganhavel", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Validation mode (strict or loose). Overrides GANHAVEL_DOCUMENT_MODE.
    #[arg(long, global = true)]
    mode: Option<ValidationMode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate CPF/CNPJ documents under the configured mode.
    Validate(ValidateArgs),

    /// Strip everything but ASCII digits.
    Normalize(NormalizeArgs),

    /// Print valid documents in punctuated form.
    Format(FormatArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(ganhavel_cli::EXIT_USAGE)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Validate(args) => {
            let config = resolve_config(cli.mode, |key| std::env::var(key).ok())?;
            tracing::debug!(mode = %config.mode, "resolved validator configuration");
            let inputs = collect_inputs(&args.documents, args.stdin, stdin.lock())?;
            run_validate(&args, &config, &inputs, &mut stdout)
        }
        Commands::Normalize(args) => {
            let inputs = collect_inputs(&args.documents, args.stdin, stdin.lock())?;
            run_normalize(&inputs, &mut stdout)
        }
        Commands::Format(args) => {
            let inputs = collect_inputs(&args.documents, args.stdin, stdin.lock())?;
            run_format(&args, &inputs, &mut stdout)
        }
    }
}
