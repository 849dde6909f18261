//! # Validate Subcommand
//!
//! Screens each document under the configured [`ValidationMode`] and prints
//! one line per input, as text or JSON.
//!
//! In loose mode an invalid but non-empty document is reported as
//! `UNVERIFIED` and still counts as accepted, matching what checkout does
//! with it: forward the digits and let the payment processor decide.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use ganhavel_core::{classify_and_validate, screen, DocumentKind, ValidationMode, ValidatorConfig};

use crate::{EXIT_OK, EXIT_REJECTED, EXIT_USAGE};

/// Arguments for the `ganhavel validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Documents to validate, with or without punctuation.
    #[arg(value_name = "DOCUMENT")]
    pub documents: Vec<String>,

    /// Also read documents from stdin, one per line.
    #[arg(long)]
    pub stdin: bool,

    /// Emit one JSON object per document instead of text.
    #[arg(long)]
    pub json: bool,
}

/// One line of `validate` output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ValidationReport {
    /// Whether the document passes under `mode`.
    pub accepted: bool,
    /// Mode the document was screened under.
    pub mode: ValidationMode,
    /// Whether the check digits were verified.
    pub valid: bool,
    /// Classification.
    pub kind: DocumentKind,
    /// Normalized digits.
    pub digits: String,
    /// Punctuated form, for verified documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    /// Why the document failed validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Screen a single raw input under `mode`.
pub fn report_for(raw: &str, mode: ValidationMode) -> ValidationReport {
    match screen(Some(raw), mode) {
        Ok(screened) => {
            let reason = screened.outcome.invalid_reason().map(|r| r.to_string());
            match &screened.document {
                Some(doc) => tracing::debug!(kind = %doc.kind(), document = %doc.masked(), "document verified"),
                None => tracing::warn!(
                    length = screened.digits().len(),
                    "forwarding unverified document under loose mode"
                ),
            }
            ValidationReport {
                accepted: true,
                mode,
                valid: screened.is_verified(),
                kind: screened.outcome.kind,
                formatted: screened.document.as_ref().map(|d| d.formatted()),
                digits: screened.outcome.digits,
                reason,
            }
        }
        Err(err) => {
            tracing::debug!(%mode, error = %err, "document rejected");
            let outcome = classify_and_validate(Some(raw));
            ValidationReport {
                accepted: false,
                mode,
                valid: false,
                kind: DocumentKind::Invalid,
                reason: outcome.invalid_reason().map(|r| r.to_string()),
                digits: outcome.digits,
                formatted: None,
            }
        }
    }
}

/// Execute the validate subcommand over already-collected inputs.
///
/// Returns exit code: 0 if all accepted, 1 if any rejected, 2 if no inputs.
pub fn run_validate(
    args: &ValidateArgs,
    config: &ValidatorConfig,
    inputs: &[String],
    out: &mut impl Write,
) -> Result<u8> {
    if inputs.is_empty() {
        writeln!(out, "Usage: ganhavel validate [--stdin] [--json] [DOCUMENT]...")?;
        return Ok(EXIT_USAGE);
    }

    tracing::info!(mode = %config.mode, count = inputs.len(), "validating documents");

    let mut rejected = 0usize;
    for raw in inputs {
        let report = report_for(raw, config.mode);
        if !report.accepted {
            rejected += 1;
        }
        if args.json {
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            write_text(out, &report)?;
        }
    }

    if rejected > 0 {
        tracing::info!(rejected, total = inputs.len(), "some documents were rejected");
        Ok(EXIT_REJECTED)
    } else {
        Ok(EXIT_OK)
    }
}

fn write_text(out: &mut impl Write, report: &ValidationReport) -> std::io::Result<()> {
    let reason = report.reason.as_deref().unwrap_or_default();
    match (report.accepted, &report.formatted) {
        (true, Some(formatted)) => writeln!(out, "VALID {} {formatted}", report.kind),
        (true, None) => writeln!(out, "UNVERIFIED {} ({reason})", report.digits),
        (false, _) => writeln!(out, "INVALID {} ({reason})", report.digits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(json: bool) -> ValidateArgs {
        ValidateArgs {
            documents: Vec::new(),
            stdin: false,
            json,
        }
    }

    fn run(mode: ValidationMode, json: bool, inputs: &[&str]) -> (u8, String) {
        let inputs: Vec<String> = inputs.iter().map(|s| s.to_string()).collect();
        let config = ValidatorConfig::default().with_mode(mode);
        let mut out = Vec::new();
        let code = run_validate(&args(json), &config, &inputs, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn strict_all_valid() {
        let (code, out) = run(
            ValidationMode::Strict,
            false,
            &["529.982.247-25", "11222333000181"],
        );
        assert_eq!(code, EXIT_OK);
        assert_eq!(
            out,
            "VALID individual 529.982.247-25\nVALID company 11.222.333/0001-81\n"
        );
    }

    #[test]
    fn strict_rejects_invalid() {
        let (code, out) = run(ValidationMode::Strict, false, &["52998224725", "123"]);
        assert_eq!(code, EXIT_REJECTED);
        assert!(out.contains("INVALID 123 (expected 11 or 14 digits, got 3)"));
    }

    #[test]
    fn loose_forwards_unverified() {
        let (code, out) = run(ValidationMode::Loose, false, &["52998224726"]);
        assert_eq!(code, EXIT_OK);
        assert_eq!(out, "UNVERIFIED 52998224726 (check digits do not match)\n");
    }

    #[test]
    fn loose_still_rejects_empty() {
        let (code, out) = run(ValidationMode::Loose, false, &["---"]);
        assert_eq!(code, EXIT_REJECTED);
        assert_eq!(out, "INVALID  (no digits)\n");
    }

    #[test]
    fn json_output() {
        let (code, out) = run(ValidationMode::Strict, true, &["11111111111"]);
        assert_eq!(code, EXIT_REJECTED);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "accepted": false,
                "mode": "strict",
                "valid": false,
                "kind": "invalid",
                "digits": "11111111111",
                "reason": "all digits are identical",
            })
        );
    }

    #[test]
    fn json_valid_includes_formatted() {
        let (_, out) = run(ValidationMode::Loose, true, &["52998224725"]);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["formatted"], "529.982.247-25");
        assert_eq!(value["kind"], "individual");
        assert!(value.get("reason").is_none());
    }

    #[test]
    fn no_inputs_is_usage_error() {
        let (code, out) = run(ValidationMode::Strict, false, &[]);
        assert_eq!(code, EXIT_USAGE);
        assert!(out.starts_with("Usage:"));
    }

    #[test]
    fn rejected_report_carries_digits_and_reason() {
        let report = report_for("529.982.247-26", ValidationMode::Strict);
        assert_eq!(
            report,
            ValidationReport {
                accepted: false,
                mode: ValidationMode::Strict,
                valid: false,
                kind: DocumentKind::Invalid,
                digits: "52998224726".to_string(),
                formatted: None,
                reason: Some("check digits do not match".to_string()),
            }
        );

        let report = report_for("n/a", ValidationMode::Loose);
        assert!(!report.accepted);
        assert_eq!(report.digits, "");
        assert_eq!(report.reason.as_deref(), Some("no digits"));
    }
}
