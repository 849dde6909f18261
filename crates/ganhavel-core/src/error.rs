//! # Error Hierarchy
//!
//! Structured error types for document handling, built with `thiserror`.
//! Classification itself never fails; these errors exist for the fail-fast
//! surfaces ([`crate::document::require_valid`], the [`crate::identity`]
//! constructors, strict [`crate::policy::screen`]) and for configuration.

use thiserror::Error;

use crate::document::DocumentKind;

/// Top-level error type for the Ganhavel document stack.
#[derive(Error, Debug)]
pub enum GanhavelError {
    /// Document validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Why a digit string was classified as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// No digits survived normalization.
    Empty,
    /// Neither 11 (CPF) nor 14 (CNPJ) digits.
    WrongLength(usize),
    /// Every digit is the same, e.g. `00000000000`.
    RepeatedDigits,
    /// Length is right but the embedded check digits do not match.
    CheckDigitMismatch,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no digits"),
            Self::WrongLength(n) => write!(f, "expected 11 or 14 digits, got {n}"),
            Self::RepeatedDigits => write!(f, "all digits are identical"),
            Self::CheckDigitMismatch => write!(f, "check digits do not match"),
        }
    }
}

/// Validation errors for taxpayer documents.
///
/// These carry the normalized digits rather than the raw input, so callers
/// can show them back to the user without echoing punctuation noise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input is not a valid CPF or CNPJ.
    #[error("invalid document \"{digits}\": {reason}")]
    InvalidDocument {
        /// Normalized digits of the rejected input.
        digits: String,
        /// Why it was rejected.
        reason: InvalidReason,
    },

    /// A valid document of the other kind was supplied.
    #[error("expected {expected} document, found {found}")]
    WrongKind {
        /// The kind the constructor requires.
        expected: DocumentKind,
        /// The kind the input validated as.
        found: DocumentKind,
    },
}

/// Errors while loading [`crate::config::ValidatorConfig`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The validation mode is neither `strict` nor `loose`.
    #[error("invalid validation mode: \"{0}\" (expected strict or loose)")]
    InvalidMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_document_display_carries_digits_and_reason() {
        let err = ValidationError::InvalidDocument {
            digits: "123".to_string(),
            reason: InvalidReason::WrongLength(3),
        };
        let msg = format!("{err}");
        assert!(msg.contains("123"));
        assert!(msg.contains("got 3"));
    }

    #[test]
    fn wrong_kind_display() {
        let err = ValidationError::WrongKind {
            expected: DocumentKind::Individual,
            found: DocumentKind::Company,
        };
        let msg = format!("{err}");
        assert!(msg.contains("individual"));
        assert!(msg.contains("company"));
    }

    #[test]
    fn top_level_wraps_validation() {
        let err = GanhavelError::from(ValidationError::InvalidDocument {
            digits: String::new(),
            reason: InvalidReason::Empty,
        });
        assert!(format!("{err}").starts_with("validation error"));
    }

    #[test]
    fn config_error_display() {
        let err = GanhavelError::from(ConfigError::InvalidMode("lax".to_string()));
        let msg = format!("{err}");
        assert!(msg.contains("lax"));
        assert!(msg.contains("strict or loose"));
    }

    #[test]
    fn reason_messages() {
        assert_eq!(InvalidReason::Empty.to_string(), "no digits");
        assert_eq!(
            InvalidReason::RepeatedDigits.to_string(),
            "all digits are identical"
        );
        assert_eq!(
            InvalidReason::CheckDigitMismatch.to_string(),
            "check digits do not match"
        );
    }
}
