//! # Caller Validation Policy
//!
//! Checkout code decides what to do with a document that fails validation.
//! In [`ValidationMode::Strict`] it is rejected up front. In
//! [`ValidationMode::Loose`] the normalized digits are forwarded anyway and
//! the payment processor has the final word; the attached outcome lets the
//! caller flag the unverified document.
//!
//! Both modes reject empty input: there is nothing to forward.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::{classify_and_validate, into_document, ValidationOutcome};
use crate::error::{ConfigError, ValidationError};
use crate::identity::TaxDocument;

/// How strictly a caller treats documents that fail validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Reject anything that is not a valid CPF or CNPJ.
    #[default]
    Strict,
    /// Forward any non-empty digit string; validation is advisory.
    Loose,
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Loose => write!(f, "loose"),
        }
    }
}

impl FromStr for ValidationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "loose" => Ok(Self::Loose),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

/// A document accepted by [`screen`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenedDocument {
    /// The mode the document was screened under.
    pub mode: ValidationMode,
    /// What the validator concluded.
    pub outcome: ValidationOutcome,
    /// The verified document, present iff `outcome.valid`.
    #[serde(skip)]
    pub document: Option<TaxDocument>,
}

impl ScreenedDocument {
    /// Normalized digits to forward downstream.
    pub fn digits(&self) -> &str {
        &self.outcome.digits
    }

    /// Whether the check digits were verified.
    pub fn is_verified(&self) -> bool {
        self.outcome.valid
    }
}

/// Apply `mode` to raw user input.
///
/// # Errors
///
/// Strict mode returns [`ValidationError::InvalidDocument`] for any invalid
/// input. Loose mode returns it only when no digits remain.
pub fn screen(raw: Option<&str>, mode: ValidationMode) -> Result<ScreenedDocument, ValidationError> {
    let outcome = classify_and_validate(raw);

    let forward_unverified = mode == ValidationMode::Loose && !outcome.digits.is_empty();
    if !outcome.valid && forward_unverified {
        return Ok(ScreenedDocument {
            mode,
            outcome,
            document: None,
        });
    }

    let document = into_document(outcome.clone())?;
    Ok(ScreenedDocument {
        mode,
        outcome,
        document: Some(document),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{require_valid, DocumentKind};
    use crate::error::InvalidReason;

    #[test]
    fn mode_parsing() {
        assert_eq!("strict".parse::<ValidationMode>().unwrap(), ValidationMode::Strict);
        assert_eq!(" LOOSE ".parse::<ValidationMode>().unwrap(), ValidationMode::Loose);
        assert_eq!(
            "lenient".parse::<ValidationMode>().unwrap_err(),
            ConfigError::InvalidMode("lenient".to_string())
        );
        assert_eq!(ValidationMode::default(), ValidationMode::Strict);
    }

    #[test]
    fn strict_accepts_valid() {
        let screened = screen(Some("529.982.247-25"), ValidationMode::Strict).unwrap();
        assert!(screened.is_verified());
        assert_eq!(screened.digits(), "52998224725");
        assert_eq!(
            screened.document.as_ref().map(TaxDocument::kind),
            Some(DocumentKind::Individual)
        );
    }

    #[test]
    fn strict_matches_require_valid() {
        for raw in ["52998224726", "123", "", "11111111111", "11222333000181"] {
            let strict = screen(Some(raw), ValidationMode::Strict).map(|s| s.document);
            let required = require_valid(Some(raw)).map(Some);
            assert_eq!(strict, required, "{raw}");
        }
    }

    #[test]
    fn loose_forwards_unverified() {
        let screened = screen(Some("123.456"), ValidationMode::Loose).unwrap();
        assert!(!screened.is_verified());
        assert_eq!(screened.digits(), "123456");
        assert!(screened.document.is_none());
        assert_eq!(screened.outcome.kind, DocumentKind::Invalid);
    }

    #[test]
    fn loose_still_verifies_when_possible() {
        let screened = screen(Some("11222333000181"), ValidationMode::Loose).unwrap();
        assert!(screened.is_verified());
        assert!(screened.document.is_some());
    }

    #[test]
    fn loose_rejects_empty() {
        for raw in [None, Some(""), Some("--")] {
            assert_eq!(
                screen(raw, ValidationMode::Loose).unwrap_err(),
                ValidationError::InvalidDocument {
                    digits: String::new(),
                    reason: InvalidReason::Empty,
                }
            );
        }
    }
}
