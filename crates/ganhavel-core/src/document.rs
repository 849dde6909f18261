//! # Document Classification
//!
//! Normalizes user-entered taxpayer numbers and classifies them as CPF
//! (individual, 11 digits), CNPJ (company, 14 digits), or invalid.
//!
//! [`classify_and_validate`] is total: every input, including the empty
//! string and an absent value, yields a [`ValidationOutcome`]. Callers that
//! want fail-fast semantics use [`require_valid`], which converts an
//! `Invalid` outcome into a [`ValidationError`] at the boundary.

use serde::{Deserialize, Serialize};

use crate::checksum::{cnpj_check_digits, cpf_check_digits};
use crate::error::{InvalidReason, ValidationError};
use crate::identity::{Cnpj, Cpf, TaxDocument};

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// Number of digits in a CNPJ.
pub const CNPJ_LEN: usize = 14;

/// Classification of a normalized digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Natural-person taxpayer number (CPF).
    Individual,
    /// Legal-entity taxpayer number (CNPJ).
    Company,
    /// Wrong length, failed check digits, or degenerate input.
    Invalid,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Individual => "individual",
            Self::Company => "company",
            Self::Invalid => "invalid",
        };
        write!(f, "{s}")
    }
}

/// Result of [`classify_and_validate`].
///
/// `digits` is always the normalized input, even when `kind` is `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// `true` iff `kind` is not [`DocumentKind::Invalid`].
    pub valid: bool,
    /// The classification.
    pub kind: DocumentKind,
    /// The input with every non-digit removed.
    pub digits: String,
}

impl ValidationOutcome {
    /// Why this outcome is invalid, or `None` when it is valid.
    pub fn invalid_reason(&self) -> Option<InvalidReason> {
        if self.valid {
            return None;
        }
        Some(match self.digits.len() {
            0 => InvalidReason::Empty,
            CPF_LEN | CNPJ_LEN if all_same(self.digits.as_bytes()) => InvalidReason::RepeatedDigits,
            CPF_LEN | CNPJ_LEN => InvalidReason::CheckDigitMismatch,
            n => InvalidReason::WrongLength(n),
        })
    }
}

/// Remove every character that is not an ASCII decimal digit.
///
/// `None` is treated as the empty string.
pub fn normalize(raw: Option<&str>) -> String {
    raw.unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

/// Normalize `raw` and classify it as CPF, CNPJ, or invalid.
pub fn classify_and_validate(raw: Option<&str>) -> ValidationOutcome {
    let digits = normalize(raw);
    let kind = classify_digits(&digits);
    ValidationOutcome {
        valid: kind != DocumentKind::Invalid,
        kind,
        digits,
    }
}

/// Like [`classify_and_validate`], but an invalid outcome becomes an error
/// and a valid one becomes the matching [`TaxDocument`].
pub fn require_valid(raw: Option<&str>) -> Result<TaxDocument, ValidationError> {
    into_document(classify_and_validate(raw))
}

/// Convert an outcome into a [`TaxDocument`] or the matching error.
pub(crate) fn into_document(outcome: ValidationOutcome) -> Result<TaxDocument, ValidationError> {
    match outcome.kind {
        DocumentKind::Individual => Ok(TaxDocument::Individual(Cpf::from_verified(outcome.digits))),
        DocumentKind::Company => Ok(TaxDocument::Company(Cnpj::from_verified(outcome.digits))),
        DocumentKind::Invalid => Err(ValidationError::InvalidDocument {
            reason: outcome
                .invalid_reason()
                .unwrap_or(InvalidReason::CheckDigitMismatch),
            digits: outcome.digits,
        }),
    }
}

/// Classify an already-normalized digit string.
fn classify_digits(digits: &str) -> DocumentKind {
    let bytes = digits.as_bytes();
    if matches!(bytes.len(), CPF_LEN | CNPJ_LEN) && all_same(bytes) {
        return DocumentKind::Invalid;
    }

    // Digit values; normalization guarantees ASCII '0'..='9'.
    let values: Vec<u8> = bytes.iter().map(|b| b - b'0').collect();

    match values.len() {
        CPF_LEN => {
            let mut base = [0u8; 9];
            base.copy_from_slice(&values[..9]);
            if cpf_check_digits(&base) == values[9..] {
                DocumentKind::Individual
            } else {
                DocumentKind::Invalid
            }
        }
        CNPJ_LEN => {
            let mut base = [0u8; 12];
            base.copy_from_slice(&values[..12]);
            if cnpj_check_digits(&base) == values[12..] {
                DocumentKind::Company
            } else {
                DocumentKind::Invalid
            }
        }
        _ => DocumentKind::Invalid,
    }
}

fn all_same(bytes: &[u8]) -> bool {
    bytes.windows(2).all(|w| w[0] == w[1])
}
