//! # Taxpayer Document Newtypes
//!
//! [`Cpf`] and [`Cnpj`] are validated at construction: holding one means
//! the check digits were verified. Both store the canonical digit-only form
//! and accept any punctuation on input.
//!
//! `Debug` prints the masked form so a document never lands whole in a log
//! line. `Display` prints the conventional punctuated form.
//!
//! - CPF: Cadastro de Pessoas Físicas, 11 digits, `XXX.XXX.XXX-XX`
//! - CNPJ: Cadastro Nacional da Pessoa Jurídica, 14 digits, `XX.XXX.XXX/XXXX-XX`

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::{classify_and_validate, into_document, DocumentKind};
use crate::error::ValidationError;

/// Brazilian individual taxpayer number.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Create a CPF from user input, validating check digits.
    ///
    /// Accepts `"52998224725"` and `"529.982.247-25"` alike.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDocument`] for anything that is not
    /// a valid taxpayer number, and [`ValidationError::WrongKind`] for a
    /// valid CNPJ.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        match TaxDocument::new(value)? {
            TaxDocument::Individual(cpf) => Ok(cpf),
            TaxDocument::Company(_) => Err(ValidationError::WrongKind {
                expected: DocumentKind::Individual,
                found: DocumentKind::Company,
            }),
        }
    }

    /// Wrap digits the validator has already accepted as a CPF.
    pub(crate) fn from_verified(digits: String) -> Self {
        Self(digits)
    }

    /// The 11 digits, without punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Punctuated form: `XXX.XXX.XXX-XX`.
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
    }

    /// Punctuated form with the middle six digits hidden: `XXX.***.***-XX`.
    pub fn masked(&self) -> String {
        format!("{}.***.***-{}", &self.0[..3], &self.0[9..])
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::fmt::Debug for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Cpf").field(&self.masked()).finish()
    }
}

impl FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

/// Brazilian company taxpayer number.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Create a CNPJ from user input, validating check digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDocument`] for anything that is not
    /// a valid taxpayer number, and [`ValidationError::WrongKind`] for a
    /// valid CPF.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        match TaxDocument::new(value)? {
            TaxDocument::Company(cnpj) => Ok(cnpj),
            TaxDocument::Individual(_) => Err(ValidationError::WrongKind {
                expected: DocumentKind::Company,
                found: DocumentKind::Individual,
            }),
        }
    }

    /// Wrap digits the validator has already accepted as a CNPJ.
    pub(crate) fn from_verified(digits: String) -> Self {
        Self(digits)
    }

    /// The 14 digits, without punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Punctuated form: `XX.XXX.XXX/XXXX-XX`.
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!(
            "{}.{}.{}/{}-{}",
            &d[..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..]
        )
    }

    /// Punctuated form keeping only the first two and last two digits.
    pub fn masked(&self) -> String {
        format!("{}.***.***/****-{}", &self.0[..2], &self.0[12..])
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::fmt::Debug for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Cnpj").field(&self.masked()).finish()
    }
}

impl FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

/// A verified taxpayer document of either kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaxDocument {
    /// A CPF.
    Individual(Cpf),
    /// A CNPJ.
    Company(Cnpj),
}

impl TaxDocument {
    /// Validate user input as either a CPF or a CNPJ.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDocument`] when the input is
    /// neither.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        into_document(classify_and_validate(Some(&raw)))
    }

    /// `Individual` or `Company`; never `Invalid`.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Individual(_) => DocumentKind::Individual,
            Self::Company(_) => DocumentKind::Company,
        }
    }

    /// The canonical digits.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Individual(cpf) => cpf.as_str(),
            Self::Company(cnpj) => cnpj.as_str(),
        }
    }

    /// Punctuated form for the document's kind.
    pub fn formatted(&self) -> String {
        match self {
            Self::Individual(cpf) => cpf.formatted(),
            Self::Company(cnpj) => cnpj.formatted(),
        }
    }

    /// Masked form for the document's kind.
    pub fn masked(&self) -> String {
        match self {
            Self::Individual(cpf) => cpf.masked(),
            Self::Company(cnpj) => cnpj.masked(),
        }
    }
}

impl std::fmt::Display for TaxDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl FromStr for TaxDocument {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TaxDocument {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaxDocument> for String {
    fn from(doc: TaxDocument) -> Self {
        match doc {
            TaxDocument::Individual(cpf) => cpf.into(),
            TaxDocument::Company(cnpj) => cnpj.into(),
        }
    }
}
