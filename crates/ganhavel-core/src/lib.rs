#![deny(missing_docs)]

//! # ganhavel-core — Taxpayer Document Validation
//!
//! Normalizes and validates the Brazilian taxpayer numbers buyers enter at
//! checkout: CPF (individuals, 11 digits) and CNPJ (companies, 14 digits).
//! Depends only on `serde` and `thiserror`.
//!
//! ## Design Principles
//!
//! 1. **Classification is total.** [`classify_and_validate`] never fails and
//!    never panics; every input maps to a [`ValidationOutcome`].
//!
//! 2. **One validator.** The fail-fast [`require_valid`], the [`Cpf`] /
//!    [`Cnpj`] constructors, and [`policy::screen`] all delegate to the
//!    same classification. No second copy of the check-digit logic.
//!
//! 3. **Newtypes for verified documents.** Holding a [`Cpf`] or [`Cnpj`]
//!    means the check digits passed. Deserialization goes through the same
//!    constructor.
//!
//! 4. **Strict vs loose is caller policy.** The validator reports; the
//!    [`ValidationMode`] decides whether an invalid document is forwarded.

pub mod checksum;
pub mod config;
pub mod document;
pub mod error;
pub mod identity;
pub mod policy;

// Re-export primary types at crate root for ergonomic imports.
pub use config::ValidatorConfig;
pub use document::{
    classify_and_validate, normalize, require_valid, DocumentKind, ValidationOutcome,
};
pub use error::{ConfigError, GanhavelError, InvalidReason, ValidationError};
pub use identity::{Cnpj, Cpf, TaxDocument};
pub use policy::{screen, ScreenedDocument, ValidationMode};
