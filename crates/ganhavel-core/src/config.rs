//! Validator configuration.
//!
//! Defaults to strict validation. Override via environment variables or
//! explicit construction.

use crate::error::ConfigError;
use crate::policy::ValidationMode;

/// Environment variable selecting the [`ValidationMode`].
pub const MODE_ENV_VAR: &str = "GANHAVEL_DOCUMENT_MODE";

/// Configuration for document screening.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Policy applied to documents that fail validation.
    pub mode: ValidationMode,
}

impl ValidatorConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `GANHAVEL_DOCUMENT_MODE`: `strict` or `loose` (default: `strict`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match lookup(MODE_ENV_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => ValidationMode::default(),
        };
        Ok(Self { mode })
    }

    /// Replace the mode, e.g. from a command-line flag.
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }
}
