//! Error types for environment variable access.
//!
//! Responsibilities:
//! - Define the three failure kinds an accessor can report.
//! - Carry the variable name (and, for conversions, the reason) for debugging.
//!
//! Does NOT handle:
//! - Deciding whether a failure is fatal (callers own that policy).
//!
//! Invariants:
//! - Every variant carries the key it was raised for.
//! - Variable values are never embedded in error messages, only parse reasons.

use thiserror::Error;

/// Errors that can occur while reading a configuration value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable is required: {key}")]
    NotFound { key: String },

    #[error("environment variable '{key}' must not be empty")]
    EmptyValue { key: String },

    #[error("invalid value of environment variable '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Discriminant of a [`ConfigError`], for matching without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    EmptyValue,
    InvalidValue,
}

impl ConfigError {
    pub(crate) fn not_found(key: &str) -> Self {
        Self::NotFound {
            key: key.to_string(),
        }
    }

    pub(crate) fn empty_value(key: &str) -> Self {
        Self::EmptyValue {
            key: key.to_string(),
        }
    }

    pub(crate) fn invalid_value(key: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::EmptyValue { .. } => ErrorKind::EmptyValue,
            Self::InvalidValue { .. } => ErrorKind::InvalidValue,
        }
    }

    /// Name of the environment variable this error was raised for.
    pub fn key(&self) -> &str {
        match self {
            Self::NotFound { key } | Self::EmptyValue { key } | Self::InvalidValue { key, .. } => {
                key
            }
        }
    }
}
