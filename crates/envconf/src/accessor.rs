//! Environment variable accessor.
//!
//! Responsibilities:
//! - Describe one environment variable: its key, whether it is required,
//!   whether an empty value is allowed, and the default used when absent.
//! - Resolve the variable on demand and convert it to a typed value.
//!
//! Does NOT handle:
//! - Caching (every call re-reads the source).
//! - Writing to the environment or loading `.env` files.
//! - Deciding what to do on failure (callers own the degradation policy).
//!
//! Invariants:
//! - Descriptor fields never change once the builder chain is done.
//! - `required` ignores the default on the absence path.
//! - The not-empty check applies to environment values and defaults alike.
//! - The first violated condition is returned; later checks do not run.

use std::env::VarError;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::source::{ReadEnv, SystemEnv};

const EMPTY_INT_MESSAGE: &str = "cannot convert empty string into an integer";
const EMPTY_VALUE_MESSAGE: &str = "cannot convert empty string into a value";
const NOT_UNICODE_MESSAGE: &str = "value is not valid unicode";
const INVALID_BOOL_MESSAGE: &str = "must be true or false";

/// Retrieval policy for a single environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    key: String,
    required: bool,
    not_empty: bool,
    default_value: String,
}

impl EnvVar {
    /// Create an optional accessor for `key` with an empty default.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            required: false,
            not_empty: false,
            default_value: String::new(),
        }
    }

    /// Fail with [`ConfigError::NotFound`] when the variable is absent.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Fail with [`ConfigError::EmptyValue`] when the resolved value is empty.
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Set the value used when the variable is absent and not required.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_not_empty(&self) -> bool {
        self.not_empty
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Read the variable from the process environment as a string.
    pub fn get_string(&self) -> Result<String, ConfigError> {
        self.get_string_from(&SystemEnv)
    }

    /// Read the variable from `env` as a string.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotFound`] if the variable is absent and required.
    /// - [`ConfigError::EmptyValue`] if the value (or default) is empty and
    ///   the accessor is not-empty.
    /// - [`ConfigError::InvalidValue`] if the value is present but not Unicode.
    pub fn get_string_from<E: ReadEnv + ?Sized>(&self, env: &E) -> Result<String, ConfigError> {
        let value = match env.var(&self.key) {
            Ok(value) => {
                tracing::trace!(key = %self.key, "environment variable present");
                value
            }
            Err(VarError::NotPresent) if self.required => {
                return Err(ConfigError::not_found(&self.key));
            }
            Err(VarError::NotPresent) => {
                tracing::debug!(key = %self.key, "environment variable not set, using default");
                self.default_value.clone()
            }
            Err(VarError::NotUnicode(_)) => {
                return Err(ConfigError::invalid_value(&self.key, NOT_UNICODE_MESSAGE));
            }
        };

        if self.not_empty && value.is_empty() {
            return Err(ConfigError::empty_value(&self.key));
        }

        Ok(value)
    }

    /// Read the variable from the process environment as an integer.
    pub fn get_int(&self) -> Result<i64, ConfigError> {
        self.get_int_from(&SystemEnv)
    }

    /// Read the variable from `env` as a base-10 integer in the 32-bit signed range.
    ///
    /// Errors from [`get_string_from`](Self::get_string_from) are returned
    /// unchanged. An empty string, non-digit content, or a value outside the
    /// `i32` range yields [`ConfigError::InvalidValue`].
    pub fn get_int_from<E: ReadEnv + ?Sized>(&self, env: &E) -> Result<i64, ConfigError> {
        let value = self.get_string_from(env)?;
        // Only reachable when not-empty is off.
        if value.is_empty() {
            return Err(ConfigError::invalid_value(&self.key, EMPTY_INT_MESSAGE));
        }

        value
            .parse::<i32>()
            .map(i64::from)
            .map_err(|e| ConfigError::invalid_value(&self.key, e.to_string()))
    }

    /// Read the variable from the process environment and parse it with [`FromStr`].
    pub fn get_parsed<T>(&self) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.get_parsed_from(&SystemEnv)
    }

    /// Read the variable from `env` and parse it with [`FromStr`].
    ///
    /// An empty string is rejected before `T::from_str` runs, so types that
    /// would accept `""` (such as `String`) still fail.
    pub fn get_parsed_from<T, E>(&self, env: &E) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
        E: ReadEnv + ?Sized,
    {
        let value = self.get_string_from(env)?;
        if value.is_empty() {
            return Err(ConfigError::invalid_value(&self.key, EMPTY_VALUE_MESSAGE));
        }

        value
            .parse::<T>()
            .map_err(|e| ConfigError::invalid_value(&self.key, e.to_string()))
    }

    /// Read the variable from the process environment as `true` or `false`.
    pub fn get_bool(&self) -> Result<bool, ConfigError> {
        self.get_bool_from(&SystemEnv)
    }

    /// Read the variable from `env` as `true` or `false`.
    ///
    /// Only the exact lowercase literals are accepted.
    pub fn get_bool_from<E: ReadEnv + ?Sized>(&self, env: &E) -> Result<bool, ConfigError> {
        self.get_string_from(env)?
            .parse::<bool>()
            .map_err(|_| ConfigError::invalid_value(&self.key, INVALID_BOOL_MESSAGE))
    }
}

#[cfg(test)]
mod tests;
