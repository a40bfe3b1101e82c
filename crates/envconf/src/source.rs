//! Environment sources an accessor can read from.
//!
//! | Source | Backing | Use |
//! |--------|---------|-----|
//! | [`SystemEnv`] | `std::env` | production |
//! | [`MapEnv`] | `HashMap<String, String>` | tests, embedders |
//!
//! Both are `Send + Sync`. Neither is ever written to by this crate.

use std::collections::HashMap;
use std::env::VarError;

/// Lookup of a single variable that distinguishes "absent" from "present but empty".
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, VarError>;
}

impl<T: ReadEnv + ?Sized> ReadEnv for &T {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

/// Zero-sized type, delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        std::env::var(key)
    }
}

/// In-memory environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl ReadEnv for MapEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.vars.get(key).cloned().ok_or(VarError::NotPresent)
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
