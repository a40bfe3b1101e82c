//! Typed configuration values from process environment variables.
//!
//! This crate provides [`EnvVar`], a descriptor for a single environment
//! variable that knows whether the variable is required, whether an empty
//! value is acceptable, and what default to fall back to when it is absent.
//!
//! ```no_run
//! use envconf::EnvVar;
//!
//! let port = EnvVar::new("PORT").required().get_int()?;
//! let timeout = EnvVar::new("TIMEOUT").with_default("30").get_int()?;
//! # Ok::<(), envconf::ConfigError>(())
//! ```
//!
//! Every failure is returned as a [`ConfigError`]; the crate never aborts
//! the process and never writes to the environment.

mod accessor;
mod error;
pub mod source;

pub use accessor::EnvVar;
pub use error::{ConfigError, ErrorKind};
pub use source::{MapEnv, ReadEnv, SystemEnv};
