//! Tests for the environment variable accessor.
//!
//! Responsibilities:
//! - Test string resolution: presence, defaults, required and not-empty rules.
//! - Test integer conversion and its error messages.
//! - Test the generic and boolean conversions.
//!
//! Invariants:
//! - Tests touching the process environment use `serial_test` and `temp_env`.
//! - Tests touching the process environment also hold `global_test_lock()`.
//! - Tests that only need a source use `MapEnv` and run in parallel.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
