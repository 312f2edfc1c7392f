//! Timeout helpers used across the crate.
//!
//! The serial transport and the hardware tests share one default read
//! timeout; `ms` exists so call sites can spell durations in milliseconds
//! without importing `Duration` everywhere.

use std::time::Duration;

/// Default read timeout in milliseconds used by the serial transport when a
/// caller doesn't provide an explicit timeout.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}
