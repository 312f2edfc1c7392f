//! Utilities for dfrnfc: small, reusable helpers used across the crate.
//!
//! Hex formatting backs the `to_hex` methods on the newtypes and the
//! trace-level wire logging; the timeout helpers centralize the default
//! serial read timeout.

pub mod hex;
pub mod timeout;

// Re-export the most common helpers at the `utils` module level so callers can
// use `crate::utils::bytes_to_hex(...)` etc if they prefer.
pub use hex::*;
pub use timeout::*;
