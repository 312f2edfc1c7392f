// dfrnfc/src/lib.rs

//! dfrnfc
//!
//! Pure Rust driver for DFRobot PN532 NFC modules over UART, with a
//! flat byte-addressed store over MIFARE Classic data blocks.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod mifare;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod storage;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
