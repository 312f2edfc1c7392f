// dfrnfc/src/prelude.rs

pub use crate::protocol::{Command, Response};
pub use crate::reader::Reader;
pub use crate::reader::{Initialized, Uninitialized};
pub use crate::storage::LinearStore;
pub use crate::{
    BlockData, CardBaudRate, Error, FirmwareVersion, KeySlot, MifareKey, PageData, Result,
    Target, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_read_timeout, ms, parse_hex};
