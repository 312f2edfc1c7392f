// dfrnfc/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    // serialport 実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "serial")]
    #[error("serial error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },
    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("no acknowledge frame received")]
    AckTimeout,
    #[error("malformed acknowledge frame")]
    AckMismatch,

    #[error("no card found in the field")]
    NoCardFound,

    #[error("authentication failed for block {block}")]
    AuthFailed { block: u8 },
    #[error("read failed for block {block}")]
    ReadFailed { block: u8 },
    #[error("write failed for block {block}")]
    WriteFailed { block: u8 },

    /// InDataExchange status byte was non-zero outside a block context
    #[error("command failed with status {code:#04x}")]
    Status { code: u8 },

    #[error("page {page} out of range")]
    PageOutOfRange { page: u8 },
    #[error("address out of range: offset {offset}, length {len}")]
    AddressOutOfRange { offset: usize, len: usize },

    #[error("ndef error: {0}")]
    Ndef(String),

    #[error("operation timed out")]
    Timeout,
}

pub type Result<T> = std::result::Result<T, Error>;
