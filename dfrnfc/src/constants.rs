// dfrnfc/src/constants.rs
//! Common protocol constants used across the crate

/// PN532 wire frame preamble + start code: 0x00 0x00 0xFF
pub const FRAME_START: [u8; 3] = [0x00, 0x00, 0xFF];

/// PN532 wire frame postamble: 0x00
pub const FRAME_POSTAMBLE: u8 = 0x00;

/// Minimal PN532 wire frame length in bytes (empty payload, TFI only)
pub const MIN_FRAME_LEN: usize = 8;

/// Maximum command payload this driver frames. The chip-side packet
/// buffer is 64 bytes; exceeding it is a programming error, so the
/// limit is enforced at encode time rather than trusted to callers.
pub const MAX_PAYLOAD_LEN: usize = 64;

/// Host->chip direction byte (TFI D4) and chip->host direction byte (D5)
pub const TFI_HOST: u8 = 0xD4;
pub const TFI_DEVICE: u8 = 0xD5;

/// Acknowledge frame sent by the chip after every accepted command
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Wakeup sequence written before the first command on UART. The long
/// 0x55 preamble gives the chip time to leave low-power mode.
pub const WAKEUP_SEQUENCE: [u8; 3] = [0x55, 0x55, 0x00];

/// PN532 command codes used by this driver
pub const CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const CMD_RF_CONFIGURATION: u8 = 0x32;
pub const CMD_IN_DATA_EXCHANGE: u8 = 0x40;
pub const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;

/// RFConfiguration item selecting the MxRtyPassiveActivation table
pub const RF_ITEM_MAX_RETRIES: u8 = 0x05;

/// SAMConfiguration operating modes
pub const SAM_MODE_NORMAL: u8 = 0x01;
/// SAMConfiguration timeout field unit is 50ms; 0x14 = one second
pub const SAM_TIMEOUT_1S: u8 = 0x14;

/// MIFARE command set carried inside InDataExchange
pub const MIFARE_CMD_AUTH_A: u8 = 0x60;
pub const MIFARE_CMD_AUTH_B: u8 = 0x61;
pub const MIFARE_CMD_READ: u8 = 0x30;
pub const MIFARE_CMD_WRITE: u8 = 0xA0;

/// MIFARE Classic block size in bytes
pub const BLOCK_LEN: usize = 16;

/// Block count of a MIFARE Classic 1K card (16 sectors of 4)
pub const BLOCK_COUNT_1K: u8 = 64;

/// MIFARE Ultralight page size in bytes
pub const PAGE_LEN: usize = 4;

/// Page count addressable on MIFARE Ultralight family tags
pub const ULTRALIGHT_PAGE_COUNT: u8 = 64;

/// Longest ISO14443A UID this driver accepts (double-size)
pub const MAX_UID_LEN: usize = 7;

/// Settle time after a block write before the chip reports status
pub const WRITE_SETTLE_MS: u64 = 2;
