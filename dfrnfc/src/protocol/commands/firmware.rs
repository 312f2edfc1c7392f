// dfrnfc/src/protocol/commands/firmware.rs

use crate::constants::CMD_GET_FIRMWARE_VERSION;

/// Encode GetFirmwareVersion command payload (PN532 command code 0x02)
pub fn encode_get_firmware_version() -> Vec<u8> {
    vec![CMD_GET_FIRMWARE_VERSION]
}
