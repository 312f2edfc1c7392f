// dfrnfc/src/protocol/responses/firmware.rs

use crate::Result;
use crate::protocol::parser;
use crate::types::FirmwareVersion;

/// Decode GetFirmwareVersion response payload (response code = 0x03)
/// Layout: response_code(1) + ic(1) + version(1) + revision(1) + support(1)
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    const MIN_LEN: usize = 1 + 1 + 1 + 1 + 1;
    parser::ensure_len(data, MIN_LEN)?;

    let expected = crate::constants::CMD_GET_FIRMWARE_VERSION + 1;
    parser::expect_response_code(data, expected)?;

    Ok(FirmwareVersion {
        ic: parser::byte_at(data, 1)?,
        version: parser::byte_at(data, 2)?,
        revision: parser::byte_at(data, 3)?,
        support: parser::byte_at(data, 4)?,
    })
}
