// dfrnfc/src/protocol/responses/sam.rs

use crate::Result;
use crate::protocol::parser;

/// Decode SAMConfiguration response payload (response code = 0x15)
/// The reply carries no parameters; seeing the code at all means the
/// configuration was accepted.
pub fn decode_sam_configuration(data: &[u8]) -> Result<()> {
    let expected = crate::constants::CMD_SAM_CONFIGURATION + 1;
    parser::expect_response_code(data, expected)?;
    Ok(())
}
