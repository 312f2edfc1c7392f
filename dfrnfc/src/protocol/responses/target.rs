// dfrnfc/src/protocol/responses/target.rs

use crate::Result;
use crate::protocol::parser;
use crate::types::Target;

/// Decode InListPassiveTarget response payload (response code = 0x4B)
/// Layout: response_code(1) + NbTg(1) + Tg(1) + ATQA(2, big-endian) +
/// SAK(1) + uid_len(1) + uid(n)
///
/// Returns `Ok(None)` when the tag count is anything but one: the driver
/// activates a single target and treats an empty or crowded field alike.
pub fn decode_passive_target(data: &[u8]) -> Result<Option<Target>> {
    let expected = crate::constants::CMD_IN_LIST_PASSIVE_TARGET + 1;
    parser::expect_response_code(data, expected)?;

    let count = parser::byte_at(data, 1)?;
    if count != 1 {
        return Ok(None);
    }

    let atqa = parser::be_u16_at(data, 3)?;
    let sak = parser::byte_at(data, 5)?;
    let uid_len = parser::byte_at(data, 6)? as usize;
    let uid = parser::uid_at(data, 7, uid_len)?;

    Ok(Some(Target::new(uid, atqa, sak)))
}
