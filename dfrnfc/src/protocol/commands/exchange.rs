// dfrnfc/src/protocol/commands/exchange.rs
//! Encoders for the MIFARE command set tunnelled through InDataExchange.

use crate::constants::{
    BLOCK_LEN, CMD_IN_DATA_EXCHANGE, MIFARE_CMD_READ, MIFARE_CMD_WRITE,
};
use crate::types::{BlockData, KeySlot, MifareKey, Uid};

/// The driver activates at most one target, so the logical target number
/// in every InDataExchange is fixed.
const TARGET_NUMBER: u8 = 0x01;

/// Encode a sector authentication for `block` with the given key.
/// The card's UID closes the crypto handshake and must match the
/// currently activated target.
pub fn encode_authenticate(block: u8, slot: KeySlot, key: &MifareKey, uid: &Uid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + key.as_bytes().len() + uid.len());
    buf.push(CMD_IN_DATA_EXCHANGE);
    buf.push(TARGET_NUMBER);
    buf.push(slot.code());
    buf.push(block);
    buf.extend_from_slice(key.as_bytes());
    buf.extend_from_slice(uid.as_bytes());
    buf
}

/// Encode a 16-byte block read.
pub fn encode_read_block(block: u8) -> Vec<u8> {
    vec![CMD_IN_DATA_EXCHANGE, TARGET_NUMBER, MIFARE_CMD_READ, block]
}

/// Encode a 16-byte block write.
pub fn encode_write_block(block: u8, data: &BlockData) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + BLOCK_LEN);
    buf.push(CMD_IN_DATA_EXCHANGE);
    buf.push(TARGET_NUMBER);
    buf.push(MIFARE_CMD_WRITE);
    buf.push(block);
    buf.extend_from_slice(data.as_bytes());
    buf
}

/// Encode an Ultralight page read. The opcode is shared with the Classic
/// block read; the chip returns 16 bytes of which the first 4 are the page.
pub fn encode_read_page(page: u8) -> Vec<u8> {
    vec![CMD_IN_DATA_EXCHANGE, TARGET_NUMBER, MIFARE_CMD_READ, page]
}
