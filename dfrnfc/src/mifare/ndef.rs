// dfrnfc/src/mifare/ndef.rs
//! NDEF (NFC Data Exchange Format) support for MIFARE Classic cards:
//! the MAD/NDEF format templates and TLV-wrapped URI records.

use crate::mifare::classic;
use crate::reader::{Initialized, Reader};
use crate::types::{BlockData, KeySlot, MifareKey};
use crate::{Error, Result};

/// Longest URL a single NDEF URI record spread over one sector can hold.
pub const MAX_URL_LEN: usize = 38;

// MAD sector 0: GPB + MAD entries pointing every sector at the NDEF AID
// (0x03E1).
const FORMAT_BLOCK_1: [u8; 16] = [
    0x14, 0x01, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03,
    0xE1,
];
const FORMAT_BLOCK_2: [u8; 16] = [
    0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03,
    0xE1,
];

// Sector 0 trailer: public MAD key A, MAD access bits, universal key B.
const MAD_TRAILER: [u8; 16] = [
    0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0x78, 0x77, 0x88, 0xC1, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF,
];

// Data sector trailer: NFC Forum key A, NDEF access bits, universal key B.
const NDEF_TRAILER: [u8; 16] = [
    0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7, 0x7F, 0x07, 0x88, 0x40, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF,
];

/// The fixed sector-0 images (block number, content) that mark a 1K card
/// as an NFC Forum tag.
pub fn format_blocks() -> [(u8, BlockData); 3] {
    [
        (1, BlockData::from_bytes(FORMAT_BLOCK_1)),
        (2, BlockData::from_bytes(FORMAT_BLOCK_2)),
        (3, BlockData::from_bytes(MAD_TRAILER)),
    ]
}

/// Build the four block images of an NDEF URI record for `sector`
/// (1..=15): three data blocks plus the rewritten sector trailer.
///
/// The record is laid out contiguously over the 48 data bytes: the TLV
/// header at offset 2, the URL from offset 9, and the terminator TLV
/// directly after it; block boundaries fall where they may.
pub fn uri_blocks(sector: u8, uri_identifier: u8, url: &str) -> Result<[BlockData; 4]> {
    if !(1..=15).contains(&sector) {
        return Err(Error::Ndef(format!("sector {} out of range (1..=15)", sector)));
    }
    let len = url.len();
    if len == 0 || len > MAX_URL_LEN {
        return Err(Error::Ndef(format!(
            "url length {} out of range (1..={})",
            len, MAX_URL_LEN
        )));
    }

    let mut image = [0u8; 48];
    image[2] = 0x03; // NDEF message TLV
    image[3] = (len + 5) as u8;
    image[4] = 0xD1; // record header: MB | ME | SR | well-known type
    image[5] = 0x01; // type length
    image[6] = (len + 1) as u8; // payload: identifier code + URL
    image[7] = 0x55; // type "U"
    image[8] = uri_identifier;
    image[9..9 + len].copy_from_slice(url.as_bytes());
    image[9 + len] = 0xFE; // terminator TLV

    let mut blocks = [BlockData::from_bytes([0u8; 16]); 4];
    for (i, chunk) in image.chunks_exact(16).enumerate() {
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(chunk);
        blocks[i] = BlockData::from_bytes(bytes);
    }
    blocks[3] = BlockData::from_bytes(NDEF_TRAILER);
    Ok(blocks)
}

/// Write the MAD/NDEF format templates to sector 0. Key B stays at the
/// universal value, so the linear store keeps working afterwards.
pub fn format_card(
    reader: &mut Reader<Initialized>,
    slot: KeySlot,
    key: &MifareKey,
) -> Result<()> {
    for (block, data) in format_blocks() {
        classic::authenticate(reader, block, slot, key)?;
        classic::write_block(reader, block, &data)?;
    }
    Ok(())
}

/// Write an NDEF URI record into `sector`. The card must already be
/// NDEF-formatted; `uri_identifier` abbreviates the URL prefix
/// (0x01 = "http://www.", 0x02 = "https://www.", 0x00 = none).
pub fn write_uri(
    reader: &mut Reader<Initialized>,
    sector: u8,
    uri_identifier: u8,
    url: &str,
    slot: KeySlot,
    key: &MifareKey,
) -> Result<()> {
    let images = uri_blocks(sector, uri_identifier, url)?;
    let base = sector * 4;
    for (i, data) in images.iter().enumerate() {
        let block = base + i as u8;
        classic::authenticate(reader, block, slot, key)?;
        classic::write_block(reader, block, data)?;
    }
    Ok(())
}
