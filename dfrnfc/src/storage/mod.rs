// dfrnfc/src/storage/mod.rs
//! Flat byte-level storage over a MIFARE Classic 1K card.
//!
//! The 47 data blocks (manufacturer block and sector trailers excluded)
//! form a contiguous 752-byte address space. Offset `o` lives in
//! `DATA_BLOCK_TABLE[o / 16]` at intra-block position `o % 16`;
//! multi-block ranges walk the physical blocks and skip the trailers in
//! between.

use crate::constants::BLOCK_LEN;
use crate::mifare::classic;
use crate::mifare::layout::{is_data_block, DATA_BLOCK_TABLE, LINEAR_CAPACITY};
use crate::reader::{Initialized, Reader};
use crate::types::{BlockData, CardBaudRate, KeySlot, MifareKey};
use crate::{Error, Result};

/// Byte-addressed view of a card's data blocks.
///
/// Every block touched is authenticated first; the store never caches
/// authentication state. A rejected authentication drops the reader's
/// session target, and the next operation rediscovers automatically.
pub struct LinearStore<'a> {
    reader: &'a mut Reader<Initialized>,
    key: MifareKey,
    slot: KeySlot,
    baud_rate: CardBaudRate,
}

impl<'a> LinearStore<'a> {
    /// Store over the factory defaults: universal key, slot B.
    pub fn new(reader: &'a mut Reader<Initialized>) -> Self {
        Self::with_key(reader, KeySlot::B, MifareKey::UNIVERSAL)
    }

    /// Store authenticating with a specific sector key.
    pub fn with_key(reader: &'a mut Reader<Initialized>, slot: KeySlot, key: MifareKey) -> Self {
        Self {
            reader,
            key,
            slot,
            baud_rate: CardBaudRate::default(),
        }
    }

    /// Usable capacity in bytes.
    pub const fn capacity(&self) -> usize {
        LINEAR_CAPACITY
    }

    /// Read `len` bytes starting at `offset`.
    pub fn read_range(&mut self, offset: usize, len: usize) -> Result<Vec<u8>> {
        if len == 0 {
            return Ok(Vec::new());
        }
        let end = self.check_range(offset, len)?;
        self.ensure_session()?;

        let start_block = DATA_BLOCK_TABLE[offset / BLOCK_LEN];
        let end_block = DATA_BLOCK_TABLE[end / BLOCK_LEN];

        let mut out = Vec::with_capacity(len);
        for block in start_block..=end_block {
            if !is_data_block(block) {
                continue;
            }
            classic::authenticate(self.reader, block, self.slot, &self.key)?;
            let data = classic::read_block(self.reader, block)?;

            let lo = if block == start_block {
                offset % BLOCK_LEN
            } else {
                0
            };
            let hi = if block == end_block {
                end % BLOCK_LEN
            } else {
                BLOCK_LEN - 1
            };
            out.extend_from_slice(&data.as_bytes()[lo..=hi]);
        }
        Ok(out)
    }

    /// Write `bytes` starting at `offset`. Blocks only partially covered
    /// by the range are read-modify-written so their remaining bytes
    /// survive; fully covered blocks are written directly.
    pub fn write_range(&mut self, offset: usize, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        let end = self.check_range(offset, bytes.len())?;
        self.ensure_session()?;

        let start_block = DATA_BLOCK_TABLE[offset / BLOCK_LEN];
        let end_block = DATA_BLOCK_TABLE[end / BLOCK_LEN];

        // Running cursor into `bytes`; each data block consumes exactly
        // its window.
        let mut cursor = 0usize;
        for block in start_block..=end_block {
            if !is_data_block(block) {
                continue;
            }
            classic::authenticate(self.reader, block, self.slot, &self.key)?;

            let lo = if block == start_block {
                offset % BLOCK_LEN
            } else {
                0
            };
            let hi = if block == end_block {
                end % BLOCK_LEN
            } else {
                BLOCK_LEN - 1
            };
            let span = hi - lo + 1;

            let mut data = if span == BLOCK_LEN {
                [0u8; BLOCK_LEN]
            } else {
                *classic::read_block(self.reader, block)?.as_bytes()
            };
            data[lo..=hi].copy_from_slice(&bytes[cursor..cursor + span]);
            cursor += span;

            classic::write_block(self.reader, block, &BlockData::from_bytes(data))?;
        }
        Ok(())
    }

    /// Read the byte at `offset`.
    pub fn read_byte(&mut self, offset: usize) -> Result<u8> {
        self.check_range(offset, 1)?;
        self.ensure_session()?;

        let block = DATA_BLOCK_TABLE[offset / BLOCK_LEN];
        classic::authenticate(self.reader, block, self.slot, &self.key)?;
        let data = classic::read_block(self.reader, block)?;
        Ok(data.as_bytes()[offset % BLOCK_LEN])
    }

    /// Write one byte at `offset`, preserving the rest of its block.
    pub fn write_byte(&mut self, offset: usize, value: u8) -> Result<()> {
        self.write_range(offset, &[value])
    }

    /// Inclusive end offset of a checked range.
    fn check_range(&self, offset: usize, len: usize) -> Result<usize> {
        len.checked_sub(1)
            .and_then(|l| offset.checked_add(l))
            .filter(|&end| end < LINEAR_CAPACITY)
            .ok_or(Error::AddressOutOfRange { offset, len })
    }

    fn ensure_session(&mut self) -> Result<()> {
        if self.reader.target().is_none() {
            self.reader.discover(self.baud_rate)?;
        }
        Ok(())
    }
}
