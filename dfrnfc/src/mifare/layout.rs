// dfrnfc/src/mifare/layout.rs
//! MIFARE Classic memory geometry.
//!
//! 1K cards hold 16 sectors of 4 blocks; the last block of every sector
//! is the trailer carrying the keys and access bits. 4K cards keep that
//! shape below block 128 and switch to 16-block sectors above it.

use crate::constants::{BLOCK_COUNT_1K, BLOCK_LEN};

/// True when `block` is the first block of its sector.
pub fn is_first_block(block: u8) -> bool {
    if block < 128 {
        block % 4 == 0
    } else {
        block % 16 == 0
    }
}

/// True when `block` is its sector's trailer.
pub fn is_trailer_block(block: u8) -> bool {
    if block < 128 {
        (block + 1) % 4 == 0
    } else {
        (block + 1) % 16 == 0
    }
}

/// True when `block` backs the linear address space of a 1K card:
/// everything except the manufacturer block and the sector trailers.
pub fn is_data_block(block: u8) -> bool {
    block != 0 && block < BLOCK_COUNT_1K && !is_trailer_block(block)
}

/// Physical block numbers backing the linear address space, in address
/// order. Linear offset `o` lives in `DATA_BLOCK_TABLE[o / 16]` at
/// intra-block position `o % 16`.
pub const DATA_BLOCK_TABLE: [u8; 47] = [
    1, 2, 4, 5, 6, 8, 9, 10, 12, 13, 14, 16, 17, 18, 20, 21, 22, 24, 25, 26, 28, 29, 30, 32, 33,
    34, 36, 37, 38, 40, 41, 42, 44, 45, 46, 48, 49, 50, 52, 53, 54, 56, 57, 58, 60, 61, 62,
];

/// Usable bytes of the linear address space on a 1K card.
pub const LINEAR_CAPACITY: usize = DATA_BLOCK_TABLE.len() * BLOCK_LEN;
