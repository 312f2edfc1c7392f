// dfrnfc/src/mifare/mod.rs

pub mod classic;
pub mod layout;
pub mod ndef;
pub mod ultralight;

pub use classic::{authenticate, read_block, write_block};
pub use layout::{
    is_data_block, is_first_block, is_trailer_block, DATA_BLOCK_TABLE, LINEAR_CAPACITY,
};
pub use ultralight::read_page;
