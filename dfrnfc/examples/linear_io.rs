//! Treat a MIFARE Classic 1K card as a flat 752-byte store: write a
//! message across a block boundary and read it back.
//!
//! Usage:
//!   cargo run -p dfrnfc --example linear_io --features serial -- [PORT]

use dfrnfc::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let port = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DFRNFC_PORT").ok())
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());

    let mut reader = Reader::open(&port)?.initialize()?;
    reader.set_passive_activation_retries(0x14)?;

    let mut store = LinearStore::new(&mut reader);
    println!("Linear capacity: {} bytes", store.capacity());

    let message = b"hello from dfrnfc";
    let offset = 100;

    println!("Writing {} bytes at offset {}...", message.len(), offset);
    store.write_range(offset, message)?;

    let bytes = store.read_range(offset, message.len())?;
    println!("Read back: {:?}", String::from_utf8_lossy(&bytes));

    // Single-byte access goes through the same block plumbing.
    store.write_byte(0, 0x42)?;
    println!("Byte at 0: {:#04x}", store.read_byte(0)?);

    Ok(())
}
