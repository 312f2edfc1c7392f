//! Dump all 64 blocks of a MIFARE Classic 1K card, authenticating every
//! block with the universal key. Sectors keyed differently are reported
//! and skipped.
//!
//! Usage:
//!   cargo run -p dfrnfc --example dump_card --features serial -- [PORT]

use dfrnfc::mifare::is_trailer_block;
use dfrnfc::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let port = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DFRNFC_PORT").ok())
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());

    let mut reader = Reader::open(&port)?.initialize()?;
    reader.set_passive_activation_retries(0x14)?;

    let target = reader.discover(CardBaudRate::Iso14443a)?;
    println!(
        "Card UID {}  ATQA {:#06x}  SAK {:#04x}",
        target.uid().to_hex(),
        target.atqa(),
        target.sak()
    );

    for block in 0..64u8 {
        match reader
            .authenticate(block, KeySlot::B, &MifareKey::UNIVERSAL)
            .and_then(|_| reader.read_block(block))
        {
            Ok(data) => {
                let tag = if block == 0 {
                    "  <- manufacturer"
                } else if is_trailer_block(block) {
                    "  <- trailer"
                } else {
                    ""
                };
                println!(
                    "{:>3}: {} |{}|{}",
                    block,
                    data.to_hex(),
                    data.to_ascii_safe(),
                    tag
                );
            }
            Err(Error::AuthFailed { .. }) => {
                println!("{:>3}: sector uses its own key, skipped", block);
                // The rejected authentication dropped the session target;
                // pick the card up again before the next block.
                reader.discover(CardBaudRate::Iso14443a)?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
