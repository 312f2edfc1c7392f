//! Probe a PN532 module: report the firmware version and whatever card
//! is in the field.
//!
//! Usage:
//!   cargo run -p dfrnfc --example probe --features serial -- [PORT]
//!
//! PORT defaults to $DFRNFC_PORT, then /dev/ttyUSB0.

use dfrnfc::prelude::*;

fn port_from_args() -> String {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DFRNFC_PORT").ok())
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let port = port_from_args();
    println!("Opening PN532 on {}...", port);
    let mut reader = Reader::open(&port)?.initialize()?;

    let fw = reader.firmware_version()?;
    println!("Firmware: {} (support {:#04x})", fw, fw.support);

    // Bounded retries so an empty field answers instead of blocking.
    reader.set_passive_activation_retries(0x14)?;

    println!("Scanning for an ISO14443A card...");
    match reader.discover(CardBaudRate::Iso14443a) {
        Ok(target) => {
            println!("  UID : {}", target.uid().to_hex());
            println!("  ATQA: {:#06x}", target.atqa());
            println!("  SAK : {:#04x}", target.sak());
        }
        Err(Error::NoCardFound) => println!("No card in the field"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
