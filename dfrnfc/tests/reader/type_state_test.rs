#[path = "../common/mod.rs"]
mod common;

use dfrnfc::reader::Reader;

#[test]
fn initialize_transitions_and_unlocks_commands() {
    let card = common::helpers::SharedCard::new();
    let reader = Reader::new(card.boxed());

    // Block and discovery operations only exist on Reader<Initialized>;
    // the wake-up plus SAM handshake is what gets us there.
    let mut initialized = reader.initialize().expect("SAM handshake");

    let fw = initialized.firmware_version().unwrap();
    assert_eq!(fw.ic, 0x32);
    assert_eq!(format!("{}", fw), "PN532 v1.6");
}

#[test]
fn initialize_fails_when_nothing_answers() {
    let err = Reader::new(Box::new(dfrnfc::transport::MockTransport::new()))
        .initialize()
        .unwrap_err();
    assert!(matches!(err, dfrnfc::Error::AckTimeout));
}
