#[path = "../common/mod.rs"]
mod common;

use dfrnfc::reader::Reader;
use dfrnfc::test_support::{seed_sam_handshake, SharedMock};
use dfrnfc::Error;

#[test]
fn starved_ack_read_surfaces_as_ack_timeout() {
    let mock = SharedMock::new();
    // Nothing seeded: the chip never acknowledges.
    let err = Reader::new(mock.boxed()).initialize().unwrap_err();
    assert!(matches!(err, Error::AckTimeout));
}

#[test]
fn garbage_ack_surfaces_as_ack_mismatch() {
    let mock = SharedMock::new();
    mock.push_response(&[0x11; 6]);

    let err = Reader::new(mock.boxed()).initialize().unwrap_err();
    assert!(matches!(err, Error::AckMismatch));
}

#[test]
fn missing_response_after_ack_times_out() {
    let mock = SharedMock::new();
    seed_sam_handshake(&mock);
    let mut reader = Reader::new(mock.boxed()).initialize().unwrap();

    // The acknowledge arrives but the response frame never does. Only
    // the acknowledge read is remapped; this one stays a plain timeout.
    mock.push_ack();
    let err = reader.firmware_version().unwrap_err();
    assert!(matches!(err, Error::Timeout));
}
