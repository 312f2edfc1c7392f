// fixtures.rs — canned PN532 payloads/frames shared by the integration suites

use dfrnfc::test_support::response_frame;

/// UID of the card most tests put in the field.
pub const SAMPLE_UID: [u8; 4] = [0x04, 0x12, 0x34, 0x56];

/// InListPassiveTarget reply payload for one ISO14443A card
/// (ATQA 0x0004, SAK 0x08, 4-byte UID).
pub fn discovery_payload(uid: &[u8; 4]) -> Vec<u8> {
    vec![
        0x4B, 0x01, 0x01, 0x00, 0x04, 0x08, 0x04, uid[0], uid[1], uid[2], uid[3],
    ]
}

/// Framed discovery reply; exactly the 19 bytes the reader pulls.
pub fn discovery_frame(uid: &[u8; 4]) -> Vec<u8> {
    response_frame(&discovery_payload(uid))
}

/// Framed discovery reply for an empty field. Shorter than the fixed
/// 19-byte read, as on the wire.
pub fn empty_field_frame() -> Vec<u8> {
    response_frame(&[0x4B, 0x00])
}

/// InDataExchange status reply (authentication and write completions).
pub fn status_frame(status: u8) -> Vec<u8> {
    response_frame(&[0x41, status])
}

/// InDataExchange block-read reply carrying 16 data bytes.
pub fn block_frame(data: &[u8; 16]) -> Vec<u8> {
    let mut payload = vec![0x41, 0x00];
    payload.extend_from_slice(data);
    response_frame(&payload)
}

/// GetFirmwareVersion reply for a PN532 v1.6.
pub fn firmware_frame() -> Vec<u8> {
    response_frame(&[0x03, 0x32, 0x01, 0x06, 0x07])
}

/// SAMConfiguration confirmation.
pub fn sam_ok_frame() -> Vec<u8> {
    response_frame(&[0x15])
}

/// A 16-byte block image filled with `fill`.
pub fn block_filled(fill: u8) -> [u8; 16] {
    [fill; 16]
}

/// A 16-byte block image counting up from `start`.
pub fn block_counting(start: u8) -> [u8; 16] {
    let mut data = [0u8; 16];
    for (i, b) in data.iter_mut().enumerate() {
        *b = start.wrapping_add(i as u8);
    }
    data
}
