#[path = "../common/mod.rs"]
mod common;

use dfrnfc::protocol::{dcs, lcs};

#[test]
fn lcs_and_dcs_examples() {
    // GetFirmwareVersion: LEN 2 (direction byte + command code)
    assert_eq!(lcs(2), 0xfe);
    assert_eq!(lcs(0), 0x00);
    assert_eq!(lcs(0xff), 0x01);

    assert_eq!(dcs(&[0xd4, 0x02]), 0x2a);
    assert_eq!(dcs(&[]), 0x00);
}

#[test]
fn checksums_cancel_their_inputs() {
    let data_fields: [&[u8]; 3] = [
        &[0xd4, 0x02],
        &[0xd4, 0x14, 0x01, 0x14, 0x01],
        &[0xd5, 0x4b, 0x01, 0x01, 0x00, 0x04, 0x08, 0x04, 0x04, 0x12, 0x34, 0x56],
    ];

    for field in data_fields {
        let len = field.len() as u8;
        assert_eq!(len.wrapping_add(lcs(len)), 0);

        let sum: u8 = field.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
        assert_eq!(sum.wrapping_add(dcs(field)), 0);
    }
}
