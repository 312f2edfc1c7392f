// dfrnfc/src/protocol/checksum.rs

/// Compute Length Checksum (LCS) for a PN532 frame.
/// LEN + LCS must be 0 modulo 256.
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS) for a PN532 frame.
/// Covers the direction byte and the payload; their sum plus DCS must be
/// 0 modulo 256.
pub fn dcs(data: &[u8]) -> u8 {
    let sum = data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
