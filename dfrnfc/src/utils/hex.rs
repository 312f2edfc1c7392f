//! Hexadecimal helpers used for debugging and display purposes.
//!
//! Deliberately dependency-free: these back the `to_hex` methods on the
//! newtypes and the wire-level trace logging, so they must stay available
//! with every feature combination.

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        s.push(HEX_DIGITS[(b >> 4) as usize] as char);
        s.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
    }
    s
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, &b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        s.push(HEX_DIGITS[(b >> 4) as usize] as char);
        s.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
    }
    s
}

/// Parse a hex string into bytes.
///
/// Accepts strings with or without ASCII whitespace. Returns an error message
/// string on parse failure.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();

    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let hi = pair[0]
                .to_digit(16)
                .ok_or_else(|| format!("invalid hex digit '{}'", pair[0]))?;
            let lo = pair[1]
                .to_digit(16)
                .ok_or_else(|| format!("invalid hex digit '{}'", pair[1]))?;
            Ok((hi * 16 + lo) as u8)
        })
        .collect()
}
