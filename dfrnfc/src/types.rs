// dfrnfc/src/types.rs

use crate::Error;
use crate::constants::{MAX_UID_LEN, MIFARE_CMD_AUTH_A, MIFARE_CMD_AUTH_B};
use std::convert::TryFrom;

/// UID - Newtype Pattern (最大 7 バイト)
///
/// ISO14443A UIDs come in 4-byte and 7-byte sizes; the chip reports the
/// actual length during discovery so the buffer is kept alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid {
    bytes: [u8; MAX_UID_LEN],
    len: u8,
}

impl Uid {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.is_empty() || bytes.len() > MAX_UID_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; MAX_UID_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

/// MIFARE Classic sector key (6 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MifareKey([u8; 6]);

impl MifareKey {
    /// Transport key programmed into blank cards at the factory
    pub const UNIVERSAL: Self = Self([0xFF; 6]);

    pub const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl TryFrom<&[u8]> for MifareKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 6 {
            return Err(Error::InvalidLength {
                expected: 6,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 6];
        arr.copy_from_slice(&bytes[..6]);
        Ok(Self(arr))
    }
}

/// Which of the two sector keys an authentication uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum KeySlot {
    #[display(fmt = "A")]
    A,
    #[display(fmt = "B")]
    B,
}

impl KeySlot {
    /// MIFARE authentication command byte for this slot.
    pub fn code(self) -> u8 {
        match self {
            Self::A => MIFARE_CMD_AUTH_A,
            Self::B => MIFARE_CMD_AUTH_B,
        }
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; 16]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 16 {
            return Err(Error::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(&bytes[..16]);
        Ok(Self(arr))
    }
}

/// PageData - Ultralight page (4 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageData([u8; 4]);

impl PageData {
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for PageData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::InvalidLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(&bytes[..4]);
        Ok(Self(arr))
    }
}

/// Modulation/baud selector for InListPassiveTarget.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardBaudRate {
    Iso14443a = 0x00,
    Felica212 = 0x01,
    Felica424 = 0x02,
    Iso14443b = 0x03,
    Jewel = 0x04,
}

impl CardBaudRate {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Default for CardBaudRate {
    fn default() -> Self {
        // MIFARE Classic and Ultralight both sit on 106 kbps type A.
        CardBaudRate::Iso14443a
    }
}

/// Firmware identification reported by GetFirmwareVersion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display(fmt = "PN5{:02x} v{}.{}", ic, version, revision)]
pub struct FirmwareVersion {
    /// IC identifier (0x32 for the PN532)
    pub ic: u8,
    pub version: u8,
    pub revision: u8,
    /// Supported protocol bitmask
    pub support: u8,
}

/// A passive target discovered in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    uid: Uid,
    atqa: u16,
    sak: u8,
}

impl Target {
    pub fn new(uid: Uid, atqa: u16, sak: u8) -> Self {
        Self { uid, atqa, sak }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Answer-to-request bytes (SENS_RES)
    pub fn atqa(&self) -> u16 {
        self.atqa
    }

    /// Select-acknowledge byte (SEL_RES)
    pub fn sak(&self) -> u8 {
        self.sak
    }
}
