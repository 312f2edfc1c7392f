// dfrnfc/src/protocol/frame.rs

use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 frame helper. Provides encode/decode of the wire frame
/// Format: [Start(3)] [Len(1)] [LCS(1)] [TFI(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
/// Start: 0x00 0x00 0xFF
/// Len counts TFI + payload; TFI is 0xD4 host->chip, 0xD5 chip->host.
/// Postamble: 0x00
pub struct Frame;

impl Frame {
    /// Encode a payload into a full host->chip frame.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        Self::encode_with_direction(crate::constants::TFI_HOST, payload)
    }

    /// Build a frame with an explicit direction byte. Chip->host frames are
    /// only ever synthesized by the test support helpers.
    pub(crate) fn encode_with_direction(direction: u8, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > crate::constants::MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: crate::constants::MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = (payload.len() + 1) as u8;
        let mut out = Vec::with_capacity(payload.len() + crate::constants::MIN_FRAME_LEN);
        out.extend_from_slice(&crate::constants::FRAME_START);
        out.push(len);
        out.push(lcs(len));
        out.push(direction);
        out.extend_from_slice(payload);
        // DCS covers the data field: direction byte + payload
        let checksum = dcs(&out[5..]);
        out.push(checksum);
        out.push(crate::constants::FRAME_POSTAMBLE);
        Ok(out)
    }

    /// Decode a chip->host frame and return the payload following the
    /// direction byte.
    ///
    /// Reads are sized for the full success reply, so a buffer may carry
    /// idle-line or stale bytes past the postamble. Trailing bytes are
    /// therefore ignored; everything up to and including the postamble
    /// is still fully validated.
    pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
        if frame.len() < crate::constants::MIN_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: crate::constants::MIN_FRAME_LEN,
                actual: frame.len(),
            });
        }

        if frame[..3] != crate::constants::FRAME_START {
            return Err(Error::FrameFormat("invalid start sequence".into()));
        }

        let len = frame[3];
        let lcs_actual = frame[4];
        let lcs_expected = lcs(len);
        if lcs_actual != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: lcs_actual,
            });
        }

        if len == 0 {
            return Err(Error::FrameFormat("empty data field".into()));
        }

        let len = len as usize;
        let required_len = 3 + 1 + 1 + len + 1 + 1; // start + LEN + LCS + data + DCS + postamble
        if frame.len() < required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        if frame[5] != crate::constants::TFI_DEVICE {
            return Err(Error::FrameFormat("invalid direction byte".into()));
        }

        // Data field spans TFI + payload; DCS covers both.
        let data = &frame[5..5 + len];
        let dcs_actual = frame[5 + len];
        let dcs_expected = dcs(data);
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        if frame[6 + len] != crate::constants::FRAME_POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        Ok(frame[6..5 + len].to_vec())
    }

    /// Check whether the buffer holds the fixed acknowledge frame.
    pub fn is_ack(bytes: &[u8]) -> bool {
        bytes == crate::constants::ACK_FRAME
    }
}
