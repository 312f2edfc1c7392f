// dfrnfc/src/protocol/commands/sam.rs

use crate::constants::CMD_SAM_CONFIGURATION;

/// Encode SAMConfiguration command payload (PN532 command code 0x14)
///
/// `mode` selects how the security access module is wired in; this driver
/// always runs normal mode where the chip answers the host directly.
/// `timeout` is in 50ms units and only matters for virtual-card mode.
pub fn encode_sam_configuration(mode: u8, timeout: u8, use_irq: bool) -> Vec<u8> {
    vec![CMD_SAM_CONFIGURATION, mode, timeout, use_irq as u8]
}
