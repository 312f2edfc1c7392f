// dfrnfc/src/protocol/commands/target.rs

use crate::constants::CMD_IN_LIST_PASSIVE_TARGET;
use crate::types::CardBaudRate;

/// Encode InListPassiveTarget command payload (PN532 command code 0x4A)
pub fn encode_list_passive_target(max_targets: u8, baud_rate: CardBaudRate) -> Vec<u8> {
    vec![CMD_IN_LIST_PASSIVE_TARGET, max_targets, baud_rate.as_u8()]
}
