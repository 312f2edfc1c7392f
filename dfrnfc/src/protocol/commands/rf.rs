// dfrnfc/src/protocol/commands/rf.rs

use crate::constants::{CMD_RF_CONFIGURATION, RF_ITEM_MAX_RETRIES};

/// Encode RFConfiguration for the retry table (PN532 command code 0x32,
/// CfgItem 0x05).
///
/// Only MxRtyPassiveActivation is caller controlled; MxRtyATR and
/// MxRtyPSL keep their chip defaults. 0xFF retries passive activation
/// forever, which is the chip's power-on behaviour.
pub fn encode_passive_retries(max_retries: u8) -> Vec<u8> {
    vec![
        CMD_RF_CONFIGURATION,
        RF_ITEM_MAX_RETRIES,
        0xFF, // MxRtyATR
        0x01, // MxRtyPSL
        max_retries,
    ]
}
