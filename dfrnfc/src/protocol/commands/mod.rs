// dfrnfc/src/protocol/commands/mod.rs

pub mod exchange;
pub mod firmware;
pub mod rf;
pub mod sam;
pub mod target;

pub use exchange::{
    encode_authenticate, encode_read_block, encode_read_page, encode_write_block,
};
pub use firmware::encode_get_firmware_version;
pub use rf::encode_passive_retries;
pub use sam::encode_sam_configuration;
pub use target::encode_list_passive_target;

use std::time::Duration;

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    GetFirmwareVersion,
    SamConfiguration {
        mode: u8,
        timeout: u8,
        use_irq: bool,
    },
    /// RFConfiguration limited to the passive activation retry table
    SetPassiveActivationRetries {
        max_retries: u8,
    },
    InListPassiveTarget {
        max_targets: u8,
        baud_rate: crate::types::CardBaudRate,
    },
    AuthenticateBlock {
        block: u8,
        slot: crate::types::KeySlot,
        key: crate::types::MifareKey,
        uid: crate::types::Uid,
    },
    ReadBlock {
        block: u8,
    },
    WriteBlock {
        block: u8,
        data: crate::types::BlockData,
    },
    /// Ultralight page read; shares the MIFARE read opcode
    ReadPage {
        page: u8,
    },
}

impl Command {
    /// Return the PN532 command code carried after the direction byte.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => crate::constants::CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => crate::constants::CMD_SAM_CONFIGURATION,
            Self::SetPassiveActivationRetries { .. } => crate::constants::CMD_RF_CONFIGURATION,
            Self::InListPassiveTarget { .. } => crate::constants::CMD_IN_LIST_PASSIVE_TARGET,
            Self::AuthenticateBlock { .. }
            | Self::ReadBlock { .. }
            | Self::WriteBlock { .. }
            | Self::ReadPage { .. } => crate::constants::CMD_IN_DATA_EXCHANGE,
        }
    }

    /// Response code the chip answers with (command code + 1).
    pub fn response_code(&self) -> u8 {
        self.command_code().wrapping_add(1)
    }

    /// Encode the command into the raw payload (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => encode_get_firmware_version(),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(*mode, *timeout, *use_irq),
            Self::SetPassiveActivationRetries { max_retries } => {
                encode_passive_retries(*max_retries)
            }
            Self::InListPassiveTarget {
                max_targets,
                baud_rate,
            } => encode_list_passive_target(*max_targets, *baud_rate),
            Self::AuthenticateBlock {
                block,
                slot,
                key,
                uid,
            } => encode_authenticate(*block, *slot, key, uid),
            Self::ReadBlock { block } => encode_read_block(*block),
            Self::WriteBlock { block, data } => encode_write_block(*block, data),
            Self::ReadPage { page } => encode_read_page(*page),
        }
    }

    /// Number of raw bytes to read for this command's response frame.
    /// Zero means the reply is deliberately left in the chip's buffer;
    /// the next exchange flushes it along with any other stale input.
    pub fn response_len(&self) -> usize {
        match self {
            Self::GetFirmwareVersion => 13,
            Self::SamConfiguration { .. } => 9,
            Self::SetPassiveActivationRetries { .. } => 0,
            Self::InListPassiveTarget { .. } => 19,
            Self::AuthenticateBlock { .. } | Self::WriteBlock { .. } => 10,
            Self::ReadBlock { .. } | Self::ReadPage { .. } => 26,
        }
    }

    /// Pause required between the acknowledge and the status frame.
    /// Block writes need the EEPROM programming time.
    pub fn settle_delay(&self) -> Option<Duration> {
        match self {
            Self::WriteBlock { .. } => {
                Some(crate::utils::ms(crate::constants::WRITE_SETTLE_MS))
            }
            _ => None,
        }
    }
}
