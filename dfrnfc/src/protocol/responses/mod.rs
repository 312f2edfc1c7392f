// dfrnfc/src/protocol/responses/mod.rs

pub mod exchange;
pub mod firmware;
pub mod sam;
pub mod target;

pub use exchange::decode_data_exchange;
pub use firmware::decode_firmware_version;
pub use sam::decode_sam_configuration;
pub use target::decode_passive_target;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone)]
pub enum Response {
    FirmwareVersion(crate::types::FirmwareVersion),
    SamConfigured,
    /// `None` when the chip answered but no single target was activated
    PassiveTarget(Option<crate::types::Target>),
    /// Raw InDataExchange result: chip status byte plus card data
    DataExchange { status: u8, data: Vec<u8> },
}

impl Response {
    /// Decode a response payload (including response code) for the given
    /// expected command code. Each decoder validates its own layout,
    /// starting with the response code (command + 1).
    pub fn decode(expected_cmd: u8, data: &[u8]) -> crate::Result<Self> {
        match expected_cmd {
            crate::constants::CMD_GET_FIRMWARE_VERSION => {
                let fw = firmware::decode_firmware_version(data)?;
                Ok(Self::FirmwareVersion(fw))
            }
            crate::constants::CMD_SAM_CONFIGURATION => {
                sam::decode_sam_configuration(data)?;
                Ok(Self::SamConfigured)
            }
            crate::constants::CMD_IN_LIST_PASSIVE_TARGET => {
                let target = target::decode_passive_target(data)?;
                Ok(Self::PassiveTarget(target))
            }
            crate::constants::CMD_IN_DATA_EXCHANGE => {
                let (status, data) = exchange::decode_data_exchange(data)?;
                Ok(Self::DataExchange { status, data })
            }
            _ => {
                // Command has no decodable reply (RFConfiguration is left
                // unread); asking for one is a caller bug.
                let actual = data.first().copied().unwrap_or(0);
                Err(crate::Error::UnexpectedResponse {
                    expected: expected_cmd.wrapping_add(1),
                    actual,
                })
            }
        }
    }

    /// Response code byte carried by this variant, for `UnexpectedResponse`
    /// reporting at higher layers.
    pub fn response_code(&self) -> u8 {
        match self {
            Response::FirmwareVersion(_) => 0x03,
            Response::SamConfigured => 0x15,
            Response::PassiveTarget(_) => 0x4B,
            Response::DataExchange { .. } => 0x41,
        }
    }
}
