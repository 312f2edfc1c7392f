// dfrnfc/src/mifare/classic.rs
//! MIFARE Classic block operations carried over InDataExchange.

use crate::protocol::{Command, Response};
use crate::reader::{Initialized, Reader};
use crate::types::{BlockData, KeySlot, MifareKey};
use crate::{Error, Result};

/// Authenticate one block against the held target.
///
/// A rejected authentication drops the session target: the card's state
/// machine has left the active state, so the next operation must
/// rediscover before anything else will succeed.
pub fn authenticate(
    reader: &mut Reader<Initialized>,
    block: u8,
    slot: KeySlot,
    key: &MifareKey,
) -> Result<()> {
    let target = reader.ensure_target()?;

    let cmd = Command::AuthenticateBlock {
        block,
        slot,
        key: *key,
        uid: *target.uid(),
    };
    match reader.execute(&cmd)? {
        Response::DataExchange { status: 0, .. } => Ok(()),
        Response::DataExchange { status, .. } => {
            log::debug!(
                "auth rejected: block={} slot={} status={:#04x}",
                block,
                slot,
                status
            );
            reader.invalidate_target();
            Err(Error::AuthFailed { block })
        }
        other => Err(Error::UnexpectedResponse {
            expected: cmd.response_code(),
            actual: other.response_code(),
        }),
    }
}

/// Read one 16-byte block. The block must have been authenticated.
pub fn read_block(reader: &mut Reader<Initialized>, block: u8) -> Result<BlockData> {
    reader.ensure_target()?;

    let cmd = Command::ReadBlock { block };
    match reader.execute(&cmd)? {
        Response::DataExchange { status: 0, data } => BlockData::try_from(data.as_slice()),
        Response::DataExchange { .. } => Err(Error::ReadFailed { block }),
        other => Err(Error::UnexpectedResponse {
            expected: cmd.response_code(),
            actual: other.response_code(),
        }),
    }
}

/// Write one 16-byte block and validate the completion status. The block
/// must have been authenticated.
pub fn write_block(reader: &mut Reader<Initialized>, block: u8, data: &BlockData) -> Result<()> {
    reader.ensure_target()?;

    let cmd = Command::WriteBlock {
        block,
        data: *data,
    };
    match reader.execute(&cmd)? {
        Response::DataExchange { status: 0, .. } => Ok(()),
        Response::DataExchange { .. } => Err(Error::WriteFailed { block }),
        other => Err(Error::UnexpectedResponse {
            expected: cmd.response_code(),
            actual: other.response_code(),
        }),
    }
}
