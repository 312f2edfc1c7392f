// dfrnfc/src/mifare/ultralight.rs
//! MIFARE Ultralight page access. Ultralight tags have no keys; a page
//! read is a bare InDataExchange with the shared MIFARE read opcode.

use crate::constants::{PAGE_LEN, ULTRALIGHT_PAGE_COUNT};
use crate::protocol::{Command, Response};
use crate::reader::{Initialized, Reader};
use crate::types::PageData;
use crate::{Error, Result};

/// Read one 4-byte page. The chip returns 16 bytes (four pages); only
/// the addressed page is kept.
pub fn read_page(reader: &mut Reader<Initialized>, page: u8) -> Result<PageData> {
    if page >= ULTRALIGHT_PAGE_COUNT {
        return Err(Error::PageOutOfRange { page });
    }
    reader.ensure_target()?;

    let cmd = Command::ReadPage { page };
    match reader.execute(&cmd)? {
        Response::DataExchange { status: 0, data } => {
            let bytes = data.get(..PAGE_LEN).ok_or(Error::InvalidLength {
                expected: PAGE_LEN,
                actual: data.len(),
            })?;
            PageData::try_from(bytes)
        }
        Response::DataExchange { status, .. } => Err(Error::Status { code: status }),
        other => Err(Error::UnexpectedResponse {
            expected: cmd.response_code(),
            actual: other.response_code(),
        }),
    }
}
