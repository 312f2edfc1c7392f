// dfrnfc/src/protocol/responses/exchange.rs

use crate::Result;
use crate::protocol::parser;

/// Decode InDataExchange response payload (response code = 0x41)
/// Layout: response_code(1) + status(1) + data(n)
///
/// The status byte is returned verbatim; mapping a non-zero status to a
/// meaningful error is the caller's job since it knows which MIFARE
/// command was tunnelled.
pub fn decode_data_exchange(data: &[u8]) -> Result<(u8, Vec<u8>)> {
    let expected = crate::constants::CMD_IN_DATA_EXCHANGE + 1;
    parser::expect_response_code(data, expected)?;

    let status = parser::byte_at(data, 1)?;
    Ok((status, data[2..].to_vec()))
}
