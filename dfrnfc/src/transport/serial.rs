// dfrnfc/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{Read, Write};
use std::time::Duration;

use serialport::{ClearBuffer, SerialPort};

use crate::transport::traits::Transport;
use crate::utils::default_read_timeout;
use crate::{Error, Result};

/// UART baud rate the PN532 ships with
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Serial (UART/HSU) transport for PN532 breakout boards. Feature-gated
/// behind `--features serial` and requires the `serialport` crate.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Open the given serial device at the chip's default baud rate.
    pub fn open(path: &str) -> Result<Self> {
        Self::open_with_baud(path, DEFAULT_BAUD_RATE)
    }

    /// Open with an explicit baud rate for boards rewired to a slower UART.
    pub fn open_with_baud(path: &str, baud_rate: u32) -> Result<Self> {
        let port = serialport::new(path, baud_rate)
            .timeout(default_read_timeout())
            .open()?;
        Ok(Self { port })
    }

    /// Adjust the blocking read deadline. Discovery with unlimited
    /// activation retries can legitimately sit far past the default
    /// timeout waiting for a card to enter the field.
    pub fn set_read_timeout(&mut self, timeout: Duration) -> Result<()> {
        self.port.set_timeout(timeout)?;
        Ok(())
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.port
            .write_all(data)
            .map_err(serialport::Error::from)?;
        self.port.flush().map_err(serialport::Error::from)?;
        Ok(())
    }

    fn receive(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        let mut filled = 0;
        // Error replies are shorter than the expected success frame, so
        // keep reading until the deadline and hand back what arrived.
        while filled < len {
            match self.port.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e)
                    if matches!(
                        e.kind(),
                        std::io::ErrorKind::TimedOut | std::io::ErrorKind::UnexpectedEof
                    ) =>
                {
                    break;
                }
                Err(e) => return Err(serialport::Error::from(e).into()),
            }
        }
        if filled == 0 {
            return Err(Error::Timeout);
        }
        buf.truncate(filled);
        Ok(buf)
    }

    fn discard_input(&mut self) -> Result<()> {
        self.port.clear(ClearBuffer::Input)?;
        Ok(())
    }
}
