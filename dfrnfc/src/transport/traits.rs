// dfrnfc/src/transport/traits.rs

use crate::Result;
use std::time::Duration;

/// Transport trait abstracts the UART byte stream away from protocol and
/// reader logic. The chip never volunteers data, so the read side is a
/// pull-only interface sized by the caller.
pub trait Transport {
    /// Send raw bytes to the chip
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive up to `len` bytes: everything that arrived before the
    /// transport's deadline, at most `len`. The chip's error replies are
    /// shorter than the success frame the caller sizes for, so a short
    /// buffer is a valid outcome; `Error::Timeout` means nothing arrived
    /// at all.
    fn receive(&mut self, len: usize) -> Result<Vec<u8>>;

    /// Drop any unread input. Called before each command so a stale or
    /// unread reply from the previous exchange cannot shift the stream.
    fn discard_input(&mut self) -> Result<()>;

    /// Wait out a chip-side delay (EEPROM programming and the like).
    /// Default implementation simply sleeps; test transports override it
    /// to keep suites fast.
    fn settle(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}
