// dfrnfc/src/transport/mock.rs

use std::collections::VecDeque;
use std::time::Duration;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent payloads and serves
/// reads from a queue of reply bursts: one `receive` drains at most one
/// burst, and a burst shorter than the requested length comes back
/// short, the way a UART read returns whatever arrived before its
/// deadline.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    rx: VecDeque<Vec<u8>>,
    /// Number of discard_input calls observed
    pub discards: usize,
    /// Settle delays requested by the exchange loop
    pub settles: Vec<Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one reply burst for a subsequent `receive` call.
    pub fn push_response(&mut self, resp: &[u8]) {
        self.rx.push_back(resp.to_vec());
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Bytes still queued for reading.
    pub fn pending(&self) -> usize {
        self.rx.iter().map(Vec::len).sum()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut burst = self.rx.pop_front().ok_or(Error::Timeout)?;
        if burst.len() > len {
            // Bytes past the read stay buffered for the next call.
            let rest = burst.split_off(len);
            self.rx.push_front(rest);
        }
        Ok(burst)
    }

    fn discard_input(&mut self) -> Result<()> {
        // Only counted, never acted on: tests pre-seed the exact replies a
        // scenario needs before handing the transport to a Reader, and a
        // real flush would wipe them.
        self.discards += 1;
        Ok(())
    }

    fn settle(&mut self, delay: Duration) {
        // Record instead of sleeping so write-heavy tests stay fast.
        self.settles.push(delay);
    }
}
