// dfrnfc/src/reader/handle.rs

use std::marker::PhantomData;

use crate::constants::{ACK_FRAME, SAM_MODE_NORMAL, SAM_TIMEOUT_1S, WAKEUP_SEQUENCE};
use crate::protocol::codec;
use crate::protocol::{Command, Frame, Response};
use crate::transport::Transport;
use crate::types::{
    BlockData, CardBaudRate, FirmwareVersion, KeySlot, MifareKey, PageData, Target,
};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// リーダハンドル。初期化状態を型レベルで区別する。
///
/// A `Reader<Uninitialized>` only knows how to wake the chip; block and
/// discovery operations are available once `initialize()` has switched the
/// SAM into normal mode and returned a `Reader<Initialized>`.
pub struct Reader<State = Uninitialized> {
    transport: Box<dyn Transport>,
    target: Option<Target>,
    _state: PhantomData<State>,
}

impl<State> std::fmt::Debug for Reader<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Transport is a trait object without Debug; show the session state.
        f.debug_struct("Reader")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// One full command/acknowledge/response cycle against the chip.
///
/// Stale bytes left over from earlier traffic (an unread RF-configuration
/// status, a partial frame abandoned after an error) are dropped before
/// sending, so every cycle starts from a clean line. Exactly one
/// send/receive pass per call; retry policy belongs to the caller.
fn exchange(transport: &mut dyn Transport, cmd: &Command) -> Result<Vec<u8>> {
    transport.discard_input()?;

    let frame = codec::encode_command_frame(cmd)?;
    log::trace!("send {}", bytes_to_hex_spaced(&frame));
    transport.send(&frame)?;

    let ack = match transport.receive(ACK_FRAME.len()) {
        Ok(bytes) => bytes,
        Err(Error::Timeout) => return Err(Error::AckTimeout),
        Err(e) => return Err(e),
    };
    if !Frame::is_ack(&ack) {
        log::trace!("bad ack {}", bytes_to_hex_spaced(&ack));
        return Err(Error::AckMismatch);
    }

    // Block writes need the card's programming time between the
    // acknowledge and the status frame.
    if let Some(delay) = cmd.settle_delay() {
        transport.settle(delay);
    }

    let len = cmd.response_len();
    if len == 0 {
        return Ok(Vec::new());
    }

    let raw = transport.receive(len)?;
    log::trace!("recv {}", bytes_to_hex_spaced(&raw));
    Ok(raw)
}

impl Reader<Uninitialized> {
    /// Create a Reader from an existing Transport instance. This is the
    /// entry point for tests, which hand in a MockTransport.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            target: None,
            _state: PhantomData,
        }
    }

    /// Open the serial device at `path` and wrap it in a Reader.
    #[cfg(feature = "serial")]
    pub fn open(path: &str) -> Result<Self> {
        let transport = crate::transport::SerialTransport::open(path)?;
        Ok(Self::new(Box::new(transport)))
    }

    /// Wake the chip over the UART and switch its SAM to normal mode.
    /// Returns an initialized Reader on success.
    pub fn initialize(self) -> Result<Reader<Initialized>> {
        let mut this = self;

        // HSU wake-up preamble. Sent raw, before any framing; the chip
        // ignores it when already awake.
        this.transport.send(&WAKEUP_SEQUENCE)?;

        let cmd = Command::SamConfiguration {
            mode: SAM_MODE_NORMAL,
            timeout: SAM_TIMEOUT_1S,
            use_irq: true,
        };
        let raw = exchange(&mut *this.transport, &cmd)?;
        match codec::decode_response_frame(cmd.command_code(), &raw)? {
            Response::SamConfigured => {}
            other => {
                return Err(Error::UnexpectedResponse {
                    expected: cmd.response_code(),
                    actual: other.response_code(),
                });
            }
        }

        Ok(Reader {
            transport: this.transport,
            target: None,
            _state: PhantomData,
        })
    }
}

impl Reader<Initialized> {
    /// Execute a command and return the parsed Response.
    pub fn execute(&mut self, cmd: &Command) -> Result<Response> {
        let raw = exchange(&mut *self.transport, cmd)?;
        codec::decode_response_frame(cmd.command_code(), &raw)
    }

    /// Execute a command and return the raw response frame without
    /// decoding. Commands whose `response_len()` is zero come back as an
    /// empty buffer.
    pub fn execute_raw(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        exchange(&mut *self.transport, cmd)
    }

    /// Query the chip's firmware version.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        let cmd = Command::GetFirmwareVersion;
        match self.execute(&cmd)? {
            Response::FirmwareVersion(fw) => Ok(fw),
            other => Err(Error::UnexpectedResponse {
                expected: cmd.response_code(),
                actual: other.response_code(),
            }),
        }
    }

    /// Configure how many times the chip retries passive activation.
    /// `0xFF` keeps it retrying until a card enters the field. The status
    /// reply stays in the chip's buffer unread; the next exchange's
    /// discard clears it.
    pub fn set_passive_activation_retries(&mut self, max_retries: u8) -> Result<()> {
        let cmd = Command::SetPassiveActivationRetries { max_retries };
        self.execute_raw(&cmd)?;
        Ok(())
    }

    /// Look for a single passive target in the field and cache it as the
    /// session target. Any previously held target is dropped first, even
    /// when the attempt fails.
    pub fn discover(&mut self, baud_rate: CardBaudRate) -> Result<Target> {
        self.target = None;

        let cmd = Command::InListPassiveTarget {
            max_targets: 1,
            baud_rate,
        };
        match self.execute(&cmd)? {
            Response::PassiveTarget(Some(target)) => {
                log::debug!(
                    "target: uid={} atqa={:#06x} sak={:#04x}",
                    target.uid().to_hex(),
                    target.atqa(),
                    target.sak()
                );
                self.target = Some(target);
                Ok(target)
            }
            Response::PassiveTarget(None) => Err(Error::NoCardFound),
            other => Err(Error::UnexpectedResponse {
                expected: cmd.response_code(),
                actual: other.response_code(),
            }),
        }
    }

    /// Currently held session target, if a card has been discovered.
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    /// Target required by block operations.
    pub(crate) fn ensure_target(&self) -> Result<Target> {
        self.target.ok_or(Error::NoCardFound)
    }

    /// Drop the held target so the next block operation must rediscover.
    pub(crate) fn invalidate_target(&mut self) {
        self.target = None;
    }

    /// Authenticate `block` against the held target. Required before
    /// every read or write of that block.
    pub fn authenticate(&mut self, block: u8, slot: KeySlot, key: &MifareKey) -> Result<()> {
        crate::mifare::classic::authenticate(self, block, slot, key)
    }

    /// Read one 16-byte MIFARE Classic block.
    pub fn read_block(&mut self, block: u8) -> Result<BlockData> {
        crate::mifare::classic::read_block(self, block)
    }

    /// Write one 16-byte MIFARE Classic block.
    pub fn write_block(&mut self, block: u8, data: &BlockData) -> Result<()> {
        crate::mifare::classic::write_block(self, block, data)
    }

    /// Read one 4-byte MIFARE Ultralight page.
    pub fn read_page(&mut self, page: u8) -> Result<PageData> {
        crate::mifare::ultralight::read_page(self, page)
    }
}
