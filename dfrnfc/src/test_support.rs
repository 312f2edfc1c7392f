//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize MockTransport seeding so tests across the
//! crate and the tests/ directory can reuse the same fixtures.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::constants::{ACK_FRAME, TFI_DEVICE};
use crate::protocol::Frame;
use crate::reader::{Initialized, Reader};
use crate::transport::{MockTransport, Transport};
use crate::Result;

/// Build a chip-to-host frame around `payload` (response code first).
#[doc(hidden)]
pub fn response_frame(payload: &[u8]) -> Vec<u8> {
    Frame::encode_with_direction(TFI_DEVICE, payload).expect("valid test payload")
}

/// Shared handle around a MockTransport so tests can keep inspecting the
/// transcript after a Reader has taken ownership of the transport.
#[doc(hidden)]
#[derive(Clone, Default)]
pub struct SharedMock {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedMock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of this handle boxed as a Transport for `Reader::new`.
    pub fn boxed(&self) -> Box<dyn Transport> {
        Box::new(self.clone())
    }

    pub fn push_response(&self, bytes: &[u8]) {
        self.inner.borrow_mut().push_response(bytes);
    }

    pub fn push_ack(&self) {
        self.push_response(&ACK_FRAME);
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.inner.borrow().sent.clone()
    }

    pub fn discards(&self) -> usize {
        self.inner.borrow().discards
    }

    pub fn settles(&self) -> Vec<Duration> {
        self.inner.borrow().settles.clone()
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().pending()
    }
}

impl Transport for SharedMock {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.inner.borrow_mut().send(data)
    }

    fn receive(&mut self, len: usize) -> Result<Vec<u8>> {
        self.inner.borrow_mut().receive(len)
    }

    fn discard_input(&mut self) -> Result<()> {
        self.inner.borrow_mut().discard_input()
    }

    fn settle(&mut self, delay: Duration) {
        self.inner.borrow_mut().settle(delay);
    }
}

/// Seed the acknowledge + SAM confirmation consumed by
/// `Reader::initialize`.
#[doc(hidden)]
pub fn seed_sam_handshake(mock: &SharedMock) {
    mock.push_ack();
    mock.push_response(&response_frame(&[0x15]));
}

/// Seed one acknowledge in front of each response frame, the shape every
/// command exchange consumes.
#[doc(hidden)]
pub fn seed_exchanges(mock: &SharedMock, frames: Vec<Vec<u8>>) {
    for frame in frames {
        mock.push_ack();
        mock.push_response(&frame);
    }
}

/// Convenience: a Reader<Initialized> over a fresh SharedMock with the
/// SAM handshake already consumed. Returns the mock handle for seeding
/// and inspection.
#[doc(hidden)]
pub fn initialized_mock_reader() -> (SharedMock, Reader<Initialized>) {
    let mock = SharedMock::new();
    seed_sam_handshake(&mock);
    let reader = Reader::new(mock.boxed())
        .initialize()
        .expect("mock SAM handshake");
    (mock, reader)
}

/// Discovery reply for a 4-byte UID card (ATQA 0x0004, SAK 0x08).
#[doc(hidden)]
pub fn inlist_frame(uid: &[u8; 4]) -> Vec<u8> {
    response_frame(&[
        0x4B, 0x01, 0x01, 0x00, 0x04, 0x08, 0x04, uid[0], uid[1], uid[2], uid[3],
    ])
}

/// Discovery reply for an empty field. Shorter than the fixed 19-byte
/// read, as on the wire.
#[doc(hidden)]
pub fn inlist_no_card_frame() -> Vec<u8> {
    response_frame(&[0x4B, 0x00])
}

/// InDataExchange status reply (auth and write completions).
#[doc(hidden)]
pub fn exchange_status_frame(status: u8) -> Vec<u8> {
    response_frame(&[0x41, status])
}

/// InDataExchange block-read reply carrying 16 data bytes.
#[doc(hidden)]
pub fn read_block_frame(data: &[u8; 16]) -> Vec<u8> {
    let mut payload = vec![0x41, 0x00];
    payload.extend_from_slice(data);
    response_frame(&payload)
}
