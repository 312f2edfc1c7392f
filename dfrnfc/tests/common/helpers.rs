// helpers.rs — an emulated PN532 + MIFARE Classic 1K pair behind the
// Transport trait. Replies are synthesized per command from real card
// state (64 blocks of memory, a UID, an accepted key), so multi-step
// scenarios exercise the same frames a live module would produce.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use dfrnfc::constants::{ACK_FRAME, WAKEUP_SEQUENCE};
use dfrnfc::reader::{Initialized, Reader};
use dfrnfc::transport::Transport;
use dfrnfc::{Error, Result};

use super::fixtures;

pub struct EmulatedCard {
    memory: [[u8; 16]; 64],
    uid: [u8; 4],
    key: [u8; 6],
    present: bool,
    reject_auth_blocks: Vec<u8>,
    discoveries: usize,
    auths: Vec<u8>,
    rx: VecDeque<u8>,
}

impl Default for EmulatedCard {
    fn default() -> Self {
        Self {
            memory: [[0u8; 16]; 64],
            uid: fixtures::SAMPLE_UID,
            key: [0xFF; 6],
            present: true,
            reject_auth_blocks: Vec::new(),
            discoveries: 0,
            auths: Vec::new(),
            rx: VecDeque::new(),
        }
    }
}

impl EmulatedCard {
    fn queue(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    /// Dispatch one host frame and queue the acknowledge plus the reply.
    fn handle_frame(&mut self, data: &[u8]) {
        if data == WAKEUP_SEQUENCE {
            return;
        }
        assert_eq!(&data[..3], &[0x00, 0x00, 0xFF], "bad frame start");
        assert_eq!(data[5], 0xD4, "host frames carry TFI D4");
        let len = data[3] as usize;
        let payload = &data[6..5 + len];

        self.queue(&ACK_FRAME);
        match payload[0] {
            0x14 => self.queue(&fixtures::sam_ok_frame()),
            0x02 => self.queue(&fixtures::firmware_frame()),
            // The retry-configuration status stays queued unread, as on
            // real hardware; the next exchange's discard flushes it.
            0x32 => {
                let status = dfrnfc::test_support::response_frame(&[0x33]);
                self.queue(&status);
            }
            0x4A => {
                self.discoveries += 1;
                let frame = if self.present {
                    fixtures::discovery_frame(&self.uid)
                } else {
                    fixtures::empty_field_frame()
                };
                self.queue(&frame);
            }
            0x40 => self.handle_exchange(&payload[1..]),
            other => panic!("emulator: unsupported command {:#04x}", other),
        }
    }

    /// InDataExchange: `p` is [tg, op, block, ...].
    fn handle_exchange(&mut self, p: &[u8]) {
        let block = p[2];
        match p[1] {
            0x60 | 0x61 => {
                self.auths.push(block);
                let key_ok = p[3..9] == self.key;
                let uid_ok = p[9..] == self.uid;
                let rejected = self.reject_auth_blocks.contains(&block);
                let frame = if self.present && key_ok && uid_ok && !rejected {
                    fixtures::status_frame(0x00)
                } else {
                    fixtures::status_frame(0x14)
                };
                self.queue(&frame);
            }
            0x30 => {
                let frame = fixtures::block_frame(&self.memory[block as usize]);
                self.queue(&frame);
            }
            0xA0 => {
                let mut data = [0u8; 16];
                data.copy_from_slice(&p[3..19]);
                self.memory[block as usize] = data;
                self.queue(&fixtures::status_frame(0x00));
            }
            other => panic!("emulator: unsupported MIFARE op {:#04x}", other),
        }
    }
}

/// Cloneable handle over an `EmulatedCard`; tests keep one clone for
/// state inspection while the Reader owns another as its transport.
#[derive(Clone, Default)]
pub struct SharedCard {
    inner: Rc<RefCell<EmulatedCard>>,
}

impl SharedCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxed(&self) -> Box<dyn Transport> {
        Box::new(self.clone())
    }

    pub fn block(&self, block: u8) -> [u8; 16] {
        self.inner.borrow().memory[block as usize]
    }

    pub fn set_block(&self, block: u8, data: [u8; 16]) {
        self.inner.borrow_mut().memory[block as usize] = data;
    }

    /// Take the card in or out of the field.
    pub fn set_present(&self, present: bool) {
        self.inner.borrow_mut().present = present;
    }

    /// Change the key the card accepts (both slots).
    pub fn set_key(&self, key: [u8; 6]) {
        self.inner.borrow_mut().key = key;
    }

    /// Make authentication fail for one block from now on.
    pub fn reject_auth_for(&self, block: u8) {
        self.inner.borrow_mut().reject_auth_blocks.push(block);
    }

    /// InListPassiveTarget commands seen so far.
    pub fn discoveries(&self) -> usize {
        self.inner.borrow().discoveries
    }

    /// Block numbers authenticated, in order.
    pub fn auths(&self) -> Vec<u8> {
        self.inner.borrow().auths.clone()
    }
}

impl Transport for SharedCard {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.inner.borrow_mut().handle_frame(data);
        Ok(())
    }

    fn receive(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut inner = self.inner.borrow_mut();
        if inner.rx.is_empty() {
            return Err(Error::Timeout);
        }
        let take = len.min(inner.rx.len());
        Ok(inner.rx.drain(..take).collect())
    }

    fn discard_input(&mut self) -> Result<()> {
        // Faithful to hardware: stale unread bytes are gone. Replies to
        // the current command are queued after this, during send.
        self.inner.borrow_mut().rx.clear();
        Ok(())
    }

    fn settle(&mut self, _delay: Duration) {}
}

/// An initialized Reader over a fresh emulated card holding zeroed
/// memory, the sample UID, and the universal key.
pub fn initialized_reader() -> (SharedCard, Reader<Initialized>) {
    let card = SharedCard::new();
    let reader = Reader::new(card.boxed())
        .initialize()
        .expect("emulated SAM handshake");
    (card, reader)
}
