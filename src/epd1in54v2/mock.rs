//! Recording transport for protocol tests

use std::collections::VecDeque;
use std::vec::Vec;

use display_interface::DisplayError;
use embedded_hal::digital::PinState;

use crate::epd1in54v2::{interface::Transport, pins::Pin};

/// Everything the protocol layer asked the transport to do, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    BringUp,
    Command(u8),
    Data(u8),
    SetPin(Pin, PinState),
    ReadBusy(PinState),
    Delay(u32),
}

pub(crate) struct MockTransport {
    pub(crate) events: Vec<Event>,
    dc: PinState,
    busy_script: VecDeque<PinState>,
    busy_default: PinState,
    fail_bring_up: bool,
}

impl MockTransport {
    /// A panel that is never busy
    pub(crate) fn new() -> Self {
        Self {
            events: Vec::new(),
            dc: PinState::High,
            busy_script: VecDeque::new(),
            busy_default: PinState::Low,
            fail_bring_up: false,
        }
    }

    /// A panel whose busy line never clears
    pub(crate) fn stuck_busy() -> Self {
        Self {
            busy_default: PinState::High,
            ..Self::new()
        }
    }

    /// Busy reads follow `script`, then fall back to idle
    pub(crate) fn with_busy_script(script: &[PinState]) -> Self {
        Self {
            busy_script: script.iter().copied().collect(),
            ..Self::new()
        }
    }

    pub(crate) fn failing_bring_up() -> Self {
        Self {
            fail_bring_up: true,
            ..Self::new()
        }
    }

    /// Only the bytes that went over the bus
    pub(crate) fn wire(&self) -> Vec<Event> {
        self.events
            .iter()
            .copied()
            .filter(|e| matches!(e, Event::Command(_) | Event::Data(_)))
            .collect()
    }

    /// Data bytes sent right after each occurrence of `command`
    pub(crate) fn payloads(&self, command: u8) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        let mut current: Option<Vec<u8>> = None;
        for event in self.wire() {
            match event {
                Event::Command(c) => {
                    if let Some(done) = current.take() {
                        out.push(done);
                    }
                    if c == command {
                        current = Some(Vec::new());
                    }
                }
                Event::Data(d) => {
                    if let Some(payload) = current.as_mut() {
                        payload.push(d);
                    }
                }
                _ => {}
            }
        }
        if let Some(done) = current {
            out.push(done);
        }
        out
    }

    /// Command bytes in order
    pub(crate) fn commands(&self) -> Vec<u8> {
        self.wire()
            .into_iter()
            .filter_map(|e| match e {
                Event::Command(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn clear(&mut self) {
        self.events.clear();
    }
}

impl Transport for MockTransport {
    fn bring_up(&mut self) -> Result<(), DisplayError> {
        self.events.push(Event::BringUp);
        if self.fail_bring_up {
            Err(DisplayError::BusWriteError)
        } else {
            Ok(())
        }
    }

    fn transfer(&mut self, byte: u8) -> u8 {
        self.events.push(match self.dc {
            PinState::Low => Event::Command(byte),
            PinState::High => Event::Data(byte),
        });
        0
    }

    fn set_pin(&mut self, pin: Pin, level: PinState) {
        if pin == Pin::DataCommand {
            self.dc = level;
            return;
        }
        self.events.push(Event::SetPin(pin, level));
    }

    fn read_pin(&mut self, pin: Pin) -> PinState {
        assert_eq!(pin, Pin::Busy, "only BUSY is an input");
        let level = self.busy_script.pop_front().unwrap_or(self.busy_default);
        self.events.push(Event::ReadBusy(level));
        level
    }

    fn delay_ms(&mut self, ms: u32) {
        self.events.push(Event::Delay(ms));
    }
}
