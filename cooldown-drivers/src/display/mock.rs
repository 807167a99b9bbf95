//! Recording doubles for the panel bus, control lines and delay

use core::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use cooldown_hal::{OutputPin, SpiBus};
use embedded_hal_async::delay::DelayNs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Cs,
    Dc,
    Rst,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    Pin(Line, bool),
    Write(Vec<u8>),
    Queued(Vec<u8>),
    DelayMs(u32),
}

pub type Log = Rc<RefCell<Vec<BusEvent>>>;

pub struct MockPin {
    line: Line,
    high: bool,
    log: Log,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
        self.log.borrow_mut().push(BusEvent::Pin(self.line, true));
    }

    fn set_low(&mut self) {
        self.high = false;
        self.log.borrow_mut().push(BusEvent::Pin(self.line, false));
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

pub struct MockSpi {
    log: Log,
    pub fail: bool,
}

impl SpiBus for MockSpi {
    type Error = BusFault;

    fn write(&mut self, data: &[u8]) -> Result<(), BusFault> {
        if self.fail {
            return Err(BusFault);
        }
        self.log.borrow_mut().push(BusEvent::Write(data.to_vec()));
        Ok(())
    }

    async fn write_queued(&mut self, data: &[u8]) -> Result<(), BusFault> {
        if self.fail {
            return Err(BusFault);
        }
        self.log.borrow_mut().push(BusEvent::Queued(data.to_vec()));
        Ok(())
    }
}

pub struct MockDelay {
    log: Log,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, _ns: u32) {}

    async fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(BusEvent::DelayMs(ms));
    }
}

pub struct Rig {
    pub log: Log,
    pub spi: MockSpi,
    pub cs: MockPin,
    pub dc: MockPin,
    pub rst: MockPin,
    pub delay: MockDelay,
}

pub fn rig() -> Rig {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let pin = |line| MockPin {
        line,
        high: false,
        log: log.clone(),
    };
    Rig {
        spi: MockSpi {
            log: log.clone(),
            fail: false,
        },
        cs: pin(Line::Cs),
        dc: pin(Line::Dc),
        rst: pin(Line::Rst),
        delay: MockDelay { log: log.clone() },
        log,
    }
}

/// Bytes sent as commands, each with the data bytes that followed it
pub fn transactions(log: &[BusEvent]) -> Vec<(u8, Vec<u8>)> {
    let mut dc_high = false;
    let mut out: Vec<(u8, Vec<u8>)> = Vec::new();
    for event in log {
        match event {
            BusEvent::Pin(Line::Dc, level) => dc_high = *level,
            BusEvent::Write(bytes) | BusEvent::Queued(bytes) => {
                if dc_high {
                    if let Some(last) = out.last_mut() {
                        last.1.extend_from_slice(bytes);
                    }
                } else {
                    for &op in bytes {
                        out.push((op, Vec::new()));
                    }
                }
            }
            _ => {}
        }
    }
    out
}

/// All delays in order
pub fn delays(log: &[BusEvent]) -> Vec<u32> {
    log.iter()
        .filter_map(|e| match e {
            BusEvent::DelayMs(ms) => Some(*ms),
            _ => None,
        })
        .collect()
}
