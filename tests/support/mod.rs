#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use myrtio_light_sense::{Direction, Level, Pin, PinIo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError(pub Pin);

/// Everything the mock saw, shared with the test body
#[derive(Debug, Default)]
pub struct Bus {
    pub claimed: Vec<(Pin, Direction)>,
    pub directions: Vec<(Pin, Direction)>,
    pub writes: Vec<(Pin, Level)>,
    pub reads: usize,
    pub releases: usize,
}

/// In-memory pin provider
///
/// Each switch to input mode starts the next charge script entry: the pin
/// reads low that many times, then high. `None` never goes high.
pub struct MockPins {
    bus: Rc<RefCell<Bus>>,
    charge: VecDeque<Option<u32>>,
    low_reads_left: Option<u32>,
    fail_claim: Option<Pin>,
    fail_release: bool,
}

impl MockPins {
    pub fn new() -> (Self, Rc<RefCell<Bus>>) {
        let bus = Rc::new(RefCell::new(Bus::default()));
        let pins = Self {
            bus: bus.clone(),
            charge: VecDeque::new(),
            low_reads_left: None,
            fail_claim: None,
            fail_release: false,
        };
        (pins, bus)
    }

    /// Charge script, one entry per sample. The last entry repeats.
    pub fn with_charge(mut self, script: &[Option<u32>]) -> Self {
        self.charge = script.iter().copied().collect();
        self
    }

    pub fn failing_claim(mut self, pin: Pin) -> Self {
        self.fail_claim = Some(pin);
        self
    }

    pub fn failing_release(mut self) -> Self {
        self.fail_release = true;
        self
    }

    fn next_charge(&mut self) -> Option<u32> {
        if self.charge.len() > 1 {
            self.charge.pop_front().flatten()
        } else {
            self.charge.front().copied().flatten()
        }
    }
}

impl PinIo for MockPins {
    type Error = MockError;

    fn claim(&mut self, pin: Pin, direction: Direction) -> Result<(), Self::Error> {
        if self.fail_claim == Some(pin) {
            return Err(MockError(pin));
        }
        self.bus.borrow_mut().claimed.push((pin, direction));
        Ok(())
    }

    fn set_direction(&mut self, pin: Pin, direction: Direction) {
        if direction == Direction::Input {
            self.low_reads_left = self.next_charge();
        }
        self.bus.borrow_mut().directions.push((pin, direction));
    }

    fn write(&mut self, pin: Pin, level: Level) {
        self.bus.borrow_mut().writes.push((pin, level));
    }

    fn read(&mut self, _pin: Pin) -> Level {
        self.bus.borrow_mut().reads += 1;
        match self.low_reads_left {
            Some(0) => Level::High,
            Some(left) => {
                self.low_reads_left = Some(left - 1);
                Level::Low
            }
            None => Level::Low,
        }
    }

    fn release_all(&mut self) -> Result<(), Self::Error> {
        let mut bus = self.bus.borrow_mut();
        bus.releases += 1;
        bus.claimed.clear();
        if self.fail_release {
            return Err(MockError(Pin(0)));
        }
        Ok(())
    }
}
