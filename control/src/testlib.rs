//! Fake pins and delays recording everything they are asked to do.

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    High(&'static str),
    Low(&'static str),
    Wait(u32),
}

/// Shared timeline of pin writes and waits.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    pub fn pin(&self, name: &'static str) -> FakePin {
        FakePin {
            name,
            events: Rc::clone(&self.events),
        }
    }

    pub fn delay(&self) -> FakeDelay {
        FakeDelay {
            events: Rc::clone(&self.events),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn waits(&self) -> Vec<u32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Wait(us) => Some(*us),
                _ => None,
            })
            .collect()
    }

    pub fn total_wait(&self) -> u64 {
        self.waits().into_iter().map(u64::from).sum()
    }

    /// Total time in microseconds the given pin spent high.
    pub fn high_time(&self, name: &'static str) -> u64 {
        let mut high = false;
        let mut total = 0;
        for event in self.events.borrow().iter() {
            match *event {
                Event::High(n) if n == name => high = true,
                Event::Low(n) if n == name => high = false,
                Event::Wait(us) if high => total += u64::from(us),
                _ => (),
            }
        }
        total
    }

    /// Split the timeline at each rising edge of the given pin.
    pub fn frames(&self, name: &'static str) -> Vec<Vec<Event>> {
        let mut frames: Vec<Vec<Event>> = Vec::new();
        for event in self.events.borrow().iter() {
            if *event == Event::High(name) || frames.is_empty() {
                frames.push(Vec::new());
            }
            frames.last_mut().unwrap().push(*event);
        }
        frames
    }
}

#[derive(Debug)]
pub struct FakePin {
    name: &'static str,
    events: Rc<RefCell<Vec<Event>>>,
}

impl OutputPin for FakePin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.events.borrow_mut().push(Event::Low(self.name));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.events.borrow_mut().push(Event::High(self.name));
        Ok(())
    }
}

#[derive(Debug)]
pub struct FakeDelay {
    events: Rc<RefCell<Vec<Event>>>,
}

impl DelayUs<u32> for FakeDelay {
    fn delay_us(&mut self, us: u32) {
        self.events.borrow_mut().push(Event::Wait(us));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disconnected;

/// Pin whose driver fails on every write.
#[derive(Debug, Default)]
pub struct BrokenPin;

impl OutputPin for BrokenPin {
    type Error = Disconnected;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(Disconnected)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(Disconnected)
    }
}
