//! Blocking waits on top of a delay that may not cover a whole period at once.

use core::num::NonZeroU32;

use embedded_hal::blocking::delay::DelayUs;

use crate::mapping::Microseconds;

/// Busy-wait split into calls the delay provider can handle.
///
/// Some delay implementations cannot block for longer than a couple of
/// milliseconds in one call. When bounded, a wait is issued as a sequence of
/// full chunks followed by the remainder, e.g. 18 528 µs with a 10 000 µs
/// bound becomes 10 000 µs and 8 528 µs. Zero-length waits are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusyWait {
    max_wait_us: Option<NonZeroU32>,
}

impl BusyWait {
    #[must_use]
    pub fn unbounded() -> Self {
        Self { max_wait_us: None }
    }

    #[must_use]
    pub fn bounded(max_wait_us: NonZeroU32) -> Self {
        Self {
            max_wait_us: Some(max_wait_us),
        }
    }

    #[must_use]
    pub fn new(max_wait_us: Option<NonZeroU32>) -> Self {
        Self { max_wait_us }
    }

    pub fn wait<D: DelayUs<u32>>(self, delay: &mut D, duration: Microseconds) {
        let chunk = self.max_wait_us.map_or(Microseconds::MAX, NonZeroU32::get);
        let mut remaining = duration;
        while remaining > 0 {
            let step = remaining.min(chunk);
            delay.delay_us(step);
            remaining -= step;
        }
    }
}
