use super::debounced::Debounced;
use crate::system::hal::gpio;
use crate::system::CPU_FREQUENCY;

const BOOT_SAMPLES: usize = 8;

#[derive(Debug)]
pub struct Button {
    pin: Pin,
    debounced: Debounced<4>,
    pub active: bool,
}

pub type Pin = gpio::gpiog::PG14<gpio::Input>;

impl Button {
    pub fn new(pin: Pin) -> Self {
        Self {
            pin,
            debounced: Debounced::new(),
            active: false,
        }
    }

    pub fn sample(&mut self) {
        self.active = self.debounced.update(self.pin.is_low());
    }

    /// Sample the button for a couple of milliseconds to tell whether it is
    /// being held down.
    pub fn held_at_boot(&mut self) -> bool {
        for _ in 0..BOOT_SAMPLES {
            self.sample();
            cortex_m::asm::delay(CPU_FREQUENCY / 1000);
        }
        self.active
    }
}
