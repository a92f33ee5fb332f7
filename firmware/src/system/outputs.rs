//! Pins driven by busy-waiting PWM.
//!
//! The servo takes its signal from D1, the common-cathode RGB LED is wired
//! through 340 Ω resistors to D2 to D4.

use crate::system::hal::gpio;

pub type ServoPin = gpio::gpiob::PB4<gpio::Output>;
pub type RedPin = gpio::gpioc::PC11<gpio::Output>;
pub type GreenPin = gpio::gpioc::PC10<gpio::Output>;
pub type BluePin = gpio::gpioc::PC9<gpio::Output>;
