//! Software PWM for a hobby servo, bit-banged on a single GPIO pin.
//!
//! Everything here is driven by busy-waiting. A pulse generator raises the
//! pin for a width derived from the requested angle and keeps it low for the
//! rest of the 20 ms period. On top of it sits a sweep harness, and as a
//! bonus, a sequencer dimming an RGB LED through a fixed list of colors using
//! the same technique.
//!
//! The crate does not touch any peripheral directly. Pins and delays are
//! passed in as `embedded-hal` implementations, so the whole control flow can
//! be exercised on the host:
//!
//! ```text
//!                [ Controller ] <-- (Configuration)
//!                  |         |
//!          (Mode::Sweep)  (Mode::Rgb)
//!                  |         |
//!                  V         V
//!             [ Sweep ]   [ RgbSequencer ]
//!                  |         |     |     |
//!                  V         V     V     V
//!        [ PulseGenerator ] [R]   [G]   [B]
//!                  |         |     |     |
//!                  +----+----+-----+-----+
//!                       |
//!                  [ BusyWait ] --> DelayUs
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

mod configuration;
mod control;
mod log;
mod mapping;
mod pulse;
mod rgb;
mod sweep;
mod wait;

#[cfg(test)]
mod testlib;

pub use configuration::{Configuration, ConfigurationError, Mode};
pub use control::Controller;
pub use mapping::{
    pulse_width, Angle, Mapping, Microseconds, MAX_ANGLE, MIN_ANGLE, PERIOD_US, PULSE_MAX_US,
    PULSE_MIN_US,
};
pub use pulse::PulseGenerator;
pub use rgb::{Color, RgbPins, RgbSequencer, SEQUENCE};
pub use sweep::{sweep_test, Step, Sweep, DEGREE_STEP, HOLD_PERIODS};
pub use wait::BusyWait;
