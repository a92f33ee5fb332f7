//! Top level control loop, running either the servo sweep or the LED sequence.

use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::configuration::{Configuration, ConfigurationError, Mode};
use crate::log;
use crate::pulse::PulseGenerator;
use crate::rgb::{RgbPins, RgbSequencer};
use crate::sweep::sweep_test;

/// Owner of all the outputs and the delay provider.
///
/// Both routines are always available, [`Mode`] decides which one runs.
/// All the outputs must share the same error type, which in practice is
/// given by the HAL.
#[derive(Debug)]
pub struct Controller<S, R, G, B, D> {
    mode: Mode,
    hold_periods: u32,
    servo: PulseGenerator<S>,
    rgb: RgbSequencer<R, G, B>,
    delay: D,
}

impl<S, R, G, B, D, E> Controller<S, R, G, B, D>
where
    S: OutputPin<Error = E>,
    R: OutputPin<Error = E>,
    G: OutputPin<Error = E>,
    B: OutputPin<Error = E>,
    D: DelayUs<u32>,
{
    /// # Errors
    ///
    /// Fails if the configuration does not pass validation.
    pub fn try_new(
        configuration: &Configuration,
        servo: S,
        rgb: RgbPins<R, G, B>,
        delay: D,
    ) -> Result<Self, ConfigurationError> {
        configuration.validate()?;
        Ok(Self {
            mode: configuration.mode,
            hold_periods: configuration.hold_periods,
            servo: PulseGenerator::from_configuration(servo, configuration),
            rgb: RgbSequencer::new(rgb, configuration),
            delay,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Repeat the routine of the current mode.
    ///
    /// One iteration is a complete sweep, or one pass through all the
    /// colors. With `None`, this never returns unless a pin fails.
    ///
    /// # Errors
    ///
    /// Stops on the first error of any of the pin drivers.
    pub fn run(&mut self, iterations: Option<u32>) -> Result<(), E> {
        log::info!("Running mode={} iterations={}", self.mode, iterations);
        match iterations {
            Some(iterations) => {
                for _ in 0..iterations {
                    self.iterate()?;
                }
                Ok(())
            }
            None => self.run_forever().map(|never| match never {}),
        }
    }

    /// # Errors
    ///
    /// Stops on the first error of any of the pin drivers, otherwise it
    /// never returns.
    pub fn run_forever(&mut self) -> Result<Infallible, E> {
        loop {
            self.iterate()?;
        }
    }

    fn iterate(&mut self) -> Result<(), E> {
        match self.mode {
            Mode::Sweep => sweep_test(&mut self.servo, &mut self.delay, self.hold_periods),
            Mode::Rgb => self.rgb.run_once(&mut self.delay),
        }
    }
}
