//! Generate servo control pulses by toggling a pin and busy-waiting.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::configuration::Configuration;
use crate::mapping::{Angle, Mapping, Microseconds, PERIOD_US};
use crate::wait::BusyWait;

/// Drives a single servo through its control pin.
///
/// Each call to [`drive_pulse`](Self::drive_pulse) produces exactly one PWM
/// frame: the pin is held high for the pulse width of the angle and low for
/// the rest of the period. The caller must keep calling it to keep the servo
/// in position.
#[derive(Debug)]
pub struct PulseGenerator<P> {
    pin: P,
    mapping: Mapping,
    period_us: Microseconds,
    busy_wait: BusyWait,
}

impl<P: OutputPin> PulseGenerator<P> {
    /// Take over a pin already configured as an output.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            mapping: Mapping::default(),
            period_us: PERIOD_US,
            busy_wait: BusyWait::unbounded(),
        }
    }

    pub fn from_configuration(pin: P, configuration: &Configuration) -> Self {
        Self {
            pin,
            mapping: configuration.mapping,
            period_us: configuration.period_us,
            busy_wait: BusyWait::new(configuration.max_wait_us),
        }
    }

    #[must_use]
    pub fn with_mapping(mut self, mapping: Mapping) -> Self {
        self.mapping = mapping;
        self
    }

    #[must_use]
    pub fn with_busy_wait(mut self, busy_wait: BusyWait) -> Self {
        self.busy_wait = busy_wait;
        self
    }

    /// Width of the high phase for the given angle.
    ///
    /// Never longer than the period, so the low phase cannot go negative.
    pub fn pulse_width(&self, angle: Angle) -> Microseconds {
        self.mapping.pulse_width(angle).min(self.period_us)
    }

    pub fn period_us(&self) -> Microseconds {
        self.period_us
    }

    /// Send one frame positioning the servo to the given angle.
    ///
    /// # Errors
    ///
    /// Passes through any error of the pin driver. The frame is abandoned
    /// at that point.
    pub fn drive_pulse<D: DelayUs<u32>>(
        &mut self,
        delay: &mut D,
        angle: Angle,
    ) -> Result<(), P::Error> {
        let width = self.pulse_width(angle);

        //   | width |    period - width    |
        //   +-------+
        //   |       |
        // --+       +----------------------+
        self.pin.set_high()?;
        self.busy_wait.wait(delay, width);
        self.pin.set_low()?;
        self.busy_wait.wait(delay, self.period_us - width);

        Ok(())
    }

    pub fn release(self) -> P {
        self.pin
    }
}
