//! Dim an RGB LED through a fixed sequence of colors.
//!
//! Each PWM frame is split into three equal thirds, one for each channel in
//! the order red, green, blue. Within its third, the channel is lit for the
//! fraction of the third given by the color:
//!
//! ```text
//!         |    red    |   green   |   blue    |
//! red   --+####-------+-----------+-----------+--
//! green --+-----------+#########--+-----------+--
//! blue  --+-----------+-----------+##---------+--
//! ```

#[allow(unused_imports)]
use micromath::F32Ext;

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::configuration::Configuration;
use crate::log;
use crate::mapping::Microseconds;
use crate::wait::BusyWait;

/// Duty of each of the channels, between 0.0 and 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color {
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }
}

pub const SEQUENCE: [Color; 5] = [
    Color::new(1.0, 0.0, 0.0),
    Color::new(0.0, 1.0, 0.0),
    Color::new(0.0, 0.0, 1.0),
    Color::new(1.0, 0.0, 1.0),
    Color::new(1.0, 1.0, 1.0),
];

/// Output pins of the LED, each already configured as an output.
#[derive(Debug)]
pub struct RgbPins<R, G, B> {
    pub red: R,
    pub green: G,
    pub blue: B,
}

#[derive(Debug)]
pub struct RgbSequencer<R, G, B> {
    pins: RgbPins<R, G, B>,
    period_us: Microseconds,
    frames_per_color: u32,
    busy_wait: BusyWait,
}

impl<R, G, B, E> RgbSequencer<R, G, B>
where
    R: OutputPin<Error = E>,
    G: OutputPin<Error = E>,
    B: OutputPin<Error = E>,
{
    pub fn new(pins: RgbPins<R, G, B>, configuration: &Configuration) -> Self {
        Self {
            pins,
            period_us: configuration.period_us,
            frames_per_color: configuration.frames_per_color(),
            busy_wait: BusyWait::new(configuration.max_wait_us),
        }
    }

    /// Go once through all the colors of [`SEQUENCE`].
    ///
    /// # Errors
    ///
    /// Stops on the first error of any of the pin drivers.
    pub fn run_once<D: DelayUs<u32>>(&mut self, delay: &mut D) -> Result<(), E> {
        for color in &SEQUENCE {
            log::debug!("Showing color {}", color);
            for _ in 0..self.frames_per_color {
                self.drive_frame(delay, *color)?;
            }
        }
        Ok(())
    }

    /// Show the color for a single period.
    ///
    /// # Errors
    ///
    /// Stops on the first error of any of the pin drivers.
    pub fn drive_frame<D: DelayUs<u32>>(&mut self, delay: &mut D, color: Color) -> Result<(), E> {
        let third = self.period_us / 3;
        let leftover = self.period_us - 3 * third;

        let busy_wait = self.busy_wait;
        drive_channel(&mut self.pins.red, delay, busy_wait, third, color.red)?;
        drive_channel(&mut self.pins.green, delay, busy_wait, third, color.green)?;
        drive_channel(&mut self.pins.blue, delay, busy_wait, third, color.blue)?;
        busy_wait.wait(delay, leftover);

        Ok(())
    }

    pub fn release(self) -> RgbPins<R, G, B> {
        self.pins
    }
}

fn drive_channel<P, D>(
    pin: &mut P,
    delay: &mut D,
    busy_wait: BusyWait,
    third: Microseconds,
    fraction: f32,
) -> Result<(), P::Error>
where
    P: OutputPin,
    D: DelayUs<u32>,
{
    let on = on_time(third, fraction);
    if on > 0 {
        pin.set_high()?;
        busy_wait.wait(delay, on);
    }
    pin.set_low()?;
    busy_wait.wait(delay, third - on);
    Ok(())
}

fn on_time(third: Microseconds, fraction: f32) -> Microseconds {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    ((third as f32 * fraction).round() as Microseconds).min(third)
}
