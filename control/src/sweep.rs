//! Test harness sweeping the servo across its range.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::log;
use crate::mapping::{Angle, MAX_ANGLE, MIN_ANGLE};
use crate::pulse::PulseGenerator;

pub const DEGREE_STEP: Angle = 30;

// With 20 ms long periods, each angle is held for about a second.
pub const HOLD_PERIODS: u32 = 50;

/// A single pulse of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    pub angle: Angle,
    /// Index of the pulse within the hold of this angle.
    pub repetition: u32,
}

/// Iterator over all pulses of one sweep from 0° to 180°.
///
/// Angles advance by [`DEGREE_STEP`] and each of them is repeated for the
/// given number of periods before moving on.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sweep {
    angle: Angle,
    repetition: u32,
    hold_periods: u32,
}

impl Sweep {
    #[must_use]
    pub fn new(hold_periods: u32) -> Self {
        Self {
            angle: MIN_ANGLE,
            repetition: 0,
            hold_periods,
        }
    }
}

impl Default for Sweep {
    fn default() -> Self {
        Self::new(HOLD_PERIODS)
    }
}

impl Iterator for Sweep {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        if self.hold_periods == 0 || self.angle > MAX_ANGLE {
            return None;
        }

        let step = Step {
            angle: self.angle,
            repetition: self.repetition,
        };

        self.repetition += 1;
        if self.repetition == self.hold_periods {
            self.repetition = 0;
            self.angle += DEGREE_STEP;
        }

        Some(step)
    }
}

/// Run the servo once through the whole sweep.
///
/// # Errors
///
/// Stops on the first error of the pin driver.
pub fn sweep_test<P, D>(
    generator: &mut PulseGenerator<P>,
    delay: &mut D,
    hold_periods: u32,
) -> Result<(), P::Error>
where
    P: OutputPin,
    D: DelayUs<u32>,
{
    for step in Sweep::new(hold_periods) {
        if step.repetition == 0 {
            log::debug!(
                "Holding angle={} width={}us",
                step.angle,
                generator.pulse_width(step.angle)
            );
        }
        generator.drive_pulse(delay, step.angle)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::PERIOD_US;
    use crate::testlib::Recorder;

    #[test]
    fn it_visits_angles_in_steps_of_30_degrees() {
        let mut angles: Vec<Angle> = Sweep::default().map(|s| s.angle).collect();
        angles.dedup();
        assert_eq!(angles, [0, 30, 60, 90, 120, 150, 180]);
    }

    #[test]
    fn it_holds_each_angle_for_50_consecutive_periods() {
        let steps: Vec<Step> = Sweep::default().collect();
        assert_eq!(steps.len(), 7 * 50);
        for (i, chunk) in steps.chunks(50).enumerate() {
            let angle = i as Angle * 30;
            assert!(chunk.iter().all(|s| s.angle == angle));
            assert_eq!(chunk.first().unwrap().repetition, 0);
            assert_eq!(chunk.last().unwrap().repetition, 49);
        }
    }

    #[test]
    fn when_hold_is_custom_it_repeats_accordingly() {
        let steps: Vec<Step> = Sweep::new(2).collect();
        assert_eq!(steps.len(), 14);
        assert_eq!(steps[0], Step { angle: 0, repetition: 0 });
        assert_eq!(steps[1], Step { angle: 0, repetition: 1 });
        assert_eq!(steps[2], Step { angle: 30, repetition: 0 });
        assert_eq!(steps[13], Step { angle: 180, repetition: 1 });
    }

    #[test]
    fn when_hold_is_zero_it_is_empty() {
        assert_eq!(Sweep::new(0).count(), 0);
    }

    #[test]
    fn when_driven_it_sends_one_pulse_per_step_and_takes_seven_seconds() {
        let recorder = Recorder::default();
        let mut generator = PulseGenerator::new(recorder.pin("servo"));

        sweep_test(&mut generator, &mut recorder.delay(), HOLD_PERIODS).unwrap();

        let frames = recorder.frames("servo");
        assert_eq!(frames.len(), 350);
        assert_eq!(recorder.total_wait(), 350 * u64::from(PERIOD_US));
        let first_widths: Vec<u32> = frames
            .iter()
            .step_by(50)
            .map(|frame| match frame[1] {
                crate::testlib::Event::Wait(us) => us,
                other => panic!("unexpected event {other:?}"),
            })
            .collect();
        assert_eq!(first_widths, [544, 853, 1162, 1472, 1781, 2090, 2400]);
    }
}
