use core::num::NonZeroU32;

use crate::mapping::{Mapping, Microseconds, PERIOD_US};
use crate::sweep::HOLD_PERIODS;

// Longest wait known to be safe with every supported delay provider.
const MAX_WAIT_US: u32 = 10_000;

const COLOR_HOLD_MS: u32 = 1000;

/// What the control loop is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Sweep the servo through its range, holding each step.
    #[default]
    Sweep,
    /// Cycle the RGB LED through its color sequence.
    Rgb,
}

/// Tweaking of the default timing and behavior.
///
/// All of it is set once during initialization. Nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    pub mode: Mode,
    pub mapping: Mapping,
    pub period_us: Microseconds,
    /// Longest single call the delay provider can take, `None` if unbounded.
    pub max_wait_us: Option<NonZeroU32>,
    /// Number of consecutive pulses sent for each angle of the sweep.
    pub hold_periods: u32,
    /// How long is each color of the RGB sequence held.
    pub color_hold_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigurationError {
    ZeroPeriod,
    ZeroHoldPeriods,
    /// Color would not be held even for a single period.
    ColorHoldTooShort,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            mapping: Mapping::default(),
            period_us: PERIOD_US,
            max_wait_us: NonZeroU32::new(MAX_WAIT_US),
            hold_periods: HOLD_PERIODS,
            color_hold_ms: COLOR_HOLD_MS,
        }
    }
}

impl Configuration {
    /// # Errors
    ///
    /// Fails when any of the durations or counts would make the control
    /// loop empty.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.period_us == 0 {
            return Err(ConfigurationError::ZeroPeriod);
        }
        if self.hold_periods == 0 {
            return Err(ConfigurationError::ZeroHoldPeriods);
        }
        if self.frames_per_color() == 0 {
            return Err(ConfigurationError::ColorHoldTooShort);
        }
        Ok(())
    }

    pub(crate) fn frames_per_color(&self) -> u32 {
        if self.period_us == 0 {
            return 0;
        }
        (u64::from(self.color_hold_ms) * 1000 / u64::from(self.period_us)) as u32
    }
}
