//! Translate a servo angle into the width of its control pulse.

/// Angle of the servo horn in degrees.
pub type Angle = i32;

/// Duration in microseconds.
pub type Microseconds = u32;

/// Repetition interval of a single PWM frame, 50 Hz.
pub const PERIOD_US: Microseconds = 20_000;

// Limits given by the servo manufacturer.
pub const PULSE_MIN_US: Microseconds = 544;
pub const PULSE_MAX_US: Microseconds = 2400;

pub const MIN_ANGLE: Angle = 0;
pub const MAX_ANGLE: Angle = 180;

/// Policy used to turn an angle into a pulse width.
///
/// Both variants saturate, no angle can produce a width outside of
/// [`PULSE_MIN_US`, `PULSE_MAX_US`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mapping {
    /// Line fit through 0° → 544 µs and 180° → 2400 µs.
    ///
    /// The angle is clamped to [0, 180] before the mapping, the width is
    /// rounded down.
    #[default]
    TwoPoint,
    /// Approximation `angle / 0.18 + 1000`, clamped to the manufacturer's
    /// limits.
    ///
    /// This never reaches the bottom limit within [0, 180]: 0° gives
    /// 1000 µs and 180° gives 2000 µs.
    OffsetLinear,
}

impl Mapping {
    #[must_use]
    pub fn pulse_width(self, angle: Angle) -> Microseconds {
        match self {
            Self::TwoPoint => two_point(angle),
            Self::OffsetLinear => offset_linear(angle),
        }
    }
}

/// Pulse width of the given angle under the default [`Mapping`].
#[must_use]
pub fn pulse_width(angle: Angle) -> Microseconds {
    Mapping::default().pulse_width(angle)
}

fn two_point(angle: Angle) -> Microseconds {
    const SPAN_US: u32 = PULSE_MAX_US - PULSE_MIN_US;
    const SPAN_DEGREES: u32 = (MAX_ANGLE - MIN_ANGLE) as u32;
    let offset = (angle.clamp(MIN_ANGLE, MAX_ANGLE) - MIN_ANGLE) as u32;
    offset * SPAN_US / SPAN_DEGREES + PULSE_MIN_US
}

// 1 / 0.18 = 50 / 9, kept in integers so the endpoints are exact.
fn offset_linear(angle: Angle) -> Microseconds {
    let width = (i64::from(angle) * 50).div_euclid(9) + 1000;
    width.clamp(i64::from(PULSE_MIN_US), i64::from(PULSE_MAX_US)) as Microseconds
}
