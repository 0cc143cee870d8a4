//! Rounding modes for rate-to-count conversion and display rounding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DxError;

/// How fractional patient counts are rounded to whole patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Ties go to the nearest even integer (2.5 -> 2, 3.5 -> 4).
    #[default]
    HalfEven,
    /// Ties go up (2.5 -> 3, 3.5 -> 4).
    HalfUp,
}

impl RoundingMode {
    /// All supported modes.
    pub const ALL: [RoundingMode; 2] = [RoundingMode::HalfEven, RoundingMode::HalfUp];

    /// Round a value to the nearest integer using this mode.
    ///
    /// `HalfUp` is implemented as round-half-away-from-zero, which is the
    /// same thing for the non-negative values this crate deals with.
    #[must_use]
    pub fn round(self, value: f64) -> f64 {
        match self {
            RoundingMode::HalfEven => value.round_ties_even(),
            RoundingMode::HalfUp => value.round(),
        }
    }

    /// Round a non-negative value to a whole count.
    ///
    /// Negative and NaN inputs map to 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn round_count(self, value: f64) -> u64 {
        let rounded = self.round(value);
        if rounded.is_nan() || rounded <= 0.0 {
            0
        } else {
            rounded as u64
        }
    }

    /// Canonical name, as accepted by `FromStr`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            RoundingMode::HalfEven => "half-even",
            RoundingMode::HalfUp => "half-up",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = DxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-even" | "half_even" | "even" | "bankers" => Ok(RoundingMode::HalfEven),
            "half-up" | "half_up" | "up" => Ok(RoundingMode::HalfUp),
            other => Err(DxError::Config(format!("unknown rounding mode: {other}"))),
        }
    }
}

/// Round `value` to `decimals` places, ties to even on the scaled value.
///
/// This is the display rounding applied to metrics (0.875 -> 0.88,
/// 0.125 -> 0.12).
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}
