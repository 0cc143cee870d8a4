//! Calculation options.

use crate::constants::{DEFAULT_DECIMALS, MAX_DECIMALS};
use crate::rounding::RoundingMode;

/// Options for a diagnostic calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Rounding applied when deriving counts from rates.
    pub rounding: RoundingMode,
    /// Decimals used for display rounding of ratio metrics.
    pub decimals: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rounding: RoundingMode::default(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl Options {
    /// Normalize options, clamping decimals to `MAX_DECIMALS`.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.decimals > MAX_DECIMALS {
            self.decimals = MAX_DECIMALS;
        }
        self
    }
}
