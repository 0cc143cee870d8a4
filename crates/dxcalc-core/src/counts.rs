//! The 2x2 contingency table.

use serde::{Deserialize, Serialize};

use crate::metrics::MetricsResult;

/// Raw contingency-table cell counts.
///
/// ```text
///              condition (+)   condition (-)
///  test (+)        tp              fp
///  test (-)        fn              tn
/// ```
///
/// Margins saturate at `u64::MAX` instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CountSet {
    /// True positives.
    pub tp: u64,
    /// False positives.
    pub fp: u64,
    /// False negatives.
    #[serde(rename = "fn")]
    pub fn_: u64,
    /// True negatives.
    pub tn: u64,
}

impl CountSet {
    /// Create a count set from the four cells.
    #[must_use]
    pub const fn new(tp: u64, fp: u64, fn_: u64, tn: u64) -> Self {
        Self { tp, fp, fn_, tn }
    }

    /// Sum of all four cells.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.tp
            .saturating_add(self.fp)
            .saturating_add(self.fn_)
            .saturating_add(self.tn)
    }

    /// Subjects with the condition (`tp + fn`).
    #[must_use]
    pub fn disease_positive(&self) -> u64 {
        self.tp.saturating_add(self.fn_)
    }

    /// Subjects without the condition (`fp + tn`).
    #[must_use]
    pub fn disease_negative(&self) -> u64 {
        self.fp.saturating_add(self.tn)
    }

    /// Positive test results (`tp + fp`).
    #[must_use]
    pub fn test_positive(&self) -> u64 {
        self.tp.saturating_add(self.fp)
    }

    /// Negative test results (`fn + tn`).
    #[must_use]
    pub fn test_negative(&self) -> u64 {
        self.fn_.saturating_add(self.tn)
    }

    /// Whether every cell is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Derive the diagnostic metrics for this table.
    #[must_use]
    pub fn metrics(&self) -> MetricsResult {
        MetricsResult::from_counts(self)
    }
}

impl From<(u64, u64, u64, u64)> for CountSet {
    fn from((tp, fp, fn_, tn): (u64, u64, u64, u64)) -> Self {
        Self::new(tp, fp, fn_, tn)
    }
}
