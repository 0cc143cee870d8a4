//! # dxcalc-core
//!
//! Core library for the DxCalc diagnostic-test calculator.
//! Turns a 2x2 contingency table, entered directly or derived from
//! prevalence, sensitivity and specificity, into sensitivity,
//! specificity, predictive values, likelihood ratios, accuracy and
//! prevalence.

pub mod calculator;
pub mod constants;
pub mod counts;
pub mod decision_aid;
pub mod error;
pub mod input;
pub mod metrics;
pub mod options;
pub mod rates;
pub mod rounding;

// Re-exports
pub use calculator::{Evaluation, MetricsCalculator};
pub use constants::{exit_codes, DEFAULT_DECIMALS, ICON_ARRAY_SIZE, ICON_GRID_WIDTH, MAX_DECIMALS};
pub use counts::CountSet;
pub use decision_aid::{DecisionAid, IconArray, IconCondition};
pub use error::DxError;
pub use input::DiagnosticInput;
pub use metrics::{Metric, MetricsResult};
pub use options::Options;
pub use rates::RateSet;
pub use rounding::RoundingMode;

/// Derive the diagnostic metrics for a contingency table.
///
/// This is a convenience function for simple use cases. For rate-driven
/// input or a non-default rounding mode, use `MetricsCalculator`.
///
/// # Example
/// ```
/// let m = dxcalc_core::diagnostic_metrics(85, 15, 10, 90);
/// assert_eq!(m.ppv, 0.85);
/// assert_eq!(m.prevalence, 0.475);
/// ```
#[must_use]
pub fn diagnostic_metrics(tp: u64, fp: u64, fn_: u64, tn: u64) -> MetricsResult {
    CountSet::new(tp, fp, fn_, tn).metrics()
}
