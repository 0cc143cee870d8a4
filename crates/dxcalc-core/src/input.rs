//! The two equivalent input representations.

use serde::Serialize;

use crate::counts::CountSet;
use crate::rates::RateSet;

/// Input to a single calculation: either raw counts or population rates,
/// never a mix of both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DiagnosticInput {
    /// Contingency-table cells entered directly.
    Counts(CountSet),
    /// Total patients, prevalence, sensitivity and specificity.
    Rates(RateSet),
}

impl DiagnosticInput {
    /// Short name of the input mode.
    #[must_use]
    pub fn mode_name(&self) -> &'static str {
        match self {
            DiagnosticInput::Counts(_) => "counts",
            DiagnosticInput::Rates(_) => "rates",
        }
    }

    /// Whether the count set has to be derived by rounding.
    #[must_use]
    pub fn is_rate_driven(&self) -> bool {
        matches!(self, DiagnosticInput::Rates(_))
    }
}

impl From<CountSet> for DiagnosticInput {
    fn from(counts: CountSet) -> Self {
        DiagnosticInput::Counts(counts)
    }
}

impl From<RateSet> for DiagnosticInput {
    fn from(rates: RateSet) -> Self {
        DiagnosticInput::Rates(rates)
    }
}
