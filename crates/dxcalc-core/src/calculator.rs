//! `MetricsCalculator`: the single entry point from input to metrics.
//!
//! The calculator is stateless apart from its options; each call builds a
//! fresh `Evaluation` that the caller reads and drops.
//!
//! In rate mode the table-based metrics come from the derived counts, while
//! LR+ and LR- come from the entered sensitivity and specificity.

use serde::Serialize;

use crate::counts::CountSet;
use crate::input::DiagnosticInput;
use crate::metrics::{Metric, MetricsResult};
use crate::options::Options;
use crate::rates::RateSet;
use crate::rounding::RoundingMode;

/// Result of evaluating one `DiagnosticInput`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    /// The input as given.
    pub input: DiagnosticInput,
    /// Counts the metrics were derived from (entered or rate-derived).
    pub counts: CountSet,
    /// Unrounded metrics.
    pub metrics: MetricsResult,
    /// Rounding mode used for rate-to-count conversion.
    pub rounding: RoundingMode,
}

impl Evaluation {
    /// Whether `counts` were derived from rates.
    #[must_use]
    pub fn is_derived(&self) -> bool {
        self.input.is_rate_driven()
    }

    /// Metrics that took the zero-denominator fallback.
    #[must_use]
    pub fn undefined_metrics(&self) -> Vec<Metric> {
        let from_counts = self.metrics.undefined_metrics(&self.counts);
        let DiagnosticInput::Rates(rates) = &self.input else {
            return from_counts;
        };
        Metric::ALL
            .into_iter()
            .filter(|metric| match metric {
                Metric::LrPlus => rates.lr_plus_undefined(),
                Metric::LrMinus => rates.lr_minus_undefined(),
                other => from_counts.contains(other),
            })
            .collect()
    }
}

/// Maps counts or rates to diagnostic metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsCalculator {
    opts: Options,
}

impl MetricsCalculator {
    /// Create a calculator with the given options.
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self {
            opts: opts.normalize(),
        }
    }

    /// The (normalized) options in use.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Evaluate either input representation.
    #[must_use]
    pub fn evaluate(&self, input: &DiagnosticInput) -> Evaluation {
        let (counts, metrics) = match input {
            DiagnosticInput::Counts(counts) => (*counts, counts.metrics()),
            DiagnosticInput::Rates(rates) => {
                let counts = rates.to_counts(self.opts.rounding);
                let mut metrics = counts.metrics();
                (metrics.lr_plus, metrics.lr_minus) = rates.likelihood_ratios();
                (counts, metrics)
            }
        };

        tracing::debug!(
            mode = input.mode_name(),
            tp = counts.tp,
            fp = counts.fp,
            fn_ = counts.fn_,
            tn = counts.tn,
            "evaluated diagnostic input"
        );

        Evaluation {
            input: *input,
            counts,
            metrics,
            rounding: self.opts.rounding,
        }
    }

    /// Evaluate raw counts.
    #[must_use]
    pub fn evaluate_counts(&self, counts: CountSet) -> Evaluation {
        self.evaluate(&DiagnosticInput::Counts(counts))
    }

    /// Evaluate population rates.
    #[must_use]
    pub fn evaluate_rates(&self, rates: RateSet) -> Evaluation {
        self.evaluate(&DiagnosticInput::Rates(rates))
    }
}
