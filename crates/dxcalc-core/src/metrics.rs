//! Metric derivation from a contingency table.
//!
//! Every ratio whose denominator is zero falls back to `0.0`. The fallback
//! is indistinguishable from a measured zero in the returned numbers, so
//! [`MetricsResult::undefined_metrics`] exists for callers that need to
//! tell the two apart.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::counts::CountSet;
use crate::rounding::round_to;

/// Derived diagnostic-test metrics. All values are ratios in `[0, 1]`
/// except the likelihood ratios, which are unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsResult {
    /// `tp / (tp + fn)`
    pub sensitivity: f64,
    /// `tn / (tn + fp)`
    pub specificity: f64,
    /// `tp / (tp + fp)`
    pub ppv: f64,
    /// `tn / (tn + fn)`
    pub npv: f64,
    /// `sensitivity / (1 - specificity)`
    pub lr_plus: f64,
    /// `(1 - sensitivity) / specificity`
    pub lr_minus: f64,
    /// `(tp + tn) / total`
    pub accuracy: f64,
    /// `(tp + fn) / total`
    pub prevalence: f64,
}

impl MetricsResult {
    /// Derive all eight metrics from a count set.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_counts(counts: &CountSet) -> Self {
        let sensitivity = ratio(counts.tp, counts.disease_positive());
        let specificity = ratio(counts.tn, counts.disease_negative());
        let ppv = ratio(counts.tp, counts.test_positive());
        let npv = ratio(counts.tn, counts.test_negative());

        let lr_plus = if 1.0 - specificity == 0.0 {
            0.0
        } else {
            sensitivity / (1.0 - specificity)
        };
        let lr_minus = if specificity == 0.0 {
            0.0
        } else {
            (1.0 - sensitivity) / specificity
        };

        let total = counts.total();
        let accuracy = ratio(counts.tp.saturating_add(counts.tn), total);
        let prevalence = ratio(counts.disease_positive(), total);

        Self {
            sensitivity,
            specificity,
            ppv,
            npv,
            lr_plus,
            lr_minus,
            accuracy,
            prevalence,
        }
    }

    /// A copy with every metric rounded to `decimals` places.
    #[must_use]
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            sensitivity: round_to(self.sensitivity, decimals),
            specificity: round_to(self.specificity, decimals),
            ppv: round_to(self.ppv, decimals),
            npv: round_to(self.npv, decimals),
            lr_plus: round_to(self.lr_plus, decimals),
            lr_minus: round_to(self.lr_minus, decimals),
            accuracy: round_to(self.accuracy, decimals),
            prevalence: round_to(self.prevalence, decimals),
        }
    }

    /// Read one metric by name.
    #[must_use]
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Sensitivity => self.sensitivity,
            Metric::Specificity => self.specificity,
            Metric::Ppv => self.ppv,
            Metric::Npv => self.npv,
            Metric::LrPlus => self.lr_plus,
            Metric::LrMinus => self.lr_minus,
            Metric::Accuracy => self.accuracy,
            Metric::Prevalence => self.prevalence,
        }
    }

    /// Metrics of this result that took the zero-denominator fallback.
    ///
    /// `counts` must be the table this result was derived from.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn undefined_metrics(&self, counts: &CountSet) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|metric| match metric {
                Metric::Sensitivity => counts.disease_positive() == 0,
                Metric::Specificity => counts.disease_negative() == 0,
                Metric::Ppv => counts.test_positive() == 0,
                Metric::Npv => counts.test_negative() == 0,
                Metric::LrPlus => 1.0 - self.specificity == 0.0,
                Metric::LrMinus => self.specificity == 0.0,
                Metric::Accuracy | Metric::Prevalence => counts.total() == 0,
            })
            .collect()
    }
}

/// Identifier for one of the eight derived metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Sensitivity,
    Specificity,
    Ppv,
    Npv,
    LrPlus,
    LrMinus,
    Accuracy,
    Prevalence,
}

impl Metric {
    /// All metrics in display order.
    pub const ALL: [Metric; 8] = [
        Metric::Sensitivity,
        Metric::Specificity,
        Metric::Ppv,
        Metric::Npv,
        Metric::LrPlus,
        Metric::LrMinus,
        Metric::Accuracy,
        Metric::Prevalence,
    ];

    /// Field name, as used in JSON output.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Metric::Sensitivity => "sensitivity",
            Metric::Specificity => "specificity",
            Metric::Ppv => "ppv",
            Metric::Npv => "npv",
            Metric::LrPlus => "lr_plus",
            Metric::LrMinus => "lr_minus",
            Metric::Accuracy => "accuracy",
            Metric::Prevalence => "prevalence",
        }
    }

    /// Short label used in tables.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Metric::Sensitivity => "Sen",
            Metric::Specificity => "Spec",
            Metric::Ppv => "PPV",
            Metric::Npv => "NPV",
            Metric::LrPlus => "+LR",
            Metric::LrMinus => "-LR",
            Metric::Accuracy => "Accuracy",
            Metric::Prevalence => "Prevalence",
        }
    }

    /// Likelihood ratios are not proportions and are never shown as percentages.
    #[must_use]
    pub fn is_likelihood_ratio(self) -> bool {
        matches!(self, Metric::LrPlus | Metric::LrMinus)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `numerator / denominator`, or `0.0` when the denominator is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
