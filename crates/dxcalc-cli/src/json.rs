//! Machine-readable JSON report.

use std::io;

use serde::Serialize;

use dxcalc_core::{
    CountSet, DecisionAid, DiagnosticInput, Evaluation, Metric, MetricsResult, RoundingMode,
};
use dxcalc_orchestration::interfaces::ResultPresenter;

/// Row and column totals of the contingency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margins {
    pub disease_positive: u64,
    pub disease_negative: u64,
    pub test_positive: u64,
    pub test_negative: u64,
    pub total: u64,
}

impl From<&CountSet> for Margins {
    fn from(counts: &CountSet) -> Self {
        Self {
            disease_positive: counts.disease_positive(),
            disease_negative: counts.disease_negative(),
            test_positive: counts.test_positive(),
            test_negative: counts.test_negative(),
            total: counts.total(),
        }
    }
}

/// Condition-positive icons out of 100 for each test result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecisionAidSummary {
    pub positive_test: usize,
    pub negative_test: usize,
}

/// Everything a consumer needs to reproduce the terminal output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub input: DiagnosticInput,
    pub counts: CountSet,
    pub margins: Margins,
    /// Unrounded values.
    pub metrics: MetricsResult,
    pub undefined: Vec<Metric>,
    pub rounding: RoundingMode,
    pub decision_aid: DecisionAidSummary,
}

impl From<&Evaluation> for JsonReport {
    fn from(evaluation: &Evaluation) -> Self {
        let aid = DecisionAid::from_counts(&evaluation.counts);
        Self {
            input: evaluation.input,
            counts: evaluation.counts,
            margins: Margins::from(&evaluation.counts),
            metrics: evaluation.metrics,
            undefined: evaluation.undefined_metrics(),
            rounding: evaluation.rounding,
            decision_aid: DecisionAidSummary {
                positive_test: aid.positive_test.positive_count(),
                negative_test: aid.negative_test.positive_count(),
            },
        }
    }
}

/// Presenter writing a pretty-printed `JsonReport`.
pub struct JsonPresenter;

impl ResultPresenter for JsonPresenter {
    fn present(&self, evaluation: &Evaluation, out: &mut dyn io::Write) -> io::Result<()> {
        let report = JsonReport::from(evaluation);
        serde_json::to_writer_pretty(&mut *out, &report).map_err(io::Error::from)?;
        writeln!(out)
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dxcalc_core::{MetricsCalculator, RateSet};

    fn render(evaluation: &Evaluation) -> serde_json::Value {
        let mut buf = Vec::new();
        JsonPresenter.present(evaluation, &mut buf).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn counts_report() {
        let eval = MetricsCalculator::default().evaluate_counts(CountSet::new(85, 15, 10, 90));
        let v = render(&eval);
        assert_eq!(v["input"]["mode"], "counts");
        assert_eq!(v["counts"]["fn"], 10);
        assert_eq!(v["margins"]["total"], 200);
        assert_eq!(v["margins"]["test_positive"], 100);
        assert_eq!(v["metrics"]["ppv"], 0.85);
        assert_eq!(v["undefined"].as_array().unwrap().len(), 0);
        assert_eq!(v["rounding"], "half-even");
        assert_eq!(v["decision_aid"]["positive_test"], 85);
    }

    #[test]
    fn rates_report() {
        let rates = RateSet::new(1000, 10.0, 95.0, 100.0).unwrap();
        let eval = MetricsCalculator::default().evaluate_rates(rates);
        let v = render(&eval);
        assert_eq!(v["input"]["mode"], "rates");
        assert_eq!(v["input"]["total_patients"], 1000);
        assert_eq!(v["counts"]["fp"], 0);
        assert_eq!(v["metrics"]["lr_plus"], 0.0);
        assert_eq!(v["undefined"][0], "lr_plus");
        assert_eq!(v["decision_aid"]["positive_test"], 100);
    }

    #[test]
    fn output_ends_with_newline() {
        let eval = MetricsCalculator::default().evaluate_counts(CountSet::default());
        let mut buf = Vec::new();
        JsonPresenter.present(&eval, &mut buf).unwrap();
        assert_eq!(buf.last(), Some(&b'\n'));
    }

    #[test]
    fn presenter_name() {
        assert_eq!(JsonPresenter.name(), "json");
    }
}
