//! Rate-driven input: population size plus prevalence, sensitivity and
//! specificity percentages, and their conversion to a `CountSet`.

use serde::Serialize;

use crate::counts::CountSet;
use crate::error::DxError;
use crate::rounding::RoundingMode;

/// Population-level description of a diagnostic test.
///
/// Fields are private so that every `RateSet` in existence satisfies
/// `total_patients >= 1` and `0 <= pct <= 100` for all three percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateSet {
    total_patients: u64,
    prevalence: f64,
    sensitivity: f64,
    specificity: f64,
}

impl RateSet {
    /// Build a rate set, rejecting values outside their domain.
    pub fn new(
        total_patients: u64,
        prevalence: f64,
        sensitivity: f64,
        specificity: f64,
    ) -> Result<Self, DxError> {
        if total_patients == 0 {
            return Err(DxError::InvalidInput(
                "total patients must be at least 1".into(),
            ));
        }
        check_percentage("prevalence", prevalence)?;
        check_percentage("sensitivity", sensitivity)?;
        check_percentage("specificity", specificity)?;
        Ok(Self {
            total_patients,
            prevalence,
            sensitivity,
            specificity,
        })
    }

    /// Number of patients in the population.
    #[must_use]
    pub fn total_patients(&self) -> u64 {
        self.total_patients
    }

    /// Disease prevalence in percent.
    #[must_use]
    pub fn prevalence(&self) -> f64 {
        self.prevalence
    }

    /// Test sensitivity in percent.
    #[must_use]
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Test specificity in percent.
    #[must_use]
    pub fn specificity(&self) -> f64 {
        self.specificity
    }

    /// Whether LR+ has a zero denominator (specificity of 100%).
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn lr_plus_undefined(&self) -> bool {
        100.0 - self.specificity == 0.0
    }

    /// Whether LR- has a zero denominator (specificity of 0%).
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn lr_minus_undefined(&self) -> bool {
        self.specificity == 0.0
    }

    /// LR+ and LR- from the entered percentages rather than from rounded
    /// counts. Each falls back to `0.0` on a zero denominator.
    #[must_use]
    pub fn likelihood_ratios(&self) -> (f64, f64) {
        let lr_plus = if self.lr_plus_undefined() {
            0.0
        } else {
            self.sensitivity / (100.0 - self.specificity)
        };
        let lr_minus = if self.lr_minus_undefined() {
            0.0
        } else {
            (100.0 - self.sensitivity) / self.specificity
        };
        (lr_plus, lr_minus)
    }

    /// Convert to whole-patient counts.
    ///
    /// Only `disease_positive`, `true_positive` and `true_negative` are
    /// rounded; their complements are obtained by subtraction, so the
    /// resulting table always sums to `total_patients`. Each percentage is
    /// scaled to a fraction before multiplying; the other order can land on
    /// the opposite side of a `.5` tie.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_counts(&self, rounding: RoundingMode) -> CountSet {
        let total = self.total_patients;

        let disease_positive = rounding
            .round_count(total as f64 * (self.prevalence / 100.0))
            .min(total);
        let disease_negative = total - disease_positive;

        let tp = rounding
            .round_count(disease_positive as f64 * (self.sensitivity / 100.0))
            .min(disease_positive);
        let fn_ = disease_positive - tp;

        let tn = rounding
            .round_count(disease_negative as f64 * (self.specificity / 100.0))
            .min(disease_negative);
        let fp = disease_negative - tn;

        tracing::trace!(
            total,
            disease_positive,
            disease_negative,
            tp,
            fp,
            fn_,
            tn,
            %rounding,
            "converted rates to counts"
        );

        CountSet::new(tp, fp, fn_, tn)
    }
}

fn check_percentage(name: &str, value: f64) -> Result<(), DxError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(DxError::InvalidInput(format!(
            "{name} must be between 0 and 100 (got {value})"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_conversion() {
        let rates = RateSet::new(1000, 10.0, 95.0, 60.0).unwrap();
        let counts = rates.to_counts(RoundingMode::HalfEven);
        assert_eq!(counts.disease_positive(), 100);
        assert_eq!(counts.disease_negative(), 900);
        assert_eq!(counts, CountSet::new(95, 360, 5, 540));
    }

    #[test]
    fn rejects_zero_total() {
        let err = RateSet::new(0, 10.0, 95.0, 60.0).unwrap_err();
        assert!(matches!(err, DxError::InvalidInput(_)));
    }

    #[test]
    fn rejects_out_of_range_percentages() {
        assert!(RateSet::new(10, -0.1, 50.0, 50.0).is_err());
        assert!(RateSet::new(10, 50.0, 100.1, 50.0).is_err());
        assert!(RateSet::new(10, 50.0, 50.0, f64::NAN).is_err());
        assert!(RateSet::new(10, f64::INFINITY, 50.0, 50.0).is_err());
    }

    #[test]
    fn accepts_boundaries() {
        assert!(RateSet::new(1, 0.0, 0.0, 0.0).is_ok());
        assert!(RateSet::new(1, 100.0, 100.0, 100.0).is_ok());
    }

    #[test]
    fn error_names_the_field() {
        let err = RateSet::new(10, 50.0, 50.0, 150.0).unwrap_err();
        assert!(err.to_string().contains("specificity"));
    }

    #[test]
    fn cells_sum_to_total() {
        let rates = RateSet::new(997, 13.3, 87.1, 71.9).unwrap();
        for mode in RoundingMode::ALL {
            let counts = rates.to_counts(mode);
            assert_eq!(counts.total(), 997);
        }
    }

    #[test]
    fn rounding_mode_matters_on_ties() {
        // 5 * 50% = 2.5 diseased patients.
        let rates = RateSet::new(5, 50.0, 100.0, 100.0).unwrap();
        let even = rates.to_counts(RoundingMode::HalfEven);
        let up = rates.to_counts(RoundingMode::HalfUp);
        assert_eq!(even.disease_positive(), 2);
        assert_eq!(up.disease_positive(), 3);
        assert_eq!(even.total(), 5);
        assert_eq!(up.total(), 5);
    }

    #[test]
    fn full_prevalence_leaves_no_healthy_patients() {
        let rates = RateSet::new(200, 100.0, 80.0, 90.0).unwrap();
        let counts = rates.to_counts(RoundingMode::HalfEven);
        assert_eq!(counts.disease_negative(), 0);
        assert_eq!(counts.tp, 160);
        assert_eq!(counts.fn_, 40);
    }

    #[test]
    fn percentages_scale_before_multiplying() {
        // 75 * 14 / 100 is exactly 10.5; 75 * 0.14 is just above it.
        let rates = RateSet::new(75, 14.0, 100.0, 100.0).unwrap();
        assert_eq!(rates.to_counts(RoundingMode::HalfEven).disease_positive(), 11);

        // 45 * 70 / 100 is exactly 31.5; 45 * 0.7 is just below it.
        let rates = RateSet::new(45, 70.0, 100.0, 100.0).unwrap();
        assert_eq!(rates.to_counts(RoundingMode::HalfUp).disease_positive(), 31);
    }

    #[test]
    fn likelihood_ratios_use_entered_percentages() {
        let (lr_plus, lr_minus) = RateSet::new(1000, 10.0, 95.0, 60.0)
            .unwrap()
            .likelihood_ratios();
        assert!((lr_plus - 2.375).abs() < 1e-12);
        assert!((lr_minus - 5.0 / 60.0).abs() < 1e-12);

        let (lr_plus, _) = RateSet::new(7, 50.0, 33.0, 99.0)
            .unwrap()
            .likelihood_ratios();
        assert!((lr_plus - 33.0).abs() < 1e-9);
    }

    #[test]
    fn likelihood_ratio_fallbacks() {
        let perfect = RateSet::new(200, 100.0, 80.0, 100.0).unwrap();
        assert!(perfect.lr_plus_undefined());
        assert!(!perfect.lr_minus_undefined());
        let (lr_plus, lr_minus) = perfect.likelihood_ratios();
        assert_eq!(lr_plus, 0.0);
        assert!((lr_minus - 0.2).abs() < 1e-12);

        let useless = RateSet::new(200, 10.0, 80.0, 0.0).unwrap();
        assert!(useless.lr_minus_undefined());
        assert_eq!(useless.likelihood_ratios().1, 0.0);
    }

    #[test]
    fn perfect_specificity_has_no_false_positives() {
        let rates = RateSet::new(1000, 10.0, 95.0, 100.0).unwrap();
        let counts = rates.to_counts(RoundingMode::HalfEven);
        assert_eq!(counts.fp, 0);
        assert_eq!(counts.tn, 900);
    }
}
