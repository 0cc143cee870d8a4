//! Input form: the editable fields for either entry mode.
//!
//! The form owns plain text for every field. A `DiagnosticInput` is built
//! from that text on demand, so the form never holds a half-valid value.

use dxcalc_core::constants::{
    DEFAULT_COUNTS, DEFAULT_PREVALENCE, DEFAULT_SENSITIVITY, DEFAULT_SPECIFICITY,
    DEFAULT_TOTAL_PATIENTS,
};
use dxcalc_core::{CountSet, DiagnosticInput, DxError, RateSet};

/// Which representation the form edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Four raw cells.
    Counts,
    /// Total patients plus three percentages.
    #[default]
    Rates,
}

impl InputMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Counts => InputMode::Rates,
            InputMode::Rates => InputMode::Counts,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            InputMode::Counts => "Counts",
            InputMode::Rates => "Rates",
        }
    }
}

/// Value domain of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-negative integer.
    Count,
    /// Integer `>= 1`.
    Population,
    /// Decimal in `[0, 100]`.
    Percent,
}

impl FieldKind {
    fn accepts(self, c: char) -> bool {
        match self {
            FieldKind::Count | FieldKind::Population => c.is_ascii_digit(),
            FieldKind::Percent => c.is_ascii_digit() || c == '.',
        }
    }
}

/// One labelled text field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    fn new(label: &'static str, kind: FieldKind, value: String) -> Self {
        Self { label, kind, value }
    }
}

/// Form state: mode, fields and focus.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    mode: InputMode,
    fields: Vec<FormField>,
    focus: usize,
}

impl FormState {
    /// A form pre-filled with the defaults for `mode`.
    #[must_use]
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            fields: default_fields(mode),
            focus: 0,
        }
    }

    /// A count-mode form pre-filled with `counts`.
    #[must_use]
    pub fn from_counts(counts: CountSet) -> Self {
        let mut form = Self::new(InputMode::Counts);
        for (field, value) in form
            .fields
            .iter_mut()
            .zip([counts.tp, counts.fp, counts.fn_, counts.tn])
        {
            field.value = value.to_string();
        }
        form
    }

    /// A rate-mode form pre-filled with `rates`.
    #[must_use]
    pub fn from_rates(rates: &RateSet) -> Self {
        let mut form = Self::new(InputMode::Rates);
        form.fields[0].value = rates.total_patients().to_string();
        form.fields[1].value = format_percent_field(rates.prevalence());
        form.fields[2].value = format_percent_field(rates.sensitivity());
        form.fields[3].value = format_percent_field(rates.specificity());
        form
    }

    /// A form matching an existing input.
    #[must_use]
    pub fn from_input(input: &DiagnosticInput) -> Self {
        match input {
            DiagnosticInput::Counts(counts) => Self::from_counts(*counts),
            DiagnosticInput::Rates(rates) => Self::from_rates(rates),
        }
    }

    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Switch mode, loading that mode's defaults.
    pub fn set_mode(&mut self, mode: InputMode) {
        if mode != self.mode {
            *self = Self::new(mode);
        }
    }

    /// Restore the defaults for the current mode.
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Replace a field's text. Returns `false` if `index` is out of range.
    pub fn set_field(&mut self, index: usize, value: &str) -> bool {
        match self.fields.get_mut(index) {
            Some(field) => {
                field.value = value.trim().to_string();
                true
            }
            None => false,
        }
    }

    /// Append a character to the focused field. Returns `false` if the
    /// character is not valid for the field.
    pub fn push_char(&mut self, c: char) -> bool {
        let field = &mut self.fields[self.focus];
        if !field.kind.accepts(c) || (c == '.' && field.value.contains('.')) {
            return false;
        }
        if field.value == "0" && c != '.' {
            field.value.clear();
        }
        field.value.push(c);
        true
    }

    /// Remove the last character of the focused field.
    pub fn backspace(&mut self) {
        self.fields[self.focus].value.pop();
    }

    /// Step the focused field up or down by one unit, clamped to its domain.
    ///
    /// A field whose text does not parse is left untouched.
    pub fn step(&mut self, up: bool) {
        let field = &mut self.fields[self.focus];
        match field.kind {
            FieldKind::Count | FieldKind::Population => {
                let Ok(current) = field.value.parse::<u64>() else {
                    return;
                };
                let min = u64::from(field.kind == FieldKind::Population);
                let next = if up {
                    current.saturating_add(1)
                } else {
                    current.saturating_sub(1).max(min)
                };
                field.value = next.to_string();
            }
            FieldKind::Percent => {
                let Ok(current) = field.value.parse::<f64>() else {
                    return;
                };
                let delta = if up { 1.0 } else { -1.0 };
                field.value = format_percent_field((current + delta).clamp(0.0, 100.0));
            }
        }
    }

    /// Build the input described by the current field text.
    pub fn to_input(&self) -> Result<DiagnosticInput, DxError> {
        match self.mode {
            InputMode::Counts => {
                let tp = parse_count(&self.fields[0])?;
                let fp = parse_count(&self.fields[1])?;
                let fn_ = parse_count(&self.fields[2])?;
                let tn = parse_count(&self.fields[3])?;
                Ok(DiagnosticInput::Counts(CountSet::new(tp, fp, fn_, tn)))
            }
            InputMode::Rates => {
                let total = parse_count(&self.fields[0])?;
                let prevalence = parse_percent(&self.fields[1])?;
                let sensitivity = parse_percent(&self.fields[2])?;
                let specificity = parse_percent(&self.fields[3])?;
                let rates = RateSet::new(total, prevalence, sensitivity, specificity)?;
                Ok(DiagnosticInput::Rates(rates))
            }
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(InputMode::default())
    }
}

fn default_fields(mode: InputMode) -> Vec<FormField> {
    match mode {
        InputMode::Counts => {
            let (tp, fp, fn_, tn) = DEFAULT_COUNTS;
            vec![
                FormField::new("True Positive (TP)", FieldKind::Count, tp.to_string()),
                FormField::new("False Positive (FP)", FieldKind::Count, fp.to_string()),
                FormField::new("False Negative (FN)", FieldKind::Count, fn_.to_string()),
                FormField::new("True Negative (TN)", FieldKind::Count, tn.to_string()),
            ]
        }
        InputMode::Rates => vec![
            FormField::new(
                "Total Patients",
                FieldKind::Population,
                DEFAULT_TOTAL_PATIENTS.to_string(),
            ),
            FormField::new(
                "Prevalence (%)",
                FieldKind::Percent,
                format_percent_field(DEFAULT_PREVALENCE),
            ),
            FormField::new(
                "Sensitivity (%)",
                FieldKind::Percent,
                format_percent_field(DEFAULT_SENSITIVITY),
            ),
            FormField::new(
                "Specificity (%)",
                FieldKind::Percent,
                format_percent_field(DEFAULT_SPECIFICITY),
            ),
        ],
    }
}

fn format_percent_field(value: f64) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn parse_count(field: &FormField) -> Result<u64, DxError> {
    field
        .value
        .parse::<u64>()
        .map_err(|_| DxError::InvalidInput(format!("{}: not a whole number", field.label)))
}

fn parse_percent(field: &FormField) -> Result<f64, DxError> {
    field
        .value
        .parse::<f64>()
        .map_err(|_| DxError::InvalidInput(format!("{}: not a number", field.label)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rate_form() {
        let form = FormState::default();
        assert_eq!(form.mode(), InputMode::Rates);
        let values: Vec<&str> = form.fields().iter().map(|f| f.value.as_str()).collect();
        assert_eq!(values, ["1000", "10", "95", "60"]);

        let input = form.to_input().unwrap();
        assert!(input.is_rate_driven());
    }

    #[test]
    fn default_count_form() {
        let form = FormState::new(InputMode::Counts);
        assert_eq!(
            form.to_input().unwrap(),
            DiagnosticInput::Counts(CountSet::new(85, 15, 10, 90))
        );
    }

    #[test]
    fn focus_wraps() {
        let mut form = FormState::default();
        form.focus_prev();
        assert_eq!(form.focus(), 3);
        form.focus_next();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn typing_replaces_leading_zero() {
        let mut form = FormState::new(InputMode::Counts);
        form.set_field(0, "0");
        assert!(form.push_char('7'));
        assert_eq!(form.fields()[0].value, "7");
        assert!(!form.push_char('.'));
    }

    #[test]
    fn percent_accepts_single_decimal_point() {
        let mut form = FormState::default();
        form.focus_next();
        form.set_field(1, "12");
        assert!(form.push_char('.'));
        assert!(form.push_char('5'));
        assert!(!form.push_char('.'));
        assert_eq!(form.fields()[1].value, "12.5");
    }

    #[test]
    fn backspace_to_empty_is_invalid() {
        let mut form = FormState::new(InputMode::Counts);
        form.backspace();
        form.backspace();
        assert_eq!(form.fields()[0].value, "");
        assert!(matches!(form.to_input(), Err(DxError::InvalidInput(_))));
    }

    #[test]
    fn step_clamps_to_domain() {
        let mut form = FormState::default();
        form.set_field(0, "1");
        form.step(false);
        assert_eq!(form.fields()[0].value, "1");

        form.focus_next();
        form.set_field(1, "99.5");
        form.step(true);
        assert_eq!(form.fields()[1].value, "100");
        form.set_field(1, "0.5");
        form.step(false);
        assert_eq!(form.fields()[1].value, "0");
    }

    #[test]
    fn count_step_stops_at_zero() {
        let mut form = FormState::new(InputMode::Counts);
        form.set_field(0, "0");
        form.step(false);
        assert_eq!(form.fields()[0].value, "0");
        form.step(true);
        assert_eq!(form.fields()[0].value, "1");
    }

    #[test]
    fn out_of_range_percent_is_rejected() {
        let mut form = FormState::default();
        form.set_field(3, "120");
        assert!(matches!(form.to_input(), Err(DxError::InvalidInput(_))));
    }

    #[test]
    fn zero_population_is_rejected() {
        let mut form = FormState::default();
        form.set_field(0, "0");
        assert!(form.to_input().is_err());
    }

    #[test]
    fn set_field_out_of_range() {
        let mut form = FormState::default();
        assert!(!form.set_field(9, "1"));
    }

    #[test]
    fn mode_switch_loads_defaults() {
        let mut form = FormState::default();
        form.set_field(0, "5");
        form.set_mode(InputMode::Counts);
        assert_eq!(form.fields()[0].value, "85");
        form.set_mode(InputMode::Counts);
        assert_eq!(form.fields()[0].value, "85");
        assert_eq!(form.mode().toggled(), InputMode::Rates);
    }

    #[test]
    fn form_from_input_round_trips() {
        let rates = RateSet::new(250, 12.5, 80.0, 70.0).unwrap();
        let input = DiagnosticInput::Rates(rates);
        let form = FormState::from_input(&input);
        assert_eq!(form.fields()[1].value, "12.5");
        assert_eq!(form.to_input().unwrap(), input);

        let counts = DiagnosticInput::Counts(CountSet::new(1, 2, 3, 4));
        assert_eq!(FormState::from_input(&counts).to_input().unwrap(), counts);
    }
}
