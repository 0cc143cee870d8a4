//! Results-table presenter: the 2x2 contingency table with metric margins.

use std::io;

use dxcalc_core::{DiagnosticInput, Evaluation, Metric};
use dxcalc_orchestration::interfaces::ResultPresenter;

use crate::output::{format_count, format_input_percent, format_metric, DisplayOptions};
use crate::ui::{muted, write_header};

/// Marker appended to metrics that took the zero-denominator fallback.
pub const UNDEFINED_MARKER: char = '*';

/// Build the cells of the results table.
///
/// ```text
///            (+) condition   (-) condition
/// (+) test   tp              fp              PPV
/// (-) test   fn              tn              NPV
///            Sen             Spec            Total
///            +LR             -LR             Accuracy
/// ```
#[must_use]
pub fn results_table(evaluation: &Evaluation, opts: &DisplayOptions) -> Vec<[String; 4]> {
    let counts = &evaluation.counts;
    let undefined = evaluation.undefined_metrics();
    let cell = |metric: Metric| {
        let mut text = format!(
            "{}: {}",
            metric.label(),
            format_metric(metric, evaluation.metrics.get(metric), opts)
        );
        if undefined.contains(&metric) {
            text.push(UNDEFINED_MARKER);
        }
        text
    };

    vec![
        [
            String::new(),
            "(+) condition".to_string(),
            "(-) condition".to_string(),
            String::new(),
        ],
        [
            "(+) test".to_string(),
            format_count(counts.tp),
            format_count(counts.fp),
            cell(Metric::Ppv),
        ],
        [
            "(-) test".to_string(),
            format_count(counts.fn_),
            format_count(counts.tn),
            cell(Metric::Npv),
        ],
        [
            String::new(),
            cell(Metric::Sensitivity),
            cell(Metric::Specificity),
            format!("Total: {}", format_count(counts.total())),
        ],
        [
            String::new(),
            cell(Metric::LrPlus),
            cell(Metric::LrMinus),
            cell(Metric::Accuracy),
        ],
    ]
}

/// Render table rows with aligned columns. Count columns are right-aligned.
#[must_use]
pub fn render_table(rows: &[[String; 4]]) -> Vec<String> {
    let mut widths = [0usize; 4];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            let line = format!(
                "{:<w0$}  {:>w1$}  {:>w2$}  {}",
                row[0],
                row[1],
                row[2],
                row[3],
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
            );
            line.trim_end().to_string()
        })
        .collect()
}

/// Terminal presenter for the results table.
pub struct TablePresenter {
    opts: DisplayOptions,
}

impl TablePresenter {
    #[must_use]
    pub fn new(opts: DisplayOptions) -> Self {
        Self { opts }
    }

    fn present_quiet(&self, evaluation: &Evaluation, out: &mut dyn io::Write) -> io::Result<()> {
        for metric in Metric::ALL {
            writeln!(
                out,
                "{}\t{}",
                metric.key(),
                format_metric(metric, evaluation.metrics.get(metric), &self.opts)
            )?;
        }
        Ok(())
    }

    fn present_details(&self, evaluation: &Evaluation, out: &mut dyn io::Write) -> io::Result<()> {
        let counts = &evaluation.counts;
        match &evaluation.input {
            DiagnosticInput::Counts(_) => writeln!(out, "Input: counts")?,
            DiagnosticInput::Rates(rates) => {
                writeln!(
                    out,
                    "Input: rates (total {}, prevalence {}, sensitivity {}, specificity {})",
                    format_count(rates.total_patients()),
                    format_input_percent(rates.prevalence()),
                    format_input_percent(rates.sensitivity()),
                    format_input_percent(rates.specificity()),
                )?;
                writeln!(out, "Rounding: {}", evaluation.rounding)?;
            }
        }
        writeln!(
            out,
            "Disease positive: {}  Disease negative: {}",
            format_count(counts.disease_positive()),
            format_count(counts.disease_negative()),
        )?;
        writeln!(
            out,
            "Test positive: {}  Test negative: {}",
            format_count(counts.test_positive()),
            format_count(counts.test_negative()),
        )
    }
}

impl ResultPresenter for TablePresenter {
    fn present(&self, evaluation: &Evaluation, out: &mut dyn io::Write) -> io::Result<()> {
        if self.opts.quiet {
            return self.present_quiet(evaluation, out);
        }

        write_header(out, "Results Table")?;
        for line in render_table(&results_table(evaluation, &self.opts)) {
            writeln!(out, "{line}")?;
        }
        writeln!(
            out,
            "Prevalence: {}",
            format_metric(
                Metric::Prevalence,
                evaluation.metrics.prevalence,
                &self.opts
            )
        )?;

        if self.opts.verbose {
            writeln!(out)?;
            self.present_details(evaluation, out)?;
        }

        let undefined = evaluation.undefined_metrics();
        if !undefined.is_empty() {
            let names: Vec<&str> = undefined.iter().map(|m| m.label()).collect();
            let note = format!(
                "{UNDEFINED_MARKER} undefined (zero denominator), shown as 0: {}",
                names.join(", ")
            );
            writeln!(out, "{}", muted(&note))?;
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "table"
    }
}
