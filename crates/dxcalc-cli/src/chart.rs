//! Stacked text bar chart of the contingency table.
//!
//! One bar per test result, split into the condition (+) and condition (-)
//! cells. Bars share a common scale so their lengths compare directly.

use std::io;

use dxcalc_core::{Evaluation, IconCondition};
use dxcalc_orchestration::interfaces::ResultPresenter;

use crate::output::{format_count, DisplayOptions};
use crate::ui::{paint_condition, write_header};

/// Chart title.
pub const CHART_TITLE: &str = "Contingency Table Analysis of Diagnostic Test Performance";

/// Width of the longest bar, in cells.
pub const BAR_WIDTH: usize = 50;

const POSITIVE_GLYPH: char = '█';
const NEGATIVE_GLYPH: char = '▒';

/// Split a bar of at most `width` cells into its two segments.
///
/// The whole bar is scaled against `max_total`; the condition (+) segment
/// gets its proportional share of that length. A non-empty cell always
/// gets at least one glyph so small counts stay visible.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn bar_segments(
    with_condition: u64,
    without_condition: u64,
    max_total: u64,
    width: usize,
) -> (usize, usize) {
    let total = with_condition.saturating_add(without_condition);
    if total == 0 || max_total == 0 || width == 0 {
        return (0, 0);
    }

    let length = ((total as f64 / max_total as f64) * width as f64).round() as usize;
    let length = length.clamp(1, width);

    let mut positive = ((with_condition as f64 / total as f64) * length as f64).round() as usize;
    if with_condition > 0 && positive == 0 {
        positive = 1;
    }
    if without_condition > 0 && positive == length && length > 1 {
        positive -= 1;
    }
    let positive = positive.min(length);
    (positive, length - positive)
}

/// Terminal presenter drawing one stacked bar per test result.
pub struct BarChartPresenter {
    opts: DisplayOptions,
    width: usize,
}

impl BarChartPresenter {
    #[must_use]
    pub fn new(opts: DisplayOptions) -> Self {
        Self {
            opts,
            width: BAR_WIDTH,
        }
    }

    /// Override the bar width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    fn write_bar(
        &self,
        out: &mut dyn io::Write,
        label: &str,
        with_condition: u64,
        without_condition: u64,
        max_total: u64,
    ) -> io::Result<()> {
        let (pos, neg) = bar_segments(with_condition, without_condition, max_total, self.width);
        let bar = format!(
            "{}{}",
            paint_condition(
                &POSITIVE_GLYPH.to_string().repeat(pos),
                IconCondition::Positive
            ),
            paint_condition(
                &NEGATIVE_GLYPH.to_string().repeat(neg),
                IconCondition::Negative
            ),
        );
        let padding = " ".repeat(self.width.saturating_sub(pos + neg));
        writeln!(
            out,
            "{label:<8} {bar}{padding}  {} / {}",
            format_count(with_condition),
            format_count(without_condition),
        )
    }
}

impl ResultPresenter for BarChartPresenter {
    fn present(&self, evaluation: &Evaluation, out: &mut dyn io::Write) -> io::Result<()> {
        let counts = &evaluation.counts;
        let max_total = counts.test_positive().max(counts.test_negative());

        if !self.opts.quiet {
            write_header(out, CHART_TITLE)?;
        }
        self.write_bar(out, "(+) test", counts.tp, counts.fp, max_total)?;
        self.write_bar(out, "(-) test", counts.fn_, counts.tn, max_total)?;

        if !self.opts.quiet {
            writeln!(
                out,
                "{} {}   {} {}",
                paint_condition(&POSITIVE_GLYPH.to_string(), IconCondition::Positive),
                IconCondition::Positive.label(),
                paint_condition(&NEGATIVE_GLYPH.to_string(), IconCondition::Negative),
                IconCondition::Negative.label(),
            )?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "bars"
    }
}
