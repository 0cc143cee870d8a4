//! Decision-aid presenter: two 10x10 icon arrays side by side.

use std::io;

use dxcalc_core::{DecisionAid, Evaluation, IconArray, IconCondition};
use dxcalc_orchestration::interfaces::ResultPresenter;

use crate::output::DisplayOptions;
use crate::ui::{paint_condition, write_header};

const POSITIVE_ICON: &str = "●";
const NEGATIVE_ICON: &str = "○";

/// Gap between the two grids.
const GRID_GAP: &str = "      ";

/// Render one icon array as text rows, top row first.
#[must_use]
pub fn grid_rows(array: &IconArray) -> Vec<String> {
    array
        .rows_top_down()
        .map(|row| {
            row.iter()
                .map(|icon| {
                    let glyph = match icon.condition {
                        IconCondition::Positive => POSITIVE_ICON,
                        IconCondition::Negative => NEGATIVE_ICON,
                    };
                    paint_condition(glyph, icon.condition)
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Caption under an icon array.
#[must_use]
pub fn caption(array: &IconArray) -> String {
    format!("{} of 100 have the condition", array.positive_count())
}

/// Terminal presenter for the decision aid.
pub struct DecisionAidPresenter {
    opts: DisplayOptions,
}

impl DecisionAidPresenter {
    #[must_use]
    pub fn new(opts: DisplayOptions) -> Self {
        Self { opts }
    }
}

impl ResultPresenter for DecisionAidPresenter {
    fn present(&self, evaluation: &Evaluation, out: &mut dyn io::Write) -> io::Result<()> {
        let aid = DecisionAid::from_counts(&evaluation.counts);

        if self.opts.quiet {
            writeln!(out, "positive_test\t{}", aid.positive_test.positive_count())?;
            return writeln!(out, "negative_test\t{}", aid.negative_test.positive_count());
        }

        write_header(out, "Decision Aid")?;
        // Each grid row is 19 visible columns wide.
        writeln!(
            out,
            "{:<19}{GRID_GAP}{:<19}",
            "100 positive tests", "100 negative tests"
        )?;

        let left = grid_rows(&aid.positive_test);
        let right = grid_rows(&aid.negative_test);
        for (l, r) in left.iter().zip(&right) {
            writeln!(out, "{l}{GRID_GAP}{r}")?;
        }

        writeln!(
            out,
            "{:<19}{GRID_GAP}{}",
            caption(&aid.positive_test),
            caption(&aid.negative_test)
        )?;
        writeln!(
            out,
            "{} {}   {} {}",
            paint_condition(POSITIVE_ICON, IconCondition::Positive),
            IconCondition::Positive.label(),
            paint_condition(NEGATIVE_ICON, IconCondition::Negative),
            IconCondition::Negative.label(),
        )
    }

    fn name(&self) -> &str {
        "aid"
    }
}
