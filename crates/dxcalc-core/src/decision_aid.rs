//! Decision-aid icon arrays.
//!
//! A decision aid shows 100 people who received the same test result, of
//! whom a share actually has the condition. Icons are laid out on a 10x10
//! grid; icon `i` sits at `(i % 10, i / 10)` and condition-positive icons
//! take the lowest indices, so they fill the grid from the bottom row up
//! when rows are drawn top-down.

use serde::Serialize;

use crate::constants::{ICON_ARRAY_SIZE, ICON_GRID_WIDTH};
use crate::counts::CountSet;
use crate::metrics::ratio;

/// Condition status of a single icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconCondition {
    /// Has the condition.
    Positive,
    /// Does not have the condition.
    Negative,
}

impl IconCondition {
    /// Legend label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            IconCondition::Positive => "Condition (+)",
            IconCondition::Negative => "Condition (-)",
        }
    }
}

/// One icon in an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub index: usize,
    pub condition: IconCondition,
    pub x: usize,
    pub y: usize,
}

/// A 10x10 icon array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconArray {
    /// Fraction of icons with the condition, in `[0, 1]`.
    pub share: f64,
    pub icons: Vec<Icon>,
}

impl IconArray {
    /// Build an array from the two cells of one test-result row.
    ///
    /// An empty row (both counts zero) yields a share of 0.
    #[must_use]
    pub fn from_split(with_condition: u64, without_condition: u64) -> Self {
        let share = ratio(
            with_condition,
            with_condition.saturating_add(without_condition),
        );
        Self::from_share(share)
    }

    /// Build an array for a given share.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_share(share: f64) -> Self {
        let share = if share.is_nan() {
            0.0
        } else {
            share.clamp(0.0, 1.0)
        };
        let threshold = share * ICON_ARRAY_SIZE as f64;
        let icons = (0..ICON_ARRAY_SIZE)
            .map(|index| Icon {
                index,
                condition: if (index as f64) < threshold {
                    IconCondition::Positive
                } else {
                    IconCondition::Negative
                },
                x: index % ICON_GRID_WIDTH,
                y: index / ICON_GRID_WIDTH,
            })
            .collect();
        Self { share, icons }
    }

    /// Number of condition-positive icons.
    #[must_use]
    pub fn positive_count(&self) -> usize {
        self.icons
            .iter()
            .filter(|icon| icon.condition == IconCondition::Positive)
            .count()
    }

    /// Number of condition-negative icons.
    #[must_use]
    pub fn negative_count(&self) -> usize {
        self.icons.len() - self.positive_count()
    }

    /// Rows in drawing order: highest `y` first.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Icon]> {
        self.icons.chunks(ICON_GRID_WIDTH).rev()
    }
}

/// Icon arrays for both test outcomes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionAid {
    /// Among 100 positive tests: share with the condition is `tp / (tp + fp)`.
    pub positive_test: IconArray,
    /// Among 100 negative tests: share with the condition is `fn / (fn + tn)`.
    pub negative_test: IconArray,
}

impl DecisionAid {
    /// Build both arrays from a contingency table.
    #[must_use]
    pub fn from_counts(counts: &CountSet) -> Self {
        Self {
            positive_test: IconArray::from_split(counts.tp, counts.fp),
            negative_test: IconArray::from_split(counts.fn_, counts.tn),
        }
    }
}
