//! CLI output formatting.

use dxcalc_core::constants::LIKELIHOOD_RATIO_DECIMALS;
use dxcalc_core::rounding::round_to;
use dxcalc_core::{Metric, DEFAULT_DECIMALS};

/// How proportions are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueStyle {
    /// `0.89`
    #[default]
    Ratio,
    /// `89.47%`
    Percent,
}

/// Display settings shared by all terminal presenters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub style: ValueStyle,
    pub decimals: u32,
    pub verbose: bool,
    pub quiet: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            style: ValueStyle::Ratio,
            decimals: DEFAULT_DECIMALS,
            verbose: false,
            quiet: false,
        }
    }
}

/// Format a proportion as a ratio with a fixed number of decimals.
#[must_use]
pub fn format_ratio(value: f64, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, round_to(value, decimals))
}

/// Format a proportion as a percentage.
#[must_use]
pub fn format_percent(value: f64, decimals: u32) -> String {
    format!("{:.*}%", decimals as usize, round_to(value * 100.0, decimals))
}

/// Format a metric value according to the display options.
///
/// Likelihood ratios are not proportions: they always use the ratio form
/// with `LIKELIHOOD_RATIO_DECIMALS` decimals.
#[must_use]
pub fn format_metric(metric: Metric, value: f64, opts: &DisplayOptions) -> String {
    if metric.is_likelihood_ratio() {
        return format_ratio(value, LIKELIHOOD_RATIO_DECIMALS);
    }
    match opts.style {
        ValueStyle::Ratio => format_ratio(value, opts.decimals),
        ValueStyle::Percent => format_percent(value, opts.decimals),
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a percentage input value without trailing zeros (`95%`, `12.5%`).
#[must_use]
pub fn format_input_percent(value: f64) -> String {
    let s = format!("{value:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{s}%")
}
