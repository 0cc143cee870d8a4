//! UI helpers for CLI display.

use std::io;

use console::style;

use dxcalc_core::IconCondition;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Write a styled header line.
pub fn write_header(out: &mut dyn io::Write, text: &str) -> io::Result<()> {
    if is_color_disabled() {
        writeln!(out, "=== {text} ===")
    } else {
        writeln!(out, "{}", style(format!("=== {text} ===")).bold().cyan())
    }
}

/// Paint text in the color associated with a condition status:
/// red for condition (+), green for condition (-).
#[must_use]
pub fn paint_condition(text: &str, condition: IconCondition) -> String {
    if is_color_disabled() {
        return text.to_string();
    }
    match condition {
        IconCondition::Positive => style(text).red().to_string(),
        IconCondition::Negative => style(text).green().to_string(),
    }
}

/// Dim text used for footnotes.
#[must_use]
pub fn muted(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).dim().to_string()
    }
}

/// Print a warning message to stderr.
pub fn print_warning(text: &str) {
    if is_color_disabled() {
        eprintln!("[WARN] {text}");
    } else {
        eprintln!("{} {text}", style("[WARN]").yellow().bold());
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
