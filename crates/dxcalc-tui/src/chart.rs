//! Stacked contingency bar chart widget.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use dxcalc_cli::chart::bar_segments;
use dxcalc_cli::output::format_count;
use dxcalc_core::{CountSet, IconCondition};

use crate::styles::ColorTheme;

const LABEL_WIDTH: usize = 9;
const BAR_GLYPH: &str = "█";

fn bar_line<'a>(
    theme: &ColorTheme,
    label: &'a str,
    with_condition: u64,
    without_condition: u64,
    max_total: u64,
    width: usize,
) -> Line<'a> {
    let (pos, neg) = bar_segments(with_condition, without_condition, max_total, width);
    Line::from(vec![
        Span::raw(format!("{label:<LABEL_WIDTH$}")),
        Span::styled(BAR_GLYPH.repeat(pos), theme.positive_style()),
        Span::styled(BAR_GLYPH.repeat(neg), theme.negative_style()),
        Span::styled(
            format!(
                " {} / {}",
                format_count(with_condition),
                format_count(without_condition)
            ),
            theme.muted_style(),
        ),
    ])
}

/// Render one stacked bar per test result.
pub fn render_bar_chart(frame: &mut Frame, area: Rect, counts: &CountSet) {
    let theme = ColorTheme::default();
    let max_total = counts.test_positive().max(counts.test_negative());
    // Leave room for the label, the count suffix and the borders.
    let width = usize::from(area.width).saturating_sub(LABEL_WIDTH + 20);

    let lines = vec![
        bar_line(&theme, "(+) test", counts.tp, counts.fp, max_total, width),
        Line::raw(""),
        bar_line(&theme, "(-) test", counts.fn_, counts.tn, max_total, width),
        Line::raw(""),
        Line::from(vec![
            Span::styled(BAR_GLYPH, theme.positive_style()),
            Span::raw(format!(" {}   ", IconCondition::Positive.label())),
            Span::styled(BAR_GLYPH, theme.negative_style()),
            Span::raw(format!(" {}", IconCondition::Negative.label())),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Contingency Table ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
