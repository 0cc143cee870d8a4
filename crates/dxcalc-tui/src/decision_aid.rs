//! Decision-aid icon arrays widget.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use dxcalc_cli::decision_aid::caption;
use dxcalc_core::{CountSet, DecisionAid, IconArray, IconCondition};

use crate::styles::ColorTheme;

const ICON: &str = "● ";

fn icon_lines(array: &IconArray, theme: &ColorTheme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = array
        .rows_top_down()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|icon| {
                        let style = match icon.condition {
                            IconCondition::Positive => theme.positive_style(),
                            IconCondition::Negative => theme.negative_style(),
                        };
                        Span::styled(ICON, style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    lines.push(Line::styled(caption(array), theme.muted_style()));
    lines
}

/// Render both icon arrays side by side.
pub fn render_decision_aid(frame: &mut Frame, area: Rect, counts: &CountSet) {
    let theme = ColorTheme::default();
    let aid = DecisionAid::from_counts(counts);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let panels = [
        (" 100 positive tests ", &aid.positive_test),
        (" 100 negative tests ", &aid.negative_test),
    ];
    for ((title, array), column) in panels.into_iter().zip(columns.iter()) {
        let block = Block::default().borders(Borders::ALL).title(title);
        frame.render_widget(Paragraph::new(icon_lines(array, &theme)).block(block), *column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::draw_to_string;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn lines_have_grid_and_caption() {
        let lines = icon_lines(&IconArray::from_split(95, 360), &ColorTheme::default());
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0].spans.len(), 10);
    }

    #[test]
    fn render_scenario_b() {
        let counts = CountSet::new(95, 360, 5, 540);
        let text = draw_to_string(60, 13, |frame| {
            let area = frame.area();
            render_decision_aid(frame, area, &counts);
        });
        assert!(text.contains("100 positive tests"));
        assert!(text.contains("21 of 100 have the condition"));
        assert!(text.contains("1 of 100 have the condition"));
    }

    #[test]
    fn bottom_left_icon_is_positive() {
        let counts = CountSet::new(95, 360, 5, 540);
        let backend = TestBackend::new(60, 13);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_decision_aid(frame, area, &counts);
            })
            .unwrap();
        let theme = ColorTheme::default();
        // Bottom grid row is row 10 (border at 0, ten rows, caption at 11).
        assert_eq!(buf.buffer[(1, 10)].fg, theme.positive);
        assert_eq!(buf.buffer[(1, 1)].fg, theme.negative);
    }
}
