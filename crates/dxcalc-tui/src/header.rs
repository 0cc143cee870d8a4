//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::form::InputMode;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, mode: InputMode, rounding: &str) {
    let text = vec![Line::from(vec![
        Span::styled("DxCalc", Style::default().fg(Color::Cyan)),
        Span::raw(format!(" | Mode: {} | Rounding: {rounding}", mode.title())),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" Diagnostic Test Calculator ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn render_header_shows_mode() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, InputMode::Counts, "half-even");
            })
            .unwrap();

        let content: String = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|pos| buf.buffer[pos].symbol().to_string())
            .collect();
        assert!(content.contains("Mode: Counts"));
        assert!(content.contains("half-even"));
    }
}
