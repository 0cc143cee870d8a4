//! Scrollable log panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

/// Maximum number of retained log lines.
pub const MAX_LOG_LINES: usize = 500;

/// Render the log panel starting at `scroll_offset`.
pub fn render_logs(frame: &mut Frame, area: Rect, logs: &[String], scroll_offset: usize) {
    let visible_height = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = logs
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|log| {
            let style = if log.starts_with("[ERROR]") {
                Style::default().fg(Color::Red)
            } else if log.starts_with("[WARN]") {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(Line::raw(log.as_str())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Log ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}
