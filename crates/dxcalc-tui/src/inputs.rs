//! Form panel: the editable input fields.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::form::FormState;
use crate::styles::ColorTheme;

/// Render the input form, highlighting the focused field.
pub fn render_inputs(frame: &mut Frame, area: Rect, form: &FormState, error: Option<&str>) {
    let theme = ColorTheme::default();
    let label_width = form
        .fields()
        .iter()
        .map(|f| f.label.len())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = form
        .fields()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let focused = i == form.focus();
            let marker = if focused { "> " } else { "  " };
            let value_style = if focused {
                theme.focus_style()
            } else {
                theme.text_style()
            };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    format!("{:<label_width$}  ", field.label),
                    theme.muted_style(),
                ),
                Span::styled(field.value.clone(), value_style),
            ])
        })
        .collect();

    if let Some(err) = error {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(err.to_string(), theme.error_style())));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Inputs ({}) ", form.mode().title()));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
