//! Results table widget.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use dxcalc_cli::output::DisplayOptions;
use dxcalc_cli::presenter::results_table;
use dxcalc_core::Evaluation;

use crate::styles::ColorTheme;

/// Render the 2x2 results table with its metric margins.
pub fn render_results_table(
    frame: &mut Frame,
    area: Rect,
    evaluation: &Evaluation,
    opts: &DisplayOptions,
) {
    let theme = ColorTheme::default();
    let rows = results_table(evaluation, opts);

    let (header, body) = rows.split_first().map_or((None, &[][..]), |(h, b)| (Some(h), b));
    let header = header.map(|cells| {
        Row::new(cells.iter().map(|c| Cell::from(c.as_str())))
            .style(theme.header_style().add_modifier(Modifier::UNDERLINED))
    });
    let body = body.iter().enumerate().map(|(i, cells)| {
        let row = Row::new(cells.iter().map(|c| Cell::from(c.as_str())));
        // Rows past the two test rows are metric margins.
        if i >= 2 {
            row.style(theme.muted_style())
        } else {
            row.style(theme.text_style())
        }
    });

    let widths = [
        Constraint::Length(9),
        Constraint::Min(14),
        Constraint::Min(14),
        Constraint::Min(16),
    ];
    let mut table = Table::new(body, widths)
        .column_spacing(2)
        .block(Block::default().borders(Borders::ALL).title(" Results Table "));
    if let Some(header) = header {
        table = table.header(header);
    }
    frame.render_widget(table, area);
}
