//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use dxcalc_cli::output::{DisplayOptions, ValueStyle};
use dxcalc_core::{Evaluation, MetricsCalculator};

use crate::chart::render_bar_chart;
use crate::decision_aid::render_decision_aid;
use crate::footer::render_footer;
use crate::form::{FormState, InputMode};
use crate::header::render_header;
use crate::inputs::render_inputs;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, MAX_LOG_LINES};
use crate::messages::TuiMessage;
use crate::table::render_results_table;

/// Panel rectangles for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub header: Rect,
    pub inputs: Rect,
    pub logs: Rect,
    pub table: Rect,
    pub chart: Rect,
    pub aid: Rect,
    pub footer: Rect,
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Editable inputs.
    pub form: FormState,
    /// How metric values are displayed.
    pub display: DisplayOptions,
    calculator: MetricsCalculator,
    /// Last successful evaluation.
    pub evaluation: Option<Evaluation>,
    /// Why the current form text could not be evaluated.
    pub error: Option<String>,
    /// Log lines, oldest first.
    pub logs: Vec<String>,
    /// Log scroll offset.
    pub log_scroll_offset: usize,
    /// Show logs toggle.
    pub show_logs: bool,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
}

impl TuiApp {
    /// Create a new TUI app and evaluate the initial form.
    #[must_use]
    pub fn new(
        rx: Receiver<TuiMessage>,
        form: FormState,
        calculator: MetricsCalculator,
        display: DisplayOptions,
    ) -> Self {
        let mut app = Self {
            should_quit: false,
            form,
            display,
            calculator,
            evaluation: None,
            error: None,
            logs: Vec::new(),
            log_scroll_offset: 0,
            show_logs: true,
            terminal_width: 80,
            terminal_height: 24,
            rx,
        };
        app.recompute();
        app
    }

    /// The calculator used for every recomputation.
    #[must_use]
    pub fn calculator(&self) -> &MetricsCalculator {
        &self.calculator
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::SetField { index, value } => {
                if self.form.set_field(index, &value) {
                    self.recompute();
                } else {
                    self.push_log(format!("[WARN] no field at index {index}"));
                }
            }
            TuiMessage::SetMode(mode) => self.switch_mode(mode),
            TuiMessage::Log(line) => self.push_log(line),
            TuiMessage::Tick => {}
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::NextField => self.form.focus_next(),
            KeyAction::PrevField => self.form.focus_prev(),
            KeyAction::Increment => {
                self.form.step(true);
                self.recompute();
            }
            KeyAction::Decrement => {
                self.form.step(false);
                self.recompute();
            }
            KeyAction::Input(c) => {
                if self.form.push_char(c) {
                    self.recompute();
                }
            }
            KeyAction::Backspace => {
                self.form.backspace();
                self.recompute();
            }
            KeyAction::ToggleMode => self.switch_mode(self.form.mode().toggled()),
            KeyAction::TogglePercent => {
                self.display.style = match self.display.style {
                    ValueStyle::Ratio => ValueStyle::Percent,
                    ValueStyle::Percent => ValueStyle::Ratio,
                };
            }
            KeyAction::ToggleLogs => self.show_logs = !self.show_logs,
            KeyAction::Reset => {
                self.form.reset();
                self.recompute();
            }
            KeyAction::ScrollUp => {
                self.log_scroll_offset = self.log_scroll_offset.saturating_sub(1);
            }
            KeyAction::ScrollDown => {
                let max_offset = self.logs.len().saturating_sub(1);
                self.log_scroll_offset = (self.log_scroll_offset + 1).min(max_offset);
            }
            KeyAction::None => {}
        }
    }

    fn switch_mode(&mut self, mode: InputMode) {
        if mode == self.form.mode() {
            return;
        }
        self.form.set_mode(mode);
        self.display.style = match mode {
            InputMode::Counts => ValueStyle::Ratio,
            InputMode::Rates => ValueStyle::Percent,
        };
        self.push_log(format!("mode: {}", mode.title()));
        self.recompute();
    }

    /// Rebuild the input from the form and evaluate it.
    ///
    /// Invalid text keeps the previous evaluation on screen and records the
    /// error instead.
    pub fn recompute(&mut self) {
        match self.form.to_input() {
            Ok(input) => {
                let evaluation = self.calculator.evaluate(&input);
                let c = evaluation.counts;
                self.push_log(format!(
                    "tp={} fp={} fn={} tn={}",
                    c.tp, c.fp, c.fn_, c.tn
                ));
                self.evaluation = Some(evaluation);
                self.error = None;
            }
            Err(err) => {
                tracing::debug!(error = %err, "form input rejected");
                self.push_log(format!("[WARN] {err}"));
                self.error = Some(err.to_string());
            }
        }
    }

    fn push_log(&mut self, line: String) {
        self.logs.push(line);
        if self.logs.len() > MAX_LOG_LINES {
            self.logs.remove(0);
        }
        self.log_scroll_offset = self.logs.len().saturating_sub(1);
    }

    /// Compute the panel layout.
    ///
    /// Inputs and logs on the left, results on the right.
    #[must_use]
    pub fn compute_layout(area: Rect) -> PanelLayout {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(10),   // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(outer[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(3)])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),  // table
                Constraint::Length(7),  // bar chart
                Constraint::Min(13),    // decision aid
            ])
            .split(columns[1]);

        PanelLayout {
            header: outer[0],
            inputs: left[0],
            logs: left[1],
            table: right[0],
            chart: right[1],
            aid: right[2],
            footer: outer[2],
        }
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let layout = Self::compute_layout(frame.area());

        render_header(
            frame,
            layout.header,
            self.form.mode(),
            self.calculator.options().rounding.name(),
        );

        if self.show_logs {
            render_inputs(frame, layout.inputs, &self.form, self.error.as_deref());
            render_logs(frame, layout.logs, &self.logs, self.visible_log_start(layout.logs));
        } else {
            let inputs = layout.inputs.union(layout.logs);
            render_inputs(frame, inputs, &self.form, self.error.as_deref());
        }

        if let Some(evaluation) = &self.evaluation {
            render_results_table(frame, layout.table, evaluation, &self.display);
            render_bar_chart(frame, layout.chart, &evaluation.counts);
            render_decision_aid(frame, layout.aid, &evaluation.counts);
        }

        render_footer(frame, layout.footer);
    }

    /// First log line to show so that `log_scroll_offset` stays visible.
    fn visible_log_start(&self, area: Rect) -> usize {
        let visible = usize::from(area.height.saturating_sub(2)).max(1);
        self.log_scroll_offset.saturating_sub(visible - 1)
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// Sets up the terminal, runs the main loop (poll events, update,
    /// render), and restores the terminal on exit even if the loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        self.handle_key_action(map_key(key_event));
                    }
                    Event::Resize(width, height) => {
                        self.handle_message(TuiMessage::Resize { width, height });
                    }
                    _ => {}
                }
            }

            self.update();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::draw_to_string;
    use crossbeam_channel::{unbounded, Sender};
    use dxcalc_core::{CountSet, Options, RoundingMode};

    fn make_app() -> (TuiApp, Sender<TuiMessage>) {
        let (tx, rx) = unbounded();
        let app = TuiApp::new(
            rx,
            FormState::default(),
            MetricsCalculator::default(),
            DisplayOptions {
                style: ValueStyle::Percent,
                ..Default::default()
            },
        );
        (app, tx)
    }

    #[test]
    fn initial_state_is_evaluated() {
        let (app, _tx) = make_app();
        assert!(!app.should_quit);
        let eval = app.evaluation.unwrap();
        assert_eq!(eval.counts, CountSet::new(95, 360, 5, 540));
        assert!(app.error.is_none());
        assert_eq!(app.logs.len(), 1);
    }

    #[test]
    fn set_field_recomputes() {
        let (mut app, tx) = make_app();
        tx.send(TuiMessage::SetField {
            index: 3,
            value: "100".to_string(),
        })
        .unwrap();
        app.update();
        let eval = app.evaluation.unwrap();
        assert_eq!(eval.counts.fp, 0);
        assert_eq!(eval.metrics.lr_plus, 0.0);
    }

    #[test]
    fn set_field_out_of_range_logs_warning() {
        let (mut app, _tx) = make_app();
        app.handle_message(TuiMessage::SetField {
            index: 7,
            value: "1".to_string(),
        });
        assert!(app.logs.last().unwrap().starts_with("[WARN]"));
    }

    #[test]
    fn invalid_text_keeps_last_evaluation() {
        let (mut app, _tx) = make_app();
        let before = app.evaluation;
        app.handle_message(TuiMessage::SetField {
            index: 1,
            value: "150".to_string(),
        });
        assert!(app.error.as_deref().unwrap().contains("prevalence"));
        assert_eq!(app.evaluation, before);

        app.handle_message(TuiMessage::SetField {
            index: 1,
            value: "10".to_string(),
        });
        assert!(app.error.is_none());
    }

    #[test]
    fn typing_recomputes() {
        let (mut app, _tx) = make_app();
        app.handle_message(TuiMessage::SetMode(InputMode::Counts));
        // Focused field is TP = 85; clear it and type 9.
        app.handle_key_action(KeyAction::Backspace);
        app.handle_key_action(KeyAction::Backspace);
        assert!(app.error.is_some());
        app.handle_key_action(KeyAction::Input('9'));
        assert!(app.error.is_none());
        assert_eq!(app.evaluation.unwrap().counts.tp, 9);
    }

    #[test]
    fn rejected_characters_do_not_recompute() {
        let (mut app, _tx) = make_app();
        let logs = app.logs.len();
        // Total patients is an integer field.
        app.handle_key_action(KeyAction::Input('.'));
        assert_eq!(app.logs.len(), logs);
    }

    #[test]
    fn step_keys_recompute() {
        let (mut app, _tx) = make_app();
        app.handle_key_action(KeyAction::NextField);
        app.handle_key_action(KeyAction::Increment);
        assert_eq!(app.form.fields()[1].value, "11");
        assert_eq!(app.evaluation.unwrap().counts.disease_positive(), 110);
        app.handle_key_action(KeyAction::Decrement);
        assert_eq!(app.evaluation.unwrap().counts.disease_positive(), 100);
    }

    #[test]
    fn mode_toggle_switches_style() {
        let (mut app, _tx) = make_app();
        app.handle_key_action(KeyAction::ToggleMode);
        assert_eq!(app.form.mode(), InputMode::Counts);
        assert_eq!(app.display.style, ValueStyle::Ratio);
        assert_eq!(app.evaluation.unwrap().counts, CountSet::new(85, 15, 10, 90));

        app.handle_key_action(KeyAction::ToggleMode);
        assert_eq!(app.display.style, ValueStyle::Percent);
    }

    #[test]
    fn percent_toggle() {
        let (mut app, _tx) = make_app();
        app.handle_key_action(KeyAction::TogglePercent);
        assert_eq!(app.display.style, ValueStyle::Ratio);
    }

    #[test]
    fn reset_restores_defaults() {
        let (mut app, _tx) = make_app();
        app.handle_message(TuiMessage::SetField {
            index: 0,
            value: "50".to_string(),
        });
        app.handle_key_action(KeyAction::Reset);
        assert_eq!(app.form.fields()[0].value, "1000");
        assert_eq!(app.evaluation.unwrap().counts.total(), 1000);
    }

    #[test]
    fn rounding_mode_is_used() {
        let (_tx, rx) = unbounded();
        let calc = MetricsCalculator::new(Options {
            rounding: RoundingMode::HalfUp,
            ..Default::default()
        });
        let mut app = TuiApp::new(rx, FormState::default(), calc, DisplayOptions::default());
        app.handle_message(TuiMessage::SetField {
            index: 0,
            value: "5".to_string(),
        });
        app.handle_message(TuiMessage::SetField {
            index: 1,
            value: "50".to_string(),
        });
        app.handle_message(TuiMessage::SetField {
            index: 2,
            value: "100".to_string(),
        });
        assert_eq!(app.evaluation.unwrap().counts.tp, 3);
    }

    #[test]
    fn quit_paths() {
        let (mut app, tx) = make_app();
        tx.send(TuiMessage::Quit).unwrap();
        app.update();
        assert!(app.should_quit);

        let (mut app, _tx) = make_app();
        app.handle_key_action(KeyAction::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn resize_and_tick() {
        let (mut app, _tx) = make_app();
        app.handle_message(TuiMessage::Tick);
        app.handle_message(TuiMessage::Resize {
            width: 120,
            height: 40,
        });
        assert_eq!(app.terminal_width, 120);
        assert_eq!(app.terminal_height, 40);
    }

    #[test]
    fn log_cap() {
        let (mut app, _tx) = make_app();
        for i in 0..(MAX_LOG_LINES + 10) {
            app.handle_message(TuiMessage::Log(format!("msg {i}")));
        }
        assert_eq!(app.logs.len(), MAX_LOG_LINES);
        assert_eq!(app.log_scroll_offset, MAX_LOG_LINES - 1);
    }

    #[test]
    fn log_scrolling() {
        let (mut app, _tx) = make_app();
        for i in 0..5 {
            app.handle_message(TuiMessage::Log(format!("msg {i}")));
        }
        let bottom = app.log_scroll_offset;
        app.handle_key_action(KeyAction::ScrollUp);
        assert_eq!(app.log_scroll_offset, bottom - 1);
        app.handle_key_action(KeyAction::ScrollDown);
        app.handle_key_action(KeyAction::ScrollDown);
        assert_eq!(app.log_scroll_offset, bottom);
    }

    #[test]
    fn toggle_logs() {
        let (mut app, _tx) = make_app();
        assert!(app.show_logs);
        app.handle_key_action(KeyAction::ToggleLogs);
        assert!(!app.show_logs);
    }

    #[test]
    fn layout_computation() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = TuiApp::compute_layout(area);
        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 2);
        assert_eq!(layout.footer.y + layout.footer.height, area.height);
        assert_eq!(layout.inputs.width + layout.table.width, area.width);
        assert_eq!(layout.table.height, 8);
        assert!(layout.aid.height >= 13);
    }

    #[test]
    fn render_full_view() {
        let (app, _tx) = make_app();
        let text = draw_to_string(120, 40, |frame| app.render(frame));
        assert!(text.contains("Mode: Rates"));
        assert!(text.contains("Total Patients"));
        assert!(text.contains("PPV: 20.88%"));
        assert!(text.contains("21 of 100 have the condition"));
        assert!(text.contains("quit"));
    }

    #[test]
    fn render_without_logs() {
        let (mut app, _tx) = make_app();
        app.handle_key_action(KeyAction::ToggleLogs);
        let text = draw_to_string(120, 40, |frame| app.render(frame));
        assert!(!text.contains(" Log "));
    }

    #[test]
    fn render_small_terminal() {
        let (app, _tx) = make_app();
        draw_to_string(30, 10, |frame| app.render(frame));
    }
}
