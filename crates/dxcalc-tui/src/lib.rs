//! # dxcalc-tui
//!
//! Interactive diagnostic-test form using ratatui with Elm architecture.
//! Every edit rebuilds the input and redraws the results table, the
//! contingency bar chart and the decision-aid icon arrays.

pub mod chart;
pub mod decision_aid;
pub mod footer;
pub mod form;
pub mod header;
pub mod inputs;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod styles;
pub mod table;

pub use form::{FormState, InputMode};
pub use keymap::KeyAction;
pub use messages::TuiMessage;
pub use model::TuiApp;
