//! # dxcalc-cli
//!
//! Terminal presenters for DxCalc evaluations: the results table, a
//! stacked bar chart, the decision-aid icon arrays and a JSON report,
//! plus shell completion and shared output formatting.

pub mod chart;
pub mod completion;
pub mod decision_aid;
pub mod json;
pub mod output;
pub mod presenter;
pub mod registry;
pub mod ui;

pub use chart::BarChartPresenter;
pub use decision_aid::DecisionAidPresenter;
pub use json::{JsonPresenter, JsonReport};
pub use output::{DisplayOptions, ValueStyle};
pub use presenter::TablePresenter;
pub use registry::DefaultPresenterFactory;
