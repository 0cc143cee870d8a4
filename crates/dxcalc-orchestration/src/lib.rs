//! # dxcalc-orchestration
//!
//! Presenter interfaces, presenter selection, and evaluation dispatch.

pub mod interfaces;
pub mod orchestrator;
pub mod presenter_selection;

pub use interfaces::{PresentationResult, PresenterFactory, ResultPresenter};
pub use orchestrator::{analyze_presentation_results, evaluate_input, execute_presenters};
