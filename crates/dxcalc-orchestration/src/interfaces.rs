//! Orchestration interfaces.

use std::io;
use std::sync::Arc;

use dxcalc_core::{DxError, Evaluation};

/// A rendering adapter that turns an `Evaluation` into output.
///
/// Presenters are interchangeable: every presenter receives the same
/// evaluation and writes to the sink it is given.
pub trait ResultPresenter: Send + Sync {
    /// Render the evaluation.
    fn present(&self, evaluation: &Evaluation, out: &mut dyn io::Write) -> io::Result<()>;

    /// Get the name of this presenter.
    fn name(&self) -> &str;
}

/// Factory trait for looking up presenters by name.
pub trait PresenterFactory: Send + Sync {
    /// Get or create a presenter by name.
    fn get(&self, name: &str) -> Result<Arc<dyn ResultPresenter>, DxError>;

    /// List all available presenter names.
    fn available(&self) -> Vec<&str>;
}

/// Outcome of running one presenter.
#[derive(Debug, Clone)]
pub struct PresentationResult {
    /// Presenter name.
    pub presenter: String,
    /// `Ok` or the error the presenter reported.
    pub outcome: Result<(), DxError>,
}

/// Presenter that renders nothing.
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present(&self, _evaluation: &Evaluation, _out: &mut dyn io::Write) -> io::Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
