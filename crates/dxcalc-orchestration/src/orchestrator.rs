//! Core orchestration: evaluate one input and hand it to every presenter.

use std::io;
use std::sync::Arc;

use dxcalc_core::{DiagnosticInput, DxError, Evaluation, MetricsCalculator, Options};

use crate::interfaces::{PresentationResult, ResultPresenter};

/// Evaluate a single input with the given options.
#[must_use]
pub fn evaluate_input(input: &DiagnosticInput, opts: &Options) -> Evaluation {
    MetricsCalculator::new(*opts).evaluate(input)
}

/// Run every presenter against the same evaluation, in order.
///
/// A failing presenter does not stop the ones after it; its error is
/// recorded in the returned list. Presenter outputs are separated by a
/// blank line.
pub fn execute_presenters(
    evaluation: &Evaluation,
    presenters: &[Arc<dyn ResultPresenter>],
    out: &mut dyn io::Write,
) -> Vec<PresentationResult> {
    let mut results = Vec::with_capacity(presenters.len());

    for (i, presenter) in presenters.iter().enumerate() {
        let separator = if i > 0 { writeln!(out) } else { Ok(()) };
        let outcome = separator
            .and_then(|()| presenter.present(evaluation, out))
            .map_err(DxError::from);

        match &outcome {
            Ok(()) => tracing::debug!(presenter = presenter.name(), "presenter finished"),
            Err(e) => tracing::warn!(presenter = presenter.name(), error = %e, "presenter failed"),
        }

        results.push(PresentationResult {
            presenter: presenter.name().to_string(),
            outcome,
        });
    }

    if let Err(e) = out.flush() {
        tracing::warn!(error = %e, "failed to flush presenter output");
    }

    results
}

/// Check presenter outcomes, returning the first failure.
pub fn analyze_presentation_results(results: &[PresentationResult]) -> Result<(), DxError> {
    if results.is_empty() {
        return Err(DxError::Config("no presenters were run".into()));
    }

    for result in results {
        if let Err(e) = &result.outcome {
            return Err(DxError::Presentation(format!("{}: {e}", result.presenter)));
        }
    }

    Ok(())
}
