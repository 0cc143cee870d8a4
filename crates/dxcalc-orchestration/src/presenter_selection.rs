//! Presenter selection logic.

use std::sync::Arc;

use dxcalc_core::DxError;

use crate::interfaces::{PresenterFactory, ResultPresenter};

/// Get presenters to run based on the requested output format.
///
/// `"all"` selects every presenter except machine-readable ones; a
/// comma-separated list selects each named presenter in order.
pub fn get_presenters_to_run(
    format: &str,
    factory: &dyn PresenterFactory,
) -> Result<Vec<Arc<dyn ResultPresenter>>, DxError> {
    match format.trim() {
        "all" => {
            let mut presenters = Vec::new();
            for name in factory.available() {
                if name == "json" {
                    continue;
                }
                presenters.push(factory.get(name)?);
            }
            Ok(presenters)
        }
        "" => Err(DxError::Config("empty output format".into())),
        list => {
            let presenters = list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| factory.get(name))
                .collect::<Result<Vec<_>, _>>()?;
            if presenters.is_empty() {
                return Err(DxError::Config(format!("no output format in '{list}'")));
            }
            Ok(presenters)
        }
    }
}
