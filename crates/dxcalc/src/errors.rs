//! Error handling and exit codes.

use dxcalc_core::constants::exit_codes;
use dxcalc_core::DxError;

/// Map a library error to its exit code.
#[must_use]
pub fn handle_error(err: &DxError) -> i32 {
    match err {
        DxError::InvalidInput(_) | DxError::Config(_) => exit_codes::ERROR_CONFIG,
        DxError::Presentation(_) => exit_codes::ERROR_PRESENTATION,
    }
}

/// Exit code for any error returned by `app::run`.
///
/// Errors that did not originate as a `DxError` are generic failures.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DxError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
