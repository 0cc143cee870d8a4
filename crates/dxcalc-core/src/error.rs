//! Error type shared by the DxCalc crates.

/// Error type for diagnostic calculations and their presentation.
///
/// A zero denominator during metric derivation is deliberately *not* an
/// error: the affected metric falls back to `0.0`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DxError {
    /// An input value is outside its allowed range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error (unknown format, rounding mode, ...).
    #[error("configuration error: {0}")]
    Config(String),

    /// A rendering adapter failed to produce its output.
    #[error("presentation error: {0}")]
    Presentation(String),
}

impl From<std::io::Error> for DxError {
    fn from(err: std::io::Error) -> Self {
        Self::Presentation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dx_error_display() {
        let err = DxError::InvalidInput("prevalence 120".into());
        assert_eq!(err.to_string(), "invalid input: prevalence 120");

        let err = DxError::Config("unknown format: svg".into());
        assert_eq!(err.to_string(), "configuration error: unknown format: svg");
    }

    #[test]
    fn io_error_becomes_presentation() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = DxError::from(io);
        assert!(matches!(err, DxError::Presentation(ref msg) if msg.contains("pipe closed")));
    }
}
