//! Constants for default inputs, display precision, and the decision aid.

/// Default number of decimals used when displaying ratio metrics.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Largest number of decimals accepted by `Options::normalize`.
pub const MAX_DECIMALS: u32 = 6;

/// Likelihood ratios are always displayed with this many decimals.
pub const LIKELIHOOD_RATIO_DECIMALS: u32 = 2;

/// Number of icons in a decision-aid array.
pub const ICON_ARRAY_SIZE: usize = 100;

/// Width (and height) of the square decision-aid grid.
pub const ICON_GRID_WIDTH: usize = 10;

/// Default contingency table for count mode (TP, FP, FN, TN).
pub const DEFAULT_COUNTS: (u64, u64, u64, u64) = (85, 15, 10, 90);

/// Default total patients for rate mode.
pub const DEFAULT_TOTAL_PATIENTS: u64 = 1000;

/// Default prevalence (%) for rate mode.
pub const DEFAULT_PREVALENCE: f64 = 10.0;

/// Default sensitivity (%) for rate mode.
pub const DEFAULT_SENSITIVITY: f64 = 95.0;

/// Default specificity (%) for rate mode.
pub const DEFAULT_SPECIFICITY: f64 = 60.0;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration or input values.
    pub const ERROR_CONFIG: i32 = 4;
    /// A rendering adapter failed to write its output.
    pub const ERROR_PRESENTATION: i32 = 5;
}
