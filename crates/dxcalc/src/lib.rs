//! DxCalc library: application logic for the diagnostic test calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
