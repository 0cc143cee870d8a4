//! Workspace-level integration tests for DxCalc. See `tests/`.
