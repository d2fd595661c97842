//! Workspace-level integration tests for CombCalc-rs (see `tests/`).
