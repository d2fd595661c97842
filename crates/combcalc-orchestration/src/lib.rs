//! # combcalc-orchestration
//!
//! Parallel execution, evaluator selection, and result cross-checking.

pub mod evaluator_selection;
pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{EvaluationResult, Output, Request, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_evaluations};
