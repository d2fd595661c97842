//! # combcalc-core
//!
//! Core library for CombCalc-rs: exact combinatorial special functions over
//! arbitrary-precision integers. Closed-form families use multiplicative
//! accumulation with exact division; triangle and sequence families are
//! tabulated bottom-up into a write-once [`TableCache`].

pub(crate) mod arith;
pub mod closed_form;
pub mod constants;
pub mod engine;
pub mod evaluator;
pub mod explicit;
pub mod family;
pub mod options;
pub mod recurrence;
pub mod registry;
pub mod table_cache;
pub mod tabulated;
pub mod validation;

// Re-exports
pub use arith::factorial;
pub use constants::{exit_codes, DEFAULT_MAX_N, FACTORIAL_TABLE, MAX_FACTORIAL_U64};
pub use engine::Engine;
pub use evaluator::{CombError, Evaluator};
pub use explicit::ExplicitEvaluator;
pub use family::{Arity, FunctionFamily};
pub use options::Options;
pub use recurrence::{Sequence, Triangle};
pub use registry::{DefaultFactory, EvaluatorFactory};
pub use table_cache::{CacheStats, Row, TableCache};
pub use tabulated::TabulatedEvaluator;
pub use validation::{validate, Arguments, Query};

use num_bigint::BigInt;

/// Evaluate `family` at `args` with default options and a fresh cache.
///
/// This is a convenience function for one-off queries. Repeated queries
/// should go through a long-lived [`Engine`] so tabulated rows are reused.
///
/// # Example
/// ```
/// use combcalc_core::{Arguments, FunctionFamily};
///
/// let value = combcalc_core::evaluate(FunctionFamily::Catalan, &Arguments::single(10)).unwrap();
/// assert_eq!(value.to_string(), "16796");
/// ```
pub fn evaluate(family: FunctionFamily, args: &Arguments) -> Result<BigInt, CombError> {
    Engine::default().evaluate(family, args)
}
