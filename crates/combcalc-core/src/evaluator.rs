//! Evaluator trait and the crate error type.
//!
//! `Evaluator` is the seam between the validated dispatch in [`Engine`](crate::Engine)
//! and the algorithms. Two implementations exist: the cache-backed
//! `TabulatedEvaluator` and the cache-free `ExplicitEvaluator` used for
//! cross-checking.

use num_bigint::BigInt;

use crate::family::{Arity, FunctionFamily};
use crate::table_cache::TableCache;
use crate::validation::Query;

/// Error type for combinatorial evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombError {
    /// An argument lies outside the function's domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An argument exceeds the configured computation ceiling.
    #[error("argument {n} exceeds the configured ceiling of {limit}")]
    LimitExceeded { n: u64, limit: u64 },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different evaluators don't match.
    #[error("result mismatch between evaluators")]
    Mismatch,
}

/// Computes exact values for validated queries.
pub trait Evaluator: Send + Sync {
    /// Evaluate a single validated query.
    fn evaluate(&self, query: &Query, cache: &TableCache) -> Result<BigInt, CombError>;

    /// Evaluate the whole row `k = 0..=n` of a two-argument family, or the
    /// prefix `0..=n` of a one-argument family.
    ///
    /// The default implementation evaluates point by point.
    fn row(
        &self,
        family: FunctionFamily,
        n: usize,
        cache: &TableCache,
    ) -> Result<Vec<BigInt>, CombError> {
        if family.arity() == Arity::Parts {
            return Err(CombError::InvalidArgument(format!(
                "{family} has no row form"
            )));
        }
        (0..=n)
            .map(|k| self.evaluate(&Query::point(family, n, k), cache))
            .collect()
    }

    /// Get the name of this evaluator.
    fn name(&self) -> &str;
}
