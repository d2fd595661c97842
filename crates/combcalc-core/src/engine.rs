//! The public entry point: validation, dispatch, and the cache handle.
//!
//! `Engine` wraps an [`Evaluator`] the way a decorator would: it validates
//! raw arguments, enforces the configured ceiling, and hands the resulting
//! [`Query`] to the evaluator together with its [`TableCache`].

use std::sync::Arc;

use num_bigint::{BigInt, BigUint};
use tracing::debug;

use crate::evaluator::{CombError, Evaluator};
use crate::family::{Arity, FunctionFamily};
use crate::options::Options;
use crate::tabulated::TabulatedEvaluator;
use crate::table_cache::TableCache;
use crate::validation::{validate, Arguments, Query};

/// A handle owning an evaluator, its options, and a table cache.
///
/// Engines are cheap to clone; clones share the same cache. Independent
/// engines (e.g. one per test) each get their own.
///
/// # Example
/// ```
/// use combcalc_core::Engine;
///
/// let engine = Engine::default();
/// assert_eq!(engine.binomial(10, 3).unwrap().to_string(), "120");
/// assert_eq!(engine.stirling_first(4, 1).unwrap().to_string(), "-6");
/// assert!(engine.binomial(3, 5).is_err());
/// ```
#[derive(Clone)]
pub struct Engine {
    evaluator: Arc<dyn Evaluator>,
    cache: Arc<TableCache>,
    options: Options,
}

impl Engine {
    /// Create an engine with the tabulated evaluator and a fresh cache.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::with_cache(options, Arc::new(TableCache::new()))
    }

    /// Create an engine sharing an existing cache.
    #[must_use]
    pub fn with_cache(options: Options, cache: Arc<TableCache>) -> Self {
        Self {
            evaluator: Arc::new(TabulatedEvaluator::new()),
            cache,
            options,
        }
    }

    /// Replace the evaluator, keeping options and cache.
    #[must_use]
    pub fn with_evaluator(mut self, evaluator: Arc<dyn Evaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<TableCache> {
        &self.cache
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn evaluator_name(&self) -> &str {
        self.evaluator.name()
    }

    /// Validate `args` for `family` without evaluating.
    pub fn validate(&self, family: FunctionFamily, args: &Arguments) -> Result<Query, CombError> {
        validate(family, args, self.options.max_n)
    }

    /// Validate and evaluate any family.
    pub fn evaluate(&self, family: FunctionFamily, args: &Arguments) -> Result<BigInt, CombError> {
        let query = self.validate(family, args)?;
        self.evaluate_query(&query)
    }

    /// Evaluate an already validated query.
    pub fn evaluate_query(&self, query: &Query) -> Result<BigInt, CombError> {
        debug!(evaluator = self.evaluator.name(), ?query, "evaluate");
        if self.options.use_cache {
            self.evaluator.evaluate(query, &self.cache)
        } else {
            self.evaluator.evaluate(query, &TableCache::new())
        }
    }

    /// Row `k = 0..=n` of a two-argument family, or the first `n + 1`
    /// terms of a one-argument family.
    pub fn row(&self, family: FunctionFamily, n: i64) -> Result<Vec<BigInt>, CombError> {
        let args = match family.arity() {
            Arity::Single => Arguments::single(n),
            Arity::Pair => Arguments::pair(n, n),
            Arity::Parts => {
                return Err(CombError::InvalidArgument(format!(
                    "{family} has no row form"
                )))
            }
        };
        let query = self.validate(family, &args)?;
        let n = match query {
            Query::Delannoy { m, .. } => m,
            Query::Catalan { n }
            | Query::Bell { n }
            | Query::Motzkin { n }
            | Query::Schroder { n }
            | Query::Binomial { n, .. }
            | Query::StirlingFirst { n, .. }
            | Query::StirlingSecond { n, .. }
            | Query::Lah { n, .. }
            | Query::Narayana { n, .. }
            | Query::Eulerian { n, .. }
            | Query::Multinomial { n, .. } => n,
        };
        debug!(evaluator = self.evaluator.name(), %family, n, "row");
        if self.options.use_cache {
            self.evaluator.row(family, n, &self.cache)
        } else {
            self.evaluator.row(family, n, &TableCache::new())
        }
    }

    /// Binomial coefficient C(n, k).
    pub fn binomial(&self, n: i64, k: i64) -> Result<BigInt, CombError> {
        self.evaluate(FunctionFamily::Binomial, &Arguments::pair(n, k))
    }

    /// Multinomial coefficient n! / (k1! ... km!); `parts` must sum to `n`.
    pub fn multinomial(&self, n: i64, parts: &[i64]) -> Result<BigInt, CombError> {
        self.evaluate(
            FunctionFamily::Multinomial,
            &Arguments::with_parts(n, parts.to_vec()),
        )
    }

    /// Catalan number.
    pub fn catalan(&self, n: i64) -> Result<BigInt, CombError> {
        self.evaluate(FunctionFamily::Catalan, &Arguments::single(n))
    }

    /// Signed Stirling number of the first kind s(n, k).
    pub fn stirling_first(&self, n: i64, k: i64) -> Result<BigInt, CombError> {
        self.evaluate(FunctionFamily::StirlingFirst, &Arguments::pair(n, k))
    }

    /// Unsigned Stirling number of the first kind |s(n, k)|: permutations of
    /// `n` elements with exactly `k` cycles.
    pub fn stirling_first_unsigned(&self, n: i64, k: i64) -> Result<BigUint, CombError> {
        let (_, magnitude) = self.stirling_first(n, k)?.into_parts();
        Ok(magnitude)
    }

    /// Stirling number of the second kind S(n, k).
    pub fn stirling_second(&self, n: i64, k: i64) -> Result<BigInt, CombError> {
        self.evaluate(FunctionFamily::StirlingSecond, &Arguments::pair(n, k))
    }

    /// Bell number.
    pub fn bell(&self, n: i64) -> Result<BigInt, CombError> {
        self.evaluate(FunctionFamily::Bell, &Arguments::single(n))
    }

    /// Lah number L(n, k).
    pub fn lah(&self, n: i64, k: i64) -> Result<BigInt, CombError> {
        self.evaluate(FunctionFamily::Lah, &Arguments::pair(n, k))
    }

    /// Narayana number N(n, k).
    pub fn narayana(&self, n: i64, k: i64) -> Result<BigInt, CombError> {
        self.evaluate(FunctionFamily::Narayana, &Arguments::pair(n, k))
    }

    /// Delannoy number D(m, n).
    pub fn delannoy(&self, m: i64, n: i64) -> Result<BigInt, CombError> {
        self.evaluate(FunctionFamily::Delannoy, &Arguments::pair(m, n))
    }

    /// Motzkin number.
    pub fn motzkin(&self, n: i64) -> Result<BigInt, CombError> {
        self.evaluate(FunctionFamily::Motzkin, &Arguments::single(n))
    }

    /// Large Schröder number.
    pub fn schroder(&self, n: i64) -> Result<BigInt, CombError> {
        self.evaluate(FunctionFamily::Schroder, &Arguments::single(n))
    }

    /// Eulerian number A(n, k).
    pub fn eulerian(&self, n: i64, k: i64) -> Result<BigInt, CombError> {
        self.evaluate(FunctionFamily::Eulerian, &Arguments::pair(n, k))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
