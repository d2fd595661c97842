//! The default evaluator: closed forms plus cache-backed recurrences.

use num_bigint::{BigInt, BigUint, Sign};

use crate::closed_form;
use crate::evaluator::{CombError, Evaluator};
use crate::family::FunctionFamily;
use crate::recurrence::{Sequence, Triangle};
use crate::table_cache::{Row, TableCache};
use crate::validation::Query;

/// Evaluates closed-form families directly and recurrence families from
/// the rows held in a [`TableCache`].
///
/// # Example
/// ```
/// use combcalc_core::{Evaluator, Query, TabulatedEvaluator, TableCache};
///
/// let cache = TableCache::new();
/// let value = TabulatedEvaluator::new()
///     .evaluate(&Query::Bell { n: 10 }, &cache)
///     .unwrap();
/// assert_eq!(value.to_string(), "115975");
/// ```
pub struct TabulatedEvaluator;

impl TabulatedEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TabulatedEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the sign (-1)^(n-k) of the Stirling numbers of the first kind.
pub(crate) fn signed_stirling_first(n: usize, k: usize, magnitude: BigUint) -> BigInt {
    let sign = if (n + k) % 2 == 1 {
        Sign::Minus
    } else {
        Sign::Plus
    };
    BigInt::from_biguint(sign, magnitude)
}

impl Evaluator for TabulatedEvaluator {
    fn evaluate(&self, query: &Query, cache: &TableCache) -> Result<BigInt, CombError> {
        let value = match *query {
            Query::Binomial { n, k } => closed_form::binomial(n, k).into(),
            Query::Multinomial { ref parts, .. } => closed_form::multinomial(parts).into(),
            Query::Catalan { n } => closed_form::catalan(n).into(),
            Query::StirlingFirst { n, k } => {
                signed_stirling_first(n, k, cache.entry(Triangle::StirlingFirst, n, k))
            }
            Query::StirlingSecond { n, k } => cache.entry(Triangle::StirlingSecond, n, k).into(),
            Query::Bell { n } => cache
                .row(Triangle::StirlingSecond, n)
                .iter()
                .sum::<BigUint>()
                .into(),
            Query::Lah { n, k } => cache.entry(Triangle::Lah, n, k).into(),
            Query::Narayana { n, k } => closed_form::narayana(n, k).into(),
            Query::Delannoy { m, n } => closed_form::delannoy(m, n).into(),
            Query::Motzkin { n } => cache.term(Sequence::Motzkin, n).into(),
            Query::Schroder { n } => cache.term(Sequence::Schroder, n).into(),
            Query::Eulerian { n, k } => cache.entry(Triangle::Eulerian, n, k).into(),
        };
        Ok(value)
    }

    fn row(
        &self,
        family: FunctionFamily,
        n: usize,
        cache: &TableCache,
    ) -> Result<Vec<BigInt>, CombError> {
        let unsigned = |row: Row| -> Vec<BigInt> { row.iter().cloned().map(BigInt::from).collect() };
        let prefix = |sequence: Sequence| -> Vec<BigInt> {
            (0..=n)
                .map(|i| BigInt::from(cache.term(sequence, i)))
                .collect()
        };
        let row = match family {
            FunctionFamily::Multinomial => {
                return Err(CombError::InvalidArgument(format!(
                    "{family} has no row form"
                )));
            }
            FunctionFamily::Binomial => closed_form::binomial_row(n)
                .into_iter()
                .map(BigInt::from)
                .collect(),
            FunctionFamily::StirlingFirst => cache
                .row(Triangle::StirlingFirst, n)
                .iter()
                .enumerate()
                .map(|(k, c)| signed_stirling_first(n, k, c.clone()))
                .collect(),
            FunctionFamily::StirlingSecond => unsigned(cache.row(Triangle::StirlingSecond, n)),
            FunctionFamily::Lah => unsigned(cache.row(Triangle::Lah, n)),
            FunctionFamily::Eulerian => unsigned(cache.row(Triangle::Eulerian, n)),
            FunctionFamily::Motzkin => prefix(Sequence::Motzkin),
            FunctionFamily::Schroder => prefix(Sequence::Schroder),
            FunctionFamily::Catalan
            | FunctionFamily::Bell
            | FunctionFamily::Narayana
            | FunctionFamily::Delannoy => {
                return (0..=n)
                    .map(|k| self.evaluate(&Query::point(family, n, k), cache))
                    .collect();
            }
        };
        Ok(row)
    }

    fn name(&self) -> &'static str {
        "Tabulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(query: Query) -> BigInt {
        TabulatedEvaluator::new()
            .evaluate(&query, &TableCache::new())
            .unwrap()
    }

    #[test]
    fn stirling_first_is_signed() {
        assert_eq!(eval(Query::StirlingFirst { n: 0, k: 0 }), BigInt::from(1));
        assert_eq!(eval(Query::StirlingFirst { n: 4, k: 1 }), BigInt::from(-6));
        assert_eq!(eval(Query::StirlingFirst { n: 4, k: 2 }), BigInt::from(11));
        assert_eq!(eval(Query::StirlingFirst { n: 5, k: 3 }), BigInt::from(35));
        assert_eq!(eval(Query::StirlingFirst { n: 3, k: 0 }), BigInt::from(0));
    }

    #[test]
    fn bell_sums_stirling_row() {
        let expected = [1i64, 1, 2, 5, 15, 52, 203, 877, 4140];
        for (n, &e) in expected.iter().enumerate() {
            assert_eq!(eval(Query::Bell { n }), BigInt::from(e), "B({n})");
        }
    }

    #[test]
    fn eulerian_boundaries() {
        assert_eq!(eval(Query::Eulerian { n: 4, k: 0 }), BigInt::from(1));
        assert_eq!(eval(Query::Eulerian { n: 4, k: 3 }), BigInt::from(1));
        assert_eq!(eval(Query::Eulerian { n: 4, k: 4 }), BigInt::from(0));
        assert_eq!(eval(Query::Eulerian { n: 0, k: 0 }), BigInt::from(1));
    }

    #[test]
    fn bell_reuses_cached_stirling_row() {
        let cache = TableCache::new();
        let evaluator = TabulatedEvaluator::new();
        evaluator.evaluate(&Query::Bell { n: 12 }, &cache).unwrap();
        let misses = cache.stats().misses;
        evaluator
            .evaluate(&Query::StirlingSecond { n: 12, k: 5 }, &cache)
            .unwrap();
        assert_eq!(cache.stats().misses, misses);
    }

    #[test]
    fn row_for_triangle_and_sequence() {
        let cache = TableCache::new();
        let evaluator = TabulatedEvaluator::new();
        let row = evaluator.row(FunctionFamily::StirlingFirst, 4, &cache).unwrap();
        let expected: Vec<BigInt> = [0, -6, 11, -6, 1].into_iter().map(BigInt::from).collect();
        assert_eq!(row, expected);

        let prefix = evaluator.row(FunctionFamily::Schroder, 4, &cache).unwrap();
        let expected: Vec<BigInt> = [1, 2, 6, 22, 90].into_iter().map(BigInt::from).collect();
        assert_eq!(prefix, expected);
    }

    #[test]
    fn row_for_closed_forms() {
        let cache = TableCache::new();
        let evaluator = TabulatedEvaluator::new();
        let pascal = evaluator.row(FunctionFamily::Binomial, 4, &cache).unwrap();
        let expected: Vec<BigInt> = [1, 4, 6, 4, 1].into_iter().map(BigInt::from).collect();
        assert_eq!(pascal, expected);

        let catalan = evaluator.row(FunctionFamily::Catalan, 5, &cache).unwrap();
        let expected: Vec<BigInt> = [1, 1, 2, 5, 14, 42].into_iter().map(BigInt::from).collect();
        assert_eq!(catalan, expected);
    }

    #[test]
    fn multinomial_has_no_row() {
        let cache = TableCache::new();
        let result = TabulatedEvaluator::new().row(FunctionFamily::Multinomial, 3, &cache);
        assert!(matches!(result, Err(CombError::InvalidArgument(_))));
    }
}
