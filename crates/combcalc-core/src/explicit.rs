//! Cache-free evaluator built from the explicit summation formulas.
//!
//! Slower than the tabulated route, and independent of it: every family is
//! computed from factorial quotients and alternating sums, which makes it a
//! useful cross-check.

use num_bigint::{BigInt, BigUint};
use num_traits::{pow, One, Zero};

use crate::arith::{exact_div, factorial, product_range};
use crate::evaluator::{CombError, Evaluator};
use crate::table_cache::TableCache;
use crate::validation::Query;

/// Evaluates every family through its explicit formula.
pub struct ExplicitEvaluator;

impl ExplicitEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExplicitEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for ExplicitEvaluator {
    fn evaluate(&self, query: &Query, _cache: &TableCache) -> Result<BigInt, CombError> {
        let value = match *query {
            Query::Binomial { n, k } => choose(n, k),
            Query::Multinomial { n, ref parts } => {
                let denominator = parts.iter().map(|&p| factorial(p)).product::<BigUint>();
                BigInt::from(exact_div(&factorial(n), &denominator))
            }
            Query::Catalan { n } => BigInt::from(exact_div(
                &factorial(2 * n),
                &(factorial(n) * factorial(n + 1)),
            )),
            Query::StirlingFirst { n, k } => stirling_first(n, k),
            Query::StirlingSecond { n, k } => stirling_second(n, k),
            Query::Bell { n } => (0..=n).map(|k| stirling_second(n, k)).sum(),
            Query::Lah { n, k } => lah(n, k),
            Query::Narayana { n, k } => narayana(n, k),
            Query::Delannoy { m, n } => delannoy(m, n),
            Query::Motzkin { n } => motzkin(n),
            Query::Schroder { n } => schroder(n),
            Query::Eulerian { n, k } => eulerian(n, k),
        };
        Ok(value)
    }

    fn name(&self) -> &'static str {
        "Explicit"
    }
}

fn alternating(j: usize) -> BigInt {
    if j % 2 == 0 {
        BigInt::one()
    } else {
        -BigInt::one()
    }
}

/// C(n, k) = n! / (k! (n-k)!), zero for k > n.
fn choose(n: usize, k: usize) -> BigInt {
    if k > n {
        return BigInt::zero();
    }
    BigInt::from(exact_div(&factorial(n), &(factorial(k) * factorial(n - k))))
}

/// S(n, m) = (1/m!) sum_i (-1)^(m-i) C(m, i) i^n
fn stirling_second(n: usize, m: usize) -> BigInt {
    if m > n {
        return BigInt::zero();
    }
    let sum: BigInt = (0..=m)
        .map(|i| alternating(m - i) * choose(m, i) * pow(BigInt::from(i), n))
        .sum();
    exact_div(&sum, &BigInt::from(factorial(m)))
}

/// Signed s(n, m) through Schläfli's sum over Stirling numbers of the second kind.
fn stirling_first(n: usize, m: usize) -> BigInt {
    if m > n {
        return BigInt::zero();
    }
    if m == 0 {
        return if n == 0 { BigInt::one() } else { BigInt::zero() };
    }
    (0..=n - m)
        .map(|k| {
            alternating(k)
                * choose(n - 1 + k, n - m + k)
                * choose(2 * n - m, n - m - k)
                * stirling_second(n - m + k, k)
        })
        .sum()
}

/// L(n, k) = C(n-1, k-1) n! / k!
fn lah(n: usize, k: usize) -> BigInt {
    if k > n {
        return BigInt::zero();
    }
    if k == 0 {
        return if n == 0 { BigInt::one() } else { BigInt::zero() };
    }
    choose(n - 1, k - 1) * BigInt::from(product_range(k + 1, n))
}

fn narayana(n: usize, k: usize) -> BigInt {
    if k > n {
        return BigInt::zero();
    }
    if n == 0 {
        return BigInt::one();
    }
    if k == 0 {
        return BigInt::zero();
    }
    exact_div(&(choose(n, k) * choose(n, k - 1)), &BigInt::from(n))
}

/// D(m, n) = sum_k 2^k C(m, k) C(n, k)
fn delannoy(m: usize, n: usize) -> BigInt {
    (0..=n)
        .map(|k| pow(BigInt::from(2), k) * choose(m, k) * choose(n, k))
        .sum()
}

/// M(n) = sum_k (-1)^k C(n, k) Catalan(n + 1 - k)
fn motzkin(n: usize) -> BigInt {
    (0..=n)
        .map(|k| {
            let j = n + 1 - k;
            let catalan = exact_div(&choose(2 * j, j), &BigInt::from(j + 1));
            alternating(k) * choose(n, k) * catalan
        })
        .sum()
}

/// Large Schröder number D(n, n) - D(n+1, n-1).
fn schroder(n: usize) -> BigInt {
    if n == 0 {
        return BigInt::one();
    }
    delannoy(n, n) - delannoy(n + 1, n - 1)
}

/// A(n, k) = sum_j (-1)^j C(n+1, j) (k+1-j)^n
fn eulerian(n: usize, k: usize) -> BigInt {
    if n == 0 && k == 0 {
        return BigInt::one();
    }
    if n <= k {
        return BigInt::zero();
    }
    (0..=k)
        .map(|j| alternating(j) * choose(n + 1, j) * pow(BigInt::from(k + 1 - j), n))
        .sum()
}
