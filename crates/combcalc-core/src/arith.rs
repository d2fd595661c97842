//! Exact-integer helpers shared by every evaluator.

use std::fmt::Display;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

use crate::constants::{FACTORIAL_TABLE, MAX_FACTORIAL_U64};

/// Divide `numerator` by `denominator`, asserting the division is exact.
///
/// A remainder means a recurrence or accumulation invariant is broken,
/// which is a programming defect rather than a user error.
pub(crate) fn exact_div<T: Integer + Display>(numerator: &T, denominator: &T) -> T {
    let (quotient, remainder) = numerator.div_rem(denominator);
    assert!(
        remainder.is_zero(),
        "arithmetic inconsistency: {numerator} is not divisible by {denominator}"
    );
    quotient
}

/// `exact_div` by a machine-sized divisor.
pub(crate) fn exact_div_small(numerator: &BigUint, denominator: usize) -> BigUint {
    exact_div(numerator, &BigUint::from(denominator))
}

/// Product of the integers in `lo..=hi` (1 for an empty range).
pub(crate) fn product_range(lo: usize, hi: usize) -> BigUint {
    if lo > hi {
        return BigUint::one();
    }
    // Balanced splitting keeps both operands similar in size.
    if hi - lo < 16 {
        let mut acc = BigUint::one();
        for i in lo..=hi {
            acc *= i;
        }
        return acc;
    }
    let mid = lo + (hi - lo) / 2;
    product_range(lo, mid) * product_range(mid + 1, hi)
}

/// n!
///
/// # Example
/// ```
/// assert_eq!(combcalc_core::factorial(20).to_string(), "2432902008176640000");
/// ```
#[must_use]
pub fn factorial(n: usize) -> BigUint {
    if n <= MAX_FACTORIAL_U64 {
        return BigUint::from(FACTORIAL_TABLE[n]);
    }
    BigUint::from(FACTORIAL_TABLE[MAX_FACTORIAL_U64]) * product_range(MAX_FACTORIAL_U64 + 1, n)
}
