//! Closed-form families: binomial, multinomial, Catalan, Narayana, Delannoy.
//!
//! Coefficients are built by multiplicative accumulation rather than by
//! dividing full factorials: the running product after step `i` is
//! `C(n-k+i, i)`, so every division by `i` is exact and the intermediates
//! never grow past the size of the answer.
//!
//! Arguments outside a family's domain (`k > n`) yield zero here; the
//! public boundary rejects them before they arrive.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::arith::exact_div_small;

/// C(n, k) by iterative multiplicative accumulation.
#[must_use]
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);
    let mut acc = BigUint::one();
    for i in 1..=k {
        acc *= n - k + i;
        acc = exact_div_small(&acc, i);
    }
    acc
}

/// Pascal row n: C(n, 0), ..., C(n, n).
#[must_use]
pub fn binomial_row(n: usize) -> Vec<BigUint> {
    let mut row = Vec::with_capacity(n + 1);
    let mut current = BigUint::one();
    for k in 0..n {
        let next = exact_div_small(&(&current * (n - k)), k + 1);
        row.push(current);
        current = next;
    }
    row.push(current);
    row
}

/// n! / (k1! k2! ... km!) where n is the sum of `parts`.
///
/// Computed as a product of binomials, placing the largest part first
/// so that its factorial cancels without ever being formed.
#[must_use]
pub fn multinomial(parts: &[usize]) -> BigUint {
    let Some((largest, &first)) = parts.iter().enumerate().max_by_key(|&(_, part)| *part) else {
        return BigUint::one();
    };
    let mut total = first;
    let mut acc = BigUint::one();
    for (i, &part) in parts.iter().enumerate() {
        if i == largest || part == 0 {
            continue;
        }
        total += part;
        acc *= binomial(total, part);
    }
    acc
}

/// Catalan number C(2n, n) / (n + 1).
#[must_use]
pub fn catalan(n: usize) -> BigUint {
    exact_div_small(&binomial(2 * n, n), n + 1)
}

/// Narayana number N(n, k) = C(n, k) C(n, k-1) / n.
#[must_use]
pub fn narayana(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    if n == 0 {
        return BigUint::one();
    }
    if k == 0 {
        return BigUint::zero();
    }
    exact_div_small(&(binomial(n, k) * binomial(n, k - 1)), n)
}

/// Delannoy number D(m, n) = sum over k of 2^k C(m, k) C(n, k).
///
/// Successive terms satisfy t(k+1) = t(k) * 2(m-k)(n-k) / (k+1)^2, which
/// keeps the whole sum free of factorials.
#[must_use]
pub fn delannoy(m: usize, n: usize) -> BigUint {
    let (m, n) = (m.max(n), m.min(n));
    let mut term = BigUint::one();
    let mut sum = term.clone();
    for k in 0..n {
        term *= 2u32;
        term *= m - k;
        term *= n - k;
        term = exact_div_small(&term, k + 1);
        term = exact_div_small(&term, k + 1);
        sum += &term;
    }
    sum
}
