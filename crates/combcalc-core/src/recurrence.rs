//! Row and term recurrences for the tabulated families.
//!
//! Every triangle row `n` depends only on row `n - 1`, and every sequence
//! term only on the two preceding terms, so tables grow bottom-up from
//! hard-coded base values.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::Serialize;

use crate::arith::exact_div_small;

/// Triangle families whose rows are built from the previous row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Triangle {
    /// Unsigned Stirling numbers of the first kind, c(n, k).
    StirlingFirst,
    StirlingSecond,
    Lah,
    Eulerian,
}

impl Triangle {
    pub const ALL: [Triangle; 4] = [
        Self::StirlingFirst,
        Self::StirlingSecond,
        Self::Lah,
        Self::Eulerian,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::StirlingFirst => "stirling1",
            Self::StirlingSecond => "stirling2",
            Self::Lah => "lah",
            Self::Eulerian => "eulerian",
        }
    }

    /// Row 0, shared by every triangle: T(0, 0) = 1.
    pub(crate) fn base_row(self) -> Vec<BigUint> {
        vec![BigUint::one()]
    }

    /// Row `n` (for `n >= 1`) from row `n - 1`.
    ///
    /// Each family has the shape `T(n,k) = a(n,k) T(n-1,k-1) + b(n,k) T(n-1,k)`.
    pub(crate) fn next_row(self, n: usize, prev: &[BigUint]) -> Vec<BigUint> {
        debug_assert_eq!(prev.len(), n, "row {} must have {n} entries", n - 1);
        match self {
            // c(n,k) = c(n-1,k-1) + (n-1) c(n-1,k)
            Self::StirlingFirst => two_term_row(n, prev, |_| (1, n - 1)),
            // S(n,k) = S(n-1,k-1) + k S(n-1,k)
            Self::StirlingSecond => two_term_row(n, prev, |k| (1, k)),
            // L(n,k) = L(n-1,k-1) + (n-1+k) L(n-1,k)
            Self::Lah => two_term_row(n, prev, |k| (1, n - 1 + k)),
            // A(n,k) = (n-k) A(n-1,k-1) + (k+1) A(n-1,k)
            Self::Eulerian => two_term_row(n, prev, |k| (n - k, k + 1)),
        }
    }
}

fn two_term_row(
    n: usize,
    prev: &[BigUint],
    coefficients: impl Fn(usize) -> (usize, usize),
) -> Vec<BigUint> {
    (0..=n)
        .map(|k| {
            let (a, b) = coefficients(k);
            let mut value = BigUint::zero();
            if k > 0 && a != 0 {
                if let Some(left) = prev.get(k - 1) {
                    value += left * a;
                }
            }
            if b != 0 {
                if let Some(right) = prev.get(k) {
                    value += right * b;
                }
            }
            value
        })
        .collect()
}

/// One-argument families tabulated term by term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sequence {
    Motzkin,
    /// Large Schröder numbers.
    Schroder,
}

impl Sequence {
    pub const ALL: [Sequence; 2] = [Self::Motzkin, Self::Schroder];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Motzkin => "motzkin",
            Self::Schroder => "schroder",
        }
    }

    /// Term `n`, given `window` = the terms `n-2` and `n-1` (fewer when `n < 2`).
    pub(crate) fn term(self, n: usize, window: &[BigUint]) -> BigUint {
        match (self, n) {
            (Self::Motzkin, 0 | 1) | (Self::Schroder, 0) => BigUint::one(),
            (Self::Schroder, 1) => BigUint::from(2u32),
            (Self::Motzkin, _) => {
                let (older, previous) = last_two(window);
                // (n+2) M(n) = (2n+1) M(n-1) + 3(n-1) M(n-2)
                let numerator = previous * (2 * n + 1) + older * (3 * (n - 1));
                exact_div_small(&numerator, n + 2)
            }
            (Self::Schroder, _) => {
                let (older, previous) = last_two(window);
                // (n+1) S(n) = 3(2n-1) S(n-1) - (n-2) S(n-2)
                let numerator = previous * 3u32 * (2 * n - 1) - older * (n - 2);
                exact_div_small(&numerator, n + 1)
            }
        }
    }
}

fn last_two(window: &[BigUint]) -> (&BigUint, &BigUint) {
    let len = window.len();
    debug_assert!(len >= 2, "recurrence needs two preceding terms");
    (&window[len - 2], &window[len - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(triangle: Triangle, rows: usize) -> Vec<Vec<BigUint>> {
        let mut table = vec![triangle.base_row()];
        for n in 1..=rows {
            let next = triangle.next_row(n, &table[n - 1]);
            table.push(next);
        }
        table
    }

    fn as_u64(row: &[BigUint]) -> Vec<u64> {
        row.iter().map(|v| u64::try_from(v).unwrap()).collect()
    }

    fn sequence(seq: Sequence, len: usize) -> Vec<u64> {
        let mut terms: Vec<BigUint> = Vec::new();
        for n in 0..len {
            let start = terms.len().saturating_sub(2);
            let t = seq.term(n, &terms[start..]);
            terms.push(t);
        }
        as_u64(&terms)
    }

    #[test]
    fn rows_have_n_plus_one_entries() {
        for triangle in Triangle::ALL {
            for (n, row) in build(triangle, 8).iter().enumerate() {
                assert_eq!(row.len(), n + 1, "{} row {n}", triangle.name());
            }
        }
    }

    #[test]
    fn stirling_first_unsigned_rows() {
        let t = build(Triangle::StirlingFirst, 5);
        assert_eq!(as_u64(&t[0]), [1]);
        assert_eq!(as_u64(&t[1]), [0, 1]);
        assert_eq!(as_u64(&t[4]), [0, 6, 11, 6, 1]);
        assert_eq!(as_u64(&t[5]), [0, 24, 50, 35, 10, 1]);
    }

    #[test]
    fn stirling_second_rows() {
        let t = build(Triangle::StirlingSecond, 5);
        assert_eq!(as_u64(&t[3]), [0, 1, 3, 1]);
        assert_eq!(as_u64(&t[5]), [0, 1, 15, 25, 10, 1]);
    }

    #[test]
    fn lah_rows() {
        let t = build(Triangle::Lah, 4);
        assert_eq!(as_u64(&t[1]), [0, 1]);
        assert_eq!(as_u64(&t[3]), [0, 6, 6, 1]);
        assert_eq!(as_u64(&t[4]), [0, 24, 36, 12, 1]);
    }

    #[test]
    fn eulerian_rows() {
        let t = build(Triangle::Eulerian, 5);
        assert_eq!(as_u64(&t[1]), [1, 0]);
        assert_eq!(as_u64(&t[4]), [1, 11, 11, 1, 0]);
        assert_eq!(as_u64(&t[5]), [1, 26, 66, 26, 1, 0]);
    }

    #[test]
    fn motzkin_terms() {
        assert_eq!(
            sequence(Sequence::Motzkin, 10),
            [1, 1, 2, 4, 9, 21, 51, 127, 323, 835]
        );
    }

    #[test]
    fn schroder_terms() {
        assert_eq!(
            sequence(Sequence::Schroder, 9),
            [1, 2, 6, 22, 90, 394, 1806, 8558, 41586]
        );
    }
}
