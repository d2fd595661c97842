//! Argument validation: turns raw caller arguments into a typed [`Query`].

use serde::{Deserialize, Serialize};

use crate::evaluator::CombError;
use crate::family::{Arity, FunctionFamily};

/// Raw arguments as supplied by a caller.
///
/// Signed so that negative input can be represented and rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arguments {
    pub n: i64,
    #[serde(default)]
    pub k: Option<i64>,
    #[serde(default)]
    pub parts: Vec<i64>,
}

impl Arguments {
    #[must_use]
    pub fn single(n: i64) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn pair(n: i64, k: i64) -> Self {
        Self {
            n,
            k: Some(k),
            parts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parts(n: i64, parts: Vec<i64>) -> Self {
        Self { n, k: None, parts }
    }
}

/// A validated request, one variant per family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Binomial { n: usize, k: usize },
    Multinomial { n: usize, parts: Vec<usize> },
    Catalan { n: usize },
    StirlingFirst { n: usize, k: usize },
    StirlingSecond { n: usize, k: usize },
    Bell { n: usize },
    Lah { n: usize, k: usize },
    Narayana { n: usize, k: usize },
    Delannoy { m: usize, n: usize },
    Motzkin { n: usize },
    Schroder { n: usize },
    Eulerian { n: usize, k: usize },
}

impl Query {
    /// The family this query belongs to.
    #[must_use]
    pub fn family(&self) -> FunctionFamily {
        match self {
            Self::Binomial { .. } => FunctionFamily::Binomial,
            Self::Multinomial { .. } => FunctionFamily::Multinomial,
            Self::Catalan { .. } => FunctionFamily::Catalan,
            Self::StirlingFirst { .. } => FunctionFamily::StirlingFirst,
            Self::StirlingSecond { .. } => FunctionFamily::StirlingSecond,
            Self::Bell { .. } => FunctionFamily::Bell,
            Self::Lah { .. } => FunctionFamily::Lah,
            Self::Narayana { .. } => FunctionFamily::Narayana,
            Self::Delannoy { .. } => FunctionFamily::Delannoy,
            Self::Motzkin { .. } => FunctionFamily::Motzkin,
            Self::Schroder { .. } => FunctionFamily::Schroder,
            Self::Eulerian { .. } => FunctionFamily::Eulerian,
        }
    }

    /// Entry `k` of row `n` for `family`.
    ///
    /// One-argument families take `k` as their index, so iterating
    /// `k = 0..=n` walks the prefix of the sequence. Multinomial has no
    /// point form and maps to the single-part coefficient `[n]`.
    pub(crate) fn point(family: FunctionFamily, n: usize, k: usize) -> Self {
        match family {
            FunctionFamily::Binomial => Self::Binomial { n, k },
            FunctionFamily::Multinomial => Self::Multinomial { n, parts: vec![n] },
            FunctionFamily::Catalan => Self::Catalan { n: k },
            FunctionFamily::StirlingFirst => Self::StirlingFirst { n, k },
            FunctionFamily::StirlingSecond => Self::StirlingSecond { n, k },
            FunctionFamily::Bell => Self::Bell { n: k },
            FunctionFamily::Lah => Self::Lah { n, k },
            FunctionFamily::Narayana => Self::Narayana { n, k },
            FunctionFamily::Delannoy => Self::Delannoy { m: n, n: k },
            FunctionFamily::Motzkin => Self::Motzkin { n: k },
            FunctionFamily::Schroder => Self::Schroder { n: k },
            FunctionFamily::Eulerian => Self::Eulerian { n, k },
        }
    }
}

/// Check `args` against the domain of `family` and build a [`Query`].
///
/// `max_n` is the computation ceiling (0 = unlimited).
pub fn validate(
    family: FunctionFamily,
    args: &Arguments,
    max_n: u64,
) -> Result<Query, CombError> {
    let n = non_negative("n", args.n)?;
    within_ceiling(n, max_n)?;

    let query = match family.arity() {
        Arity::Single => {
            reject_k(family, args)?;
            reject_parts(family, args)?;
            match family {
                FunctionFamily::Catalan => Query::Catalan { n },
                FunctionFamily::Bell => Query::Bell { n },
                FunctionFamily::Motzkin => Query::Motzkin { n },
                _ => Query::Schroder { n },
            }
        }
        Arity::Pair => {
            reject_parts(family, args)?;
            let Some(raw_k) = args.k else {
                return Err(CombError::InvalidArgument(format!(
                    "{family} requires a second argument k"
                )));
            };
            let k = non_negative("k", raw_k)?;
            if family.requires_k_le_n() && k > n {
                return Err(CombError::InvalidArgument(format!(
                    "{family} requires k <= n (got n={n}, k={k})"
                )));
            }
            within_ceiling(k, max_n)?;
            Query::point(family, n, k)
        }
        Arity::Parts => {
            reject_k(family, args)?;
            let parts = args
                .parts
                .iter()
                .map(|&part| non_negative("part", part))
                .collect::<Result<Vec<_>, _>>()?;
            let sum = parts
                .iter()
                .try_fold(0usize, |acc, &part| acc.checked_add(part));
            if sum != Some(n) {
                return Err(CombError::InvalidArgument(format!(
                    "multinomial parts must sum to n={n} (got {})",
                    sum.map_or_else(|| "overflow".to_string(), |s| s.to_string())
                )));
            }
            Query::Multinomial { n, parts }
        }
    };

    tracing::trace!(%family, ?query, "validated");
    Ok(query)
}

fn non_negative(name: &str, value: i64) -> Result<usize, CombError> {
    if value < 0 {
        return Err(CombError::InvalidArgument(format!(
            "{name} must be non-negative (got {value})"
        )));
    }
    usize::try_from(value).map_err(|_| {
        CombError::InvalidArgument(format!("{name}={value} does not fit in a machine word"))
    })
}

fn within_ceiling(value: usize, max_n: u64) -> Result<(), CombError> {
    let value = value as u64;
    if max_n > 0 && value > max_n {
        return Err(CombError::LimitExceeded {
            n: value,
            limit: max_n,
        });
    }
    Ok(())
}

fn reject_k(family: FunctionFamily, args: &Arguments) -> Result<(), CombError> {
    if args.k.is_some() {
        return Err(CombError::InvalidArgument(format!(
            "{family} takes no second argument k"
        )));
    }
    Ok(())
}

fn reject_parts(family: FunctionFamily, args: &Arguments) -> Result<(), CombError> {
    if !args.parts.is_empty() {
        return Err(CombError::InvalidArgument(format!(
            "{family} takes no parts list"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_family_builds_query() {
        let q = validate(FunctionFamily::StirlingSecond, &Arguments::pair(10, 4), 0).unwrap();
        assert_eq!(q, Query::StirlingSecond { n: 10, k: 4 });
        assert_eq!(q.family(), FunctionFamily::StirlingSecond);
    }

    #[test]
    fn k_greater_than_n_rejected() {
        let err = validate(FunctionFamily::Binomial, &Arguments::pair(3, 5), 0).unwrap_err();
        assert!(matches!(err, CombError::InvalidArgument(ref msg) if msg.contains("k <= n")));
    }

    #[test]
    fn delannoy_accepts_k_greater_than_n() {
        let q = validate(FunctionFamily::Delannoy, &Arguments::pair(2, 7), 0).unwrap();
        assert_eq!(q, Query::Delannoy { m: 2, n: 7 });
    }

    #[test]
    fn negative_n_rejected() {
        let err =
            validate(FunctionFamily::StirlingFirst, &Arguments::pair(-1, 0), 0).unwrap_err();
        assert!(matches!(err, CombError::InvalidArgument(ref msg) if msg.contains("non-negative")));
    }

    #[test]
    fn negative_k_rejected() {
        let err = validate(FunctionFamily::Lah, &Arguments::pair(4, -2), 0).unwrap_err();
        assert!(matches!(err, CombError::InvalidArgument(_)));
    }

    #[test]
    fn missing_k_rejected() {
        let err = validate(FunctionFamily::Eulerian, &Arguments::single(4), 0).unwrap_err();
        assert!(matches!(err, CombError::InvalidArgument(ref msg) if msg.contains("requires")));
    }

    #[test]
    fn unexpected_k_rejected() {
        let err = validate(FunctionFamily::Bell, &Arguments::pair(4, 1), 0).unwrap_err();
        assert!(matches!(err, CombError::InvalidArgument(_)));
    }

    #[test]
    fn multinomial_parts_must_sum_to_n() {
        let err = validate(
            FunctionFamily::Multinomial,
            &Arguments::with_parts(5, vec![1, 2, 3]),
            0,
        )
        .unwrap_err();
        assert!(matches!(err, CombError::InvalidArgument(ref msg) if msg.contains("sum")));

        let q = validate(
            FunctionFamily::Multinomial,
            &Arguments::with_parts(6, vec![1, 2, 3]),
            0,
        )
        .unwrap();
        assert_eq!(
            q,
            Query::Multinomial {
                n: 6,
                parts: vec![1, 2, 3]
            }
        );
    }

    #[test]
    fn multinomial_negative_part_rejected() {
        let err = validate(
            FunctionFamily::Multinomial,
            &Arguments::with_parts(2, vec![3, -1]),
            0,
        )
        .unwrap_err();
        assert!(matches!(err, CombError::InvalidArgument(ref msg) if msg.contains("part")));
    }

    #[test]
    fn multinomial_empty_parts_only_for_zero() {
        assert!(validate(FunctionFamily::Multinomial, &Arguments::with_parts(0, vec![]), 0).is_ok());
        assert!(validate(FunctionFamily::Multinomial, &Arguments::with_parts(1, vec![]), 0).is_err());
    }

    #[test]
    fn ceiling_applies_to_n_and_delannoy_k() {
        let err = validate(FunctionFamily::Catalan, &Arguments::single(101), 100).unwrap_err();
        assert_eq!(err, CombError::LimitExceeded { n: 101, limit: 100 });

        let err = validate(FunctionFamily::Delannoy, &Arguments::pair(3, 500), 100).unwrap_err();
        assert_eq!(err, CombError::LimitExceeded { n: 500, limit: 100 });

        assert!(validate(FunctionFamily::Catalan, &Arguments::single(100), 100).is_ok());
    }

    #[test]
    fn point_walks_prefix_for_single_families() {
        assert_eq!(
            Query::point(FunctionFamily::Motzkin, 9, 3),
            Query::Motzkin { n: 3 }
        );
        assert_eq!(
            Query::point(FunctionFamily::Eulerian, 9, 3),
            Query::Eulerian { n: 9, k: 3 }
        );
    }
}
