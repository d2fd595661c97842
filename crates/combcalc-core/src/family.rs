//! The closed catalog of supported combinatorial function families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::evaluator::CombError;

/// Shape of the arguments a family takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// A single index `n`.
    Single,
    /// A pair `(n, k)`.
    Pair,
    /// A total `n` plus a list of parts summing to it.
    Parts,
}

/// Identifies which sequence is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionFamily {
    Binomial,
    Multinomial,
    Catalan,
    #[serde(rename = "stirling1", alias = "stirling_first")]
    StirlingFirst,
    #[serde(rename = "stirling2", alias = "stirling_second")]
    StirlingSecond,
    Bell,
    Lah,
    Narayana,
    Delannoy,
    Motzkin,
    Schroder,
    Eulerian,
}

impl FunctionFamily {
    /// Every family, in catalog order.
    pub const ALL: [FunctionFamily; 12] = [
        Self::Binomial,
        Self::Multinomial,
        Self::Catalan,
        Self::StirlingFirst,
        Self::StirlingSecond,
        Self::Bell,
        Self::Lah,
        Self::Narayana,
        Self::Delannoy,
        Self::Motzkin,
        Self::Schroder,
        Self::Eulerian,
    ];

    /// Canonical lowercase name, as accepted on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Binomial => "binomial",
            Self::Multinomial => "multinomial",
            Self::Catalan => "catalan",
            Self::StirlingFirst => "stirling1",
            Self::StirlingSecond => "stirling2",
            Self::Bell => "bell",
            Self::Lah => "lah",
            Self::Narayana => "narayana",
            Self::Delannoy => "delannoy",
            Self::Motzkin => "motzkin",
            Self::Schroder => "schroder",
            Self::Eulerian => "eulerian",
        }
    }

    /// Mathematical notation used when presenting a value.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Binomial => "C",
            Self::Multinomial => "M",
            Self::Catalan => "Cat",
            Self::StirlingFirst => "s",
            Self::StirlingSecond => "S",
            Self::Bell => "B",
            Self::Lah => "L",
            Self::Narayana => "N",
            Self::Delannoy => "D",
            Self::Motzkin => "Mz",
            Self::Schroder => "Sch",
            Self::Eulerian => "A",
        }
    }

    #[must_use]
    pub fn arity(self) -> Arity {
        match self {
            Self::Multinomial => Arity::Parts,
            Self::Catalan | Self::Bell | Self::Motzkin | Self::Schroder => Arity::Single,
            Self::Binomial
            | Self::StirlingFirst
            | Self::StirlingSecond
            | Self::Lah
            | Self::Narayana
            | Self::Delannoy
            | Self::Eulerian => Arity::Pair,
        }
    }

    /// Whether the public boundary rejects `k > n` for this family.
    ///
    /// Delannoy numbers are symmetric in their arguments, so any pair is valid.
    #[must_use]
    pub fn requires_k_le_n(self) -> bool {
        matches!(
            self,
            Self::Binomial
                | Self::StirlingFirst
                | Self::StirlingSecond
                | Self::Lah
                | Self::Narayana
                | Self::Eulerian
        )
    }
}

impl fmt::Display for FunctionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FunctionFamily {
    type Err = CombError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let family = match s.trim().to_ascii_lowercase().as_str() {
            "binomial" | "choose" | "c" => Self::Binomial,
            "multinomial" => Self::Multinomial,
            "catalan" => Self::Catalan,
            "stirling1" | "stirling_first" | "stirling-first" | "s1" => Self::StirlingFirst,
            "stirling2" | "stirling_second" | "stirling-second" | "s2" => Self::StirlingSecond,
            "bell" => Self::Bell,
            "lah" => Self::Lah,
            "narayana" => Self::Narayana,
            "delannoy" => Self::Delannoy,
            "motzkin" => Self::Motzkin,
            "schroder" | "schroeder" | "schröder" => Self::Schroder,
            "eulerian" => Self::Eulerian,
            other => return Err(CombError::Config(format!("unknown function family: {other}"))),
        };
        Ok(family)
    }
}
