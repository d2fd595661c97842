//! Orchestration interfaces.

use std::fmt;
use std::time::Duration;

use num_bigint::BigInt;

use combcalc_core::{Arguments, CombError, FunctionFamily};

/// What to evaluate: a single value or a whole row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Point {
        family: FunctionFamily,
        args: Arguments,
    },
    Row {
        family: FunctionFamily,
        n: i64,
    },
}

impl Request {
    #[must_use]
    pub fn family(&self) -> FunctionFamily {
        match self {
            Self::Point { family, .. } | Self::Row { family, .. } => *family,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { family, n } => write!(f, "{family} row {n}"),
            Self::Point { family, args } => {
                write!(f, "{family}({}", args.n)?;
                if let Some(k) = args.k {
                    write!(f, ", {k}")?;
                }
                if !args.parts.is_empty() {
                    let parts: Vec<String> = args.parts.iter().map(ToString::to_string).collect();
                    write!(f, ", [{}]", parts.join(", "))?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A computed value or row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Value(BigInt),
    Row(Vec<BigInt>),
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a single evaluation result.
    fn present_result(
        &self,
        evaluator: &str,
        request: &Request,
        output: &Output,
        duration: Duration,
        details: bool,
    );

    /// Present a comparison between evaluators.
    fn present_comparison(&self, results: &[EvaluationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single evaluator run.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    /// Evaluator name.
    pub evaluator: String,
    /// The computed output or a structured error.
    pub outcome: Result<Output, CombError>,
    /// Evaluation duration.
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_result() {
        let result = EvaluationResult {
            evaluator: "Tabulated".into(),
            outcome: Ok(Output::Value(BigInt::from(34_105))),
            duration: Duration::from_millis(3),
        };
        assert_eq!(result.evaluator, "Tabulated");
        assert!(result.outcome.is_ok());
    }

    #[test]
    fn request_display() {
        let point = Request::Point {
            family: FunctionFamily::StirlingSecond,
            args: Arguments::pair(10, 4),
        };
        assert_eq!(point.to_string(), "stirling2(10, 4)");

        let parts = Request::Point {
            family: FunctionFamily::Multinomial,
            args: Arguments::with_parts(6, vec![1, 2, 3]),
        };
        assert_eq!(parts.to_string(), "multinomial(6, [1, 2, 3])");

        let row = Request::Row {
            family: FunctionFamily::Lah,
            n: 5,
        };
        assert_eq!(row.to_string(), "lah row 5");
        assert_eq!(row.family(), FunctionFamily::Lah);
    }
}
