//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use num_bigint::BigInt;
use serde::Serialize;
use tracing::debug;

use combcalc_orchestration::interfaces::{EvaluationResult, Output, Request};

/// Format a `BigInt` for display, potentially truncating.
#[must_use]
pub fn format_result(value: &BigInt, verbose: bool) -> String {
    let s = value.to_string();
    let (sign, digits) = s.split_at(usize::from(s.starts_with('-')));
    if !verbose && digits.len() > 100 {
        format!(
            "{sign}{}...{} ({} digits)",
            &digits[..50],
            &digits[digits.len() - 50..],
            digits.len()
        )
    } else {
        s
    }
}

/// Format a row as `k: value` lines.
#[must_use]
pub fn format_row(row: &[BigInt], verbose: bool) -> String {
    let width = row.len().saturating_sub(1).to_string().len();
    row.iter()
        .enumerate()
        .map(|(k, v)| format!("{k:>width$}: {}", format_result(v, verbose)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Mathematical notation for a request, e.g. `S(10, 4)` or `M(6; 1, 2, 3)`.
#[must_use]
pub fn notation(request: &Request) -> String {
    match request {
        Request::Row { family, n } => match family.arity() {
            combcalc_core::Arity::Pair => format!("{}({n}, k)", family.symbol()),
            _ => format!("{}(0..={n})", family.symbol()),
        },
        Request::Point { family, args } => {
            let symbol = family.symbol();
            match (args.k, args.parts.is_empty()) {
                (Some(k), _) => format!("{symbol}({}, {k})", args.n),
                (None, false) => {
                    let parts: Vec<String> = args.parts.iter().map(ToString::to_string).collect();
                    format!("{symbol}({}; {})", args.n, parts.join(", "))
                }
                (None, true) => format!("{symbol}({})", args.n),
            }
        }
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format an unsigned count with thousand separators.
#[must_use]
pub fn format_number(n: impl std::fmt::Display) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write an output to a file: a value on one line, or a row one entry per line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, output: &Output) -> io::Result<()> {
    debug!(path, "writing result");
    let mut file = std::fs::File::create(path)?;
    match output {
        Output::Value(value) => writeln!(file, "{value}")?,
        Output::Row(row) => {
            for value in row {
                writeln!(file, "{value}")?;
            }
        }
    }
    Ok(())
}

/// One evaluator's entry in the JSON report. Values are decimal strings.
#[derive(Debug, Serialize)]
pub struct JsonEvaluation {
    pub evaluator: String,
    pub duration_us: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Machine-readable report printed by `--json`.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub family: &'static str,
    pub notation: String,
    pub consistent: bool,
    pub results: Vec<JsonEvaluation>,
}

impl JsonReport {
    #[must_use]
    pub fn new(request: &Request, results: &[EvaluationResult], consistent: bool) -> Self {
        let results = results
            .iter()
            .map(|r| {
                let mut entry = JsonEvaluation {
                    evaluator: r.evaluator.clone(),
                    duration_us: u64::try_from(r.duration.as_micros()).unwrap_or(u64::MAX),
                    value: None,
                    row: None,
                    error: None,
                };
                match &r.outcome {
                    Ok(Output::Value(v)) => entry.value = Some(v.to_string()),
                    Ok(Output::Row(row)) => {
                        entry.row = Some(row.iter().map(ToString::to_string).collect());
                    }
                    Err(e) => entry.error = Some(e.to_string()),
                }
                entry
            })
            .collect::<Vec<_>>();
        debug!(%request, results = results.len(), consistent, "building JSON report");
        Self {
            family: request.family().name(),
            notation: notation(request),
            consistent,
            results,
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
