//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, warn};

use combcalc_core::{CombError, Engine, Evaluator, Options, TableCache};

use crate::interfaces::{EvaluationResult, Output, Request};

/// Run `request` through one evaluator.
fn run_one(
    evaluator: &Arc<dyn Evaluator>,
    request: &Request,
    opts: &Options,
    cache: &Arc<TableCache>,
) -> EvaluationResult {
    let engine = Engine::with_cache(opts.clone(), Arc::clone(cache))
        .with_evaluator(Arc::clone(evaluator));
    let start = Instant::now();
    let outcome = match request {
        Request::Point { family, args } => engine.evaluate(*family, args).map(Output::Value),
        Request::Row { family, n } => engine.row(*family, *n).map(Output::Row),
    };
    let duration = start.elapsed();
    debug!(
        evaluator = evaluator.name(),
        %request,
        ok = outcome.is_ok(),
        elapsed_us = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
        "evaluation finished"
    );
    EvaluationResult {
        evaluator: evaluator.name().to_string(),
        outcome,
        duration,
    }
}

/// Execute `request` with all given evaluators.
///
/// Evaluators share `cache`; more than one evaluator runs in parallel on
/// the rayon pool. Results come back in the order of `evaluators`.
pub fn execute_evaluations(
    evaluators: &[Arc<dyn Evaluator>],
    request: &Request,
    opts: &Options,
    cache: &Arc<TableCache>,
) -> Vec<EvaluationResult> {
    if let [evaluator] = evaluators {
        return vec![run_one(evaluator, request, opts, cache)];
    }

    evaluators
        .par_iter()
        .map(|evaluator| run_one(evaluator, request, opts, cache))
        .collect()
}

/// Analyze comparison results for mismatches.
///
/// Successful outputs must all be equal. When every evaluator failed, the
/// first error is returned.
pub fn analyze_comparison_results(results: &[EvaluationResult]) -> Result<(), CombError> {
    let mut valid = results.iter().filter_map(|r| r.outcome.as_ref().ok());

    let Some(first) = valid.next() else {
        return Err(results
            .iter()
            .find_map(|r| r.outcome.as_ref().err().cloned())
            .unwrap_or_else(|| CombError::Config("no evaluators selected".into())));
    };

    for output in valid {
        if output != first {
            warn!("evaluators disagree");
            return Err(CombError::Mismatch);
        }
    }

    Ok(())
}
