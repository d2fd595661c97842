//! Property-based tests for the orchestration path used by the binary.

use std::sync::Arc;

use proptest::prelude::*;

use combcalc_core::registry::DefaultFactory;
use combcalc_core::{Arguments, CombError, FunctionFamily, Options, TableCache};
use combcalc_orchestration::evaluator_selection::get_evaluators_to_run;
use combcalc_orchestration::interfaces::{Output, Request};
use combcalc_orchestration::orchestrator::{analyze_comparison_results, execute_evaluations};

fn run_all(request: &Request, opts: &Options) -> Result<Output, CombError> {
    let factory = DefaultFactory::new();
    let evaluators = get_evaluators_to_run("all", &factory).unwrap();
    let cache = Arc::new(TableCache::new());
    let results = execute_evaluations(&evaluators, request, opts, &cache);
    analyze_comparison_results(&results)?;
    results[0].outcome.clone()
}

fn family_strategy() -> impl Strategy<Value = FunctionFamily> {
    prop::sample::select(FunctionFamily::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Any valid point request yields agreeing evaluators.
    #[test]
    fn evaluators_agree_for_valid_points(family in family_strategy(), n in 0i64..30, seed in 0i64..1000) {
        let args = match family.arity() {
            combcalc_core::Arity::Single => Arguments::single(n),
            combcalc_core::Arity::Pair => Arguments::pair(n, seed % (n + 1)),
            combcalc_core::Arity::Parts => {
                let first = seed % (n + 1);
                Arguments::with_parts(n, vec![first, n - first])
            }
        };
        let request = Request::Point { family, args };
        prop_assert!(run_all(&request, &Options::default()).is_ok(), "{}", request);
    }

    /// Rows from both evaluators agree and have n + 1 entries.
    #[test]
    fn rows_agree(family in family_strategy(), n in 0i64..25) {
        prop_assume!(family != FunctionFamily::Multinomial);
        let request = Request::Row { family, n };
        match run_all(&request, &Options::default()) {
            Ok(Output::Row(row)) => prop_assert_eq!(row.len() as i64, n + 1),
            other => prop_assert!(false, "{}: {:?}", request, other),
        }
    }

    /// Arguments above the ceiling fail with LimitExceeded for every family.
    #[test]
    fn ceiling_rejects(family in family_strategy(), limit in 1u64..50, excess in 1i64..50) {
        let n = limit as i64 + excess;
        let args = match family.arity() {
            combcalc_core::Arity::Single => Arguments::single(n),
            combcalc_core::Arity::Pair => Arguments::pair(n, 0),
            combcalc_core::Arity::Parts => Arguments::with_parts(n, vec![n]),
        };
        let request = Request::Point { family, args };
        let result = run_all(&request, &Options::default().with_max_n(limit));
        prop_assert!(matches!(result, Err(CombError::LimitExceeded { .. })), "{}", request);
    }
}
