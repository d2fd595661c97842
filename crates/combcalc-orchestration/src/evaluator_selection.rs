//! Evaluator selection logic.

use std::sync::Arc;

use combcalc_core::registry::EvaluatorFactory;
use combcalc_core::{CombError, Evaluator};

/// Get evaluators to run based on the `--evaluator` selection.
pub fn get_evaluators_to_run(
    selection: &str,
    factory: &dyn EvaluatorFactory,
) -> Result<Vec<Arc<dyn Evaluator>>, CombError> {
    match selection {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combcalc_core::registry::DefaultFactory;

    #[test]
    fn select_all() {
        let factory = DefaultFactory::new();
        let evaluators = get_evaluators_to_run("all", &factory).unwrap();
        let names: Vec<&str> = evaluators.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["Tabulated", "Explicit"]);
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::new();
        let evaluators = get_evaluators_to_run("explicit", &factory).unwrap();
        assert_eq!(evaluators.len(), 1);
        assert_eq!(evaluators[0].name(), "Explicit");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::new();
        let result = get_evaluators_to_run("unknown", &factory);
        assert!(matches!(result, Err(CombError::Config(_))));
    }
}
