//! Evaluator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::evaluator::{CombError, Evaluator};
use crate::explicit::ExplicitEvaluator;
use crate::tabulated::TabulatedEvaluator;

/// Factory trait for creating evaluators.
pub trait EvaluatorFactory: Send + Sync {
    /// Get or create an evaluator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Evaluator>, CombError>;

    /// List all available evaluator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Evaluator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_evaluator(name: &str) -> Result<Arc<dyn Evaluator>, CombError> {
        match name {
            "tabulated" | "recurrence" => Ok(Arc::new(TabulatedEvaluator::new())),
            "explicit" | "formula" => Ok(Arc::new(ExplicitEvaluator::new())),
            _ => Err(CombError::Config(format!("unknown evaluator: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Evaluator>, CombError> {
        if let Some(evaluator) = self.cache.read().get(name) {
            return Ok(Arc::clone(evaluator));
        }

        let evaluator = Self::create_evaluator(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&evaluator));
        Ok(evaluator)
    }

    fn available(&self) -> Vec<&str> {
        vec!["tabulated", "explicit"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_creates_tabulated() {
        let factory = DefaultFactory::new();
        let evaluator = factory.get("tabulated").unwrap();
        assert_eq!(evaluator.name(), "Tabulated");
    }

    #[test]
    fn factory_creates_explicit() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.get("explicit").unwrap().name(), "Explicit");
        assert_eq!(factory.get("formula").unwrap().name(), "Explicit");
    }

    #[test]
    fn factory_caches() {
        let factory = DefaultFactory::new();
        let first = factory.get("tabulated").unwrap();
        let second = factory.get("tabulated").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn factory_unknown_name() {
        let factory = DefaultFactory::new();
        assert!(matches!(
            factory.get("nonexistent"),
            Err(CombError::Config(_))
        ));
    }

    #[test]
    fn factory_available() {
        let factory = DefaultFactory::new();
        let available = factory.available();
        assert!(available.contains(&"tabulated"));
        assert!(available.contains(&"explicit"));
    }
}
