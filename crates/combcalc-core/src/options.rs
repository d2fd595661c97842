//! Engine options and configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_N;

/// Options for combinatorial evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Ceiling on `n` (and on both Delannoy arguments); 0 = unlimited.
    pub max_n: u64,
    /// Whether evaluations share the engine's table cache. When false,
    /// each evaluation tabulates into a throw-away cache.
    pub use_cache: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_n: DEFAULT_MAX_N,
            use_cache: true,
        }
    }
}

impl Options {
    /// Set the computation ceiling.
    #[must_use]
    pub fn with_max_n(mut self, max_n: u64) -> Self {
        self.max_n = max_n;
        self
    }

    /// The ceiling, or `None` when unlimited.
    #[must_use]
    pub fn limit(&self) -> Option<u64> {
        (self.max_n > 0).then_some(self.max_n)
    }
}
