//! Write-once table cache for the recurrence-based families.
//!
//! Rows are computed outside any lock from a snapshot of the highest cached
//! row, then appended under a short write lock only if still absent. Two
//! threads racing on the same missing rows may both compute them; the
//! second insertion is dropped. Stored rows are never mutated.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::Zero;
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, trace};

use crate::recurrence::{Sequence, Triangle};

/// An immutable, shareable triangle row.
pub type Row = Arc<[BigUint]>;

/// Counters describing cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Total rows held across all triangles.
    pub rows: usize,
    /// Total terms held across all sequences.
    pub terms: usize,
}

/// Memoized triangles and sequences, filled lazily from their base cases.
pub struct TableCache {
    triangles: [RwLock<Vec<Row>>; 4],
    sequences: [RwLock<Vec<BigUint>>; 2],
    hits: AtomicU64,
    misses: AtomicU64,
}

impl TableCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            triangles: Default::default(),
            sequences: Default::default(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Row `n` of `triangle`, computing any missing rows below it first.
    pub fn row(&self, triangle: Triangle, n: usize) -> Row {
        let table = &self.triangles[triangle.index()];

        let (start, mut last) = {
            let rows = table.read();
            if let Some(row) = rows.get(n) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                trace!(table = triangle.name(), n, "row hit");
                return Arc::clone(row);
            }
            (rows.len(), rows.last().cloned())
        };

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(table = triangle.name(), from = start, to = n, "extending triangle");

        let mut fresh: Vec<Row> = Vec::with_capacity(n + 1 - start);
        for m in start..=n {
            let row: Row = match last.as_deref() {
                None => triangle.base_row().into(),
                Some(prev) => triangle.next_row(m, prev).into(),
            };
            fresh.push(Arc::clone(&row));
            last = Some(row);
        }
        let result = Arc::clone(&fresh[n - start]);

        let mut rows = table.write();
        // A concurrent clear() may have shrunk the table below our snapshot.
        if rows.len() >= start {
            for (index, row) in (start..).zip(fresh) {
                if index == rows.len() {
                    rows.push(row);
                }
            }
        }
        result
    }

    /// Entry `T(n, k)` of `triangle`; zero when `k > n`.
    pub fn entry(&self, triangle: Triangle, n: usize, k: usize) -> BigUint {
        if k > n {
            return BigUint::zero();
        }
        self.row(triangle, n)[k].clone()
    }

    /// Term `n` of `sequence`, computing any missing terms below it first.
    pub fn term(&self, sequence: Sequence, n: usize) -> BigUint {
        let table = &self.sequences[sequence.index()];

        let (start, mut window) = {
            let terms = table.read();
            if let Some(term) = terms.get(n) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                trace!(table = sequence.name(), n, "term hit");
                return term.clone();
            }
            let tail = terms.len().saturating_sub(2);
            (terms.len(), terms[tail..].to_vec())
        };

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(table = sequence.name(), from = start, to = n, "extending sequence");

        let mut fresh = Vec::with_capacity(n + 1 - start);
        for m in start..=n {
            let value = sequence.term(m, &window);
            window.push(value.clone());
            if window.len() > 2 {
                window.remove(0);
            }
            fresh.push(value);
        }
        let result = fresh[n - start].clone();

        let mut terms = table.write();
        if terms.len() >= start {
            for (index, term) in (start..).zip(fresh) {
                if index == terms.len() {
                    terms.push(term);
                }
            }
        }
        result
    }

    /// Number of rows currently held for `triangle`.
    pub fn rows_cached(&self, triangle: Triangle) -> usize {
        self.triangles[triangle.index()].read().len()
    }

    /// Number of terms currently held for `sequence`.
    pub fn terms_cached(&self, sequence: Sequence) -> usize {
        self.sequences[sequence.index()].read().len()
    }

    /// Snapshot of the usage counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            rows: Triangle::ALL.iter().map(|&t| self.rows_cached(t)).sum(),
            terms: Sequence::ALL.iter().map(|&s| self.terms_cached(s)).sum(),
        }
    }

    /// Check if nothing has been tabulated yet.
    pub fn is_empty(&self) -> bool {
        let stats = self.stats();
        stats.rows == 0 && stats.terms == 0
    }

    /// Drop every table. Rows already handed out stay valid.
    pub fn clear(&self) {
        for table in &self.triangles {
            table.write().clear();
        }
        for table in &self.sequences {
            table.write().clear();
        }
    }
}

impl Default for TableCache {
    fn default() -> Self {
        Self::new()
    }
}
