//! Memoizing wrappers for the neighbour and distance oracles.
//!
//! Both oracles answer from small, static datasets, so their results never
//! change for a given argument tuple and entries are never evicted. The
//! wrappers guarantee at-most-once evaluation per distinct key for the
//! lifetime of the cache, which keeps repeated queries from the walk loops
//! cheap.
//!
//! Cache membership is deliberately distinct from data presence: `knows`
//! always delegates to the wrapped store's own existence check, letting a
//! caller separate "never computed, but computable" from "not computable".
//!
//! Single-threaded by design (interior mutability via `RefCell`); a
//! concurrent driver needs one cache per worker or a synchronized map.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::hash::Hash;

use crate::error::Result;
use crate::graph::SimilarityGraph;
use crate::strokes::StrokeEditDistance;
use crate::symbol::Symbol;

/// A never-expiring memo table.
///
/// `call` evaluates the supplied function at most once per distinct key;
/// later calls with the same key return the stored value. Only successful
/// results are stored, which is equivalent for our oracles since their
/// failures are deterministic too.
#[derive(Debug, Default)]
pub struct Memo<K, V> {
    store: RefCell<HashMap<K, V>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl<K: Eq + Hash + Clone, V: Clone> Memo<K, V> {
    /// Create an empty memo table.
    pub fn new() -> Self {
        Self {
            store: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// Look up `key`, evaluating `f` on first occurrence.
    pub fn call<F>(&self, key: K, f: F) -> Result<V>
    where
        F: FnOnce(&K) -> Result<V>,
    {
        if let Some(value) = self.store.borrow().get(&key) {
            self.hits.set(self.hits.get() + 1);
            return Ok(value.clone());
        }
        self.misses.set(self.misses.get() + 1);
        let value = f(&key)?;
        self.store.borrow_mut().insert(key, value.clone());
        Ok(value)
    }

    /// Number of distinct keys stored so far.
    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }

    /// (hits, misses) counters since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits.get(), self.misses.get())
    }
}

/// Memoized neighbour provider, keyed by `(pivot, k)`.
#[derive(Debug)]
pub struct CachedNeighbours {
    graph: SimilarityGraph,
    memo: Memo<(Symbol, usize), Vec<Symbol>>,
}

impl CachedNeighbours {
    /// Wrap a similarity graph.
    pub fn new(graph: SimilarityGraph) -> Self {
        Self {
            graph,
            memo: Memo::new(),
        }
    }

    /// The top `k` neighbours of `pivot`, memoized.
    pub fn call(&self, pivot: Symbol, k: usize) -> Result<Vec<Symbol>> {
        self.memo.call((pivot, k), |&(pivot, k)| self.graph.neighbours(pivot, k))
    }

    /// Whether the backing graph has an entry for `pivot`. Independent of
    /// whether `pivot`'s neighbours have been fetched before.
    pub fn knows(&self, pivot: Symbol) -> bool {
        self.graph.knows(pivot)
    }

    /// The wrapped graph.
    pub fn graph(&self) -> &SimilarityGraph {
        &self.graph
    }

    /// (hits, misses) counters for the memo table.
    pub fn cache_stats(&self) -> (u64, u64) {
        self.memo.stats()
    }
}

/// Memoized stroke edit distance, keyed by the ordered pair `(a, b)`.
///
/// `(a, b)` and `(b, a)` are distinct keys even though the distance is
/// symmetric in value; callers must not assume both orders are populated.
#[derive(Debug)]
pub struct CachedDistance {
    sed: StrokeEditDistance,
    memo: Memo<(Symbol, Symbol), f64>,
}

impl CachedDistance {
    /// Wrap a stroke database.
    pub fn new(sed: StrokeEditDistance) -> Self {
        Self {
            sed,
            memo: Memo::new(),
        }
    }

    /// Distance between `a` and `b`, memoized.
    pub fn call(&self, a: Symbol, b: Symbol) -> Result<f64> {
        self.memo.call((a, b), |&(a, b)| self.sed.distance(a, b))
    }

    /// Whether the backing database has stroke data for `symbol`.
    /// Independent of cache membership.
    pub fn knows(&self, symbol: Symbol) -> bool {
        self.sed.knows(symbol)
    }

    /// (hits, misses) counters for the memo table.
    pub fn cache_stats(&self) -> (u64, u64) {
        self.memo.stats()
    }
}
