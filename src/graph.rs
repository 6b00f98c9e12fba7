//! Read-only neighbour provider over the similarity graph.
//!
//! The graph is built once from a precomputed similarity ranking and never
//! mutated afterwards. Each pivot maps to an adjacency list ordered by
//! descending similarity; the ranking order is authoritative and is never
//! re-sorted here, so ties keep the backing store's ordering and a fixed
//! `(pivot, k)` query always returns the same sequence.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::error::{Result, SearchError};
use crate::symbol::Symbol;

/// One ranked adjacency list. Most pivots keep well under 32 neighbours
/// after the storage cutoff, so the common case stays inline.
type NeighbourList = SmallVec<[(Symbol, f32); 32]>;

/// A precomputed mapping from each symbol to its ranked visually-similar
/// neighbours.
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraph {
    neighbours: HashMap<Symbol, NeighbourList>,
    cap: usize,
}

impl SimilarityGraph {
    /// Create an empty graph keeping at most `cap` neighbours per pivot.
    pub fn new(cap: usize) -> Self {
        Self {
            neighbours: HashMap::new(),
            cap,
        }
    }

    /// Insert the ranked neighbour list for `pivot`.
    ///
    /// `ranked` must already be ordered by descending similarity; the list
    /// is truncated to the storage cap but otherwise stored verbatim.
    /// Replaces any previous entry for `pivot`.
    pub fn insert(&mut self, pivot: Symbol, ranked: impl IntoIterator<Item = (Symbol, f32)>) {
        let mut list: NeighbourList = ranked.into_iter().collect();
        if self.cap > 0 {
            list.truncate(self.cap);
        }
        debug_assert!(
            list.windows(2).all(|w| w[0].1 >= w[1].1),
            "neighbour list for {pivot} not in descending similarity order"
        );
        self.neighbours.insert(pivot, list);
    }

    /// Build a graph from `(pivot, ranked neighbours)` entries.
    pub fn from_entries<I, L>(cap: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (Symbol, L)>,
        L: IntoIterator<Item = (Symbol, f32)>,
    {
        let mut graph = Self::new(cap);
        for (pivot, ranked) in entries {
            graph.insert(pivot, ranked);
        }
        graph
    }

    /// Whether `pivot` has an entry in the graph.
    pub fn knows(&self, pivot: Symbol) -> bool {
        self.neighbours.contains_key(&pivot)
    }

    /// The `k` symbols most similar to `pivot`, ordered by descending
    /// similarity, truncated to `k` even if more are stored.
    pub fn neighbours(&self, pivot: Symbol, k: usize) -> Result<Vec<Symbol>> {
        let list = self
            .neighbours
            .get(&pivot)
            .ok_or(SearchError::UnknownSymbol(pivot))?;
        Ok(list.iter().take(k).map(|&(s, _)| s).collect())
    }

    /// Number of pivots with an entry.
    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    /// Whether the graph holds no pivots at all.
    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    /// Iterate over all pivots, in no particular order.
    pub fn pivots(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.neighbours.keys().copied()
    }
}
