//! Search strategies over the similarity graph.
//!
//! Three ways of simulating a user hunting for a target character:
//!
//! | Strategy | Guidance | Models |
//! |------------|---------------------------|----------------------------------|
//! | `greedy` | stroke distance to target | a user always picking the |
//! | | | closest-looking neighbour |
//! | `shortest` | bounded BFS | the best case: shortest hop path |
//! | `stumble` | none (random walk) | a baseline with no visual skill |
//!
//! All strategies share one signature: given `(query, target)` and the
//! parameters in [`SearchParams`], return `Some(path)` for an attempted
//! walk (successful or not) or `None` when no search could be attempted at
//! all. A returned path always starts at `query`; it ends at `target`
//! exactly when the search succeeded, and its length never exceeds
//! `limit + 1`.
//!
//! Greedy and stumble share a recognition-error model: when the target is
//! visible among the `k` neighbours on screen, the simulated user spots it
//! with probability `(1 - error_rate)^k`. A miss is per step; the walk
//! carries on as if the target had not been there, and the target may be
//! re-offered later if the walk returns to one of its neighbours. BFS is a
//! best-case bound and ignores the error model.

pub mod greedy;
pub mod shortest;
pub mod stumble;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cache::{CachedDistance, CachedNeighbours};
use crate::error::SearchError;
use crate::symbol::{Path, Symbol};

/// Per-search tunables, usually derived from
/// [`SimConfig::search_params`](crate::config::SimConfig::search_params).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Maximum walk depth; failed paths hold at most `limit + 1` symbols.
    pub limit: usize,
    /// Neighbours fetched per step.
    pub k: usize,
    /// Per-slot recognition failure probability.
    pub error_rate: f64,
    /// BFS frontier cap; overflow counts as exhaustion.
    pub max_frontier: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            limit: 5,
            k: 15,
            error_rate: 0.0,
            max_frontier: 10_000,
        }
    }
}

/// The available traversal strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Greedy nearest-neighbour walk guided by stroke distance.
    Greedy,
    /// Bounded breadth-first search; shortest path by hop count.
    Shortest,
    /// Unguided uniform random walk.
    Stumble,
}

impl Strategy {
    /// All strategies, for iteration in tests and sweeps.
    pub const ALL: [Strategy; 3] = [Strategy::Greedy, Strategy::Shortest, Strategy::Stumble];

    /// Run this strategy for one `(query, target)` pair.
    ///
    /// `query != target` is required; the pair would not be a search
    /// otherwise.
    pub fn search<R: Rng>(
        self,
        neighbours: &CachedNeighbours,
        sed: &CachedDistance,
        query: Symbol,
        target: Symbol,
        params: &SearchParams,
        rng: &mut R,
    ) -> Option<Path> {
        debug_assert_ne!(query, target, "query and target must differ");
        match self {
            Strategy::Greedy => greedy::search(neighbours, sed, query, target, params, rng),
            Strategy::Shortest => shortest::search(neighbours, sed, query, target, params),
            Strategy::Stumble => stumble::search(neighbours, query, target, params, rng),
        }
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(Strategy::Greedy),
            "shortest" => Ok(Strategy::Shortest),
            "stumble" => Ok(Strategy::Stumble),
            other => Err(SearchError::InvalidStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Greedy => "greedy",
            Strategy::Shortest => "shortest",
            Strategy::Stumble => "stumble",
        };
        f.write_str(name)
    }
}

/// Whether the simulated user spots the target among `k` visible
/// neighbours: success with probability `(1 - error_rate)^k`.
///
/// The coupling to the neighbour-list size `k` is deliberate: each visible
/// slot is an independent chance to mis-recognise.
pub(crate) fn target_recognised<R: Rng>(k: usize, error_rate: f64, rng: &mut R) -> bool {
    if error_rate <= 0.0 {
        return true;
    }
    if error_rate >= 1.0 {
        return false;
    }
    rng.random::<f64>() < (1.0 - error_rate).powi(k as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            let parsed: Strategy = strategy.to_string().parse().unwrap();
            assert_eq!(parsed, strategy);
        }
    }

    #[test]
    fn unknown_strategy_name_is_fatal() {
        let err = "depth-first".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, SearchError::InvalidStrategy(_)));
    }

    #[test]
    fn zero_error_rate_always_recognises() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(target_recognised(15, 0.0, &mut rng));
        }
    }

    #[test]
    fn unit_error_rate_never_recognises() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(!target_recognised(15, 1.0, &mut rng));
        }
    }

    #[test]
    fn miss_rate_grows_with_k() {
        // With e = 0.1, success probability is 0.9^k; k = 40 should miss
        // far more often than k = 2 over many draws.
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 2_000;
        let hits_small = (0..trials)
            .filter(|_| target_recognised(2, 0.1, &mut rng))
            .count();
        let hits_large = (0..trials)
            .filter(|_| target_recognised(40, 0.1, &mut rng))
            .count();
        assert!(hits_small > hits_large);
    }
}
