//! Simulation configuration.
//!
//! All tunables live in one value handed to each component's constructor.
//! Nothing in the crate reads ambient global state, so two simulations with
//! different configurations can coexist in one process.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::strategy::SearchParams;

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Maximum ranked neighbours retained per pivot in the graph.
    pub n_neighbours_stored: usize,
    /// Neighbours shown to the simulated user at each step (the `k` of the
    /// search signature).
    pub n_neighbours_recalled: usize,
    /// Maximum walk depth before a search is abandoned.
    pub depth_limit: usize,
    /// Probability that the simulated user fails to recognise the target in
    /// a single neighbour slot. Success at a step where the target is
    /// visible has probability `(1 - error_rate)^k`.
    pub error_rate: f64,
    /// Seed for the stumble strategy's random source. Runs with the same
    /// seed and inputs are reproducible within this implementation.
    pub seed: u64,
    /// Cap on the BFS frontier. The depth limit alone admits exponential
    /// frontier growth on dense graphs; overflowing the cap counts as
    /// exhaustion.
    pub max_frontier: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            n_neighbours_stored: 100,
            n_neighbours_recalled: 15,
            depth_limit: 5,
            error_rate: 0.0,
            seed: 123_456_789,
            max_frontier: 10_000,
        }
    }
}

impl SimConfig {
    /// Check invariants the strategies rely on.
    pub fn validate(&self) -> Result<()> {
        if self.n_neighbours_recalled == 0 {
            return Err(SearchError::InvalidConfig(
                "n_neighbours_recalled must be positive".into(),
            ));
        }
        if self.n_neighbours_recalled > self.n_neighbours_stored {
            return Err(SearchError::InvalidConfig(format!(
                "n_neighbours_recalled ({}) exceeds n_neighbours_stored ({})",
                self.n_neighbours_recalled, self.n_neighbours_stored
            )));
        }
        if self.depth_limit == 0 {
            return Err(SearchError::InvalidConfig("depth_limit must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.error_rate) {
            return Err(SearchError::InvalidConfig(format!(
                "error_rate {} outside [0, 1]",
                self.error_rate
            )));
        }
        if self.max_frontier == 0 {
            return Err(SearchError::InvalidConfig("max_frontier must be positive".into()));
        }
        Ok(())
    }

    /// The per-search parameter subset.
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            limit: self.depth_limit,
            k: self.n_neighbours_recalled,
            error_rate: self.error_rate,
            max_frontier: self.max_frontier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_zero_k() {
        let cfg = SimConfig {
            n_neighbours_recalled: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_recall_above_stored() {
        let cfg = SimConfig {
            n_neighbours_stored: 10,
            n_neighbours_recalled: 20,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_error_rate() {
        let cfg = SimConfig {
            error_rate: 1.5,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = SimConfig {
            error_rate: -0.1,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
