//! The simulation driver.
//!
//! Owns the cached oracles, the configuration, and a seeded random source,
//! and runs a chosen strategy over a set of (query, target) pairs. Pairs
//! are independent of each other; the only state shared between them is
//! the memo tables, which are read-mostly and append-only.
//!
//! Per-pair oracle failures are recovered locally: the pair is recorded as
//! a total failure and the run continues. Only configuration and trace
//! file errors abort a run.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::cache::{CachedDistance, CachedNeighbours};
use crate::config::SimConfig;
use crate::error::Result;
use crate::graph::SimilarityGraph;
use crate::strategy::{SearchParams, Strategy};
use crate::strokes::StrokeEditDistance;
use crate::symbol::{Path, Symbol};
use crate::trace::Trace;

/// A configured simulation over one similarity graph and stroke database.
pub struct Simulation {
    neighbours: CachedNeighbours,
    sed: CachedDistance,
    params: SearchParams,
    rng: StdRng,
}

impl Simulation {
    /// Build a simulation from the backing stores and a configuration.
    pub fn new(graph: SimilarityGraph, sed: StrokeEditDistance, config: &SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            neighbours: CachedNeighbours::new(graph),
            sed: CachedDistance::new(sed),
            params: config.search_params(),
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// Run `strategy` for a single (query, target) pair.
    pub fn search_one(&mut self, strategy: Strategy, query: Symbol, target: Symbol) -> Option<Path> {
        strategy.search(
            &self.neighbours,
            &self.sed,
            query,
            target,
            &self.params,
            &mut self.rng,
        )
    }

    /// Run `strategy` over every pair, collecting one trace per pair in
    /// input order.
    pub fn run(&mut self, strategy: Strategy, pairs: &[(Symbol, Symbol)]) -> Vec<Trace> {
        info!(%strategy, pairs = pairs.len(), "simulating searches");
        let mut traces = Vec::with_capacity(pairs.len());
        for &(query, target) in pairs {
            let path = self.search_one(strategy, query, target);
            if path.is_none() {
                debug!(%query, %target, "no search attempted");
            }
            traces.push(Trace::new(query, target, path));
        }
        let successes = traces
            .iter()
            .filter(|t| t.outcome() == crate::trace::Outcome::Success)
            .count();
        info!(%strategy, successes, total = traces.len(), "simulation finished");
        traces
    }

    /// The memoized neighbour provider (for inspection in tests/tools).
    pub fn neighbours(&self) -> &CachedNeighbours {
        &self.neighbours
    }

    /// The memoized distance oracle.
    pub fn distances(&self) -> &CachedDistance {
        &self.sed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Outcome;

    fn sym(c: char) -> Symbol {
        Symbol(c)
    }

    fn stores() -> (SimilarityGraph, StrokeEditDistance) {
        let mut graph = SimilarityGraph::new(100);
        graph.insert(sym('人'), [(sym('入'), 0.95), (sym('八'), 0.90)]);
        graph.insert(sym('入'), [(sym('人'), 0.95), (sym('八'), 0.90)]);
        graph.insert(sym('八'), [(sym('人'), 0.9), (sym('入'), 0.85)]);

        let sed = StrokeEditDistance::from_entries([
            (sym('人'), vec!["pie", "na"]),
            (sym('入'), vec!["pie", "na"]),
            (sym('八'), vec!["pie", "na"]),
        ]);
        (graph, sed)
    }

    #[test]
    fn run_yields_one_trace_per_pair_in_order() {
        let (graph, sed) = stores();
        let mut sim = Simulation::new(graph, sed, &SimConfig::default()).unwrap();
        let pairs = vec![
            (sym('人'), sym('入')),
            (sym('無'), sym('入')),
            (sym('八'), sym('人')),
        ];
        let traces = sim.run(Strategy::Greedy, &pairs);

        assert_eq!(traces.len(), 3);
        assert_eq!(traces[0].outcome(), Outcome::Success);
        // Unknown query: recovered locally as a total failure.
        assert_eq!(traces[1].outcome(), Outcome::TotalFailure);
        assert_eq!(traces[2].outcome(), Outcome::Success);
        assert_eq!(traces[1].query, sym('無'));
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let (graph, sed) = stores();
        let config = SimConfig {
            error_rate: 2.0,
            ..Default::default()
        };
        assert!(Simulation::new(graph, sed, &config).is_err());
    }

    #[test]
    fn stumble_runs_are_reproducible_for_a_seed() {
        let pairs = vec![(sym('人'), sym('八')), (sym('入'), sym('人'))];
        let config = SimConfig {
            error_rate: 0.3,
            seed: 7,
            ..Default::default()
        };

        let (graph, sed) = stores();
        let mut sim_a = Simulation::new(graph, sed, &config).unwrap();
        let (graph, sed) = stores();
        let mut sim_b = Simulation::new(graph, sed, &config).unwrap();

        assert_eq!(
            sim_a.run(Strategy::Stumble, &pairs),
            sim_b.run(Strategy::Stumble, &pairs)
        );
    }
}
