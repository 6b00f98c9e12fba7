//! Statistics over a set of traces.
//!
//! The downstream half of a simulation run: load the trace file back and
//! summarise how the strategy did. Path length counts steps, not symbols
//! (a direct hop is length 1); failed searches are charged the full depth
//! limit, which keeps the mean comparable across strategies with different
//! success rates.

use crate::trace::{Outcome, Trace};

/// Aggregate statistics for one trace set.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStats {
    /// Total traces evaluated.
    pub n_traces: usize,
    /// Traces whose walk reached the target.
    pub n_successes: usize,
    /// Per-trace path length in steps; failures count as `limit`.
    pub path_lengths: Vec<usize>,
}

impl TraceStats {
    /// Evaluate `traces` against the depth limit they were produced with.
    pub fn from_traces(traces: &[Trace], limit: usize) -> Self {
        let mut n_successes = 0;
        let mut path_lengths = Vec::with_capacity(traces.len());
        for trace in traces {
            match (&trace.path, trace.outcome()) {
                (Some(path), Outcome::Success) => {
                    n_successes += 1;
                    path_lengths.push(path.len() - 1);
                }
                _ => path_lengths.push(limit),
            }
        }
        Self {
            n_traces: traces.len(),
            n_successes,
            path_lengths,
        }
    }

    /// Fraction of traces that succeeded, in [0, 1].
    pub fn success_rate(&self) -> f64 {
        if self.n_traces == 0 {
            return 0.0;
        }
        self.n_successes as f64 / self.n_traces as f64
    }

    /// Mean path length in steps.
    pub fn mean_path_length(&self) -> f64 {
        if self.path_lengths.is_empty() {
            return 0.0;
        }
        self.path_lengths.iter().sum::<usize>() as f64 / self.path_lengths.len() as f64
    }

    /// Population standard deviation of path length.
    pub fn std_path_length(&self) -> f64 {
        if self.path_lengths.is_empty() {
            return 0.0;
        }
        let mean = self.mean_path_length();
        let var = self
            .path_lengths
            .iter()
            .map(|&l| {
                let d = l as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / self.path_lengths.len() as f64;
        var.sqrt()
    }

    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "success rate: {}/{} ({:.2}%), mean path length: {:.2} (σ = {:.2})",
            self.n_successes,
            self.n_traces,
            100.0 * self.success_rate(),
            self.mean_path_length(),
            self.std_path_length(),
        )
    }
}
