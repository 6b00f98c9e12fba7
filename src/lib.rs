//! glyphwalk: simulated search over visual-similarity graphs of characters.
//!
//! Given a precomputed graph mapping each written character to its most
//! visually similar neighbours, this crate simulates how a user would
//! navigate that graph to reach a target character, and evaluates the
//! resulting navigation traces. It exists to answer questions like "how
//! many steps, using which strategy, does it take to get from 人 to 無?"
//! across thousands of (query, target) pairs.
//!
//! # Components
//!
//! - [`graph`]: read-only neighbour provider over the similarity graph
//! - [`strokes`]: stroke edit distance between two characters, used as a
//!   tie-breaking heuristic by the guided strategies
//! - [`cache`]: memoizing wrappers giving at-most-once evaluation per
//!   distinct oracle query
//! - [`strategy`]: the three traversal strategies (greedy, bounded BFS,
//!   random stumble)
//! - [`trace`]: line-oriented trace file codec for reproducible analysis
//! - [`sim`]: the driver loop tying the above together
//! - [`eval`]: success-rate and path-length statistics over a trace set
//!
//! # Simulation model
//!
//! Each (query, target) pair is one independent simulation unit. A strategy
//! walks the neighbour graph from `query` and either reaches `target`
//! (success), stalls or runs out of depth budget (partial failure), or
//! cannot be attempted because an oracle lacks data (total failure). The
//! outcome is recoverable from the trace alone, so a trace file is a
//! complete record of a run.
//!
//! The alphabet is small (a few thousand symbols) and the backing stores
//! are immutable, which is what makes the unbounded memoization in
//! [`cache`] sound.

pub mod cache;
pub mod config;
pub mod dataset;
pub mod error;
pub mod eval;
pub mod graph;
pub mod sim;
pub mod strategy;
pub mod strokes;
pub mod symbol;
pub mod trace;

pub use cache::{CachedDistance, CachedNeighbours};
pub use config::SimConfig;
pub use error::{Result, SearchError};
pub use eval::TraceStats;
pub use graph::SimilarityGraph;
pub use sim::Simulation;
pub use strategy::{SearchParams, Strategy};
pub use strokes::StrokeEditDistance;
pub use symbol::{Path, Symbol};
pub use trace::{Outcome, Trace};
