//! Bounded breadth-first search.
//!
//! The best-case baseline: the shortest hop path from query to target
//! within the depth limit, as if the user recognised the target the moment
//! it appeared on screen. The recognition-error model does not apply here.
//!
//! Each symbol is visited at most once across the whole search (a global
//! visited set, not per-path), which keeps the frontier from re-deriving
//! the same prefixes. Expansion order prefers neighbours closest to the
//! target by stroke distance so that, among equal-length paths, the more
//! plausible one is found first; hop-count optimality does not depend on
//! it.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::cache::{CachedDistance, CachedNeighbours};
use crate::strategy::SearchParams;
use crate::symbol::{Path, Symbol};

/// Find the shortest path from `query` to `target` within `params.limit`
/// hops.
///
/// Returns `None` both when the frontier empties and when the depth limit
/// cuts the search off; the two are indistinguishable in the trace format,
/// so no attempt is made to separate them here. A frontier growing past
/// `params.max_frontier` counts as exhaustion.
pub fn search(
    neighbours: &CachedNeighbours,
    sed: &CachedDistance,
    query: Symbol,
    target: Symbol,
    params: &SearchParams,
) -> Option<Path> {
    let mut frontier: VecDeque<Path> = VecDeque::from([vec![query]]);
    let mut visited: HashSet<Symbol> = HashSet::from([query]);

    while let Some(current) = frontier.pop_front() {
        let pivot = *current.last().expect("frontier paths are nonempty");

        // An unknown pivot simply fails to expand.
        let Ok(mut options) = neighbours.call(pivot, params.k) else {
            continue;
        };

        if options.contains(&target) {
            let mut path = current;
            path.push(target);
            return Some(path);
        }

        if current.len() < params.limit {
            order_by_target_distance(sed, &mut options, target);
            for neighbour in options {
                if visited.insert(neighbour) {
                    let mut path = current.clone();
                    path.push(neighbour);
                    frontier.push_back(path);
                }
            }
            if frontier.len() > params.max_frontier {
                debug!(
                    %query, %target,
                    frontier = frontier.len(),
                    visited = visited.len(),
                    "frontier cap exceeded, treating as exhausted"
                );
                return None;
            }
        }
    }

    debug!(%query, %target, visited = visited.len(), "frontier exhausted");
    None
}

/// Reorder `options` by ascending stroke distance to `target`, keeping
/// provider order on ties. Sorting is all-or-nothing: if the target or any
/// candidate lacks stroke data, the native provider order stands.
fn order_by_target_distance(sed: &CachedDistance, options: &mut [Symbol], target: Symbol) {
    if !sed.knows(target) {
        return;
    }
    let distances: Option<Vec<f64>> = options
        .iter()
        .map(|&n| sed.call(n, target).ok())
        .collect();
    if let Some(distances) = distances {
        let mut keyed: Vec<(f64, Symbol)> =
            distances.into_iter().zip(options.iter().copied()).collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        for (slot, (_, n)) in options.iter_mut().zip(keyed) {
            *slot = n;
        }
    }
}
