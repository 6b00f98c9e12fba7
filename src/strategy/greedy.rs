//! Greedy nearest-neighbour walk.
//!
//! Models a user who, at every step, picks the on-screen neighbour that
//! looks most like the target. The stroke edit distance stands in for the
//! user's visual judgement; it only ranks candidates and never decides
//! success on its own.

use rand::Rng;
use tracing::trace;

use crate::cache::{CachedDistance, CachedNeighbours};
use crate::strategy::{target_recognised, SearchParams};
use crate::symbol::{Path, Symbol};

/// Walk from `query` towards `target`, always stepping to the unvisited
/// neighbour with minimum stroke distance to the target.
///
/// Returns `None` without attempting anything when the distance oracle
/// cannot resolve `query` or `target`: the guidance heuristic is then
/// unusable and the walk cannot be simulated. Otherwise returns the path
/// walked, ending at `target` on success.
pub fn search<R: Rng>(
    neighbours: &CachedNeighbours,
    sed: &CachedDistance,
    query: Symbol,
    target: Symbol,
    params: &SearchParams,
    rng: &mut R,
) -> Option<Path> {
    if !sed.knows(query) || !sed.knows(target) {
        return None;
    }

    let mut path: Path = vec![query];
    while *path.last().expect("path starts nonempty") != target && path.len() <= params.limit {
        let pivot = *path.last().expect("path starts nonempty");

        // A pivot with no graph entry mid-walk ends the walk with the
        // partial path; only missing stroke data for the endpoints makes
        // the whole search unattemptable.
        let mut options = match neighbours.call(pivot, params.k) {
            Ok(list) => list,
            Err(_) => break,
        };

        if options.contains(&target) {
            if target_recognised(params.k, params.error_rate, rng) {
                path.push(target);
                continue;
            }
            // Simulated recognition miss: drop the target for this step
            // only. It may be re-offered if the walk comes back.
            trace!(%pivot, %target, "recognition miss");
            options.retain(|&n| n != target);
        }

        // Only neighbours we have not tried yet.
        options.retain(|n| !path.contains(n));
        if options.is_empty() {
            break;
        }

        // Minimum distance to target; ties keep the first candidate in
        // provider order. Candidates with no stroke data sort last.
        let mut best = options[0];
        let mut best_dist = distance_or_inf(sed, options[0], target);
        for &candidate in &options[1..] {
            let dist = distance_or_inf(sed, candidate, target);
            if dist < best_dist {
                best = candidate;
                best_dist = dist;
            }
        }
        path.push(best);
    }

    Some(path)
}

fn distance_or_inf(sed: &CachedDistance, a: Symbol, b: Symbol) -> f64 {
    sed.call(a, b).unwrap_or(f64::INFINITY)
}
