//! Unguided random walk.
//!
//! The floor for the guided strategies: a user with no visual judgement at
//! all, clicking a uniformly random neighbour at each step. The target is
//! ignored for step selection and only consulted for the stop check, with
//! the same recognition-error model as the greedy walk. Revisits are
//! allowed; an aimless user has no memory of where they have been.

use rand::Rng;
use tracing::trace;

use crate::cache::CachedNeighbours;
use crate::strategy::{target_recognised, SearchParams};
use crate::symbol::{Path, Symbol};

/// Random-walk from `query` until `target` is recognised or the depth
/// limit runs out.
///
/// Always returns the walked path; the strategy needs no oracle beyond the
/// neighbour provider, so there is no "could not attempt" case. A pivot
/// with no graph entry ends the walk where it stands.
pub fn search<R: Rng>(
    neighbours: &CachedNeighbours,
    query: Symbol,
    target: Symbol,
    params: &SearchParams,
    rng: &mut R,
) -> Option<Path> {
    let mut path: Path = vec![query];
    while *path.last().expect("path starts nonempty") != target && path.len() <= params.limit {
        let pivot = *path.last().expect("path starts nonempty");

        let mut options = match neighbours.call(pivot, params.k) {
            Ok(list) => list,
            Err(_) => break,
        };

        if options.contains(&target) {
            if target_recognised(params.k, params.error_rate, rng) {
                path.push(target);
                continue;
            }
            trace!(%pivot, %target, "recognition miss");
            options.retain(|&n| n != target);
        }

        if options.is_empty() {
            break;
        }

        let step = options[rng.random_range(0..options.len())];
        path.push(step);
    }

    Some(path)
}
