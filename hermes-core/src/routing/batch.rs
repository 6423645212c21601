use rayon::prelude::*;

use super::find_path;
use crate::{GuidewayEdge, HermesGraph, StationId};

/// Runs independent shortest-path searches in parallel.
///
/// The graph is shared read-only; every search owns its own state. Results
/// are returned in the order of `pairs`.
pub fn find_paths<'g>(
    graph: &'g HermesGraph,
    pairs: &[(StationId, StationId)],
) -> Vec<Vec<&'g GuidewayEdge>> {
    pairs
        .par_iter()
        .map(|(start, goal)| find_path(graph, start, goal))
        .collect()
}
