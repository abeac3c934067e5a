//! Dijkstra step generator.
//!
//! Array-based node selection (an O(n²) scan, fine at visualization
//! scale) rather than a priority queue. Unreached distances are `None`
//! instead of a max-integer sentinel, which makes the "relax only if the
//! source is finite" guard structural.

use serde::{Deserialize, Serialize};

use super::reconstruct_path;
use crate::engine::Trace;
use crate::error::{VizError, VizResult};
use crate::graph::WeightedAdjacency;

/// One instant of a Dijkstra run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DijkstraStep {
    /// Accumulated cost from the start per node; `None` means unreached.
    pub distances: Vec<Option<u32>>,
    /// Per-node finalized flags.
    pub visited: Vec<bool>,
    /// Node being processed, `None` in the initial and terminal steps.
    pub current: Option<usize>,
    /// Undirected edges (lower index first) of the reconstructed best
    /// path. Populated only in the terminal step.
    pub path_edges: Vec<(usize, usize)>,
    /// Iterations until the destination was first finalized. Populated
    /// only in the terminal step; `None` if it was never reached.
    pub iterations: Option<u32>,
}

impl DijkstraStep {
    fn working(distances: &[Option<u32>], visited: &[bool], current: Option<usize>) -> Self {
        Self {
            distances: distances.to_vec(),
            visited: visited.to_vec(),
            current,
            path_edges: Vec::new(),
            iterations: None,
        }
    }
}

/// Generate the step trace of Dijkstra's algorithm from `start` to `end`.
///
/// Snapshots: one initial, one after each node finalization, one after
/// each successful relaxation, one terminal (carrying the reconstructed
/// path and the iteration count). The loop does not early-exit when the
/// destination is finalized; remaining reachable nodes are still
/// processed, matching standard Dijkstra semantics. An unreachable
/// destination is not an error: its distance stays `None` and the path is
/// empty or partial.
///
/// # Errors
///
/// Returns [`VizError::InvalidNode`] if `start` or `end` is out of range
/// for a non-empty graph. A zero-node graph yields a single terminal step.
pub fn dijkstra_steps(
    adjacency: &WeightedAdjacency,
    start: usize,
    end: usize,
) -> VizResult<Trace<DijkstraStep>> {
    let n = adjacency.len();
    if n == 0 {
        return Ok(Trace::new(vec![DijkstraStep::working(&[], &[], None)]));
    }
    VizError::check_node(start, n)?;
    VizError::check_node(end, n)?;

    let mut steps = Vec::new();
    let mut dist: Vec<Option<u32>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];

    dist[start] = Some(0);
    steps.push(DijkstraStep::working(&dist, &visited, None));

    let mut best_iteration = None;

    for i in 0..n {
        // Unvisited node with the smallest known distance; the ascending
        // scan with strict < breaks ties toward the lowest index.
        let mut u = None;
        let mut min_dist = u32::MAX;
        for j in 0..n {
            if !visited[j] {
                if let Some(d) = dist[j] {
                    if d < min_dist {
                        u = Some(j);
                        min_dist = d;
                    }
                }
            }
        }
        // Remaining nodes are unreachable.
        let Some(u) = u else { break };

        visited[u] = true;
        if u == end && best_iteration.is_none() {
            best_iteration = Some(i as u32 + 1);
        }
        steps.push(DijkstraStep::working(&dist, &visited, Some(u)));

        for edge in &adjacency[u] {
            let v = edge.target;
            if visited[v] {
                continue;
            }
            let Some(du) = dist[u] else { continue };
            // Saturating costs cannot improve anything; skip instead of
            // wrapping.
            let Some(new_dist) = du.checked_add(edge.weight) else {
                continue;
            };
            if dist[v].map_or(true, |dv| new_dist < dv) {
                dist[v] = Some(new_dist);
                parent[v] = Some(u);
                steps.push(DijkstraStep::working(&dist, &visited, Some(u)));
            }
        }
    }

    let path_edges = reconstruct_path(&parent, start, end);
    steps.push(DijkstraStep {
        distances: dist,
        visited,
        current: None,
        path_edges,
        iterations: best_iteration,
    });
    Ok(Trace::new(steps))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::engine::rng::VizRng;
    use crate::graph::proximity_weighted_adjacency;
    use crate::layout::concentric_layout;
    use proptest::prelude::*;

    /// Independent reference: plain Dijkstra distance without tracing.
    fn reference_distance(
        adjacency: &WeightedAdjacency,
        start: usize,
        end: usize,
    ) -> Option<u32> {
        let n = adjacency.len();
        let mut dist: Vec<Option<u32>> = vec![None; n];
        let mut visited = vec![false; n];
        dist[start] = Some(0);
        loop {
            let u = (0..n)
                .filter(|&j| !visited[j] && dist[j].is_some())
                .min_by_key(|&j| dist[j]);
            let Some(u) = u else { break };
            visited[u] = true;
            for e in &adjacency[u] {
                if let Some(du) = dist[u] {
                    let nd = du + e.weight;
                    if dist[e.target].map_or(true, |dv| nd < dv) {
                        dist[e.target] = Some(nd);
                    }
                }
            }
        }
        dist[end]
    }

    proptest! {
        /// Falsification: terminal distances match an independent
        /// computation, and path edges are always lower-index-first.
        #[test]
        fn prop_dijkstra_distances(seed in 0u64..5_000, n in 2usize..20) {
            let mut rng = VizRng::new(seed);
            let positions = concentric_layout(n, 0.5, 0.3);
            let adjacency = proximity_weighted_adjacency(&positions, 0.45, &mut rng);
            let start = rng.gen_bounded(n);
            let end = rng.gen_bounded(n);

            let trace = dijkstra_steps(&adjacency, start, end)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            let last = trace.last().ok_or_else(|| TestCaseError::fail("empty trace"))?;

            prop_assert_eq!(last.distances[end], reference_distance(&adjacency, start, end));
            for &(a, b) in &last.path_edges {
                prop_assert!(a < b);
            }
        }
    }
}
