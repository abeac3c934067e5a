//! A* step generator.
//!
//! The open set is a `BTreeSet<usize>`, so the linear min-f scan visits
//! candidates in ascending node index and the strict `<` comparison
//! breaks f-ties toward the lowest index. That iteration order is a
//! deliberate, documented choice: it makes tie-breaking (and therefore
//! the whole trace) deterministic and testable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::reconstruct_path;
use crate::engine::Trace;
use crate::error::{VizError, VizResult};
use crate::graph::WeightedAdjacency;
use crate::layout::Position;

/// One instant of an A* run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AStarStep {
    /// Accumulated cost from the start per node; `None` means unreached.
    pub g_scores: Vec<Option<u32>>,
    /// Per-node closed flags.
    pub visited: Vec<bool>,
    /// Node being processed, `None` in the initial and terminal steps.
    pub current: Option<usize>,
    /// Undirected edges (lower index first) of the reconstructed best
    /// path. Populated only in the terminal step.
    pub path_edges: Vec<(usize, usize)>,
    /// Iterations until the destination was selected. Populated only in
    /// the terminal step; `None` if it was never reached.
    pub iterations: Option<u32>,
}

impl AStarStep {
    fn working(g_scores: &[Option<u32>], visited: &[bool], current: Option<usize>) -> Self {
        Self {
            g_scores: g_scores.to_vec(),
            visited: visited.to_vec(),
            current,
            path_edges: Vec::new(),
            iterations: None,
        }
    }
}

/// Euclidean heuristic between two nodes' positions.
///
/// Admissible only when true edge costs dominate the geometric distance;
/// with random integer weights that is an assumption of the
/// visualization, not a guarantee.
#[must_use]
pub fn heuristic(node: usize, end: usize, positions: &[Position]) -> f64 {
    positions[node].distance_to(positions[end])
}

/// Generate the step trace of an A* search from `start` to `end`.
///
/// Snapshots: one initial, one per node selection (before the goal check
/// and expansion), one per successful g-score update, one terminal.
/// Unlike the Dijkstra generator, the search stops as soon as the
/// destination is selected from the open set.
///
/// # Errors
///
/// Returns [`VizError::AdjacencyMismatch`] if `positions` is not
/// index-aligned with `adjacency`, and [`VizError::InvalidNode`] if
/// `start` or `end` is out of range for a non-empty graph. A zero-node
/// graph yields a single terminal step.
pub fn astar_steps(
    adjacency: &WeightedAdjacency,
    positions: &[Position],
    start: usize,
    end: usize,
) -> VizResult<Trace<AStarStep>> {
    let n = adjacency.len();
    if positions.len() != n {
        return Err(VizError::AdjacencyMismatch {
            adjacency_len: n,
            positions_len: positions.len(),
        });
    }
    if n == 0 {
        return Ok(Trace::new(vec![AStarStep::working(&[], &[], None)]));
    }
    VizError::check_node(start, n)?;
    VizError::check_node(end, n)?;

    let mut steps = Vec::new();
    let mut g: Vec<Option<u32>> = vec![None; n];
    let mut f = vec![f64::INFINITY; n];
    let mut visited = vec![false; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut open = BTreeSet::new();

    g[start] = Some(0);
    f[start] = heuristic(start, end, positions);
    open.insert(start);

    steps.push(AStarStep::working(&g, &visited, None));

    let mut best_iteration = None;
    let mut iteration = 0u32;

    while !open.is_empty() {
        // Ascending-index scan; strict < keeps the lowest index on ties.
        let mut current = None;
        let mut current_f = f64::INFINITY;
        for &node in &open {
            if f[node] < current_f {
                current_f = f[node];
                current = Some(node);
            }
        }
        let Some(current) = current else { break };

        // Snapshot before the goal check and expansion.
        steps.push(AStarStep::working(&g, &visited, Some(current)));
        iteration += 1;
        if current == end {
            best_iteration = Some(iteration);
            break;
        }
        open.remove(&current);
        visited[current] = true;

        for edge in &adjacency[current] {
            let neighbor = edge.target;
            if visited[neighbor] {
                continue;
            }
            let Some(gc) = g[current] else { continue };
            // Saturating costs cannot improve anything; skip instead of
            // wrapping.
            let Some(tentative) = gc.checked_add(edge.weight) else {
                continue;
            };
            if g[neighbor].map_or(true, |gn| tentative < gn) {
                g[neighbor] = Some(tentative);
                f[neighbor] = f64::from(tentative) + heuristic(neighbor, end, positions);
                parent[neighbor] = Some(current);
                open.insert(neighbor);
                steps.push(AStarStep::working(&g, &visited, Some(current)));
            }
        }
    }

    let path_edges = reconstruct_path(&parent, start, end);
    steps.push(AStarStep {
        g_scores: g,
        visited,
        current: None,
        path_edges,
        iterations: best_iteration,
    });
    Ok(Trace::new(steps))
}
