//! Step generators for the visualized algorithms.
//!
//! Every generator runs its algorithm to completion in one synchronous
//! call, pushing a defensive copy of the working state into the trace at
//! each recorded instant. The returned [`crate::engine::Trace`] is the
//! only output; no state survives between calls.

pub mod astar;
pub mod bfs;
pub mod dijkstra;
pub mod genetic;
pub mod sorting;

/// Walk parent pointers from `end` back toward `start`, collecting path
/// edges as lower-index-first pairs. Stops early at the first missing
/// parent (incomplete path when `end` was never reached).
pub(crate) fn reconstruct_path(
    parent: &[Option<usize>],
    start: usize,
    end: usize,
) -> Vec<(usize, usize)> {
    let mut path_edges = Vec::new();
    let mut cur = end;
    while cur != start {
        let Some(p) = parent[cur] else {
            break;
        };
        path_edges.push((p.min(cur), p.max(cur)));
        cur = p;
    }
    path_edges
}
