//! Breadth-first search step generator.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::engine::Trace;
use crate::error::{VizError, VizResult};
use crate::graph::Adjacency;

/// One instant of a BFS run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfsStep {
    /// Per-node discovered flags.
    pub visited: Vec<bool>,
    /// Node being processed, `None` in the terminal step.
    pub current: Option<usize>,
    /// Node indices in discovery order so far.
    pub visit_order: Vec<usize>,
}

/// Generate the step trace of a breadth-first search from `start`.
///
/// Two snapshots may be emitted per edge examined: one before the
/// visited check (so a consumer can show the "considering" state) and,
/// if the neighbor is newly discovered, one after. This granularity is
/// intentional for animation.
///
/// # Errors
///
/// Returns [`VizError::InvalidNode`] if `start` is out of range for a
/// non-empty graph. A zero-node graph yields a single terminal step.
pub fn bfs_steps(adjacency: &Adjacency, start: usize) -> VizResult<Trace<BfsStep>> {
    let n = adjacency.len();
    if n == 0 {
        return Ok(Trace::new(vec![BfsStep {
            visited: Vec::new(),
            current: None,
            visit_order: Vec::new(),
        }]));
    }
    VizError::check_node(start, n)?;

    let mut steps = Vec::new();
    let mut visited = vec![false; n];
    let mut visit_order = Vec::with_capacity(n);
    let mut queue = VecDeque::new();

    visited[start] = true;
    visit_order.push(start);
    queue.push_back(start);

    steps.push(BfsStep {
        visited: visited.clone(),
        current: Some(start),
        visit_order: visit_order.clone(),
    });

    while let Some(current) = queue.pop_front() {
        for &neighbor in &adjacency[current] {
            // Snapshot before the visited check.
            steps.push(BfsStep {
                visited: visited.clone(),
                current: Some(current),
                visit_order: visit_order.clone(),
            });

            if !visited[neighbor] {
                visited[neighbor] = true;
                visit_order.push(neighbor);
                queue.push_back(neighbor);

                steps.push(BfsStep {
                    visited: visited.clone(),
                    current: Some(neighbor),
                    visit_order: visit_order.clone(),
                });
            }
        }
    }

    steps.push(BfsStep {
        visited,
        current: None,
        visit_order,
    });
    Ok(Trace::new(steps))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::engine::rng::VizRng;
    use crate::graph::random_chain_adjacency;
    use proptest::prelude::*;

    proptest! {
        /// Falsification: on any connected random chain, BFS discovers
        /// every node exactly once and ends all-visited.
        #[test]
        fn prop_bfs_complete_on_connected(seed in 0u64..10_000, n in 1usize..32) {
            let mut rng = VizRng::new(seed);
            let adjacency = random_chain_adjacency(n, &mut rng);
            let start = rng.gen_bounded(n);
            let trace = bfs_steps(&adjacency, start).map_err(|e| {
                TestCaseError::fail(e.to_string())
            })?;
            let last = trace.last().ok_or_else(|| {
                TestCaseError::fail("empty trace")
            })?;

            prop_assert!(last.visited.iter().all(|&v| v));
            let mut order = last.visit_order.clone();
            order.sort_unstable();
            prop_assert_eq!(order, (0..n).collect::<Vec<_>>());
        }
    }
}
