//! Pre-built visualization scenarios.
//!
//! A scenario bundles everything one algorithm screen needs: layout,
//! adjacency, endpoints, and the trace generators wired to them. Each
//! `generate` call resamples randomness fresh and builds the scenario in
//! full before returning it, so a reset swaps one complete, internally
//! consistent scenario for another and never exposes a half-built state.

use serde::{Deserialize, Serialize};

use crate::algorithms::astar::{astar_steps, AStarStep};
use crate::algorithms::bfs::{bfs_steps, BfsStep};
use crate::algorithms::dijkstra::{dijkstra_steps, DijkstraStep};
use crate::engine::rng::VizRng;
use crate::engine::Trace;
use crate::error::{VizError, VizResult};
use crate::graph::{connects, proximity_weighted_adjacency, ring_adjacency, WeightedAdjacency};
use crate::layout::{circle_layout, concentric_layout, Position};

/// Retry budget for sampling a connected start/end pair.
const MAX_ATTEMPTS: usize = 1000;

/// Fill a vector with random values in `0..=max_value` for a sorting run.
#[must_use]
pub fn random_array(len: usize, max_value: i32, rng: &mut VizRng) -> Vec<i32> {
    (0..len)
        .map(|_| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let v = rng.gen_bounded(max_value.unsigned_abs() as usize + 1) as i32;
            v
        })
        .collect()
}

/// A traversal screen: nodes on a circle connected in a ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraversalScenario {
    /// Node positions on the unit square.
    pub positions: Vec<Position>,
    /// Ring adjacency over the nodes.
    pub adjacency: Vec<Vec<usize>>,
    /// BFS start node.
    pub start: usize,
}

impl TraversalScenario {
    /// Build the ring scenario for `node_count` nodes, starting at node 0.
    #[must_use]
    pub fn generate(node_count: usize) -> Self {
        Self {
            positions: circle_layout(node_count, Position::new(0.5, 0.5), 0.45),
            adjacency: ring_adjacency(node_count),
            start: 0,
        }
    }

    /// Run BFS over this scenario.
    ///
    /// # Errors
    ///
    /// Propagates [`VizError::InvalidNode`] for an out-of-range start.
    pub fn bfs_trace(&self) -> VizResult<Trace<BfsStep>> {
        bfs_steps(&self.adjacency, self.start)
    }
}

/// A pathfinding screen: concentric layout, proximity-weighted edges,
/// and a random connected start/end pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathfindingScenario {
    /// Node positions on the unit square.
    pub positions: Vec<Position>,
    /// Proximity-weighted adjacency over the nodes.
    pub adjacency: WeightedAdjacency,
    /// Source node.
    pub start: usize,
    /// Destination node.
    pub end: usize,
}

impl PathfindingScenario {
    /// Generate a scenario whose start and end are guaranteed connected.
    ///
    /// Layout, adjacency, and endpoints are resampled together until the
    /// pair is connected, bounded by a fixed retry budget.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `node_count < 2` or if no
    /// connected pair is found within the retry budget (the connection
    /// distance is too small for the layout).
    pub fn generate(
        node_count: usize,
        connection_distance: f64,
        rng: &mut VizRng,
    ) -> VizResult<Self> {
        if node_count < 2 {
            return Err(VizError::config(format!(
                "pathfinding scenario needs at least 2 nodes, got {node_count}"
            )));
        }

        for _ in 0..MAX_ATTEMPTS {
            let positions = concentric_layout(node_count, 0.5, 0.3);
            let adjacency = proximity_weighted_adjacency(&positions, connection_distance, rng);

            let start = rng.gen_bounded(node_count);
            let mut end = rng.gen_bounded(node_count);
            while end == start {
                end = rng.gen_bounded(node_count);
            }

            if connects(&adjacency, start, end) {
                return Ok(Self {
                    positions,
                    adjacency,
                    start,
                    end,
                });
            }
        }

        Err(VizError::config(format!(
            "no connected start/end pair found in {MAX_ATTEMPTS} attempts \
             (connection distance {connection_distance} too small?)"
        )))
    }

    /// Run Dijkstra over this scenario.
    ///
    /// # Errors
    ///
    /// Propagates [`VizError::InvalidNode`] for out-of-range endpoints.
    pub fn dijkstra_trace(&self) -> VizResult<Trace<DijkstraStep>> {
        dijkstra_steps(&self.adjacency, self.start, self.end)
    }

    /// Run A* over this scenario.
    ///
    /// # Errors
    ///
    /// Propagates endpoint and alignment errors from the generator.
    pub fn astar_trace(&self) -> VizResult<Trace<AStarStep>> {
        astar_steps(&self.adjacency, &self.positions, self.start, self.end)
    }
}
