//! # stepviz
//!
//! Deterministic step-trace engine for classic algorithm visualization.
//!
//! Each algorithm (bubble sort, selection sort, BFS, Dijkstra, A*, a toy
//! genetic algorithm) runs to completion in a single call and records a
//! fine-grained trace of its intermediate state. A consumer (typically a
//! rendering layer) stores the returned [`engine::Trace`] and scrubs
//! through it by index; nothing is ever recomputed per frame.
//!
//! ## Example
//!
//! ```rust
//! use stepviz::prelude::*;
//!
//! let trace = bubble_sort_steps(&[3, 1, 2]);
//! let last = trace.last().expect("trace is never empty");
//! assert_eq!(last.array, vec![1, 2, 3]);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
    clippy::needless_range_loop,   // Index loops mirror the recorded snapshots
)]

pub mod algorithms;
pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod layout;
pub mod scenarios;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::algorithms::astar::{astar_steps, AStarStep};
    pub use crate::algorithms::bfs::{bfs_steps, BfsStep};
    pub use crate::algorithms::dijkstra::{dijkstra_steps, DijkstraStep};
    pub use crate::algorithms::genetic::{genetic_steps, GenerationStep, Individual};
    pub use crate::algorithms::sorting::{bubble_sort_steps, selection_sort_steps, SortStep};
    pub use crate::config::{VizConfig, VizConfigBuilder};
    pub use crate::engine::rng::VizRng;
    pub use crate::engine::Trace;
    pub use crate::error::{VizError, VizResult};
    pub use crate::graph::{Adjacency, WeightedAdjacency, WeightedEdge};
    pub use crate::layout::Position;
}

/// Re-export for public API
pub use error::{VizError, VizResult};
