//! Error types for stepviz.
//!
//! All fallible operations return `Result<T, VizError>` instead of
//! panicking. Invalid arguments fail fast at the API boundary; a
//! disconnected graph is *not* an error (traversal generators terminate
//! normally with unreached sentinels).

use thiserror::Error;

/// Result type alias for stepviz operations.
pub type VizResult<T> = Result<T, VizError>;

/// Unified error type for all stepviz operations.
#[derive(Debug, Error)]
pub enum VizError {
    /// Start or end node index is outside `[0, node_count)`.
    #[error("node index {index} out of range for graph of {node_count} nodes")]
    InvalidNode {
        /// The offending index.
        index: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },

    /// Adjacency list and position list disagree on node count.
    #[error("adjacency has {adjacency_len} nodes but {positions_len} positions were supplied")]
    AdjacencyMismatch {
        /// Length of the adjacency list.
        adjacency_len: usize,
        /// Length of the position list.
        positions_len: usize,
    },

    /// Genetic algorithm invoked with an empty population.
    #[error("genetic algorithm requires a non-empty initial population")]
    EmptyPopulation,

    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VizError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check a node index against a node count, failing fast if out of range.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::InvalidNode`] if `index >= node_count`.
    pub fn check_node(index: usize, node_count: usize) -> VizResult<()> {
        if index < node_count {
            Ok(())
        } else {
            Err(Self::InvalidNode { index, node_count })
        }
    }
}
