//! Configuration with YAML schema and validation.
//!
//! Mistake-proofing happens in layers: type-safe structs, serde schema
//! checks (`deny_unknown_fields`), declarative `validator` constraints,
//! and a final semantic validation pass for the rules the schema can't
//! express.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{VizError, VizResult};

fn default_schema_version() -> String {
    "1.0".to_string()
}

/// Top-level visualizer configuration, loadable from YAML.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct VizConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Master seed for all randomness.
    #[serde(default)]
    pub seed: u64,

    /// Graph scenario parameters.
    #[validate(nested)]
    #[serde(default)]
    pub graph: GraphConfig,

    /// Sorting scenario parameters.
    #[validate(nested)]
    #[serde(default)]
    pub sorting: SortingConfig,

    /// Genetic algorithm parameters.
    #[validate(nested)]
    #[serde(default)]
    pub genetic: GeneticConfig,
}

/// Graph construction parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    /// Number of nodes in generated graphs.
    #[validate(range(min = 2, max = 256))]
    pub node_count: usize,
    /// Maximum normalized distance at which two nodes are connected.
    pub connection_distance: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            node_count: 14,
            connection_distance: 0.35,
        }
    }
}

/// Sorting array parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SortingConfig {
    /// Number of elements to sort.
    #[validate(range(min = 1, max = 512))]
    pub array_len: usize,
    /// Values are sampled from `0..=max_value`.
    #[validate(range(min = 1))]
    pub max_value: i32,
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            array_len: 12,
            max_value: 100,
        }
    }
}

/// Genetic algorithm parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct GeneticConfig {
    /// Individuals per generation.
    #[validate(range(min = 1, max = 1024))]
    pub population_size: usize,
    /// Generations to simulate after generation 0.
    #[validate(range(max = 10_000))]
    pub generations: u32,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 30,
        }
    }
}

impl VizConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> VizResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> VizResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> VizConfigBuilder {
        VizConfigBuilder::default()
    }

    /// Validate semantic constraints beyond the schema.
    fn validate_semantic(&self) -> VizResult<()> {
        let d = self.graph.connection_distance;
        if d <= 0.0 || d > 1.0 {
            return Err(VizError::config(format!(
                "connection_distance must be in (0, 1], got {d}"
            )));
        }
        Ok(())
    }
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            seed: 0,
            graph: GraphConfig::default(),
            sorting: SortingConfig::default(),
            genetic: GeneticConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct VizConfigBuilder {
    seed: Option<u64>,
    node_count: Option<usize>,
    connection_distance: Option<f64>,
    array_len: Option<usize>,
    population_size: Option<usize>,
    generations: Option<u32>,
}

impl VizConfigBuilder {
    /// Set the master seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the graph node count.
    #[must_use]
    pub const fn node_count(mut self, node_count: usize) -> Self {
        self.node_count = Some(node_count);
        self
    }

    /// Set the graph connection distance.
    #[must_use]
    pub const fn connection_distance(mut self, distance: f64) -> Self {
        self.connection_distance = Some(distance);
        self
    }

    /// Set the sorting array length.
    #[must_use]
    pub const fn array_len(mut self, len: usize) -> Self {
        self.array_len = Some(len);
        self
    }

    /// Set the genetic population size.
    #[must_use]
    pub const fn population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Set the genetic generation count.
    #[must_use]
    pub const fn generations(mut self, generations: u32) -> Self {
        self.generations = Some(generations);
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the assembled configuration is invalid.
    pub fn build(self) -> VizResult<VizConfig> {
        let mut config = VizConfig::default();
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(node_count) = self.node_count {
            config.graph.node_count = node_count;
        }
        if let Some(distance) = self.connection_distance {
            config.graph.connection_distance = distance;
        }
        if let Some(len) = self.array_len {
            config.sorting.array_len = len;
        }
        if let Some(size) = self.population_size {
            config.genetic.population_size = size;
        }
        if let Some(generations) = self.generations {
            config.genetic.generations = generations;
        }
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }
}
