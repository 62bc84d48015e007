//! Cycle detector configuration

use std::fmt;

use crate::constants::detector::{DEFAULT_DIRECTED_ALGORITHM, DEFAULT_MAX_ROUNDS};
use crate::error::GraphError;

/// Algorithm used to look for cycles in a directed graph
///
/// Undirected graphs always use a depth-first search that ignores the edge
/// leading back to the parent, so this only affects directed graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DirectedAlgorithm {
    /// Three-colour depth-first search, O(V + E)
    #[default]
    DepthFirst,
    /// Repeated composition of the reachability relation
    ///
    /// Gives up after a bounded number of rounds and reports a cycle; see
    /// [`ClosureVerdict::RoundLimit`](crate::detector::ClosureVerdict::RoundLimit).
    ReachabilityClosure,
}

impl fmt::Display for DirectedAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectedAlgorithm::DepthFirst => write!(f, "depth-first"),
            DirectedAlgorithm::ReachabilityClosure => write!(f, "reachability-closure"),
        }
    }
}

/// Configuration for [`CycleDetector`](crate::detector::CycleDetector)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Algorithm for directed graphs
    pub directed_algorithm: DirectedAlgorithm,
    /// Round limit for the reachability closure (None = vertex count)
    pub max_rounds: Option<usize>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            directed_algorithm: DEFAULT_DIRECTED_ALGORITHM,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl DetectorConfig {
    pub fn builder() -> DetectorConfigBuilder {
        DetectorConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct DetectorConfigBuilder {
    directed_algorithm: Option<DirectedAlgorithm>,
    max_rounds: Option<Option<usize>>,
}

impl DetectorConfigBuilder {
    pub fn new() -> Self {
        Self {
            directed_algorithm: None,
            max_rounds: None,
        }
    }

    pub fn with_directed_algorithm(mut self, directed_algorithm: DirectedAlgorithm) -> Self {
        self.directed_algorithm = Some(directed_algorithm);
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: Option<usize>) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }
}

impl crate::common::ConfigBuilder for DetectorConfigBuilder {
    type Config = DetectorConfig;

    fn build(self) -> Result<Self::Config, GraphError> {
        let max_rounds = self.max_rounds.unwrap_or(DEFAULT_MAX_ROUNDS);
        if max_rounds == Some(0) {
            return Err(GraphError::invalid_config(
                "max_rounds must be at least 1 when set",
            ));
        }

        Ok(DetectorConfig {
            directed_algorithm: self.directed_algorithm.unwrap_or(DEFAULT_DIRECTED_ALGORITHM),
            max_rounds,
        })
    }
}
