use petgraph::algo::tarjan_scc;
use tracing::debug;

use super::{directed, undirected};
use crate::config::{DetectorConfig, DirectedAlgorithm};
use crate::graph::{Directed, DirectedGraph, Graph, GraphKind, Label, Undirected};

/// Cycle search strategy attached to a graph kind
///
/// Implemented for [`Undirected`] and [`Directed`] only (it extends the
/// sealed [`GraphKind`]). [`CycleDetector::has_cycle`] calls straight into
/// the implementation for its kind, so the algorithm is fixed at compile
/// time.
pub trait CycleSearch: GraphKind {
    fn has_cycle<T: Label>(graph: &Graph<Self, T>, config: &DetectorConfig) -> bool;
}

impl CycleSearch for Undirected {
    fn has_cycle<T: Label>(graph: &Graph<Self, T>, _config: &DetectorConfig) -> bool {
        undirected::has_cycle(graph)
    }
}

impl CycleSearch for Directed {
    fn has_cycle<T: Label>(graph: &Graph<Self, T>, config: &DetectorConfig) -> bool {
        match config.directed_algorithm {
            DirectedAlgorithm::DepthFirst => directed::has_cycle_depth_first(graph),
            DirectedAlgorithm::ReachabilityClosure => {
                directed::reachability_closure(graph, config.max_rounds).is_cyclic()
            }
        }
    }
}

/// Outcome of the reachability closure on a directed graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClosureVerdict<T> {
    /// `label` can reach itself; found after `round` rounds
    Cycle { label: T, round: usize },
    /// Every reachable set emptied out
    Acyclic { rounds: usize },
    /// The round limit was hit before either of the above
    ///
    /// Treated as a cycle. This is an assumption rather than a proof: it is
    /// only guaranteed correct with the default limit.
    RoundLimit { rounds: usize },
}

impl<T> ClosureVerdict<T> {
    /// Whether the verdict counts as a cycle (including [`Self::RoundLimit`])
    pub fn is_cyclic(&self) -> bool {
        !matches!(self, ClosureVerdict::Acyclic { .. })
    }

    /// Whether a vertex was actually seen reaching itself
    pub fn is_proven(&self) -> bool {
        !matches!(self, ClosureVerdict::RoundLimit { .. })
    }

    pub fn rounds(&self) -> usize {
        match self {
            ClosureVerdict::Cycle { round, .. } => *round,
            ClosureVerdict::Acyclic { rounds } | ClosureVerdict::RoundLimit { rounds } => *rounds,
        }
    }
}

/// Detector for cycles in a borrowed graph
///
/// Holds a shared borrow for its whole lifetime, so the graph cannot change
/// while it is being analysed. Queries never mutate the graph and repeated
/// calls give the same answer.
pub struct CycleDetector<'g, K, T> {
    graph: &'g Graph<K, T>,
    config: DetectorConfig,
}

impl<'g, K: CycleSearch, T: Label> CycleDetector<'g, K, T> {
    /// Create a detector with the default configuration
    pub fn new(graph: &'g Graph<K, T>) -> Self {
        Self::with_config(graph, DetectorConfig::default())
    }

    pub fn with_config(graph: &'g Graph<K, T>, config: DetectorConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &'g Graph<K, T> {
        self.graph
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Check whether the graph contains at least one cycle
    ///
    /// Undirected graphs: a path that comes back to a visited vertex other
    /// than by retracing the edge it just took. Directed graphs: a path that
    /// returns to its origin. Self-loops are cycles in both.
    pub fn has_cycle(&self) -> bool {
        let found = K::has_cycle(self.graph, &self.config);
        debug!(
            kind = K::NAME,
            order = self.graph.order(),
            size = self.graph.size(),
            found,
            "cycle check finished"
        );
        found
    }
}

impl<'g, T: Label> CycleDetector<'g, Directed, T> {
    /// Run the reachability closure regardless of the configured algorithm
    ///
    /// Honours the configured `max_rounds`.
    pub fn reachability_closure(&self) -> ClosureVerdict<T> {
        let verdict = directed::reachability_closure(self.graph, self.config.max_rounds);
        debug!(verdict = ?verdict, "reachability closure finished");
        verdict
    }

    /// Strongly connected components that contain a cycle
    ///
    /// A component qualifies when it has more than one vertex, or a single
    /// vertex linked to itself. Labels are sorted within each component and
    /// components are sorted by their first label.
    pub fn cyclic_components(&self) -> Vec<Vec<T>> {
        find_cyclic_components(self.graph)
    }
}

fn find_cyclic_components<T: Label>(graph: &DirectedGraph<T>) -> Vec<Vec<T>> {
    let projected = graph.to_petgraph();

    let mut components: Vec<Vec<T>> = tarjan_scc(&projected)
        .into_iter()
        .filter_map(|scc| {
            let mut labels: Vec<T> = scc.iter().map(|&idx| projected[idx].clone()).collect();
            let cyclic = match labels.as_slice() {
                [single] => graph.is_linked(single, single),
                _ => true,
            };
            cyclic.then(|| {
                labels.sort();
                labels
            })
        })
        .collect();

    components.sort();
    components
}
