//! Cycle search for directed graphs

use std::collections::{BTreeMap, BTreeSet};

use tracing::{trace, warn};

use super::ClosureVerdict;
use crate::graph::{DirectedGraph, Label};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    /// On the current traversal path
    InProgress,
    /// Fully explored, no cycle through it
    Done,
}

/// Three-colour depth-first search
///
/// Unvisited vertices have no entry in `states`. Reaching a vertex that is
/// still on the current path closes a cycle.
pub(crate) fn has_cycle_depth_first<T: Label>(graph: &DirectedGraph<T>) -> bool {
    let mut states: BTreeMap<&T, VisitState> = BTreeMap::new();

    for root in graph.labels() {
        if states.contains_key(root) {
            continue;
        }
        trace!(root = ?root, "starting directed traversal");

        states.insert(root, VisitState::InProgress);
        let mut stack: Vec<(&T, usize)> = vec![(root, 0)];

        while let Some(frame) = stack.last_mut() {
            let (vertex, next) = *frame;

            let Some(neighbor) = graph.neighbors(vertex).get(next) else {
                states.insert(vertex, VisitState::Done);
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match states.get(neighbor) {
                Some(VisitState::InProgress) => {
                    trace!(vertex = ?vertex, neighbor = ?neighbor, "edge back into current path");
                    return true;
                }
                Some(VisitState::Done) => {}
                None => {
                    states.insert(neighbor, VisitState::InProgress);
                    stack.push((neighbor, 0));
                }
            }
        }
    }

    false
}

/// Reachability closure by repeated squaring
///
/// Each vertex starts with the set of its direct neighbors. Every round
/// replaces a vertex's set with the union of the sets of its members, so
/// after round `k` the sets hold the vertices reachable by walks of exactly
/// `2^k` edges. A vertex showing up in its own set is on a cycle; once every
/// set is empty the graph is acyclic.
///
/// Sets of a cyclic graph never empty out, but a cycle whose length does not
/// divide a power of two never puts a vertex in its own set either. After
/// `round_limit` rounds (the vertex count unless configured) the search
/// stops and reports [`ClosureVerdict::RoundLimit`]. With the default limit
/// an acyclic graph always empties out first; a smaller configured limit can
/// produce a false positive.
pub(crate) fn reachability_closure<T: Label>(
    graph: &DirectedGraph<T>,
    max_rounds: Option<usize>,
) -> ClosureVerdict<T> {
    let round_limit = max_rounds.unwrap_or(graph.order());

    let mut current: BTreeMap<&T, BTreeSet<&T>> = graph
        .labels()
        .map(|label| (label, graph.neighbors(label).iter().collect()))
        .collect();

    let mut round = 0;
    loop {
        let next: BTreeMap<&T, BTreeSet<&T>> = current
            .iter()
            .map(|(&vertex, reachable)| {
                let composed = reachable
                    .iter()
                    .filter_map(|member| current.get(member))
                    .flatten()
                    .copied()
                    .collect();
                (vertex, composed)
            })
            .collect();
        current = next;
        round += 1;

        if let Some((&vertex, _)) = current
            .iter()
            .find(|(vertex, reachable)| reachable.contains(*vertex))
        {
            return ClosureVerdict::Cycle {
                label: vertex.clone(),
                round,
            };
        }

        let reachable_total: usize = current.values().map(BTreeSet::len).sum();
        trace!(round, reachable_total, "reachability closure round");

        if reachable_total == 0 {
            return ClosureVerdict::Acyclic { rounds: round };
        }
        if round > round_limit {
            warn!(
                rounds = round,
                round_limit, "reachability closure hit its round limit, assuming a cycle"
            );
            return ClosureVerdict::RoundLimit { rounds: round };
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn graph_with_edges(labels: &[u32], edges: &[(u32, u32)]) -> DirectedGraph<u32> {
        let mut graph = DirectedGraph::from_labels(labels.iter().copied());
        for (from, to) in edges {
            graph.link(from, to);
        }
        graph
    }

    #[test]
    fn test_depth_first_simple_cycle() {
        let graph = graph_with_edges(&[1, 2, 3], &[(1, 2), (2, 3), (3, 1)]);

        assert!(has_cycle_depth_first(&graph));
    }

    #[test]
    fn test_depth_first_diamond_is_acyclic() {
        // Two paths to the same vertex are not a cycle
        let graph = graph_with_edges(&[1, 2, 3, 4], &[(1, 2), (1, 3), (2, 4), (3, 4)]);

        assert!(!has_cycle_depth_first(&graph));
    }

    #[test]
    fn test_depth_first_two_node_cycle() {
        let graph = graph_with_edges(&[1, 2], &[(1, 2), (2, 1)]);

        assert!(has_cycle_depth_first(&graph));
    }

    #[test]
    fn test_depth_first_self_loop() {
        let graph = graph_with_edges(&[1], &[(1, 1)]);

        assert!(has_cycle_depth_first(&graph));
    }

    #[test]
    fn test_depth_first_cycle_reached_from_later_root() {
        // 1 is explored first and finishes before the cycle 3 -> 4 -> 3
        let graph = graph_with_edges(&[1, 2, 3, 4], &[(1, 2), (3, 4), (4, 3), (3, 1)]);

        assert!(has_cycle_depth_first(&graph));
    }

    #[test]
    fn test_closure_two_node_cycle_found_in_first_round() {
        let graph = graph_with_edges(&[1, 2], &[(1, 2), (2, 1)]);

        assert_eq!(
            reachability_closure(&graph, None),
            ClosureVerdict::Cycle { label: 1, round: 1 }
        );
    }

    #[test]
    fn test_closure_four_cycle_found_in_second_round() {
        let graph = graph_with_edges(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4), (4, 1)]);

        assert_eq!(
            reachability_closure(&graph, None),
            ClosureVerdict::Cycle { label: 1, round: 2 }
        );
    }

    #[test]
    fn test_closure_three_cycle_hits_round_limit() {
        // Walks of length 2^k never return to their origin on a 3-cycle
        let graph = graph_with_edges(&[1, 2, 3], &[(1, 2), (2, 3), (3, 1)]);

        assert_eq!(
            reachability_closure(&graph, None),
            ClosureVerdict::RoundLimit { rounds: 4 }
        );
    }

    #[test]
    fn test_closure_path_is_acyclic() {
        let graph = graph_with_edges(&[1, 2, 3], &[(1, 2), (2, 3)]);

        assert_eq!(
            reachability_closure(&graph, None),
            ClosureVerdict::Acyclic { rounds: 2 }
        );
    }

    #[test]
    fn test_closure_empty_graph_is_acyclic() {
        assert_eq!(
            reachability_closure(&DirectedGraph::<u32>::new(), None),
            ClosureVerdict::Acyclic { rounds: 1 }
        );
    }

    #[test]
    fn test_closure_small_round_limit_is_a_false_positive() {
        // A path of 8 vertices needs 3 rounds to empty out
        let labels: Vec<u32> = (0..8).collect();
        let edges: Vec<(u32, u32)> = (1..8).map(|i| (i - 1, i)).collect();
        let graph = graph_with_edges(&labels, &edges);

        assert_eq!(
            reachability_closure(&graph, None),
            ClosureVerdict::Acyclic { rounds: 3 }
        );
        assert_eq!(
            reachability_closure(&graph, Some(1)),
            ClosureVerdict::RoundLimit { rounds: 2 }
        );
    }
}
