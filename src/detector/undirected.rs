//! Cycle search for undirected graphs

use std::collections::BTreeSet;

use tracing::trace;

use crate::graph::{Label, UndirectedGraph};

/// Depth-first search remembering the vertex each step came from
///
/// Every unvisited vertex starts a new traversal so disconnected components
/// are covered. The visited set is shared by all traversals. Reaching an
/// already visited vertex through any edge other than the one just taken is
/// a cycle. Runs on an explicit stack.
///
/// The parent is skipped by label, once per adjacency entry, so linking the
/// same pair twice leaves a second entry that closes a cycle.
pub(crate) fn has_cycle<T: Label>(graph: &UndirectedGraph<T>) -> bool {
    let mut visited: BTreeSet<&T> = BTreeSet::new();

    for root in graph.labels() {
        if !visited.insert(root) {
            continue;
        }
        trace!(root = ?root, "starting undirected traversal");

        // (vertex, vertex we came from, next neighbor to look at)
        let mut stack: Vec<(&T, Option<&T>, usize)> = vec![(root, None, 0)];

        while let Some(frame) = stack.last_mut() {
            let (vertex, parent, next) = *frame;
            let neighbors = graph.neighbors(vertex);

            let Some(neighbor) = neighbors.get(next) else {
                stack.pop();
                continue;
            };
            frame.2 += 1;

            if Some(neighbor) == parent {
                continue;
            }
            if !visited.insert(neighbor) {
                trace!(vertex = ?vertex, neighbor = ?neighbor, "back edge found");
                return true;
            }
            stack.push((neighbor, Some(vertex), 0));
        }
    }

    false
}
