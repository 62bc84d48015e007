//! Edge semantics for the two graph kinds
//!
//! A graph's kind is a zero-sized type parameter, so the choice between
//! symmetric and one-way links is made at compile time.

use std::collections::BTreeMap;
use std::fmt;

use super::types::{Label, Vertex};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Undirected {}
    impl Sealed for super::Directed {}
}

/// Edge semantics of a graph
///
/// Sealed: only [`Undirected`] and [`Directed`] implement it. Callers of
/// these functions guarantee that both endpoints exist.
pub trait GraphKind: sealed::Sealed + Copy + Default + fmt::Debug + 'static {
    /// Matching petgraph edge type, used by `Graph::to_petgraph`
    type EdgeType: petgraph::EdgeType;

    const IS_DIRECTED: bool;

    /// Short name used in log events
    const NAME: &'static str;

    /// Record an edge between two existing vertices
    fn link<T: Label>(vertices: &mut BTreeMap<T, Vertex<T>>, from: &T, to: &T);

    /// Whether an edge between two existing vertices is recorded
    fn is_linked<T: Label>(vertices: &BTreeMap<T, Vertex<T>>, from: &T, to: &T) -> bool;

    /// Number of edges given the number of adjacency entries
    fn edge_count(adjacency_entries: usize) -> usize;
}

/// Links are symmetric: `link(a, b)` lets `a` reach `b` and `b` reach `a`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Undirected;

/// Links are one-way: `link(a, b)` only lets `a` reach `b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Directed;

fn push_neighbor<T: Label>(vertices: &mut BTreeMap<T, Vertex<T>>, owner: &T, neighbor: &T) {
    if let Some(vertex) = vertices.get_mut(owner) {
        vertex.push_neighbor(neighbor.clone());
    }
}

fn is_adjacent<T: Label>(vertices: &BTreeMap<T, Vertex<T>>, owner: &T, neighbor: &T) -> bool {
    vertices
        .get(owner)
        .is_some_and(|vertex| vertex.is_adjacent_to(neighbor))
}

impl GraphKind for Undirected {
    type EdgeType = petgraph::Undirected;

    const IS_DIRECTED: bool = false;
    const NAME: &'static str = "undirected";

    // A self-loop is pushed twice like any other edge, so every edge owns
    // exactly two entries.
    fn link<T: Label>(vertices: &mut BTreeMap<T, Vertex<T>>, from: &T, to: &T) {
        push_neighbor(vertices, from, to);
        push_neighbor(vertices, to, from);
    }

    fn is_linked<T: Label>(vertices: &BTreeMap<T, Vertex<T>>, from: &T, to: &T) -> bool {
        is_adjacent(vertices, from, to) && is_adjacent(vertices, to, from)
    }

    fn edge_count(adjacency_entries: usize) -> usize {
        adjacency_entries / 2
    }
}

impl GraphKind for Directed {
    type EdgeType = petgraph::Directed;

    const IS_DIRECTED: bool = true;
    const NAME: &'static str = "directed";

    fn link<T: Label>(vertices: &mut BTreeMap<T, Vertex<T>>, from: &T, to: &T) {
        push_neighbor(vertices, from, to);
    }

    fn is_linked<T: Label>(vertices: &BTreeMap<T, Vertex<T>>, from: &T, to: &T) -> bool {
        is_adjacent(vertices, from, to)
    }

    fn edge_count(adjacency_entries: usize) -> usize {
        adjacency_entries
    }
}
