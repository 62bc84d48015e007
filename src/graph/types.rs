//! Core graph types
//!
//! This module contains the fundamental data structures stored in a graph.

use std::fmt;

/// Bound for vertex labels
///
/// Labels must be comparable for equality and totally ordered so that
/// vertices are always visited in the same order. `Debug` is only used to
/// render labels into errors and log events.
pub trait Label: Ord + Clone + fmt::Debug {}

impl<T: Ord + Clone + fmt::Debug> Label for T {}

/// A vertex: a fixed label plus the labels of the vertices one hop away
///
/// Neighbors are stored by label, so a vertex never owns or aliases the
/// vertices it points to. Only the owning graph can add neighbors, which
/// keeps every entry pointing at a vertex of that same graph.
///
/// Two vertices compare equal when their labels are equal, regardless of
/// their neighbors or the graph they belong to.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    label: T,
    neighbors: Vec<T>,
}

impl<T: Label> Vertex<T> {
    /// Create a vertex with no neighbors
    pub fn new(label: T) -> Self {
        Self {
            label,
            neighbors: Vec::new(),
        }
    }

    pub fn label(&self) -> &T {
        &self.label
    }

    pub fn into_label(self) -> T {
        self.label
    }

    /// Neighbor labels, in the order the links were created
    pub fn neighbors(&self) -> &[T] {
        &self.neighbors
    }

    /// Number of adjacency entries, repeated links included
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether `label` appears in this vertex's adjacency list
    pub fn is_adjacent_to(&self, label: &T) -> bool {
        self.neighbors.iter().any(|neighbor| neighbor == label)
    }

    /// Append `label` to the adjacency list, even if it is already there
    pub(crate) fn push_neighbor(&mut self, label: T) {
        self.neighbors.push(label);
    }
}

impl<T: PartialEq> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<T: Eq> Eq for Vertex<T> {}

impl<T: Label> From<T> for Vertex<T> {
    fn from(label: T) -> Self {
        Vertex::new(label)
    }
}
