//! # Cycle Detection Module
//!
//! This module answers whether a graph contains a cycle, with an algorithm
//! picked from the graph's kind at compile time.
//!
//! ## Algorithms
//!
//! - **Undirected graphs**: depth-first search carrying the parent vertex;
//!   reaching a visited vertex through any edge other than the one just
//!   taken is a cycle.
//! - **Directed graphs**: three-colour depth-first search, O(V + E), by
//!   default. The reachability closure (repeatedly composing the "reaches"
//!   relation with itself) is available through
//!   [`DirectedAlgorithm::ReachabilityClosure`](crate::config::DirectedAlgorithm)
//!   or [`CycleDetector::reachability_closure`]. It stops after a bounded
//!   number of rounds and then assumes a cycle; the verdict says so.
//! - **Strongly connected components**: directed graphs can also list the
//!   components containing a cycle (Tarjan's algorithm, via petgraph).
//!
//! ## Example
//!
//! ```
//! use cyclegraph::detector::CycleDetector;
//! use cyclegraph::graph::{DirectedGraph, UndirectedGraph};
//!
//! let mut graph = DirectedGraph::from_labels([1, 2, 3]);
//! graph.link(&1, &2);
//! graph.link(&2, &3);
//! assert!(!CycleDetector::new(&graph).has_cycle());
//!
//! graph.link(&3, &1);
//! let detector = CycleDetector::new(&graph);
//! assert!(detector.has_cycle());
//! assert_eq!(detector.cyclic_components(), vec![vec![1, 2, 3]]);
//!
//! let mut path = UndirectedGraph::from_labels(['a', 'b']);
//! path.link(&'a', &'b');
//! assert!(!CycleDetector::new(&path).has_cycle());
//! ```

mod detector_impl;
mod directed;
mod undirected;

pub use detector_impl::*;
