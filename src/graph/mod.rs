//! # Graph Model Module
//!
//! Generic graphs over labelled vertices, in two kinds that share storage and
//! queries but differ in how links are recorded.
//!
//! ## Components
//!
//! - **Graph**: owns every vertex, keyed by label; one entry per label
//! - **Vertex**: a fixed label plus the labels of its neighbors
//! - **Undirected / Directed**: kind markers selecting symmetric or one-way
//!   links at compile time
//!
//! ## Example
//!
//! ```
//! use cyclegraph::graph::{DirectedGraph, UndirectedGraph};
//!
//! let mut roads = UndirectedGraph::from_labels(["lyon", "paris", "nantes"]);
//! roads.link(&"paris", &"lyon");
//! assert!(roads.is_linked(&"lyon", &"paris"));
//! assert_eq!(roads.edge_pairs().len(), 2);
//! assert_eq!(roads.size(), 1);
//!
//! let mut deps = DirectedGraph::from_labels([1, 2]);
//! deps.link(&1, &2);
//! assert!(deps.is_linked(&1, &2));
//! assert!(!deps.is_linked(&2, &1));
//!
//! // Links to unknown vertices are ignored
//! deps.link(&1, &3);
//! assert_eq!(deps.size(), 1);
//! ```

mod graph_impl;
mod kind;
mod types;

pub use graph_impl::{DirectedGraph, Graph, UndirectedGraph};
pub use kind::{Directed, GraphKind, Undirected};
pub use types::{Label, Vertex};
