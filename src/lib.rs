//! # cyclegraph - Generic Graphs with Cycle Detection
//!
//! cyclegraph models directed and undirected graphs over vertices carrying
//! labels of any ordered type, answers adjacency queries, and detects
//! cycles.
//!
//! ## Main Components
//!
//! - **Graph**: owns its vertices, keyed by label; links are symmetric in an
//!   [`UndirectedGraph`] and one-way in a [`DirectedGraph`]
//! - **Detector**: borrows a graph and reports whether it contains a cycle,
//!   with the algorithm chosen from the graph kind at compile time
//! - **Config**: detector options, built through [`ConfigBuilder`]
//!
//! ## Usage
//!
//! ```
//! use cyclegraph::{CycleDetector, DirectedGraph, UndirectedGraph};
//!
//! # fn main() -> miette::Result<()> {
//! // Build a small build-order graph
//! let mut tasks = DirectedGraph::new();
//! tasks.extend(["fetch", "compile", "test", "package"]);
//! tasks.link(&"fetch", &"compile");
//! tasks.link(&"compile", &"test");
//! tasks.link(&"compile", &"package");
//!
//! assert_eq!(tasks.order(), 4);
//! assert_eq!(tasks.size(), 3);
//! assert_eq!(tasks.vertex(&"compile")?.neighbors(), &["test", "package"]);
//! assert!(!CycleDetector::new(&tasks).has_cycle());
//!
//! // Analyse a copy so the original stays untouched
//! let mut what_if = tasks.clone();
//! what_if.link(&"test", &"fetch");
//! assert!(CycleDetector::new(&what_if).has_cycle());
//! assert!(!tasks.is_linked(&"test", &"fetch"));
//!
//! // Undirected graphs ignore the edge leading back to the parent
//! let mut ring = UndirectedGraph::from_labels([1, 2, 3]);
//! ring.link(&1, &2);
//! ring.link(&2, &3);
//! assert!(!CycleDetector::new(&ring).has_cycle());
//! ring.link(&3, &1);
//! assert!(CycleDetector::new(&ring).has_cycle());
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Looking up a missing vertex is the only failing operation and returns
//! [`GraphError::VertexNotFound`]. Linking a missing vertex and adding a
//! label twice are silent no-ops.
//!
//! ## Logging
//!
//! Events are emitted through `tracing` (ignored links at `debug`, closure
//! rounds at `trace`, forced closure verdicts at `warn`). The crate does not
//! install a subscriber.

mod constants;

pub mod common;
pub mod config;
pub mod detector;
pub mod error;
pub mod graph;

pub use common::ConfigBuilder;
pub use detector::{ClosureVerdict, CycleDetector, CycleSearch};
pub use error::{GraphError, Result};
pub use graph::{Directed, DirectedGraph, Graph, GraphKind, Label, Undirected, UndirectedGraph, Vertex};
