use std::collections::BTreeMap;
use std::marker::PhantomData;

use petgraph::graph::NodeIndex;
use tracing::debug;

use super::kind::{Directed, GraphKind, Undirected};
use super::types::{Label, Vertex};
use crate::error::{GraphError, Result};

/// A graph over labelled vertices
///
/// The graph is the only owner of its vertices; adjacency lists store
/// neighbor labels. `K` selects the edge semantics ([`Undirected`] or
/// [`Directed`]).
///
/// Cloning produces fresh vertices with the same labels and the same edge
/// set. The copy shares nothing with the original, so linking vertices in
/// one never shows up in the other.
#[derive(Debug, Clone)]
pub struct Graph<K, T> {
    vertices: BTreeMap<T, Vertex<T>>,
    kind: PhantomData<K>,
}

/// Graph whose links are symmetric
pub type UndirectedGraph<T> = Graph<Undirected, T>;

/// Graph whose links are one-way
pub type DirectedGraph<T> = Graph<Directed, T>;

impl<K: GraphKind, T: Label> Default for Graph<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: GraphKind, T: Label> Graph<K, T> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
            kind: PhantomData,
        }
    }

    /// Create a graph with one unlinked vertex per distinct label
    pub fn from_labels(labels: impl IntoIterator<Item = T>) -> Self {
        labels.into_iter().collect()
    }

    /// Create a graph from existing vertices
    ///
    /// Only the labels are adopted; see [`Graph::insert_vertex`].
    pub fn from_vertices(vertices: impl IntoIterator<Item = Vertex<T>>) -> Self {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.insert_vertex(vertex);
        }
        graph
    }

    /// Add an unlinked vertex labelled `label`
    ///
    /// If the label is already present nothing changes: the existing vertex
    /// and all of its links are kept. Returns whether a vertex was added.
    pub fn add_vertex(&mut self, label: T) -> bool {
        if self.vertices.contains_key(&label) {
            debug!(kind = K::NAME, label = ?label, "vertex already present, keeping existing");
            return false;
        }
        self.vertices.insert(label.clone(), Vertex::new(label));
        true
    }

    /// Add a vertex, following the same policy as [`Graph::add_vertex`]
    ///
    /// The vertex's adjacency list is not carried over, since it may refer
    /// to vertices of another graph. Links have to be made with
    /// [`Graph::link`].
    pub fn insert_vertex(&mut self, vertex: Vertex<T>) -> bool {
        self.add_vertex(vertex.into_label())
    }

    /// Builder-style insert-if-absent
    pub fn with_vertex(mut self, label: T) -> Self {
        self.add_vertex(label);
        self
    }

    pub fn contains(&self, label: &T) -> bool {
        self.vertices.contains_key(label)
    }

    pub fn contains_vertex(&self, vertex: &Vertex<T>) -> bool {
        self.contains(vertex.label())
    }

    /// Look up the vertex labelled `label`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if no such vertex exists.
    pub fn vertex(&self, label: &T) -> Result<&Vertex<T>> {
        self.vertices
            .get(label)
            .ok_or_else(|| GraphError::vertex_not_found(label))
    }

    /// Link `from` and `to`
    ///
    /// Undirected graphs record the edge in both adjacency lists, directed
    /// graphs only in `from`'s. Every call appends, so linking an already
    /// linked pair adds a parallel edge.
    ///
    /// If either endpoint is missing the call does nothing and reports
    /// nothing; use [`Graph::contains`] beforehand when the difference
    /// matters.
    pub fn link(&mut self, from: &T, to: &T) {
        if !self.contains(from) || !self.contains(to) {
            debug!(kind = K::NAME, from = ?from, to = ?to, "ignoring link with missing endpoint");
            return;
        }
        K::link(&mut self.vertices, from, to);
    }

    /// Whether `from` and `to` are linked
    ///
    /// Undirected graphs require each vertex to list the other; directed
    /// graphs only check `from`'s adjacency list. Missing endpoints are
    /// never linked.
    pub fn is_linked(&self, from: &T, to: &T) -> bool {
        self.contains(from) && self.contains(to) && K::is_linked(&self.vertices, from, to)
    }

    pub fn is_linked_vertices(&self, from: &Vertex<T>, to: &Vertex<T>) -> bool {
        self.is_linked(from.label(), to.label())
    }

    /// Every adjacency entry as an `(owner, neighbor)` pair
    ///
    /// Every undirected edge, self-loops included, shows up twice. Pairs are
    /// ordered by owner label, then by link order.
    pub fn edge_pairs(&self) -> Vec<(T, T)> {
        self.vertices
            .values()
            .flat_map(|vertex| {
                vertex
                    .neighbors()
                    .iter()
                    .map(move |neighbor| (vertex.label().clone(), neighbor.clone()))
            })
            .collect()
    }

    /// Number of vertices
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges, parallel edges included
    ///
    /// Undirected graphs report half the edge pair count, directed graphs
    /// the full count.
    pub fn size(&self) -> usize {
        K::edge_count(self.adjacency_entries())
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_directed(&self) -> bool {
        K::IS_DIRECTED
    }

    /// Vertices in label order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.values()
    }

    /// Labels in ascending order
    pub fn labels(&self) -> impl Iterator<Item = &T> {
        self.vertices.keys()
    }

    fn adjacency_entries(&self) -> usize {
        self.vertices.values().map(Vertex::degree).sum()
    }

    pub(crate) fn neighbors(&self, label: &T) -> &[T] {
        self.vertices
            .get(label)
            .map(Vertex::neighbors)
            .unwrap_or(&[])
    }

    /// Copy the graph into a petgraph graph with labels as node weights
    ///
    /// Nodes are added in label order. An undirected edge becomes a single
    /// petgraph edge, so the edge count always equals [`Graph::size`].
    pub fn to_petgraph(&self) -> petgraph::Graph<T, (), K::EdgeType> {
        let mut projected = petgraph::Graph::with_capacity(self.order(), self.size());

        let indices: BTreeMap<&T, NodeIndex> = self
            .labels()
            .map(|label| (label, projected.add_node(label.clone())))
            .collect();

        for vertex in self.vertices() {
            let from = indices[vertex.label()];
            let mut self_loops = 0;
            for neighbor in vertex.neighbors() {
                if K::IS_DIRECTED || vertex.label() < neighbor {
                    projected.add_edge(from, indices[neighbor], ());
                } else if vertex.label() == neighbor {
                    self_loops += 1;
                }
            }
            // Undirected self-loops hold two entries per edge
            for _ in 0..self_loops / 2 {
                projected.add_edge(from, from, ());
            }
        }

        projected
    }
}

impl<K: GraphKind, T: Label> FromIterator<T> for Graph<K, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

/// Insert-if-absent for every label
impl<K: GraphKind, T: Label> Extend<T> for Graph<K, T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for label in iter {
            self.add_vertex(label);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn triangle<K: GraphKind>() -> Graph<K, i32> {
        let mut graph = Graph::from_labels([1, 2, 3]);
        graph.link(&1, &2);
        graph.link(&2, &3);
        graph.link(&3, &1);
        graph
    }

    #[test]
    fn test_add_vertex_reports_insertion() {
        let mut graph = UndirectedGraph::new();

        assert!(graph.add_vertex(1));
        assert!(!graph.add_vertex(1));
        assert_eq!(graph.order(), 1);
    }

    #[test]
    fn test_duplicate_insert_keeps_links() {
        let mut graph = UndirectedGraph::from_labels([1, 2]);
        graph.link(&1, &2);

        graph.add_vertex(1);
        graph.insert_vertex(Vertex::new(1));

        assert_eq!(graph.vertex(&1).unwrap().neighbors(), &[2]);
        assert!(graph.is_linked(&1, &2));
    }

    #[test]
    fn test_insert_vertex_drops_foreign_adjacency() {
        let mut source = DirectedGraph::from_labels(['a', 'b']);
        source.link(&'a', &'b');
        let foreign = source.vertex(&'a').unwrap().clone();

        let mut graph = DirectedGraph::new();
        graph.insert_vertex(foreign);

        assert!(graph.contains(&'a'));
        assert!(graph.vertex(&'a').unwrap().neighbors().is_empty());
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn test_vertex_lookup_error() {
        let graph = DirectedGraph::from_labels([1, 2]);

        assert_eq!(
            graph.vertex(&3).unwrap_err(),
            GraphError::VertexNotFound {
                label: "3".to_string()
            }
        );
    }

    #[test]
    fn test_link_with_missing_endpoint_is_noop() {
        let mut graph = UndirectedGraph::from_labels([1, 2]);
        graph.link(&1, &2);

        graph.link(&1, &9);
        graph.link(&9, &1);

        assert_eq!(graph.order(), 2);
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.edge_pairs(), vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_repeated_link_adds_parallel_edge() {
        let mut directed = DirectedGraph::from_labels([1, 2]);
        directed.link(&1, &2);
        directed.link(&1, &2);
        let mut undirected = UndirectedGraph::from_labels([1, 2]);
        undirected.link(&1, &2);
        undirected.link(&1, &2);

        assert_eq!(directed.edge_pairs(), vec![(1, 2), (1, 2)]);
        assert_eq!(directed.size(), 2);
        assert_eq!(undirected.edge_pairs().len(), 4);
        assert_eq!(undirected.size(), 2);
        assert!(undirected.is_linked(&2, &1));
    }

    #[test]
    fn test_edge_pairs_and_size_by_kind() {
        let undirected = triangle::<Undirected>();
        let directed = triangle::<Directed>();

        assert_eq!(undirected.edge_pairs().len(), 6);
        assert_eq!(undirected.size(), 3);
        assert_eq!(directed.edge_pairs(), vec![(1, 2), (2, 3), (3, 1)]);
        assert_eq!(directed.size(), 3);
    }

    #[test]
    fn test_undirected_self_loop_yields_two_pairs() {
        let mut graph = UndirectedGraph::from_labels([1, 2]);
        graph.link(&1, &1);
        graph.link(&1, &2);

        assert!(graph.is_linked(&1, &1));
        assert_eq!(graph.edge_pairs(), vec![(1, 1), (1, 1), (1, 2), (2, 1)]);
        assert_eq!(graph.size(), graph.edge_pairs().len() / 2);
        assert_eq!(graph.size(), 2);
    }

    #[test]
    fn test_with_vertex_and_extend_are_idempotent() {
        let mut graph = DirectedGraph::new().with_vertex('a').with_vertex('a');
        graph.extend(['b', 'a', 'c']);

        assert_eq!(graph.labels().copied().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = DirectedGraph::from_labels([1, 2, 3]);
        let mut copy = original.clone();
        copy.link(&1, &2);

        assert!(copy.is_linked(&1, &2));
        assert!(!original.is_linked(&1, &2));
    }

    #[test]
    fn test_to_petgraph_directed() {
        let graph = triangle::<Directed>();
        let projected = graph.to_petgraph();

        assert_eq!(projected.node_count(), 3);
        assert_eq!(projected.edge_count(), 3);
        assert!(projected.is_directed());
    }

    #[test]
    fn test_to_petgraph_undirected_collapses_pairs() {
        let mut graph = triangle::<Undirected>();
        graph.add_vertex(4);
        graph.link(&4, &4);
        graph.link(&1, &2);
        let projected = graph.to_petgraph();

        assert_eq!(projected.node_count(), 4);
        assert_eq!(graph.size(), 5);
        assert_eq!(projected.edge_count(), graph.size());
        assert!(!projected.is_directed());
    }

    #[test]
    fn test_kind_flag() {
        assert!(!UndirectedGraph::<u8>::new().is_directed());
        assert!(DirectedGraph::<u8>::new().is_directed());
        assert!(DirectedGraph::<u8>::default().is_empty());
    }
}
