use crate::graph::traits::{Graph, MutableGraph, Vertex, Weight};
use std::collections::HashMap;

/// A directed graph implementation using adjacency lists keyed by arbitrary vertices.
///
/// Vertices keep their insertion order, so iterating the graph is deterministic.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Vertex identifiers in insertion order
    vertices: Vec<V>,

    /// Position of each vertex in `vertices`
    positions: HashMap<V, usize>,

    /// Outgoing edges for each vertex position: [(target position, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Number of edges, parallel edges counted separately
    edge_count: usize,
}

impl<V, W> AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        AdjacencyGraph {
            vertices: Vec::new(),
            positions: HashMap::new(),
            outgoing_edges: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty directed graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyGraph {
            vertices: Vec::with_capacity(vertices),
            positions: HashMap::with_capacity(vertices),
            outgoing_edges: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = AdjacencyGraph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Returns the position of a vertex, inserting it if needed
    fn position_or_insert(&mut self, vertex: V) -> usize {
        if let Some(&position) = self.positions.get(&vertex) {
            return position;
        }
        let position = self.vertices.len();
        self.positions.insert(vertex.clone(), position);
        self.vertices.push(vertex);
        self.outgoing_edges.push(Vec::new());
        position
    }
}

impl<V, W> Default for AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> FromIterator<(V, V, W)> for AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn from_iter<I: IntoIterator<Item = (V, V, W)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<V, W> Graph<V, W> for AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(&position) = self.positions.get(vertex) {
            Box::new(
                self.outgoing_edges[position]
                    .iter()
                    .map(move |&(target, weight)| (&self.vertices[target], weight)),
            )
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.positions.contains_key(vertex)
    }
}

impl<V, W> MutableGraph<V, W> for AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.positions.contains_key(&vertex) {
            return false;
        }
        self.position_or_insert(vertex);
        true
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) {
        let from = self.position_or_insert(from);
        let to = self.position_or_insert(to);
        self.outgoing_edges[from].push((to, weight));
        self.edge_count += 1;
    }
}

/// A plain adjacency mapping is a graph too.
///
/// Every edge target is expected to be a key of the map as well; targets without an
/// entry are reported as malformed edges when the graph is indexed.
impl<V, W> Graph<V, W> for HashMap<V, Vec<(V, W)>>
where
    V: Vertex,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.keys())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        match self.get(vertex) {
            Some(edges) => Box::new(edges.iter().map(|(target, weight)| (target, *weight))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.contains_key(vertex)
    }
}
