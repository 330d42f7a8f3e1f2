use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

/// Edge weight usable by the shortest path algorithms.
///
/// Weights need a total order for the priority structures, which is why plain `f64`
/// is wrapped in `ordered_float::OrderedFloat` in practice.
pub trait Weight: Float + Debug + Copy + Ord {}

impl<T> Weight for T where T: Float + Debug + Copy + Ord {}

/// Opaque vertex identifier: anything usable as a hash map key.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T> Vertex for T where T: Eq + Hash + Clone + Debug {}

/// Trait representing a weighted directed graph
pub trait Graph<V, W>: Debug
where
    V: Vertex,
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertices of the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex.
    ///
    /// Unknown vertices have no outgoing edges.
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Adds a vertex to the graph. Returns false if it was already present.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds a directed edge, registering both endpoints as vertices.
    ///
    /// Parallel edges are kept. Weights are not checked here; the algorithms reject
    /// invalid weights when they index the graph.
    fn add_edge(&mut self, from: V, to: V, weight: W);
}
