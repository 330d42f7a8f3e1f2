use std::collections::HashMap;

use crate::graph::{Graph, IndexedGraph, Vertex, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Source vertex of the run
    pub source: V,

    /// Distances from the source to every reachable vertex.
    ///
    /// Unreachable vertices are absent; the source maps to zero.
    pub distances: HashMap<V, W>,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Shortest distance to `vertex`, or `None` if it is unreachable
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distances.contains_key(vertex)
    }

    /// Number of reachable vertices, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    pub fn into_distances(self) -> HashMap<V, W> {
        self.distances
    }
}

/// Trait for single-source shortest path algorithms.
///
/// Implementors only provide the computation over an [`IndexedGraph`]; indexing,
/// validation and translation back to vertex identifiers are shared.
pub trait ShortestPathAlgorithm<W>
where
    W: Weight,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Computes distances over a validated, indexed graph.
    ///
    /// Entry `i` of the returned vector is the distance of vertex index `i`, `None` when
    /// it is unreachable from `source`.
    fn distances_indexed<V>(&self, graph: &IndexedGraph<V, W>, source: usize) -> Result<Vec<Option<W>>>
    where
        V: Vertex;

    /// Compute shortest distances from a source vertex to all reachable vertices
    fn shortest_distances<V, G>(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>
    where
        V: Vertex,
        G: Graph<V, W> + ?Sized,
    {
        let indexed = IndexedGraph::build(graph)?;
        self.shortest_distances_indexed(&indexed, source)
    }

    /// Like [`shortest_distances`](Self::shortest_distances) but reuses an indexed graph
    fn shortest_distances_indexed<V>(
        &self,
        graph: &IndexedGraph<V, W>,
        source: &V,
    ) -> Result<ShortestPathResult<V, W>>
    where
        V: Vertex,
    {
        let source_index = graph.source_index(source)?;
        let distances = self.distances_indexed(graph, source_index)?;
        Ok(ShortestPathResult {
            source: source.clone(),
            distances: graph.distance_map(&distances),
        })
    }
}
