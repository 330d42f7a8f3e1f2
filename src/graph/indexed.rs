use std::collections::HashMap;
use num_traits::NumCast;

use crate::graph::traits::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Compact, validated form of a graph that the algorithms run on.
///
/// Vertices are mapped to dense indices `0..n` in the iteration order of the source graph.
/// Building an `IndexedGraph` checks every edge once, so the relaxation loops never see
/// a negative or non-finite weight or a dangling edge.
#[derive(Debug, Clone)]
pub struct IndexedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Vertex identifier for each index
    vertices: Vec<V>,

    /// Index of each vertex identifier
    indices: HashMap<V, usize>,

    /// Outgoing edges for each index: [(target index, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Total number of edges
    edge_count: usize,
}

impl<V, W> IndexedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Indexes and validates any graph.
    ///
    /// Fails with [`Error::InvalidWeight`] for negative, infinite or NaN weights and with
    /// [`Error::MalformedEdge`] when an edge target is not a vertex of the graph.
    pub fn build<G>(graph: &G) -> Result<Self>
    where
        G: Graph<V, W> + ?Sized,
    {
        let vertices: Vec<V> = graph.vertices().cloned().collect();
        let indices: HashMap<V, usize> = vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| (vertex.clone(), index))
            .collect();

        let mut adjacency = Vec::with_capacity(vertices.len());
        let mut edge_count = 0;

        for vertex in &vertices {
            let mut edges = Vec::new();
            for (target, weight) in graph.outgoing_edges(vertex) {
                if !weight.is_finite() || weight < W::zero() {
                    return Err(Error::InvalidWeight {
                        from: format!("{:?}", vertex),
                        to: format!("{:?}", target),
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }
                let target_index = indices.get(target).copied().ok_or_else(|| Error::MalformedEdge {
                    from: format!("{:?}", vertex),
                    to: format!("{:?}", target),
                })?;
                edges.push((target_index, weight));
            }
            edge_count += edges.len();
            adjacency.push(edges);
        }

        Ok(IndexedGraph {
            vertices,
            indices,
            adjacency,
            edge_count,
        })
    }

    /// Returns the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Outgoing edges of the vertex at `index`
    #[inline]
    pub fn outgoing(&self, index: usize) -> &[(usize, W)] {
        &self.adjacency[index]
    }

    /// Vertex identifier stored at `index`
    pub fn vertex(&self, index: usize) -> &V {
        &self.vertices[index]
    }

    /// Index of a vertex identifier, if it belongs to the graph
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.indices.get(vertex).copied()
    }

    /// Index of the source vertex of a run, or [`Error::UnknownSource`]
    pub fn source_index(&self, source: &V) -> Result<usize> {
        self.index_of(source)
            .ok_or_else(|| Error::UnknownSource(format!("{:?}", source)))
    }

    /// Mean edge weight, or `None` for a graph without edges
    pub fn average_weight(&self) -> Option<W> {
        if self.edge_count == 0 {
            return None;
        }
        let total = self
            .adjacency
            .iter()
            .flat_map(|edges| edges.iter())
            .fold(W::zero(), |acc, &(_, weight)| acc + weight);
        <W as NumCast>::from(self.edge_count).map(|count| total / count)
    }

    /// Translates per-index distances back to a map over vertex identifiers.
    ///
    /// Unreachable vertices (`None`) are left out.
    pub fn distance_map(&self, distances: &[Option<W>]) -> HashMap<V, W> {
        distances
            .iter()
            .enumerate()
            .filter_map(|(index, distance)| distance.map(|d| (self.vertices[index].clone(), d)))
            .collect()
    }
}
