use log::debug;

use crate::algorithm::ShortestPathAlgorithm;
use crate::data_structures::MinQueue;
use crate::graph::{IndexedGraph, Vertex, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation.
///
/// Serves as the baseline the band-partitioned algorithm is checked against.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W> ShortestPathAlgorithm<W> for Dijkstra
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn distances_indexed<V>(&self, graph: &IndexedGraph<V, W>, source: usize) -> Result<Vec<Option<W>>>
    where
        V: Vertex,
    {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::UnknownSource(format!("index {}", source)));
        }

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut settled = vec![false; n];
        distances[source] = Some(W::zero());

        let mut queue = MinQueue::with_capacity(n);
        queue.push(source, W::zero());
        let mut extracted = 0usize;

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry for a vertex settled with a smaller distance
            if settled[u] {
                continue;
            }
            settled[u] = true;
            extracted += 1;

            for &(v, weight) in graph.outgoing(u) {
                if settled[v] {
                    continue;
                }
                let new_dist = dist_u + weight;
                // A sum that overflows to infinity never reaches the target
                if !new_dist.is_finite() {
                    continue;
                }
                let improves = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };
                if improves {
                    distances[v] = Some(new_dist);
                    queue.push(v, new_dist);
                }
            }
        }

        debug!("Dijkstra settled {} of {} vertices", extracted, n);
        Ok(distances)
    }
}
