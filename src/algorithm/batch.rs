//! Independent runs from many sources.
//!
//! Every run owns its distance table and ordering structures, so runs over the same
//! read-only graph need no synchronization and can go to separate rayon tasks.

use rayon::prelude::*;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, IndexedGraph, Vertex, Weight};
use crate::Result;

/// Computes shortest distances from each source in parallel.
///
/// The graph is indexed and validated once. Results keep the order of `sources`; the
/// first failing source (an unknown vertex, for instance) fails the whole batch.
pub fn shortest_distances_from_sources<A, V, W, G>(
    algorithm: &A,
    graph: &G,
    sources: &[V],
) -> Result<Vec<ShortestPathResult<V, W>>>
where
    A: ShortestPathAlgorithm<W> + Sync,
    V: Vertex + Send + Sync,
    W: Weight + Send + Sync,
    G: Graph<V, W> + ?Sized,
{
    let indexed = IndexedGraph::build(graph)?;
    shortest_distances_from_sources_indexed(algorithm, &indexed, sources)
}

/// Like [`shortest_distances_from_sources`] over an already indexed graph
pub fn shortest_distances_from_sources_indexed<A, V, W>(
    algorithm: &A,
    graph: &IndexedGraph<V, W>,
    sources: &[V],
) -> Result<Vec<ShortestPathResult<V, W>>>
where
    A: ShortestPathAlgorithm<W> + Sync,
    V: Vertex + Send + Sync,
    W: Weight + Send + Sync,
{
    sources
        .par_iter()
        .map(|source| algorithm.shortest_distances_indexed(graph, source))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::band::BandSSSP;
    use crate::algorithm::dijkstra::Dijkstra;
    use crate::graph::generators::gnp_random_graph;
    use crate::Error;

    #[test]
    fn parallel_runs_match_sequential_runs() {
        let graph = gnp_random_graph(40, 0.1, 1, 20, 5);
        let sources: Vec<usize> = (0..40).step_by(7).collect();

        let batch = shortest_distances_from_sources(&BandSSSP::new(), &graph, &sources).unwrap();
        assert_eq!(batch.len(), sources.len());
        for (result, source) in batch.iter().zip(&sources) {
            assert_eq!(result.source, *source);
            let sequential = Dijkstra::new().shortest_distances(&graph, source).unwrap();
            assert_eq!(result, &sequential);
        }
    }

    #[test]
    fn unknown_source_fails_the_batch() {
        let graph = gnp_random_graph(5, 0.5, 1, 3, 1);

        let err = shortest_distances_from_sources(&Dijkstra::new(), &graph, &[0, 99]).unwrap_err();
        assert_eq!(err, Error::UnknownSource("99".to_string()));
    }
}
