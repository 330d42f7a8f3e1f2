//! Post-hoc checks for a distance mapping.
//!
//! [`check_distances`] validates a mapping as a shortest-distance certificate for a graph
//! and source. The source must be at zero and no edge out of a reached vertex may shorten
//! any distance. Every other reached vertex needs a tight edge from a reached vertex.

use std::collections::{HashMap, HashSet};

use crate::graph::{Graph, Vertex, Weight};

/// First property a distance mapping was found to break
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Violation {
    #[error("Source {0} is missing from the distances")]
    SourceMissing(String),

    #[error("Source {vertex} is at distance {distance}, expected 0")]
    SourceNotZero { vertex: String, distance: f64 },

    #[error("Vertex {0} is not part of the graph")]
    UnknownVertex(String),

    #[error("Vertex {vertex} has invalid distance {distance}")]
    InvalidDistance { vertex: String, distance: f64 },

    #[error("Edge {from} -> {to} would shorten {to} to {via}")]
    EdgeNotRelaxed { from: String, to: String, via: f64 },

    #[error("Vertex {0} has no tight incoming edge from a reached vertex")]
    NoTightEdge(String),
}

fn to_f64<W: Weight>(weight: W) -> f64 {
    weight.to_f64().unwrap_or(f64::NAN)
}

/// Checks that `distances` are the shortest distances from `source` in `graph`.
///
/// Edge weights are assumed valid (non-negative).
pub fn check_distances<V, W, G>(graph: &G, source: &V, distances: &HashMap<V, W>) -> Result<(), Violation>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    match distances.get(source) {
        None => return Err(Violation::SourceMissing(format!("{:?}", source))),
        Some(&d) if d != W::zero() => {
            return Err(Violation::SourceNotZero {
                vertex: format!("{:?}", source),
                distance: to_f64(d),
            })
        }
        Some(_) => {}
    }

    for (vertex, &distance) in distances {
        if !graph.has_vertex(vertex) {
            return Err(Violation::UnknownVertex(format!("{:?}", vertex)));
        }
        if !distance.is_finite() || distance < W::zero() {
            return Err(Violation::InvalidDistance {
                vertex: format!("{:?}", vertex),
                distance: to_f64(distance),
            });
        }
    }

    let mut explained: HashSet<&V> = HashSet::with_capacity(distances.len());
    for (vertex, &distance) in distances {
        for (target, weight) in graph.outgoing_edges(vertex) {
            let via = distance + weight;
            match distances.get(target) {
                Some(&current) if via > current => {}
                Some(&current) if via == current => {
                    explained.insert(target);
                }
                _ => {
                    return Err(Violation::EdgeNotRelaxed {
                        from: format!("{:?}", vertex),
                        to: format!("{:?}", target),
                        via: to_f64(via),
                    })
                }
            }
        }
    }

    for vertex in distances.keys() {
        if vertex != source && !explained.contains(vertex) {
            return Err(Violation::NoTightEdge(format!("{:?}", vertex)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyGraph, MutableGraph};
    use ordered_float::OrderedFloat;

    fn diamond() -> AdjacencyGraph<&'static str, OrderedFloat<f64>> {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge("s", "a", OrderedFloat(1.0));
        graph.add_edge("s", "b", OrderedFloat(4.0));
        graph.add_edge("a", "b", OrderedFloat(2.0));
        graph.add_vertex("lonely");
        graph
    }

    fn distances(entries: &[(&'static str, f64)]) -> HashMap<&'static str, OrderedFloat<f64>> {
        entries.iter().map(|&(v, d)| (v, OrderedFloat(d))).collect()
    }

    #[test]
    fn accepts_exact_distances() {
        let graph = diamond();
        let exact = distances(&[("s", 0.0), ("a", 1.0), ("b", 3.0)]);
        assert_eq!(check_distances(&graph, &"s", &exact), Ok(()));
    }

    #[test]
    fn rejects_too_large_distance() {
        let graph = diamond();
        let loose = distances(&[("s", 0.0), ("a", 1.0), ("b", 4.0)]);
        assert!(matches!(
            check_distances(&graph, &"s", &loose),
            Err(Violation::EdgeNotRelaxed { .. })
        ));
    }

    #[test]
    fn rejects_too_small_distance() {
        let graph = diamond();
        let optimistic = distances(&[("s", 0.0), ("a", 1.0), ("b", 2.5)]);
        assert_eq!(
            check_distances(&graph, &"s", &optimistic),
            Err(Violation::NoTightEdge("\"b\"".to_string()))
        );
    }

    #[test]
    fn rejects_missing_reachable_vertex() {
        let graph = diamond();
        let partial = distances(&[("s", 0.0), ("a", 1.0)]);
        assert!(matches!(
            check_distances(&graph, &"s", &partial),
            Err(Violation::EdgeNotRelaxed { .. })
        ));
    }

    #[test]
    fn rejects_nonzero_source() {
        let graph = diamond();
        let shifted = distances(&[("s", 1.0), ("a", 2.0), ("b", 4.0)]);
        assert!(matches!(
            check_distances(&graph, &"s", &shifted),
            Err(Violation::SourceNotZero { .. })
        ));
    }
}
