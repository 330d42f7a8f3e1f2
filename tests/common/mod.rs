#![allow(dead_code)]

use std::collections::HashMap;

use band_sssp::graph::{Graph, Vertex};
use band_sssp::IndexedGraph;
use ordered_float::OrderedFloat;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

pub type W = OrderedFloat<f64>;

/// Shortest distances computed by petgraph's Dijkstra, keyed by our vertex identifiers
pub fn reference_distances<V, G>(graph: &G, source: &V) -> HashMap<V, W>
where
    V: Vertex,
    G: Graph<V, W>,
{
    let indexed = IndexedGraph::build(graph).expect("reference graph must be valid");
    let mut reference = DiGraph::<(), f64>::with_capacity(indexed.vertex_count(), indexed.edge_count());
    let nodes: Vec<NodeIndex> = (0..indexed.vertex_count())
        .map(|_| reference.add_node(()))
        .collect();
    for u in 0..indexed.vertex_count() {
        for &(v, weight) in indexed.outgoing(u) {
            reference.add_edge(nodes[u], nodes[v], weight.into_inner());
        }
    }

    let start = nodes[indexed.index_of(source).expect("source must be in the graph")];
    petgraph::algo::dijkstra(&reference, start, None, |edge| *edge.weight())
        .into_iter()
        .map(|(node, distance)| (indexed.vertex(node.index()).clone(), OrderedFloat(distance)))
        .collect()
}

/// The four-vertex example graph A..D plus an isolated vertex E
pub fn example_graph() -> HashMap<&'static str, Vec<(&'static str, W)>> {
    let mut graph = HashMap::new();
    graph.insert("A", vec![("B", OrderedFloat(1.0)), ("C", OrderedFloat(4.0))]);
    graph.insert("B", vec![("C", OrderedFloat(2.0)), ("D", OrderedFloat(5.0))]);
    graph.insert("C", vec![("D", OrderedFloat(1.0))]);
    graph.insert("D", vec![]);
    graph.insert("E", vec![]);
    graph
}

pub fn expected_example_distances() -> HashMap<&'static str, W> {
    [("A", 0.0), ("B", 1.0), ("C", 3.0), ("D", 4.0)]
        .into_iter()
        .map(|(v, d)| (v, OrderedFloat(d)))
        .collect()
}
