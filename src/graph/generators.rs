use crate::graph::{AdjacencyGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a directed G(n, p) random graph.
///
/// Every ordered pair `(u, v)` with `u != v` gets an edge with probability `p`; weights are
/// integers drawn uniformly from `min_weight..=max_weight`. All `n` vertices are present even
/// when isolated. The same seed always yields the same graph.
pub fn gnp_random_graph(
    n: usize,
    p: f64,
    min_weight: u32,
    max_weight: u32,
    seed: u64,
) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    assert!(min_weight <= max_weight, "min_weight must not exceed max_weight");

    let mut graph = AdjacencyGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }

    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(p) {
                let weight = rng.gen_range(min_weight..=max_weight);
                graph.add_edge(u, v, OrderedFloat(weight as f64));
            }
        }
    }

    graph
}

/// Generates a complete directed graph on `n` vertices without self-loops
pub fn complete_graph(
    n: usize,
    min_weight: u32,
    max_weight: u32,
    seed: u64,
) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    gnp_random_graph(n, 1.0, min_weight, max_weight, seed)
}

/// Generates a `width` x `height` grid with vertices named by `(x, y)`.
///
/// Each pair of 4-neighbours is joined in both directions by edges of one shared random
/// weight from `min_weight..=max_weight`.
pub fn grid_graph(
    width: usize,
    height: usize,
    min_weight: u32,
    max_weight: u32,
    seed: u64,
) -> AdjacencyGraph<(usize, usize), OrderedFloat<f64>> {
    assert!(min_weight <= max_weight, "min_weight must not exceed max_weight");

    let mut graph = AdjacencyGraph::with_capacity(width * height);
    let mut rng = StdRng::seed_from_u64(seed);

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex((x, y));
        }
    }

    for y in 0..height {
        for x in 0..width {
            let mut neighbors = Vec::with_capacity(2);
            if x + 1 < width {
                neighbors.push((x + 1, y));
            }
            if y + 1 < height {
                neighbors.push((x, y + 1));
            }
            for neighbor in neighbors {
                let weight = OrderedFloat(rng.gen_range(min_weight..=max_weight) as f64);
                graph.add_edge((x, y), neighbor, weight);
                graph.add_edge(neighbor, (x, y), weight);
            }
        }
    }

    graph
}

/// Generates a sparse random graph with roughly `edge_factor * n` edges.
///
/// Intended for benchmarks where G(n, p) would be too slow to build. Weights are real
/// numbers in `1.0..100.0`.
pub fn sparse_random_graph(n: usize, edge_factor: f64, seed: u64) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, OrderedFloat(rng.gen_range(1.0..100.0)));
        }
    }

    graph
}
