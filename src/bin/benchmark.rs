use std::env;
use std::time::{Duration, Instant};

use band_sssp::algorithm::{band::BandSSSP, dijkstra::Dijkstra, ShortestPathAlgorithm};
use band_sssp::graph::generators::sparse_random_graph;
use band_sssp::{BandStats, IndexedGraph};
use log::{info, warn};
use ordered_float::OrderedFloat;
use serde::Serialize;

type W = OrderedFloat<f64>;

/// One row of the benchmark report
#[derive(Debug, Serialize)]
struct BenchmarkRow {
    vertices: usize,
    edges: usize,
    reachable: usize,
    dijkstra_ms: f64,
    band_ms: f64,
    speedup: f64,
    distances_match: bool,
    band_stats: BandStats,
}

// Function to benchmark an algorithm on an indexed graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &IndexedGraph<usize, W>, source: usize) -> (Vec<Option<W>>, Duration)
where
    A: ShortestPathAlgorithm<W>,
{
    info!("Running {} on graph with {} vertices", algorithm.name(), graph.vertex_count());

    let start = Instant::now();
    let distances = algorithm
        .distances_indexed(graph, source)
        .unwrap_or_else(|err| panic!("{} failed: {}", algorithm.name(), err));
    (distances, start.elapsed())
}

fn main() {
    env_logger::init();

    let json = env::args().any(|arg| arg == "--json");
    let graph_sizes = [1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;

    let dijkstra = Dijkstra::new();
    let band = BandSSSP::new();
    let mut rows = Vec::new();

    for (seed, &size) in graph_sizes.iter().enumerate() {
        let graph = sparse_random_graph(size, edge_factor, seed as u64);
        let indexed = match IndexedGraph::build(&graph) {
            Ok(indexed) => indexed,
            Err(err) => {
                warn!("Skipping graph with {} vertices: {}", size, err);
                continue;
            }
        };
        let source = 0;

        let (expected, dijkstra_time) = benchmark_algorithm(&dijkstra, &indexed, source);

        info!("Running BandSSSP on graph with {} vertices", indexed.vertex_count());
        let start = Instant::now();
        let (actual, band_stats) = match band.run_with_stats(&indexed, source) {
            Ok(run) => run,
            Err(err) => {
                warn!("Band SSSP failed on {} vertices: {}", size, err);
                continue;
            }
        };
        let band_time = start.elapsed();

        rows.push(BenchmarkRow {
            vertices: indexed.vertex_count(),
            edges: indexed.edge_count(),
            reachable: expected.iter().filter(|d| d.is_some()).count(),
            dijkstra_ms: dijkstra_time.as_secs_f64() * 1000.0,
            band_ms: band_time.as_secs_f64() * 1000.0,
            speedup: dijkstra_time.as_secs_f64() / band_time.as_secs_f64().max(f64::EPSILON),
            distances_match: expected == actual,
            band_stats,
        });
    }

    if json {
        match serde_json::to_string_pretty(&rows) {
            Ok(report) => println!("{}", report),
            Err(err) => eprintln!("Failed to serialize report: {}", err),
        }
        return;
    }

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs BandSSSP");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<13} | {:<13} | {:<8} | {:<7} | {:<6}",
        "Vertices", "Reachable", "Dijkstra (ms)", "Band (ms)", "SpeedUp", "Pivots", "Match"
    );
    println!("-----------------------------------------------------");
    for row in &rows {
        println!(
            "{:<10} | {:<10} | {:<13.2} | {:<13.2} | {:<8.2} | {:<7} | {:<6}",
            row.vertices,
            row.reachable,
            row.dijkstra_ms,
            row.band_ms,
            row.speedup,
            row.band_stats.pivots,
            row.distances_match
        );
    }
}
