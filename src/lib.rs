//! Band SSSP - single-source shortest paths without a globally ordered frontier
//!
//! This library implements a band-partitioned shortest path algorithm in the spirit of
//! "Breaking the Sorting Barrier for Directed Single-Source Shortest Paths" by Duan et al. (2025),
//! together with classic Dijkstra as a baseline and correctness oracle.
//!
//! Both algorithms work on directed graphs with real non-negative edge weights and return
//! the distances of all vertices reachable from the source.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod verify;

pub use algorithm::{
    band::{BandConfig, BandSSSP, BandStats},
    dijkstra::Dijkstra,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, Graph, IndexedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid edge weight {weight} on edge {from} -> {to}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("Source vertex {0} not found in graph")]
    UnknownSource(String),

    #[error("Edge {from} -> {to} references a vertex missing from the graph")]
    MalformedEdge { from: String, to: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
