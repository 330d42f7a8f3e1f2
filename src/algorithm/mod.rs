pub mod traits;
pub mod dijkstra;
pub mod band;
pub mod batch;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
