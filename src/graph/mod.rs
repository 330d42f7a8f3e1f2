pub mod traits;
pub mod adjacency;
pub mod indexed;
pub mod generators;

pub use traits::{Graph, MutableGraph, Vertex, Weight};
pub use adjacency::AdjacencyGraph;
pub use indexed::IndexedGraph;
