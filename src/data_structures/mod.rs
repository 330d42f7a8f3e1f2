pub mod priority_queue;
pub mod sparse_set;

pub use priority_queue::MinQueue;
pub use sparse_set::SparseSet;
