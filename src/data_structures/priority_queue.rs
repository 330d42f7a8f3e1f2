use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue of vertex indices with lazy deletion.
///
/// Decrease-key is done by pushing a fresh entry; callers skip stale entries when they
/// pop them. Ties on priority are broken by the smaller vertex index.
#[derive(Debug, Clone)]
pub struct MinQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, usize)>>,
}

impl<P> MinQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a queue sized for roughly `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Builds a queue from `(vertex, priority)` pairs in linear time
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, P)>,
    {
        let items: Vec<_> = entries
            .into_iter()
            .map(|(vertex, priority)| Reverse((priority, vertex)))
            .collect();
        MinQueue {
            heap: BinaryHeap::from(items),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: usize, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(usize, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(usize, P)> {
        self.heap.peek().map(|Reverse((priority, vertex))| (*vertex, *priority))
    }
}

impl<P> Default for MinQueue<P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn pops_in_increasing_priority() {
        let mut queue = MinQueue::new();
        queue.push(3, OrderedFloat(2.5));
        queue.push(1, OrderedFloat(0.5));
        queue.push(2, OrderedFloat(1.0));

        assert_eq!(queue.peek(), Some((1, OrderedFloat(0.5))));
        assert_eq!(queue.pop(), Some((1, OrderedFloat(0.5))));
        assert_eq!(queue.pop(), Some((2, OrderedFloat(1.0))));
        assert_eq!(queue.pop(), Some((3, OrderedFloat(2.5))));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn heapified_entries_keep_min_order() {
        let mut queue = MinQueue::from_entries(vec![(7, 9u32), (4, 1), (5, 1), (6, 3)]);
        assert_eq!(queue.len(), 4);

        let order: Vec<usize> = std::iter::from_fn(|| queue.pop().map(|(v, _)| v)).collect();
        assert_eq!(order, vec![4, 5, 6, 7]);
    }
}
