/// A set of vertex indices from a fixed universe `0..n`.
///
/// Insert, remove and membership are O(1); iteration and `clear` only touch the members,
/// never the whole universe. Iteration order is unspecified.
#[derive(Debug, Clone)]
pub struct SparseSet {
    /// Members in no particular order
    dense: Vec<usize>,

    /// Position of each member in `dense`, `usize::MAX` when absent
    sparse: Vec<usize>,
}

const ABSENT: usize = usize::MAX;

impl SparseSet {
    /// Creates an empty set over the universe `0..universe`
    pub fn new(universe: usize) -> Self {
        SparseSet {
            dense: Vec::new(),
            sparse: vec![ABSENT; universe],
        }
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    #[inline]
    pub fn contains(&self, item: usize) -> bool {
        self.sparse[item] != ABSENT
    }

    /// Inserts an item. Returns false if it was already present.
    #[inline]
    pub fn insert(&mut self, item: usize) -> bool {
        if self.contains(item) {
            return false;
        }
        self.sparse[item] = self.dense.len();
        self.dense.push(item);
        true
    }

    /// Removes an item. Returns false if it was not present.
    pub fn remove(&mut self, item: usize) -> bool {
        let position = self.sparse[item];
        if position == ABSENT {
            return false;
        }
        let last = self.dense.len() - 1;
        self.dense.swap(position, last);
        self.sparse[self.dense[position]] = position;
        self.dense.pop();
        self.sparse[item] = ABSENT;
        true
    }

    pub fn clear(&mut self) {
        for &item in &self.dense {
            self.sparse[item] = ABSENT;
        }
        self.dense.clear();
    }

    /// Members as a slice, in unspecified order
    pub fn as_slice(&self) -> &[usize] {
        &self.dense
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.dense.iter().copied()
    }
}

impl Default for SparseSet {
    fn default() -> Self {
        SparseSet::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut set = SparseSet::new(10);
        assert!(set.insert(3));
        assert!(set.insert(7));
        assert!(!set.insert(3));
        assert_eq!(set.len(), 2);

        assert!(set.remove(3));
        assert!(!set.remove(3));
        assert!(!set.contains(3));
        assert!(set.contains(7));
        assert_eq!(set.as_slice(), &[7]);
    }

    #[test]
    fn removing_last_member_keeps_positions_consistent() {
        let mut set = SparseSet::new(5);
        for item in [4, 0, 2] {
            set.insert(item);
        }
        assert!(set.remove(2));
        assert!(set.remove(4));
        assert!(set.contains(0));
        assert!(set.insert(4));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn clear_resets_membership() {
        let mut set = SparseSet::new(4);
        set.insert(1);
        set.insert(2);
        set.clear();

        assert!(set.is_empty());
        assert!(!set.contains(1));
        assert!(set.insert(2));
    }
}
