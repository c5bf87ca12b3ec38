//! Fixed-capacity set of board indices.
//!
//! Backed by a bitset sized for the largest supported board, so clear sets and
//! match sets never allocate.

use crate::types::MAX_CELLS;

const WORDS: usize = MAX_CELLS.div_ceil(64);

/// Set of flattened board indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSet {
    words: [u64; WORDS],
}

impl CellSet {
    pub const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    /// Insert `index`; returns true if it was not present.
    /// Indices beyond the largest board are ignored.
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= MAX_CELLS {
            return false;
        }
        let (w, bit) = (index / 64, 1u64 << (index % 64));
        let fresh = self.words[w] & bit == 0;
        self.words[w] |= bit;
        fresh
    }

    /// Remove `index`; returns true if it was present.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= MAX_CELLS {
            return false;
        }
        let (w, bit) = (index / 64, 1u64 << (index % 64));
        let present = self.words[w] & bit != 0;
        self.words[w] &= !bit;
        present
    }

    pub fn contains(&self, index: usize) -> bool {
        index < MAX_CELLS && self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    pub fn union_with(&mut self, other: &CellSet) {
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a |= *b;
        }
    }

    /// Indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let tz = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(w * 64 + tz)
            })
        })
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl Extend<usize> for CellSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for index in iter {
            self.insert(index);
        }
    }
}

impl FromIterator<usize> for CellSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = CellSet::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut set = CellSet::new();
        assert!(set.is_empty());
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.insert(200));
        assert!(set.contains(3));
        assert!(set.contains(200));
        assert!(!set.contains(4));
        assert_eq!(set.len(), 2);

        assert!(set.remove(3));
        assert!(!set.remove(3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut set = CellSet::new();
        assert!(!set.insert(MAX_CELLS));
        assert!(!set.contains(MAX_CELLS));
        assert!(set.is_empty());
    }

    #[test]
    fn iterates_in_ascending_order_across_words() {
        let set: CellSet = [130, 2, 64, 63, 255].into_iter().collect();
        assert_eq!(set.to_vec(), vec![2, 63, 64, 130, 255]);
    }

    #[test]
    fn union_merges_both_sides() {
        let mut a: CellSet = [1, 2].into_iter().collect();
        let b: CellSet = [2, 70].into_iter().collect();
        a.union_with(&b);
        assert_eq!(a.to_vec(), vec![1, 2, 70]);
    }
}
