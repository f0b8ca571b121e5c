//! Whole-list operations: shallow copy, concatenation, splicing, slicing.
//!
//! Each operation sizes the destination once with
//! [`ensure_capacity`](Sequence::ensure_capacity) and then moves the source
//! region as one block, instead of growing per element.

use tracing::trace;

use crate::error::{check_index, SequenceError};
use crate::sequence::Sequence;

impl<T: Clone> Sequence<T> {
    /// Shallow copy: same capacity, same handles at the same indices.
    ///
    /// Later mutation of either sequence does not affect the other, but the
    /// referents behind the handles are shared.
    pub fn copy(&self) -> Self {
        let mut storage = Vec::with_capacity(self.capacity);
        storage.extend_from_slice(&self.storage);
        Self {
            storage,
            capacity: self.capacity,
            config: self.config,
        }
    }

    /// Append every element of `source` to the end of `self`.
    ///
    /// O(source.len()).
    pub fn append_list(&mut self, source: &Sequence<T>) {
        self.ensure_capacity(self.storage.len() + source.storage.len());
        self.storage.extend_from_slice(&source.storage);
        self.rebalance();
        trace!(added = source.storage.len(), len = self.storage.len(), "appended list");
    }

    /// Insert every element of `source` into `self` starting at `index`.
    ///
    /// Elements previously at `[index, len)` end up after the inserted run.
    /// `index == len()` behaves exactly like [`append_list`](Self::append_list).
    /// O(len - index + source.len()).
    pub fn insert_list(&mut self, source: &Sequence<T>, index: usize) -> Result<(), SequenceError> {
        check_index(index, Some(self.storage.len()))?;
        self.ensure_capacity(self.storage.len() + source.storage.len());
        // One tail shift by source.len(), then one block copy into the gap.
        self.storage.splice(index..index, source.storage.iter().cloned());
        self.rebalance();
        trace!(
            index,
            added = source.storage.len(),
            len = self.storage.len(),
            "inserted list"
        );
        Ok(())
    }

    /// Extract the half-open range between `a` and `b` into a new sequence.
    ///
    /// The range is `[min(a, b), max(a, b))`. Both bounds must be valid
    /// element indices (`< len()`). When `a > b` the extracted elements are
    /// returned in descending index order, so `slice(9, 3)` yields indices
    /// 8, 7, ..., 3. The upper bound is never included, whichever argument
    /// carries it: `slice(7, 2)` on `0..10` yields `[6, 5, 4, 3, 2]`.
    ///
    /// The result's capacity fits the range exactly, with a minimum of 1.
    pub fn slice(&self, a: usize, b: usize) -> Result<Self, SequenceError> {
        let highest = self.highest_index();
        check_index(a, highest)?;
        check_index(b, highest)?;
        let (start, end) = if a <= b { (a, b) } else { (b, a) };

        let mut sliced = self.empty_sibling(end - start);
        sliced.storage.extend_from_slice(&self.storage[start..end]);
        if a > b {
            sliced.reverse();
        }
        Ok(sliced)
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequenceConfig;

    fn range(n: usize) -> Sequence<usize> {
        (0..n).collect()
    }

    #[test]
    fn copy_keeps_capacity_and_contents() {
        let seq = range(8);
        let copy = seq.copy();
        assert_eq!(copy.capacity(), seq.capacity());
        assert_eq!(copy.as_slice(), seq.as_slice());
    }

    #[test]
    fn copy_is_independent_of_source() {
        let mut seq = range(5);
        let copy = seq.copy();
        seq.append(5);
        seq.remove_at(0).unwrap();
        assert_eq!(copy.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(seq.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn append_list_concatenates() {
        let mut dest = range(3);
        let source: Sequence<usize> = (10..13).collect();
        dest.append_list(&source);
        assert_eq!(dest.as_slice(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn append_list_rebalances_after_presizing() {
        let mut dest = range(10);
        assert_eq!(dest.capacity(), 15);
        let source = range(10);
        dest.append_list(&source);
        assert_eq!(dest.len(), 20);
        // ensure_capacity(20) leaves load 1.0, so one growth step follows.
        assert_eq!(dest.capacity(), 30);
    }

    #[test]
    fn append_list_with_small_growth_factor_restores_threshold() {
        let config = SequenceConfig {
            growth_factor: 1.01,
            ..SequenceConfig::new(10)
        };
        let mut dest = Sequence::with_config(config).unwrap();
        for i in 0..10 {
            dest.append(i);
        }
        dest.append_list(&range(100));
        assert_eq!(dest.len(), 110);
        assert!(dest.load_factor() <= 0.75, "load {}", dest.load_factor());
    }

    #[test]
    fn append_empty_list_is_noop() {
        let mut dest = range(4);
        let cap = dest.capacity();
        dest.append_list(&Sequence::new());
        assert_eq!(dest.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(dest.capacity(), cap);
    }

    #[test]
    fn insert_list_in_middle() {
        let mut dest = range(5);
        let source: Sequence<usize> = (100..103).collect();
        dest.insert_list(&source, 2).unwrap();
        assert_eq!(dest.as_slice(), &[0, 1, 100, 101, 102, 2, 3, 4]);
    }

    #[test]
    fn insert_list_at_front() {
        let mut dest = range(2);
        let source: Sequence<usize> = (7..9).collect();
        dest.insert_list(&source, 0).unwrap();
        assert_eq!(dest.as_slice(), &[7, 8, 0, 1]);
    }

    #[test]
    fn insert_list_at_len_matches_append_list() {
        let source: Sequence<usize> = (20..26).collect();
        let mut inserted = range(9);
        let mut appended = range(9);
        inserted.insert_list(&source, 9).unwrap();
        appended.append_list(&source);
        assert_eq!(inserted.as_slice(), appended.as_slice());
        assert_eq!(inserted.capacity(), appended.capacity());
    }

    #[test]
    fn insert_list_past_len_fails() {
        let mut dest = range(3);
        assert!(dest.insert_list(&range(2), 4).is_err());
        assert_eq!(dest.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn slice_forward() {
        let seq = range(11);
        let sliced = seq.slice(3, 9).unwrap();
        assert_eq!(sliced.as_slice(), &[3, 4, 5, 6, 7, 8]);
        assert_eq!(sliced.capacity(), 6);
    }

    #[test]
    fn slice_reversed_bounds_walks_backwards() {
        let seq = range(10);
        let sliced = seq.slice(7, 2).unwrap();
        assert_eq!(sliced.as_slice(), &[6, 5, 4, 3, 2]);
    }

    #[test]
    fn slice_equal_bounds_is_empty_with_one_slot() {
        let seq = range(4);
        let sliced = seq.slice(2, 2).unwrap();
        assert!(sliced.is_empty());
        assert_eq!(sliced.capacity(), 1);
    }

    #[test]
    fn slice_rejects_len_as_bound() {
        let seq = range(4);
        assert_eq!(
            seq.slice(0, 4).err(),
            Some(SequenceError::IndexOutOfBounds {
                index: 4,
                highest: Some(3)
            })
        );
        assert!(seq.slice(9, 1).is_err());
    }

    #[test]
    fn slice_inherits_policy() {
        let config = crate::SequenceConfig {
            growth_factor: 2.0,
            ..crate::SequenceConfig::default()
        };
        let mut seq = Sequence::with_config(config).unwrap();
        for i in 0..6 {
            seq.append(i);
        }
        let sliced = seq.slice(0, 4).unwrap();
        assert_eq!(sliced.config().growth_factor, 2.0);
    }
}
