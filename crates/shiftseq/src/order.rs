//! In-place reordering: reverse, shuffle, sort.

use std::cmp::Ordering;

use rand::Rng;

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Reverse element order in place by swapping symmetric pairs.
    pub fn reverse(&mut self) {
        let len = self.storage.len();
        for i in 0..len / 2 {
            self.storage.swap(i, len - 1 - i);
        }
    }

    /// Fisher–Yates shuffle using the thread-local generator.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Fisher–Yates shuffle driven by `rng`.
    ///
    /// Walks `i` from `len - 1` down to 1, swapping `i` with an index drawn
    /// uniformly from `[0, i]`. Sequences of length 0 or 1 are untouched
    /// and consume no randomness.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.storage.len()).rev() {
            let j = rng.random_range(0..=i);
            self.storage.swap(i, j);
        }
    }

    /// Sort with a three-way comparator. Not stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.storage.sort_unstable_by(compare);
    }

    /// Whether no adjacent pair compares `Greater`.
    ///
    /// Stops at the first out-of-order pair. Empty and single-element
    /// sequences are sorted.
    pub fn is_sorted_by<F>(&self, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.storage
            .windows(2)
            .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
    }
}

impl<T: Ord> Sequence<T> {
    /// Sort by `T`'s own ordering. Not stable.
    pub fn sort(&mut self) {
        self.sort_by(Ord::cmp);
    }

    /// Whether the sequence is in ascending `T` order.
    pub fn is_sorted(&self) -> bool {
        self.is_sorted_by(Ord::cmp)
    }
}
