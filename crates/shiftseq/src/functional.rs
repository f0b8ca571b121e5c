//! Traversal and transformation: map, filter, reduce, export.
//!
//! All traversals visit elements in index order, `0` to `len - 1`.

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Build a new sequence holding `transform(e)` for every element `e`,
    /// in the same order.
    pub fn map<U, F>(&self, mut transform: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        let mut mapped = self.empty_sibling(self.storage.len());
        for element in &self.storage {
            mapped.append(transform(element));
        }
        mapped
    }

    /// Left fold: `acc = combine(acc, e)` for each element in order.
    ///
    /// The order is observable for non-commutative `combine`.
    pub fn reduce<A, F>(&self, initial: A, mut combine: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        let mut acc = initial;
        for element in &self.storage {
            acc = combine(acc, element);
        }
        acc
    }

    /// Move the handles out, consuming the sequence.
    ///
    /// Use this when the referents need disposing of individually.
    pub fn into_values(self) -> Vec<T> {
        self.storage
    }

    /// Iterate over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }
}

impl<T: Clone> Sequence<T> {
    /// Build a new sequence with the elements for which `include` returns
    /// true, keeping their relative order.
    ///
    /// Starts at this sequence's length in capacity, then shrinks to fit.
    pub fn filter<F>(&self, mut include: F) -> Sequence<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut kept = self.empty_sibling(self.storage.len());
        for element in &self.storage {
            if include(element) {
                kept.append(element.clone());
            }
        }
        kept.shrink_to_fit();
        kept
    }

    /// A flat copy of the live handles, independent of this sequence's
    /// storage. The length is `len()`.
    pub fn values(&self) -> Vec<T> {
        self.storage.to_vec()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

/// Appends one element at a time, so the growth policy sees every step.
impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}
