//! Linear search and value-based removal.

use crate::error::SequenceError;
use crate::sequence::Sequence;

/// Reserved "no such index" value for callers that keep positions in plain
/// `usize` slots. No valid index ever equals it.
///
/// The search API itself returns `Option<usize>`; convert with
/// `seq.find(&x).unwrap_or(NOT_FOUND)`.
pub const NOT_FOUND: usize = usize::MAX;

impl<T> Sequence<T> {
    /// Index of the first element for which `is_equal(stored, element)`
    /// holds, scanning from index 0.
    ///
    /// Pass `std::ptr::eq` or `Rc::ptr_eq` here to match by identity when
    /// the handles are references or shared pointers.
    pub fn find_by<F>(&self, element: &T, mut is_equal: F) -> Option<usize>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.storage
            .iter()
            .position(|stored| is_equal(stored, element))
    }

    /// Remove the first element matching `element` under `is_equal`.
    ///
    /// Returns [`SequenceError::NotFound`] if nothing matches.
    pub fn remove_by<F>(&mut self, element: &T, is_equal: F) -> Result<T, SequenceError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let index = self
            .find_by(element, is_equal)
            .ok_or(SequenceError::NotFound)?;
        self.remove_at(index)
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Index of the first element equal to `element`.
    pub fn find(&self, element: &T) -> Option<usize> {
        self.find_by(element, |a, b| a == b)
    }

    /// Whether any element equals `element`.
    pub fn contains(&self, element: &T) -> bool {
        self.find(element).is_some()
    }

    /// Remove the first element equal to `element`.
    pub fn remove(&mut self, element: &T) -> Result<T, SequenceError> {
        self.remove_by(element, |a, b| a == b)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn find_returns_first_match() {
        let seq: Sequence<i32> = [5, 7, 5, 9].into_iter().collect();
        assert_eq!(seq.find(&5), Some(0));
        assert_eq!(seq.find(&9), Some(3));
    }

    #[test]
    fn find_missing_is_none_not_a_crash() {
        let seq: Sequence<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(seq.find(&42), None);
        assert_eq!(seq.find(&42).unwrap_or(NOT_FOUND), NOT_FOUND);
        assert!(!seq.contains(&42));
    }

    #[test]
    fn find_on_empty() {
        let seq: Sequence<i32> = Sequence::new();
        assert_eq!(seq.find(&0), None);
    }

    #[test]
    fn find_by_identity_distinguishes_equal_values() {
        let a = Rc::new(String::from("same"));
        let b = Rc::new(String::from("same"));
        let seq: Sequence<Rc<String>> = [a.clone(), b.clone()].into_iter().collect();
        assert_eq!(seq.find(&b), Some(0));
        assert_eq!(seq.find_by(&b, Rc::ptr_eq), Some(1));
    }

    #[test]
    fn find_by_custom_equality() {
        let seq: Sequence<&str> = ["Apple", "banana", "Cherry"].into_iter().collect();
        let found = seq.find_by(&"BANANA", |a, b| a.eq_ignore_ascii_case(b));
        assert_eq!(found, Some(1));
    }

    #[test]
    fn remove_deletes_first_match_only() {
        let mut seq: Sequence<i32> = [4, 1, 4, 2].into_iter().collect();
        assert_eq!(seq.remove(&4), Ok(4));
        assert_eq!(seq.as_slice(), &[1, 4, 2]);
    }

    #[test]
    fn remove_missing_is_not_found() {
        let mut seq: Sequence<i32> = [1, 2].into_iter().collect();
        assert_eq!(seq.remove(&3), Err(SequenceError::NotFound));
        assert_eq!(seq.as_slice(), &[1, 2]);
    }

    #[test]
    fn remove_by_identity() {
        let a = Rc::new(1);
        let b = Rc::new(1);
        let mut seq: Sequence<Rc<i32>> = [a.clone(), b.clone()].into_iter().collect();
        let removed = seq.remove_by(&b, Rc::ptr_eq).unwrap();
        assert!(Rc::ptr_eq(&removed, &b));
        assert_eq!(seq.len(), 1);
        assert!(Rc::ptr_eq(seq.get(0).unwrap(), &a));
    }
}
