//! Test fixtures and helper handle types for shiftseq development.
//!
//! Provides sequence builders (ranges, seeded random fills), a numeric
//! three-way comparator, an [`IdentityHandle`] whose equality is pointer
//! identity, and [`assert_capacity_invariants`] for property tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cmp::Ordering;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shiftseq::Sequence;

/// `0, 1, ..., n - 1` appended one by one with the default policy.
pub fn range_sequence(n: usize) -> Sequence<usize> {
    (0..n).collect()
}

/// `count` values in `0..100`, drawn from a ChaCha8 stream seeded by `seed`.
pub fn random_sequence(count: usize, seed: u64) -> Sequence<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(0..100)).collect()
}

/// Ascending numeric order.
pub fn cmp_numeric(a: &i64, b: &i64) -> Ordering {
    a.cmp(b)
}

/// Panic unless `len <= capacity` and `capacity >= 1`.
pub fn assert_capacity_invariants<T>(seq: &Sequence<T>) {
    assert!(
        seq.len() <= seq.capacity(),
        "len {} exceeds capacity {}",
        seq.len(),
        seq.capacity()
    );
    assert!(seq.capacity() >= 1, "capacity dropped to 0");
}

/// A caller-owned referent behind a shared pointer.
///
/// Two handles are equal only if they point at the same allocation, so a
/// sequence of these searches by identity, not by payload.
#[derive(Clone, Debug)]
pub struct IdentityHandle(pub Rc<i64>);

impl IdentityHandle {
    pub fn new(value: i64) -> Self {
        Self(Rc::new(value))
    }

    /// The payload, for assertions.
    pub fn value(&self) -> i64 {
        *self.0
    }

    /// Live handles to this referent, including this one.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl PartialEq for IdentityHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for IdentityHandle {}
