//! The [`Sequence`] container: construction, index access, and
//! single-element insertion and removal.
//!
//! Capacity policy lives in [`capacity`](crate::capacity); this module only
//! decides *when* the policy is consulted. Insertion consults it before the
//! element is stored, removal after the length has dropped.

use std::fmt;

use crate::config::SequenceConfig;
use crate::error::{check_index, SequenceError};

/// A growable, indexable sequence of opaque element handles.
///
/// `T` is whatever the caller uses as a handle: a plain integer, a `&'a U`,
/// an `Rc<U>`, a raw address. The sequence never looks inside a handle. It
/// moves handles on insert/remove, clones them for shallow copies, and hands
/// them to caller-supplied closures for ordering, equality, and traversal.
///
/// Capacity is tracked by the sequence itself rather than read back from the
/// backing `Vec`, so the load-factor policy in [`SequenceConfig`] is
/// observable exactly through [`capacity`](Self::capacity).
///
/// # Invariants
///
/// - `len() <= capacity()` and `capacity() >= 1` after every call.
/// - Insertion order is preserved by every operation except
///   [`sort_by`](Self::sort_by), [`shuffle`](Self::shuffle), and
///   [`reverse`](Self::reverse).
pub struct Sequence<T> {
    /// Live elements, `storage.len()` is the sequence length.
    pub(crate) storage: Vec<T>,
    /// Logical slot count. The backing `Vec` holds at least this many.
    pub(crate) capacity: usize,
    pub(crate) config: SequenceConfig,
}

impl<T> Sequence<T> {
    /// Create an empty sequence with the default capacity (10).
    pub fn new() -> Self {
        Self::with_validated_config(SequenceConfig::default())
    }

    /// Create an empty sequence with room for `capacity` elements.
    ///
    /// Returns [`SequenceError::ZeroCapacity`] if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self, SequenceError> {
        Self::with_config(SequenceConfig::new(capacity))
    }

    /// Create an empty sequence with an explicit capacity policy.
    pub fn with_config(config: SequenceConfig) -> Result<Self, SequenceError> {
        config.validate()?;
        Ok(Self::with_validated_config(config))
    }

    /// Build a sequence from a config that has already passed validation,
    /// e.g. one inherited from an existing sequence.
    pub(crate) fn with_validated_config(config: SequenceConfig) -> Self {
        debug_assert!(config.initial_capacity >= 1);
        Self {
            storage: Vec::with_capacity(config.initial_capacity),
            capacity: config.initial_capacity,
            config,
        }
    }

    /// An empty sequence sharing this one's policy, sized to `capacity`
    /// (clamped to at least 1).
    pub(crate) fn empty_sibling<U>(&self, capacity: usize) -> Sequence<U> {
        Sequence::with_validated_config(self.config.with_initial_capacity(capacity.max(1)))
    }

    /// The capacity policy this sequence was created with.
    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Highest valid element index, or `None` when empty.
    pub(crate) fn highest_index(&self) -> Option<usize> {
        self.storage.len().checked_sub(1)
    }

    /// The element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        check_index(index, self.highest_index())?;
        Ok(&self.storage[index])
    }

    /// Mutable access to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, SequenceError> {
        check_index(index, self.highest_index())?;
        Ok(&mut self.storage[index])
    }

    /// The first element, if any.
    pub fn first(&self) -> Option<&T> {
        self.storage.first()
    }

    /// The last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.storage.last()
    }

    /// Borrow the live region `[0, len)`.
    ///
    /// The borrow ends before any mutating call, since mutation may
    /// reallocate the backing storage.
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Exchange the elements at `first` and `second`.
    ///
    /// Both indices must be `< len()`. Swapping an index with itself is a
    /// no-op.
    pub fn swap(&mut self, first: usize, second: usize) -> Result<(), SequenceError> {
        let highest = self.highest_index();
        check_index(first, highest)?;
        check_index(second, highest)?;
        self.storage.swap(first, second);
        Ok(())
    }

    /// Append `value` at index `len()`. O(1) amortized.
    pub fn append(&mut self, value: T) {
        self.reserve_for(1);
        self.storage.push(value);
    }

    /// Insert `value` at `index`, shifting `[index, len)` right by one.
    ///
    /// `index` may equal `len()`, which is the same as [`append`](Self::append).
    /// The shift is a single block move. O(len - index).
    pub fn insert_at(&mut self, value: T, index: usize) -> Result<(), SequenceError> {
        check_index(index, Some(self.storage.len()))?;
        self.reserve_for(1);
        self.storage.insert(index, value);
        Ok(())
    }

    /// Remove and return the element at `index`, closing the gap.
    ///
    /// Removing the last element moves nothing; otherwise `(index, len)`
    /// shifts left by one in a single block move. The shrink policy runs
    /// after the length has dropped. O(len - index).
    pub fn remove_at(&mut self, index: usize) -> Result<T, SequenceError> {
        check_index(index, self.highest_index())?;
        let value = self.storage.remove(index);
        self.shrink_after_removal();
        Ok(value)
    }

    /// Insert at the front. O(n): every element shifts right.
    pub fn push(&mut self, value: T) {
        self.reserve_for(1);
        self.storage.insert(0, value);
    }

    /// Remove from the front. O(n): every element shifts left.
    pub fn pop(&mut self) -> Result<T, SequenceError> {
        self.remove_at(0)
    }

    /// Queue insertion at the back; same as [`append`](Self::append).
    pub fn enqueue(&mut self, value: T) {
        self.append(value);
    }

    /// Queue removal from the front; same as [`pop`](Self::pop), O(n).
    pub fn dequeue(&mut self) -> Result<T, SequenceError> {
        self.pop()
    }

    /// Drop every element, then apply one shrink step.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.shrink_after_removal();
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("len", &self.storage.len())
            .field("capacity", &self.capacity)
            .field("elements", &self.storage)
            .finish()
    }
}

/// Equality compares elements in order. Capacity and config are ignored.
impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<T: Eq> Eq for Sequence<T> {}
