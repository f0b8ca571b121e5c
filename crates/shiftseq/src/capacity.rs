//! Load-factor driven growth and shrinking.
//!
//! Growth is checked against the *prospective* length, before new elements
//! are stored. Shrinking is checked after a removal has already lowered the
//! length, and never produces a capacity below the live length. Both step by
//! [`SequenceConfig::growth_factor`](crate::SequenceConfig::growth_factor).
//!
//! ```text
//! grow:    new = max(required, floor(capacity * factor))
//! shrink:  new = floor(capacity / factor)
//!          iff new > 0 && len <= new && len / new < threshold
//! ```

use tracing::debug;

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current occupancy, `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.storage.len() as f64 / self.capacity as f64
    }

    /// Guarantee room for `n` elements, resizing to exactly `n` if the
    /// current capacity is smaller. Never shrinks.
    pub fn ensure_capacity(&mut self, n: usize) {
        if self.capacity >= n {
            return;
        }
        self.resize_storage(n);
    }

    /// Drop spare capacity, leaving `max(len, 1)` slots.
    pub fn shrink_to_fit(&mut self) {
        let target = self.storage.len().max(1);
        if target < self.capacity {
            self.resize_storage(target);
        }
    }

    /// Whether storing `additional` more elements would push the load
    /// factor strictly past the threshold.
    pub(crate) fn should_grow(&self, additional: usize) -> bool {
        let prospective = self.storage.len().saturating_add(additional);
        prospective as f64 / self.capacity as f64 > self.config.load_threshold
    }

    /// One growth step, but never less than `required` slots.
    pub(crate) fn grow(&mut self, required: usize) {
        let stepped = (self.capacity as f64 * self.config.growth_factor).floor() as usize;
        let new_capacity = stepped.max(required).max(self.storage.len());
        if new_capacity > self.capacity {
            self.resize_storage(new_capacity);
        }
    }

    /// Grow ahead of storing `additional` elements, if the policy says so.
    pub(crate) fn reserve_for(&mut self, additional: usize) {
        if self.should_grow(additional) {
            let required = self.storage.len().saturating_add(additional);
            self.grow(required);
        }
    }

    /// Re-check the load factor after a bulk write that pre-sized storage
    /// with [`ensure_capacity`](Self::ensure_capacity).
    ///
    /// Steps the capacity until the load is back under the threshold, then
    /// resizes once. Each step adds at least one slot.
    pub(crate) fn rebalance(&mut self) {
        let len = self.storage.len() as f64;
        let mut target = self.capacity;
        while len / target as f64 > self.config.load_threshold {
            let stepped = (target as f64 * self.config.growth_factor).floor() as usize;
            target = stepped.max(target + 1);
        }
        if target > self.capacity {
            self.resize_storage(target);
        }
    }

    /// The capacity one shrink step would produce, if shrinking is allowed.
    ///
    /// Must be called after the removal has updated the length.
    pub(crate) fn shrink_candidate(&self) -> Option<usize> {
        let len = self.storage.len();
        let candidate = (self.capacity as f64 / self.config.growth_factor).floor() as usize;
        if candidate == 0 || len > candidate {
            return None;
        }
        let load_after = len as f64 / candidate as f64;
        (load_after < self.config.load_threshold).then_some(candidate)
    }

    /// Apply at most one shrink step.
    pub(crate) fn shrink_after_removal(&mut self) {
        if let Some(candidate) = self.shrink_candidate() {
            self.resize_storage(candidate);
        }
    }

    fn resize_storage(&mut self, new_capacity: usize) {
        let len = self.storage.len();
        debug_assert!(new_capacity >= len && new_capacity >= 1);
        let old_capacity = self.capacity;
        if new_capacity > self.storage.capacity() {
            self.storage.reserve_exact(new_capacity - len);
        } else if new_capacity < old_capacity {
            self.storage.shrink_to(new_capacity);
        }
        self.capacity = new_capacity;
        debug!(old_capacity, new_capacity, len, "sequence resized");
    }
}
