//! Sequence sizing parameters.

use crate::error::SequenceError;

/// Capacity policy for a [`Sequence`](crate::Sequence).
///
/// Controls the starting capacity and the load-factor rule that drives
/// growth and shrinking. Validated at construction; a sequence keeps the
/// config it was created with, and sequences derived from it (copies,
/// slices, map/filter results) inherit it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceConfig {
    /// Number of slots allocated when the sequence is created.
    ///
    /// Default: 10. Must be at least 1.
    pub initial_capacity: usize,

    /// Multiplicative step applied to capacity on grow, and divided out on
    /// shrink.
    ///
    /// Default: 1.5. Must be finite and greater than 1.0.
    ///
    /// A single append takes one step even when the step rounds down to no
    /// extra slots, so factors close to 1.0 can leave the load above
    /// [`load_threshold`](Self::load_threshold) until the next bulk write.
    /// [`append_list`](crate::Sequence::append_list) and
    /// [`insert_list`](crate::Sequence::insert_list) step until the load is
    /// back under it.
    pub growth_factor: f64,

    /// Load factor (`len / capacity`) above which the sequence grows.
    ///
    /// Default: 0.75. Must lie in `(0.0, 1.0]`.
    pub load_threshold: f64,
}

impl SequenceConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    /// Default growth factor.
    pub const DEFAULT_GROWTH_FACTOR: f64 = 1.5;

    /// Default load threshold.
    pub const DEFAULT_LOAD_THRESHOLD: f64 = 0.75;

    /// Create a config with the given initial capacity and default policy.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            load_threshold: Self::DEFAULT_LOAD_THRESHOLD,
        }
    }

    /// Check every parameter against its documented range.
    pub fn validate(&self) -> Result<(), SequenceError> {
        if self.initial_capacity == 0 {
            return Err(SequenceError::ZeroCapacity);
        }
        if !self.growth_factor.is_finite() || self.growth_factor <= 1.0 {
            return Err(SequenceError::InvalidConfig {
                reason: format!(
                    "growth_factor must be finite and > 1.0, got {}",
                    self.growth_factor
                ),
            });
        }
        if !(self.load_threshold > 0.0 && self.load_threshold <= 1.0) {
            return Err(SequenceError::InvalidConfig {
                reason: format!(
                    "load_threshold must be in (0.0, 1.0], got {}",
                    self.load_threshold
                ),
            });
        }
        Ok(())
    }

    /// Same policy, different starting capacity.
    pub(crate) fn with_initial_capacity(self, initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..self
        }
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
