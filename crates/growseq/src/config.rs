//! Sequence configuration and the growth law.

/// Multiplier applied to capacity when an append finds the buffer full.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity after one growth step from `current`: `max(1, current * 2)`.
///
/// Returns `None` if the doubled capacity overflows `usize`.
pub fn grown_capacity(current: usize) -> Option<usize> {
    current.checked_mul(GROWTH_FACTOR).map(|c| c.max(1))
}

/// Construction parameters for a [`GrowableSequence`](crate::GrowableSequence).
///
/// All values are fixed once the sequence is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Number of slots allocated up front.
    ///
    /// Default: 10. Zero is legal; the first append then grows to 1.
    pub initial_capacity: usize,
}

impl SequenceConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    /// Create a config with the given initial capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Bytes the initial buffer occupies for elements of type `T`.
    ///
    /// Saturates at `usize::MAX` rather than overflowing.
    pub fn initial_bytes<T>(&self) -> usize {
        self.initial_capacity.saturating_mul(std::mem::size_of::<T>())
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
