//! The growable sequence container.
//!
//! A [`GrowableSequence<T>`] keeps `len` initialized elements at the front of
//! a raw buffer of `capacity` slots. Appending to a full
//! sequence grows the buffer to `max(1, 2 * capacity)` first; nothing else
//! changes the capacity.

#![allow(unsafe_code)]

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;

use tracing::{debug, trace};

use crate::config::{grown_capacity, SequenceConfig, GROWTH_FACTOR};
use crate::error::SequenceError;
use crate::raw::RawBuffer;

/// A contiguous, growable sequence of `T`.
///
/// Elements live in one heap buffer in append order. Indexed access is O(1)
/// and checked: any index at or past [`len`](Self::len) yields
/// [`SequenceError::IndexOutOfRange`]. Appends are amortized O(1); an append
/// into a full buffer doubles the capacity (a zero capacity grows to one)
/// and moves every element into the new buffer before writing.
///
/// # Reference invalidation
///
/// Growth moves the elements, so any reference obtained from
/// [`get`](Self::get), [`get_mut`](Self::get_mut), [`as_slice`](Self::as_slice)
/// or indexing is invalidated by the next [`append`](Self::append) that
/// grows. These references borrow the sequence, so the compiler rejects code
/// that keeps one alive across an append.
///
/// # Example
///
/// ```
/// use growseq::GrowableSequence;
///
/// let mut seq = GrowableSequence::with_capacity(0);
/// for v in [0, 5, 10, 15] {
///     seq.append(v);
/// }
/// assert_eq!(seq.len(), 4);
/// assert_eq!(seq.capacity(), 4);
/// assert_eq!(seq.get(2), Ok(&10));
/// assert!(seq.get(4).is_err());
/// ```
pub struct GrowableSequence<T> {
    buf: RawBuffer<T>,
    /// Slots `[0, len)` of `buf` are initialized.
    len: usize,
    /// Number of growth events since construction.
    growths: usize,
}

impl<T> GrowableSequence<T> {
    /// Create an empty sequence with the default capacity of 10.
    pub fn new() -> Self {
        Self::with_config(&SequenceConfig::default())
    }

    /// Create an empty sequence with exactly `capacity` slots allocated.
    ///
    /// # Panics
    ///
    /// Panics if the buffer's byte size would overflow; aborts if the
    /// allocator fails.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_buffer(RawBuffer::allocate(capacity))
    }

    /// Create an empty sequence from a [`SequenceConfig`].
    pub fn with_config(config: &SequenceConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, SequenceError> {
        RawBuffer::try_allocate(capacity).map(Self::from_buffer)
    }

    fn from_buffer(buf: RawBuffer<T>) -> Self {
        Self {
            buf,
            len: 0,
            growths: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots. Always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Number of times the buffer has been replaced by a larger one.
    pub fn growth_count(&self) -> usize {
        self.growths
    }

    /// Memory held by the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buf.memory_bytes()
    }

    /// Append `value` at index `len()`, growing first if the buffer is full.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows; aborts if the allocator
    /// fails. Use [`try_append`](Self::try_append) to observe those as errors.
    pub fn append(&mut self, value: T) {
        if self.len == self.capacity() {
            let next_capacity = match self.next_capacity() {
                Ok(capacity) => capacity,
                Err(err) => panic!("{err}"),
            };
            self.install(RawBuffer::allocate(next_capacity));
        }
        self.write_next(value);
    }

    /// Append `value`, reporting growth failure instead of aborting.
    ///
    /// On error the sequence is left exactly as it was and `value` is
    /// dropped.
    pub fn try_append(&mut self, value: T) -> Result<(), SequenceError> {
        if self.len == self.capacity() {
            let next = self
                .next_capacity()
                .and_then(RawBuffer::try_allocate)
                .inspect_err(|err| {
                    debug!(
                        capacity = self.capacity(),
                        len = self.len,
                        error = %err,
                        "sequence growth failed"
                    );
                })?;
            self.install(next);
        }
        self.write_next(value);
        Ok(())
    }

    fn next_capacity(&self) -> Result<usize, SequenceError> {
        let current = self.capacity();
        grown_capacity(current).ok_or(SequenceError::CapacityOverflow {
            requested: current.saturating_mul(GROWTH_FACTOR),
        })
    }

    /// Move every element into `next` and release the old buffer.
    fn install(&mut self, next: RawBuffer<T>) {
        let from = self.capacity();
        let to = next.capacity();
        debug_assert!(to > self.len);
        // SAFETY: slots [0, len) are initialized and len < to.
        unsafe { self.buf.relocate(next, self.len) };
        self.growths += 1;
        trace!(from, to, len = self.len, "sequence grew");
    }

    fn write_next(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        // SAFETY: len < capacity, so slot `len` is in bounds and uninitialized.
        unsafe { self.buf.as_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    fn out_of_range(&self, index: usize) -> SequenceError {
        SequenceError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }

    /// Shared reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, SequenceError> {
        let err = self.out_of_range(index);
        self.as_mut_slice().get_mut(index).ok_or(err)
    }

    /// Copy of the element at `index`.
    pub fn get_copied(&self, index: usize) -> Result<T, SequenceError>
    where
        T: Copy,
    {
        self.get(index).copied()
    }

    /// Overwrite the element at `index`, returning the previous value.
    ///
    /// Length and capacity are unchanged. On error `value` is dropped.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, SequenceError> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the pointer is aligned and non-null, and slots [0, len)
        // are initialized.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Iterate over the elements in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the elements in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Drop for GrowableSequence<T> {
    fn drop(&mut self) {
        // SAFETY: slots [0, len) are initialized and never used again.
        // The buffer itself is released when the `buf` field drops.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}

impl<T> Default for GrowableSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for GrowableSequence<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with the [`SequenceError::IndexOutOfRange`] message if
    /// `index >= len()`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for GrowableSequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Clone> Clone for GrowableSequence<T> {
    /// Clones the elements into a buffer of the same capacity.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.capacity());
        out.extend(self.iter().cloned());
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U> PartialEq<GrowableSequence<U>> for GrowableSequence<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &GrowableSequence<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableSequence<T> {}

impl<T, U> PartialEq<[U]> for GrowableSequence<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for GrowableSequence<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> AsRef<[T]> for GrowableSequence<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for GrowableSequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Extend<T> for GrowableSequence<T> {
    /// Appends each item in turn. Growth follows the doubling law exactly;
    /// no capacity is reserved from the iterator's size hint.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for GrowableSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<'a, T> IntoIterator for &'a GrowableSequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableSequence<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
