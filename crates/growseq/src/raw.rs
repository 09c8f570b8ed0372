//! Owned, uninitialized element storage.
//!
//! [`RawBuffer<T>`] owns one allocation of `capacity` slots and nothing
//! else: it never reads, writes or drops elements. Tracking which slots are
//! initialized is the caller's job. Zero-sized layouts (`capacity == 0` or a
//! zero-sized `T`) use a dangling pointer and never touch the allocator.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use crate::error::SequenceError;

pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _owns: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Allocate `capacity` slots, reporting overflow and allocator failure.
    pub(crate) fn try_allocate(capacity: usize) -> Result<Self, SequenceError> {
        let layout = Self::layout(capacity)?;
        Self::from_layout(layout, capacity).ok_or(SequenceError::AllocationFailed {
            capacity,
            bytes: layout.size(),
        })
    }

    /// Allocate `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if the byte size of `capacity` slots overflows. Allocator
    /// failure aborts through [`alloc::handle_alloc_error`].
    pub(crate) fn allocate(capacity: usize) -> Self {
        let layout = match Self::layout(capacity) {
            Ok(layout) => layout,
            Err(err) => panic!("{err}"),
        };
        match Self::from_layout(layout, capacity) {
            Some(buf) => buf,
            None => alloc::handle_alloc_error(layout),
        }
    }

    fn layout(capacity: usize) -> Result<Layout, SequenceError> {
        Layout::array::<T>(capacity).map_err(|_| SequenceError::CapacityOverflow {
            requested: capacity,
        })
    }

    fn from_layout(layout: Layout, capacity: usize) -> Option<Self> {
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: layout has non-zero size.
            NonNull::new(unsafe { alloc::alloc(layout) }.cast::<T>())?
        };
        Some(Self {
            ptr,
            capacity,
            _owns: PhantomData,
        })
    }

    /// Pointer to slot 0. Valid for `capacity` slots; aligned and non-null
    /// even when nothing is allocated.
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes held by the allocation.
    pub(crate) fn memory_bytes(&self) -> usize {
        self.capacity * mem::size_of::<T>()
    }

    /// Move slots `[0, len)` into `next`, then make `next` this buffer.
    ///
    /// The old allocation is released before returning. Moved-from slots are
    /// not dropped.
    ///
    /// # Safety
    ///
    /// Slots `[0, len)` of `self` must be initialized and `len` must not
    /// exceed `next.capacity()`.
    pub(crate) unsafe fn relocate(&mut self, mut next: RawBuffer<T>, len: usize) {
        debug_assert!(len <= self.capacity);
        debug_assert!(len <= next.capacity);
        // SAFETY: both pointers are valid for `len` slots per the caller
        // contract, and two live allocations never overlap.
        unsafe { ptr::copy_nonoverlapping(self.as_ptr(), next.as_ptr(), len) };
        mem::swap(self, &mut next);
        // `next` now owns the old allocation and releases it on drop.
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if let Ok(layout) = Self::layout(self.capacity) {
            if layout.size() != 0 {
                // SAFETY: ptr was returned by `alloc::alloc` with this layout.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
            }
        }
    }
}
