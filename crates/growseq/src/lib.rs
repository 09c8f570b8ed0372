//! Growable contiguous sequence container.
//!
//! [`GrowableSequence<T>`] stores an ordered run of `T` values in a single
//! heap buffer, gives O(1) checked indexed access and grows its buffer by
//! doubling when an append finds it full. Appends are amortized O(1).
//!
//! # Architecture
//!
//! ```text
//! GrowableSequence<T> (length, growth bookkeeping, checked access)
//! └── RawBuffer<T> (owned allocation of `capacity` uninitialized slots)
//! ```
//!
//! Growth is a single step inside `append`: allocate a `RawBuffer` of
//! `max(1, 2 * capacity)` slots, move the live elements across bitwise,
//! then drop the old buffer. Callers never see the sequence mid-growth.
//!
//! # Unsafe code
//!
//! This crate denies `unsafe_code` except in `raw.rs` and `sequence.rs`,
//! where every block carries a `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
mod raw;
pub mod sequence;

// Public re-exports for the primary API surface.
pub use config::{grown_capacity, SequenceConfig, GROWTH_FACTOR};
pub use error::SequenceError;
pub use sequence::GrowableSequence;
