//! Test fixtures for growseq development.
//!
//! - [`DropCounter`] / [`Tracked`]: elements that record every drop, for
//!   checking that a container releases each element exactly once.
//! - [`reference_capacities`]: an independent model of the doubling growth
//!   law to compare observed capacities against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{reference_capacities, DropCounter, Tracked};
