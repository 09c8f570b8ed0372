//! Benchmark profiles and harness utilities for growseq.
//!
//! - [`demo_values`]: the `0, 5, 10, ...` series the demonstration fills with
//! - [`fill_profile`]: a sequence filled from a given initial capacity
//! - [`init_logging`]: installs a `tracing` subscriber for harness binaries

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use growseq::GrowableSequence;
use tracing_subscriber::EnvFilter;

/// The first `count` multiples of five, as the demonstration appends them.
pub fn demo_values(count: i32) -> impl Iterator<Item = i32> {
    (0..count).map(|i| i * 5)
}

/// Build a sequence starting at `initial_capacity` and append `0..count`.
pub fn fill_profile(initial_capacity: usize, count: u64) -> GrowableSequence<u64> {
    let mut seq = GrowableSequence::with_capacity(initial_capacity);
    for v in 0..count {
        seq.append(v);
    }
    seq
}

/// Install a formatting subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter` when the variable is unset or invalid.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Render the elements space-separated, each followed by a space.
pub fn render_line<T: std::fmt::Display>(seq: &GrowableSequence<T>) -> String {
    let mut line = String::new();
    for v in seq {
        line.push_str(&v.to_string());
        line.push(' ');
    }
    line
}
