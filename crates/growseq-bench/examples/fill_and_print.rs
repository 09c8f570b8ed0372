//! Fill-and-print demonstration.
//!
//! Builds a default sequence (capacity 10), appends `i * 5` for `i` in
//! `0..20`, then prints the values on one line. Run with
//! `RUST_LOG=trace` to see each growth event.

use growseq::GrowableSequence;
use growseq_bench::{demo_values, init_logging, render_line};
use tracing::info;

fn main() {
    init_logging("info");

    let mut seq = GrowableSequence::new();
    info!(capacity = seq.capacity(), "created sequence");

    for value in demo_values(20) {
        seq.append(value);
    }
    info!(
        len = seq.len(),
        capacity = seq.capacity(),
        growths = seq.growth_count(),
        "filled sequence"
    );

    println!("{}", render_line(&seq));
}
