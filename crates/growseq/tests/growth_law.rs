//! Integration test: observed capacities follow the doubling law.
//!
//! Capacities are compared against the independent model in
//! `growseq_test_utils::reference_capacities`, which knows nothing about the
//! container's internals.

use growseq::{grown_capacity, GrowableSequence, SequenceConfig};
use growseq_test_utils::reference_capacities;
use proptest::prelude::*;

fn observed_capacities<T>(
    seq: &mut GrowableSequence<T>,
    values: impl IntoIterator<Item = T>,
) -> Vec<usize> {
    let mut caps = vec![seq.capacity()];
    for v in values {
        seq.append(v);
        caps.push(seq.capacity());
    }
    caps
}

#[test]
fn four_appends_from_zero() {
    let mut seq = GrowableSequence::with_capacity(0);
    let caps = observed_capacities(&mut seq, [0, 5, 10, 15]);
    assert_eq!(caps, vec![0, 1, 2, 4, 4]);
    assert_eq!(seq.len(), 4);
    assert_eq!(seq.get_copied(0), Ok(0));
    assert_eq!(seq.get_copied(1), Ok(5));
    assert_eq!(seq.get_copied(2), Ok(10));
    assert_eq!(seq.get_copied(3), Ok(15));
}

#[test]
fn default_sequence_holds_twenty_values() {
    let mut seq = GrowableSequence::with_config(&SequenceConfig::default());
    let caps = observed_capacities(&mut seq, (0..20).map(|i| i * 5));
    assert_eq!(caps, reference_capacities(10, 20));
    assert_eq!(seq.capacity(), 20);
    assert_eq!(seq.growth_count(), 1);
    let expected: Vec<i32> = (0..20).map(|i| i * 5).collect();
    assert_eq!(seq.as_slice(), expected.as_slice());
}

#[test]
fn boundary_append_keeps_all_values() {
    let k = 8;
    let mut seq = GrowableSequence::with_capacity(k);
    for i in 0..k {
        seq.append(i as u64 * 3);
    }
    assert_eq!(seq.len(), seq.capacity());

    seq.append(999);
    assert_eq!(seq.len(), k + 1);
    assert_eq!(seq.capacity(), grown_capacity(k).unwrap());
    for i in 0..k {
        assert_eq!(seq[i], i as u64 * 3);
    }
    assert_eq!(seq[k], 999);
}

#[test]
fn reads_never_change_capacity() {
    let mut seq: GrowableSequence<u8> = (0..7).collect();
    let cap = seq.capacity();
    for i in 0..10 {
        let _ = seq.get(i);
        let _ = seq.set(i, 1);
    }
    assert_eq!(seq.capacity(), cap);
    assert_eq!(seq.len(), 7);
}

proptest! {
    #[test]
    fn capacities_match_reference_model(initial in 0usize..32, appends in 0usize..500) {
        let mut seq = GrowableSequence::with_capacity(initial);
        let caps = observed_capacities(&mut seq, 0..appends);
        prop_assert_eq!(caps, reference_capacities(initial, appends));
    }

    #[test]
    fn total_relocation_work_is_linear(appends in 1usize..2000) {
        // Each growth from capacity c moves c elements; the sum stays under 2N.
        let mut seq = GrowableSequence::with_capacity(0);
        let mut moved = 0usize;
        for i in 0..appends {
            if seq.len() == seq.capacity() {
                moved += seq.len();
            }
            seq.append(i);
        }
        prop_assert!(moved <= 2 * appends);
    }
}
