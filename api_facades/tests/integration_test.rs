//! Integration tests for api_facades crate
//!
//! End-to-end scenarios over the real Galois LFSR: generators, transforms
//! and slicing wired together through the facade.

use std::collections::HashSet;
use std::thread;

use api_facades::*;
use proptest::prelude::*;

fn small(values: impl IntoIterator<Item = UInt>) -> Vec<u64> {
    values
        .into_iter()
        .map(|v| u64::try_from(&v).unwrap())
        .collect()
}

#[test]
fn test_four_bit_obscured_reference() {
    // Reference 4-bit cycle: 1 12 6 3 13 10 5 14 7 15 11 9 8 4 2
    // Odd values 1 3 13 5 7 15 11 9, each shifted right by one
    let obscured = small(galois(4).unwrap().obscure_bit(0));
    assert_eq!(obscured, vec![0, 1, 6, 2, 3, 7, 5, 4]);
    // Every 3-bit value exactly once
    let distinct: HashSet<u64> = obscured.iter().copied().collect();
    assert_eq!(distinct.len(), 8);
}

#[test]
fn test_obscured_then_restored() {
    let restored: Vec<UInt> = galois(9)
        .unwrap()
        .obscure_bit(4)
        .map(|v| insert_set_bit(&v, 4))
        .collect();
    let expected: Vec<UInt> = galois(9)
        .unwrap()
        .filter(|v| is_bit_set(v, 4))
        .collect();
    assert_eq!(restored, expected);
}

#[test]
fn test_sliced_seven_six() {
    let mut slices = 0;
    let mut covered = HashSet::new();
    for mut slice in sliced(7, 6).unwrap() {
        assert!(slice.has_next());
        let start = slice.next_value().unwrap();
        assert_eq!(weight(&start), 6);
        assert!(bit_length(&start) <= 7);
        covered.insert(u64::try_from(&start).unwrap());
        for value in slice {
            assert_ne!(weight(&value), 6);
            assert!(covered.insert(u64::try_from(&value).unwrap()));
        }
        slices += 1;
    }
    // All seven boundaries are reachable, so the slices cover the cycle
    assert_eq!(slices, 7);
    assert_eq!(covered.len(), 127);
}

#[test]
fn test_slices_on_separate_threads() {
    let handles: Vec<_> = sliced(10, 3)
        .unwrap()
        .map(|slice| thread::spawn(move || slice.count()))
        .collect();
    let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(total, 1023);
}

#[test]
fn test_plain_staggered_by_reversal() {
    // 867 is the last permutation of six: reverse each run of six
    let mut staggered = plain(4).unwrap().stagger(867);
    let values = small(staggered.by_ref());
    assert_eq!(
        values,
        vec![6, 5, 4, 3, 2, 1, 12, 11, 10, 9, 8, 7, 13, 14, 15]
    );
    assert_eq!(staggered.next_value(), Err(SequenceError::Exhausted));
}

#[test]
fn test_wide_obscured_staggered_sequence() {
    let mut sequence = galois(MAX_WIDTH).unwrap().obscure_bit(0).stagger(10);
    sequence.discard(5000);
    let mut seen = HashSet::new();
    let mut limited = sequence.limit(10);
    while limited.has_next() {
        let value = limited.next_value().unwrap();
        assert!(bit_length(&value) < MAX_WIDTH);
        assert!(seen.insert(value));
    }
    assert_eq!(seen.len(), 10);
}

#[test]
fn test_alternate_taps_full_cycle() {
    for width in 2..=10u64 {
        for selector in 0..GaloisLfsr::tap_set_count(width) {
            let values: HashSet<UInt> = galois_with_taps(width, selector).unwrap().collect();
            assert_eq!(values.len() as u64, (1 << width) - 1, "width {} taps {}", width, selector);
        }
    }
}

#[test]
fn test_combinadic_matches_sliced_boundaries() {
    // Every boundary a slice can start on is some combinadic of (8, 2)
    let boundaries: HashSet<UInt> = (0u32..28)
        .map(|rank| combinadic(8, 2, &UInt::from(rank)))
        .collect();
    for mut slice in sliced(8, 2).unwrap() {
        let start = slice.next_value().unwrap();
        assert!(boundaries.contains(&start));
    }
    assert_eq!(n_choose_k(8, 2), UInt::from(28u32));
}

#[test]
fn test_sliced_rejects_untabled_width() {
    // Refused at construction rather than yielding no slices
    assert_eq!(
        sliced(MAX_WIDTH + 1, 1).unwrap_err(),
        SequenceError::UnsupportedWidth { width: MAX_WIDTH + 1, max: MAX_WIDTH }
    );
    assert!(sliced(MAX_WIDTH, 1).is_ok());
}

#[test]
fn test_kilobit_register() {
    let mut sequence = galois(1024).unwrap().obscure_bit(0).stagger(10);
    sequence.discard(1000);
    let values: Vec<UInt> = sequence.limit(10).collect();
    assert_eq!(values.len(), 10);
    assert!(values.iter().all(|value| bit_length(value) < 1024));
}

proptest! {
    #[test]
    fn prop_obscure_restore_through_facade(width in 2u64..=12, bit in 0u64..12, taps in 0usize..4) {
        prop_assume!(bit < width && taps < GaloisLfsr::tap_set_count(width));
        let obscured: Vec<UInt> = galois_with_taps(width, taps).unwrap().obscure_bit(bit).collect();
        prop_assert!(obscured.iter().all(|value| bit_length(value) < width));

        let restored: Vec<UInt> = obscured.iter().map(|value| insert_set_bit(value, bit)).collect();
        let survivors: Vec<UInt> = galois_with_taps(width, taps)
            .unwrap()
            .filter(|value| is_bit_set(value, bit))
            .collect();
        prop_assert_eq!(restored, survivors);
    }
}
