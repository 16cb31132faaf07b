//! Integration tests for entities_sequence crate
//!
//! These tests drive cursors the way the outer layers do: through the
//! trait, mixing lookahead, discards and limits.

use entities_sequence::*;
use proptest::prelude::*;

/// Counting source 1, 2, 3, ... standing in for a real generator
fn counting(to: u32) -> Lookahead<impl Iterator<Item = UInt>> {
    Lookahead::new((1..=to).map(UInt::from))
}

fn drain<C: Cursor>(cursor: &mut C) -> Vec<UInt> {
    let mut out = Vec::new();
    while cursor.has_next() {
        out.push(cursor.next_value().unwrap());
    }
    out
}

#[test]
fn test_discard_then_limit() {
    let mut cursor = counting(20);
    cursor.discard(5);
    let mut limited = cursor.limit(3);
    assert_eq!(drain(&mut limited), vec![UInt::from(6u32), UInt::from(7u32), UInt::from(8u32)]);
}

#[test]
fn test_nested_limits_take_the_smaller() {
    let mut limited = counting(20).limit(10).limit(4);
    assert_eq!(drain(&mut limited).len(), 4);

    let mut limited = counting(20).limit(2).limit(4);
    assert_eq!(drain(&mut limited).len(), 2);
}

#[test]
fn test_limit_does_not_overdraw_source() {
    // The inner cursor keeps whatever the limit did not deliver
    let mut source = counting(10);
    {
        let mut limited = Limit::new(&mut source, 2);
        assert_eq!(drain(&mut limited).len(), 2);
    }
    assert_eq!(source.next_value(), Ok(UInt::from(3u32)));
}

#[test]
fn test_exhaustion_is_reported() {
    let mut cursor = counting(1);
    cursor.discard(1);
    assert!(!cursor.has_next());
    assert_eq!(cursor.next_value(), Err(SequenceError::Exhausted));
}

proptest! {
    /// Interleaving has_next calls never changes what is delivered
    #[test]
    fn prop_has_next_never_skips(
        len in 0u32..60,
        checks in prop::collection::vec(0usize..4, 0..80),
    ) {
        let mut cursor = counting(len);
        let mut delivered = Vec::new();
        for repeat in checks {
            for _ in 0..repeat {
                cursor.has_next();
            }
            match cursor.next_value() {
                Ok(value) => delivered.push(value),
                Err(error) => {
                    prop_assert_eq!(error, SequenceError::Exhausted);
                }
            }
        }
        let expected: Vec<UInt> = (1..=len).map(UInt::from).take(delivered.len()).collect();
        prop_assert_eq!(delivered, expected);
    }
}
