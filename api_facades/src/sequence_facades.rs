//! Sequence Facades
//!
//! One constructor per generator variant, each returning a cursor.

use entities_sequence::{CyclicGenerator, Lookahead, SequenceError};
use entities_utilities::UInt;
use infrastructure_lfsr::{GaloisLfsr, PlainSequence};

/// Every nonzero `width`-bit value in LFSR order, default taps
pub fn galois(width: u64) -> Result<Lookahead<GaloisLfsr>, SequenceError> {
    GaloisLfsr::with_width(width).map(Lookahead::new)
}

/// Every nonzero `width`-bit value in LFSR order, alternate taps
///
/// Selector 0 is the default; see [`GaloisLfsr::tap_set_count`].
pub fn galois_with_taps(
    width: u64,
    tap_selector: usize,
) -> Result<Lookahead<GaloisLfsr>, SequenceError> {
    GaloisLfsr::with_taps(width, tap_selector).map(Lookahead::new)
}

/// LFSR run from `seed` up to the next value with `stop_weight` bits set
pub fn galois_bounded(
    width: u64,
    seed: UInt,
    stop_weight: u64,
) -> Result<Lookahead<GaloisLfsr>, SequenceError> {
    GaloisLfsr::bounded(width, seed, stop_weight).map(Lookahead::new)
}

/// 1, 2, 3, ... through every nonzero `width`-bit value
pub fn plain(width: u64) -> Result<Lookahead<PlainSequence>, SequenceError> {
    PlainSequence::new(width).map(Lookahead::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_sequence::Cursor;

    #[test]
    fn test_galois() {
        let mut cursor = galois(3).unwrap();
        assert_eq!(cursor.next_value(), Ok(UInt::from(1u32)));
        assert_eq!(cursor.count(), 6);
    }

    #[test]
    fn test_galois_with_taps() {
        let mut cursor = galois_with_taps(3, 1).unwrap();
        cursor.discard(1);
        assert_eq!(cursor.next_value(), Ok(UInt::from(5u32)));
    }

    #[test]
    fn test_galois_bounded() {
        let cursor = galois_bounded(4, UInt::from(3u32), 2).unwrap();
        assert_eq!(cursor.count(), 2);
    }

    #[test]
    fn test_plain() {
        let values: Vec<UInt> = plain(2).unwrap().collect();
        assert_eq!(values, vec![UInt::from(1u32), UInt::from(2u32), UInt::from(3u32)]);
    }

    #[test]
    fn test_errors_pass_through() {
        assert!(galois(0).is_err());
        assert!(plain(0).is_err());
        assert!(galois_bounded(4, UInt::from(0u32), 1).is_err());
    }
}
