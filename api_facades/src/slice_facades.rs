//! Slice Facades
//!
//! Slicing over the Galois LFSR, the generator the slices are meant for.

use entities_sequence::SequenceError;
use infrastructure_lfsr::GaloisLfsr;
use usecases_slicing::SlicedSequence;

/// Independent slices of the `n`-bit LFSR cycle, cut at weight-`k` values
pub fn sliced(n: u64, k: u64) -> Result<SlicedSequence<GaloisLfsr>, SequenceError> {
    SlicedSequence::new(n, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sliced() {
        let slices = sliced(4, 2).unwrap();
        assert_eq!(slices.count(), 6);
    }

    #[test]
    fn test_sliced_impossible_weight() {
        assert_eq!(sliced(4, 7).unwrap().count(), 0);
    }
}
