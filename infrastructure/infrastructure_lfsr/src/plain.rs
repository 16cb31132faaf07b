//! Plain Sequence
//!
//! Completely unobscured sequence: 1, 2, 3, ... up to the largest value of
//! the width. Used for testing and for showing what a transform does to an
//! ordered input; probably of no other use.

use entities_sequence::{CyclicGenerator, SequenceError};
use entities_utilities::{low_mask, UInt};
use malachite::base::num::basic::traits::One;

use crate::common::{check_seed, check_width, RunBounds};

/// Counting generator over the nonzero values of a width
#[derive(Debug, Clone)]
pub struct PlainSequence {
    width: u64,
    // Largest value of the width; wraps back to one.
    top: UInt,
    next: UInt,
    bounds: RunBounds,
    done: bool,
}

impl PlainSequence {
    /// Count from one through every nonzero `width`-bit value
    pub fn new(width: u64) -> Result<Self, SequenceError> {
        check_width(width)?;
        Ok(Self::build(width, RunBounds::full_cycle(UInt::ONE)))
    }

    fn build(width: u64, bounds: RunBounds) -> Self {
        Self {
            width,
            top: low_mask(width),
            next: bounds.start().clone(),
            bounds,
            done: false,
        }
    }
}

impl Iterator for PlainSequence {
    type Item = UInt;

    fn next(&mut self) -> Option<UInt> {
        if self.done {
            return None;
        }
        let value = self.next.clone();
        self.next = if self.next == self.top {
            UInt::ONE
        } else {
            &self.next + UInt::ONE
        };
        self.done = self.bounds.ends_at(&self.next);
        Some(value)
    }
}

impl CyclicGenerator for PlainSequence {
    fn with_width(width: u64) -> Result<Self, SequenceError> {
        Self::new(width)
    }

    /// A counter has a single configuration
    fn with_taps(width: u64, tap_selector: usize) -> Result<Self, SequenceError> {
        if tap_selector != 0 {
            return Err(SequenceError::UnknownTaps {
                width,
                selector: tap_selector,
                available: 1,
            });
        }
        Self::new(width)
    }

    fn bounded(width: u64, seed: UInt, stop_weight: u64) -> Result<Self, SequenceError> {
        check_width(width)?;
        check_seed(width, &seed)?;
        Ok(Self::build(width, RunBounds::until_weight(seed, stop_weight)))
    }

    fn width(&self) -> u64 {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(sequence: PlainSequence) -> Vec<u64> {
        sequence.map(|v| u64::try_from(&v).unwrap()).collect()
    }

    #[test]
    fn test_counts_every_nonzero_value() {
        assert_eq!(values(PlainSequence::new(3).unwrap()), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_bounded_wraps_round() {
        // 6, 7 (weight 3), 1, 2, then 3 has weight 2
        let sequence = PlainSequence::bounded(3, UInt::from(6u32), 2).unwrap();
        assert_eq!(values(sequence), vec![6, 7, 1, 2]);
    }

    #[test]
    fn test_only_default_taps() {
        assert!(PlainSequence::with_taps(4, 0).is_ok());
        assert_eq!(
            PlainSequence::with_taps(4, 1).unwrap_err(),
            SequenceError::UnknownTaps { width: 4, selector: 1, available: 1 }
        );
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(
            PlainSequence::new(0).unwrap_err(),
            SequenceError::InvalidWidth { width: 0 }
        );
    }
}
