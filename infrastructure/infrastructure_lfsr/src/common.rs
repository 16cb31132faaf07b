//! Common Generator Helpers
//!
//! Validation and end-of-run detection shared by the generators.

use entities_sequence::SequenceError;
use entities_utilities::{bit_length, weight, UInt};
use malachite::base::num::basic::traits::Zero;

/// Reject a zero width
pub(crate) fn check_width(width: u64) -> Result<(), SequenceError> {
    if width == 0 {
        return Err(SequenceError::InvalidWidth { width });
    }
    Ok(())
}

/// Reject seeds the generator can never reach: zero, or wider than `width`
pub(crate) fn check_seed(width: u64, seed: &UInt) -> Result<(), SequenceError> {
    if *seed == UInt::ZERO || bit_length(seed) > width {
        return Err(SequenceError::InvalidSeed { width });
    }
    Ok(())
}

/// Where a run of a cyclic generator ends
#[derive(Debug, Clone)]
pub(crate) struct RunBounds {
    // First value emitted; reaching it again closes the cycle.
    start: UInt,
    // Stop before the next value of this weight.
    stop_weight: Option<u64>,
}

impl RunBounds {
    pub(crate) fn full_cycle(start: UInt) -> Self {
        Self {
            start,
            stop_weight: None,
        }
    }

    pub(crate) fn until_weight(start: UInt, stop_weight: u64) -> Self {
        Self {
            start,
            stop_weight: Some(stop_weight),
        }
    }

    pub(crate) fn start(&self) -> &UInt {
        &self.start
    }

    /// Whether `upcoming` must not be emitted
    pub(crate) fn ends_at(&self, upcoming: &UInt) -> bool {
        *upcoming == self.start || self.stop_weight == Some(weight(upcoming))
    }
}
