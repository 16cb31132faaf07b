//! Bit Obscuring Transform
//!
//! The word obscure here means "difficult to predict".
//!
//! For a right-shifting LFSR any even output predicts its successor: the
//! successor is the same value shifted right by one. Dropping every value
//! with a chosen bit clear, and deleting that bit from the survivors, removes
//! that one-bit predictability. The price is a domain one bit narrower and,
//! for the lowest bit, roughly half as many values.

use entities_utilities::{low_mask, UInt};
use malachite::base::num::logic::traits::BitAccess;
use tracing::debug;

/// Iterator adapter removing one bit from a sequence
///
/// Values with `bit` clear are discarded; the rest have `bit` deleted, so
/// everything above it moves down one position and everything below it is
/// untouched.
#[derive(Debug, Clone)]
pub struct ObscureBit<S> {
    source: S,
    bit: u64,
    // Selects the bits below `bit`, which keep their positions.
    keep_mask: UInt,
}

impl<S> ObscureBit<S> {
    /// Obscure `bit` (0 -> lowest) of `source`
    pub fn new(source: S, bit: u64) -> Self {
        debug!(bit, "obscuring bit");
        Self {
            source,
            bit,
            keep_mask: low_mask(bit),
        }
    }

    /// The bit being removed
    pub fn bit(&self) -> u64 {
        self.bit
    }

    fn narrow(&self, mut candidate: UInt) -> UInt {
        let masked = &candidate & &self.keep_mask;
        candidate.clear_bit(self.bit);
        ((candidate ^ &masked) >> 1u64) | masked
    }
}

impl<S: Iterator<Item = UInt>> Iterator for ObscureBit<S> {
    type Item = UInt;

    fn next(&mut self) -> Option<UInt> {
        let bit = self.bit;
        // Keep looking till we find one or the source runs out.
        let candidate = self.source.find(|candidate| candidate.get_bit(bit))?;
        Some(self.narrow(candidate))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}
