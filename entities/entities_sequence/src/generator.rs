//! Cyclic Generator Capability
//!
//! A cyclic generator walks a fixed-order traversal of the nonzero values of
//! a given bit width. The transforms never look inside one; they only need
//! the three ways of building it described here.

use crate::error::SequenceError;
use entities_utilities::UInt;

/// A deterministic, cyclic source of nonzero `width`-bit values
pub trait CyclicGenerator: Iterator<Item = UInt> + Sized {
    /// Default feedback configuration.
    ///
    /// Emits every nonzero `width`-bit value exactly once, then ends.
    fn with_width(width: u64) -> Result<Self, SequenceError>;

    /// Alternate feedback configuration picked by index.
    ///
    /// Selector `0` is the default configuration.
    fn with_taps(width: u64, tap_selector: usize) -> Result<Self, SequenceError>;

    /// Start at `seed` (emitted first) and end just before the next value
    /// whose weight is `stop_weight`, or on coming back round to `seed`.
    fn bounded(width: u64, seed: UInt, stop_weight: u64) -> Result<Self, SequenceError>;

    /// Bit width of the emitted values
    fn width(&self) -> u64;
}
