//! Sequence Errors
//!
//! Exhaustion is normally reported through `has_next() == false`; the
//! [`SequenceError::Exhausted`] variant only surfaces when a caller asks for
//! a value anyway.

use thiserror::Error;

/// Errors raised while building or pulling from a sequence
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A bit width of zero was requested.
    #[error("bit width must be at least 1, got {width}")]
    InvalidWidth {
        /// The rejected width.
        width: u64,
    },

    /// The generator has no feedback configuration for this width.
    #[error("no feedback taps known for width {width} (widest supported is {max})")]
    UnsupportedWidth {
        /// The requested width.
        width: u64,
        /// Widest width the generator supports.
        max: u64,
    },

    /// The tap selector is past the end of the tap sets for this width.
    #[error("tap set {selector} requested for width {width}, only {available} available")]
    UnknownTaps {
        /// Width the taps were requested for.
        width: u64,
        /// The rejected selector.
        selector: usize,
        /// Number of tap sets known for the width.
        available: usize,
    },

    /// A start value that the generator can never reach.
    #[error("seed must be a nonzero value of at most {width} bits")]
    InvalidSeed {
        /// Width of the generator being seeded.
        width: u64,
    },

    /// A value was requested after the sequence ran out.
    #[error("sequence exhausted")]
    Exhausted,
}
