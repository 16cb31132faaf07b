//! Galois LFSR Module
//!
//! Right-shifting Galois linear feedback shift register over values of any
//! width with an entry in the tap table, up to [`MAX_WIDTH`](crate::MAX_WIDTH)
//! bits.
//!
//! Each step shifts the register right by one; if the bit shifted out was a
//! one, the feedback mask is xor-ed in. With a primitive feedback polynomial
//! the register visits every nonzero value of its width exactly once per
//! cycle. Zero is a fixed point and never appears.
//!
//! Note the weakness [`ObscureBit`](../../usecases_transforms/obscure/index.html)
//! addresses: whenever an output is even, the next output is that value
//! shifted right by one.

use entities_sequence::{CyclicGenerator, SequenceError};
use entities_utilities::UInt;
use malachite::base::num::basic::traits::{One, Zero};
use malachite::base::num::logic::traits::BitAccess;
use tracing::debug;

use crate::common::{check_seed, check_width, RunBounds};
use crate::taps::{tap_set_count, tap_sets, MAX_WIDTH};

/// Galois linear feedback shift register
///
/// # Examples
///
/// ```rust
/// use entities_sequence::CyclicGenerator;
/// use infrastructure_lfsr::GaloisLfsr;
///
/// let lfsr = GaloisLfsr::with_width(3).unwrap();
/// let values: Vec<String> = lfsr.map(|v| v.to_string()).collect();
/// assert_eq!(values, ["1", "6", "3", "7", "5", "4", "2"]);
/// ```
#[derive(Debug, Clone)]
pub struct GaloisLfsr {
    width: u64,
    taps: &'static [u16],
    // Xor-ed in whenever a one is shifted out.
    feedback: UInt,
    // Next value to emit.
    state: UInt,
    bounds: RunBounds,
    done: bool,
}

impl GaloisLfsr {
    /// Build a register, validating everything up front.
    fn build(
        width: u64,
        tap_selector: usize,
        seed: UInt,
        stop_weight: Option<u64>,
    ) -> Result<Self, SequenceError> {
        check_width(width)?;
        let sets = tap_sets(width).ok_or(SequenceError::UnsupportedWidth {
            width,
            max: MAX_WIDTH,
        })?;
        let taps = *sets.get(tap_selector).ok_or(SequenceError::UnknownTaps {
            width,
            selector: tap_selector,
            available: sets.len(),
        })?;
        check_seed(width, &seed)?;

        let mut feedback = UInt::ZERO;
        for tap in taps {
            feedback.set_bit(u64::from(*tap) - 1);
        }
        debug!(width, tap_selector, ?taps, %seed, ?stop_weight, "galois lfsr created");

        let bounds = match stop_weight {
            Some(stop_weight) => RunBounds::until_weight(seed.clone(), stop_weight),
            None => RunBounds::full_cycle(seed.clone()),
        };
        Ok(Self {
            width,
            taps,
            feedback,
            state: seed,
            bounds,
            done: false,
        })
    }

    /// Feedback taps in use, highest first (`x^t` terms of the polynomial)
    pub fn taps(&self) -> &'static [u16] {
        self.taps
    }

    /// Number of alternate tap sets available for `width`
    pub fn tap_set_count(width: u64) -> usize {
        tap_set_count(width)
    }

    /// The value the run started from
    pub fn seed(&self) -> &UInt {
        self.bounds.start()
    }

    fn step(&mut self) {
        let carry = self.state.get_bit(0);
        self.state >>= 1u64;
        if carry {
            self.state ^= &self.feedback;
        }
    }
}

impl Iterator for GaloisLfsr {
    type Item = UInt;

    fn next(&mut self) -> Option<UInt> {
        if self.done {
            return None;
        }
        let value = self.state.clone();
        self.step();
        self.done = self.bounds.ends_at(&self.state);
        Some(value)
    }
}

impl CyclicGenerator for GaloisLfsr {
    fn with_width(width: u64) -> Result<Self, SequenceError> {
        Self::with_taps(width, 0)
    }

    fn with_taps(width: u64, tap_selector: usize) -> Result<Self, SequenceError> {
        Self::build(width, tap_selector, UInt::ONE, None)
    }

    fn bounded(width: u64, seed: UInt, stop_weight: u64) -> Result<Self, SequenceError> {
        Self::build(width, 0, seed, Some(stop_weight))
    }

    fn width(&self) -> u64 {
        self.width
    }
}
