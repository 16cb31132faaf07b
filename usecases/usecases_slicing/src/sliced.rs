//! Sliced Sequences
//!
//! A [`SlicedSequence`] is a lazy sequence of sequences. A secondary
//! generator, just wide enough to count every boundary, picks the boundaries
//! in its own pseudorandom order; each pick seeds a fresh bounded primary
//! generator.

use entities_sequence::{Cursor, CyclicGenerator, Lookahead, SequenceError};
use entities_utilities::{bit_length, combinadic, n_choose_k, weight, UInt};
use malachite::base::num::basic::traits::{One, Zero};
use tracing::{debug, trace, warn};

/// Lazy sequence of independent slices of an `n`-bit generator
///
/// # Examples
///
/// ```rust
/// use entities_sequence::{Cursor, SequenceError};
/// use entities_utilities::weight;
/// use infrastructure_lfsr::GaloisLfsr;
/// use usecases_slicing::SlicedSequence;
///
/// for mut slice in SlicedSequence::<GaloisLfsr>::new(7, 6)? {
///     // every slice starts at a 7-bit value with six bits set
///     assert_eq!(weight(&slice.next_value()?), 6);
/// }
/// # Ok::<(), SequenceError>(())
/// ```
#[derive(Debug)]
pub struct SlicedSequence<G> {
    // Width of the primary sequence.
    n: u64,
    // Weight of the boundary values.
    k: u64,
    // Number of boundary values, C(n, k).
    boundaries: UInt,
    // Picks the next slice start; None when there is nothing to slice.
    slicer: Option<G>,
    // Why slicing stopped early, if it did.
    failure: Option<SequenceError>,
}

impl<G: CyclicGenerator> SlicedSequence<G> {
    /// Slice `n`-bit sequences at values with `k` bits set.
    ///
    /// # Errors
    ///
    /// Whatever the generator reports for an `n`-bit primary sequence
    /// ([`SequenceError::InvalidWidth`] for zero, or
    /// [`SequenceError::UnsupportedWidth`]) or for the secondary width.
    ///
    /// `k > n` is not an error: there are no boundaries, so no slices.
    /// Neither is `k == 0`: its only boundary, zero, never occurs in a
    /// cyclic generator.
    pub fn new(n: u64, k: u64) -> Result<Self, SequenceError> {
        if n == 0 {
            return Err(SequenceError::InvalidWidth { width: n });
        }
        // Every slice is an n-bit generator; refuse now, not slice by slice.
        G::with_width(n)?;

        let boundaries = n_choose_k(n, k);
        let slicer = if boundaries == UInt::ZERO || k == 0 {
            None
        } else {
            // One value of the secondary generator per possible boundary,
            // rounded up to a whole bit width.
            Some(G::with_width(bit_length(&boundaries))?)
        };
        debug!(
            n,
            k,
            %boundaries,
            slicer_width = slicer.as_ref().map(|slicer| slicer.width()),
            "sliced sequence created"
        );
        Ok(Self {
            n,
            k,
            boundaries,
            slicer,
            failure: None,
        })
    }

    /// Width of every slice's values
    pub fn width(&self) -> u64 {
        self.n
    }

    /// Weight of the boundary values
    pub fn boundary_weight(&self) -> u64 {
        self.k
    }

    /// How many boundary values exist: C(n, k)
    pub fn boundary_count(&self) -> &UInt {
        &self.boundaries
    }

    /// The generator error that ended slicing before the cycle was covered
    pub fn failure(&self) -> Option<&SequenceError> {
        self.failure.as_ref()
    }
}

impl<G: CyclicGenerator> Iterator for SlicedSequence<G> {
    type Item = Lookahead<G>;

    fn next(&mut self) -> Option<Lookahead<G>> {
        let (n, k) = (self.n, self.k);
        loop {
            let value = self.slicer.as_mut()?.next()?;
            if value == UInt::ZERO {
                continue;
            }
            // The generator never yields zero, so step back one to let rank
            // zero be picked.
            let rank = value - UInt::ONE;
            let start = combinadic(n, k, &rank);
            // The secondary domain is oversized; ranks past the last
            // combination come back with the wrong weight.
            if weight(&start) != k {
                trace!(%rank, "rank beyond last boundary skipped");
                continue;
            }
            let generator = match G::bounded(n, start, k) {
                Ok(generator) => generator,
                Err(error @ SequenceError::InvalidSeed { .. }) => {
                    trace!(%rank, %error, "boundary rejected by generator");
                    continue;
                }
                Err(error) => {
                    warn!(%rank, %error, "slicing stopped");
                    self.slicer = None;
                    self.failure = Some(error);
                    return None;
                }
            };
            let mut slice = Lookahead::new(generator);
            if slice.has_next() {
                trace!(%rank, "slice issued");
                return Some(slice);
            }
            trace!(%rank, "empty slice skipped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts 1, 2, 3, ... through every nonzero `width`-bit value
    #[derive(Debug)]
    struct Counter {
        width: u64,
        state: u64,
        start: u64,
        stop_weight: Option<u64>,
        done: bool,
    }

    impl Counter {
        fn make(width: u64, start: u64, stop_weight: Option<u64>) -> Self {
            Self {
                width,
                state: start,
                start,
                stop_weight,
                done: false,
            }
        }
    }

    impl Iterator for Counter {
        type Item = UInt;

        fn next(&mut self) -> Option<UInt> {
            if self.done {
                return None;
            }
            let value = self.state;
            let max = (1u64 << self.width) - 1;
            self.state = if self.state == max { 1 } else { self.state + 1 };
            if self.state == self.start
                || self.stop_weight == Some(u64::from(self.state.count_ones()))
            {
                self.done = true;
            }
            Some(UInt::from(value))
        }
    }

    // Widest register the counter stands in for
    const COUNTER_MAX: u64 = 16;

    impl CyclicGenerator for Counter {
        fn with_width(width: u64) -> Result<Self, SequenceError> {
            if width > COUNTER_MAX {
                return Err(SequenceError::UnsupportedWidth { width, max: COUNTER_MAX });
            }
            Ok(Self::make(width, 1, None))
        }

        fn with_taps(width: u64, _tap_selector: usize) -> Result<Self, SequenceError> {
            Self::with_width(width)
        }

        fn bounded(width: u64, seed: UInt, stop_weight: u64) -> Result<Self, SequenceError> {
            let seed = u64::try_from(&seed).map_err(|_| SequenceError::InvalidSeed { width })?;
            Ok(Self::make(width, seed, Some(stop_weight)))
        }

        fn width(&self) -> u64 {
            self.width
        }
    }

    fn collect_slices(n: u64, k: u64) -> Vec<Vec<u64>> {
        SlicedSequence::<Counter>::new(n, k)
            .unwrap()
            .map(|slice| {
                slice
                    .map(|value| u64::try_from(&value).unwrap())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_four_bits_two_set() {
        // Ranks 0..=5 in counter order; rank 6 has the wrong weight
        assert_eq!(
            collect_slices(4, 2),
            vec![
                vec![0b0011, 0b0100],
                vec![0b0101],
                vec![0b0110, 0b0111, 0b1000],
                vec![0b1001],
                vec![0b1010, 0b1011],
                vec![0b1100, 0b1101, 0b1110, 0b1111, 0b0001, 0b0010],
            ]
        );
    }

    #[test]
    fn test_weight_above_width_is_empty() {
        let mut sliced = SlicedSequence::<Counter>::new(4, 7).unwrap();
        assert_eq!(sliced.boundary_count(), &UInt::ZERO);
        assert!(sliced.next().is_none());
    }

    #[test]
    fn test_weight_zero_is_empty() {
        assert!(collect_slices(5, 0).is_empty());
    }

    #[test]
    fn test_zero_width_is_rejected() {
        assert_eq!(
            SlicedSequence::<Counter>::new(0, 0).unwrap_err(),
            SequenceError::InvalidWidth { width: 0 }
        );
    }

    #[test]
    fn test_unsupported_width_is_rejected_up_front() {
        assert_eq!(
            SlicedSequence::<Counter>::new(COUNTER_MAX + 1, 1).unwrap_err(),
            SequenceError::UnsupportedWidth { width: COUNTER_MAX + 1, max: COUNTER_MAX }
        );
    }

    /// Accepts any width but refuses every bounded run
    #[derive(Debug)]
    struct Broken(Counter);

    impl Iterator for Broken {
        type Item = UInt;

        fn next(&mut self) -> Option<UInt> {
            self.0.next()
        }
    }

    impl CyclicGenerator for Broken {
        fn with_width(width: u64) -> Result<Self, SequenceError> {
            Counter::with_width(width).map(Broken)
        }

        fn with_taps(width: u64, tap_selector: usize) -> Result<Self, SequenceError> {
            Counter::with_taps(width, tap_selector).map(Broken)
        }

        fn bounded(width: u64, _seed: UInt, _stop_weight: u64) -> Result<Self, SequenceError> {
            Err(SequenceError::UnknownTaps { width, selector: 0, available: 0 })
        }

        fn width(&self) -> u64 {
            self.0.width()
        }
    }

    #[test]
    fn test_generator_failure_is_kept() {
        let mut sliced = SlicedSequence::<Broken>::new(4, 2).unwrap();
        assert!(sliced.failure().is_none());
        assert!(sliced.next().is_none());
        assert_eq!(
            sliced.failure(),
            Some(&SequenceError::UnknownTaps { width: 4, selector: 0, available: 0 })
        );
        // Stays finished
        assert!(sliced.next().is_none());
    }

    #[test]
    fn test_full_weight_is_one_slice() {
        // The only boundary is all ones; the slice is the whole cycle
        let slices = collect_slices(3, 3);
        assert_eq!(slices, vec![vec![7, 1, 2, 3, 4, 5, 6]]);
    }

    #[test]
    fn test_accessors() {
        let sliced = SlicedSequence::<Counter>::new(7, 6).unwrap();
        assert_eq!(sliced.width(), 7);
        assert_eq!(sliced.boundary_weight(), 6);
        assert_eq!(sliced.boundary_count(), &UInt::from(7u32));
    }

    #[test]
    fn test_slices_are_exhausted_cursors() {
        let mut sliced = SlicedSequence::<Counter>::new(4, 2).unwrap();
        let mut first = sliced.next().unwrap();
        assert!(first.has_next());
        first.discard(10);
        assert!(!first.has_next());
        assert_eq!(first.next_value(), Err(SequenceError::Exhausted));
    }
}
