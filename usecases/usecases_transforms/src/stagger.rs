//! Window Staggering
//!
//! Reorders a sequence in fixed-size windows using a [`Permutation`], so the
//! reordering is fully reproducible from a single integer.
//!
//! A permutation is only defined for full windows: when the source ends part
//! way through one, that last short window is emitted in its original order.

use std::iter::Fuse;

use tracing::{debug, trace};

use crate::permutation::Permutation;

/// Iterator adapter applying a permutation to every full window of a source
#[derive(Debug)]
pub struct Staggered<I: Iterator> {
    source: Fuse<I>,
    permutation: Permutation,
    // Current window; slots are emptied as they are delivered.
    buffer: Vec<Option<I::Item>>,
    read_pos: usize,
    // The current window came up short, deliver it in order.
    partial: bool,
}

impl<I: Iterator> Staggered<I> {
    /// Stagger `source` with the permutation selected by `index`
    pub fn new(source: I, index: u64) -> Self {
        let permutation = Permutation::from_index(index);
        debug!(index, %permutation, "staggering sequence");
        Self::with_permutation(source, permutation)
    }

    /// Stagger `source` with an already resolved permutation
    pub fn with_permutation(source: I, permutation: Permutation) -> Self {
        Self {
            source: source.fuse(),
            buffer: Vec::with_capacity(permutation.window_size()),
            permutation,
            read_pos: 0,
            partial: false,
        }
    }

    /// The permutation applied to each full window
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// Load the next window. Returns false once the source has nothing left.
    fn refill(&mut self) -> bool {
        let window_size = self.permutation.window_size();
        self.buffer.clear();
        self.read_pos = 0;
        self.buffer
            .extend(self.source.by_ref().take(window_size).map(Some));
        self.partial = self.buffer.len() < window_size;
        if self.partial && !self.buffer.is_empty() {
            trace!(
                len = self.buffer.len(),
                window_size,
                "short final window left in order"
            );
        }
        !self.buffer.is_empty()
    }
}

impl<I: Iterator> Iterator for Staggered<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            if self.read_pos < self.buffer.len() {
                let slot = if self.partial {
                    self.read_pos
                } else {
                    self.permutation.offsets()[self.read_pos]
                };
                self.read_pos += 1;
                // Offsets are a permutation, so every slot is still full here.
                if let Some(value) = self.buffer[slot].take() {
                    return Some(value);
                }
            } else if !self.refill() {
                return None;
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.buffer.len() - self.read_pos;
        let (low, high) = self.source.size_hint();
        (
            low.saturating_add(buffered),
            high.and_then(|high| high.checked_add(buffered)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staggered(len: u32, index: u64) -> Vec<u32> {
        Staggered::new(1..=len, index).collect()
    }

    #[test]
    fn test_index_zero_passes_through() {
        assert_eq!(staggered(10, 0), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_pairs_swapped() {
        assert_eq!(staggered(6, 1), vec![2, 1, 4, 3, 6, 5]);
    }

    #[test]
    fn test_partial_window_left_in_order() {
        // Window [1, 0]; the trailing 5 has no partner
        assert_eq!(staggered(5, 1), vec![2, 1, 4, 3, 5]);
        // Window [5, 4, 3, 2, 1, 0]; only four values, none reordered
        assert_eq!(staggered(4, 867), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_reverse_six() {
        let out = staggered(16, 867);
        assert_eq!(
            out,
            vec![6, 5, 4, 3, 2, 1, 12, 11, 10, 9, 8, 7, 13, 14, 15, 16]
        );
    }

    #[test]
    fn test_three_window() {
        // Index 4 is [1, 2, 0]
        assert_eq!(staggered(7, 4), vec![2, 3, 1, 5, 6, 4, 7]);
    }

    #[test]
    fn test_empty_source() {
        assert!(staggered(0, 867).is_empty());
    }

    #[test]
    fn test_non_copy_items() {
        let words = vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()];
        let out: Vec<String> = Staggered::new(words.into_iter(), 1).collect();
        assert_eq!(out, vec!["b", "a", "d", "c"]);
    }

    #[test]
    fn test_size_hint_is_exact_for_ranges() {
        let mut s = Staggered::new(1..=10u32, 1);
        assert_eq!(s.size_hint(), (10, Some(10)));
        s.next();
        assert_eq!(s.size_hint(), (9, Some(9)));
    }
}
