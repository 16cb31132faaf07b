//! Permutation Resolution
//!
//! Maps every non-negative integer to exactly one permutation across an
//! unbounded run of growing window sizes.
//!
//! Starting from the single-element identity, the index is spent one step
//! at a time on the lexicographic successor. Whenever the current size has
//! no successor the window grows by one element, starts again from the
//! identity, and the step is retried without being spent. So index 0 is
//! `[0]`, index 1 is `[1, 0]`, indices 2..=6 are the non-identity
//! permutations of three elements, and so on: window size `w` covers
//! `w! - 1` consecutive indices.
//!
//! See <https://en.wikipedia.org/wiki/Permutation#Generation_in_lexicographic_order>.

use std::fmt;

use tracing::trace;

/// A resolved window permutation
///
/// `offsets[i]` is the position within a window of the element emitted
/// `i`'th. Always a permutation of `0..window_size()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    offsets: Vec<usize>,
}

impl Permutation {
    /// The permutation selected by `index`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use usecases_transforms::Permutation;
    ///
    /// assert_eq!(Permutation::from_index(0).offsets(), &[0]);
    /// assert_eq!(Permutation::from_index(1).offsets(), &[1, 0]);
    /// assert_eq!(Permutation::from_index(867).offsets(), &[5, 4, 3, 2, 1, 0]);
    /// ```
    pub fn from_index(index: u64) -> Self {
        let mut offsets = vec![0];
        let mut spent = 0;
        while spent < index {
            if next_permutation(&mut offsets) {
                spent += 1;
            } else {
                // Last of its size: back to identity, one wider, try again.
                let size = offsets.len();
                offsets.clear();
                offsets.extend(0..=size);
                trace!(window_size = offsets.len(), "permutation window grown");
            }
        }
        Self { offsets }
    }

    /// The identity of the given window size (at least one)
    pub fn identity(window_size: usize) -> Self {
        Self {
            offsets: (0..window_size.max(1)).collect(),
        }
    }

    /// Number of elements in one window
    pub fn window_size(&self) -> usize {
        self.offsets.len()
    }

    /// Emission order within a window
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Whether applying this permutation leaves a window unchanged
    pub fn is_identity(&self) -> bool {
        self.offsets.iter().enumerate().all(|(i, offset)| i == *offset)
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.offsets)
    }
}

/// Step `offsets` to its lexicographic successor in place.
///
/// Returns false, leaving `offsets` untouched, if it is already the last
/// (strictly descending) arrangement.
fn next_permutation(offsets: &mut [usize]) -> bool {
    // Largest x with offsets[x] < offsets[x + 1].
    let Some(x) = offsets.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        return false;
    };
    // Largest y > x with offsets[y] > offsets[x]; the suffix is descending.
    let y = offsets
        .iter()
        .rposition(|offset| *offset > offsets[x])
        .unwrap_or(x);
    offsets.swap(x, y);
    offsets[x + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_zero_is_identity() {
        let p = Permutation::from_index(0);
        assert_eq!(p.window_size(), 1);
        assert!(p.is_identity());
    }

    #[test]
    fn test_small_indices() {
        assert_eq!(Permutation::from_index(1).offsets(), &[1, 0]);
        assert_eq!(Permutation::from_index(2).offsets(), &[0, 2, 1]);
        assert_eq!(Permutation::from_index(3).offsets(), &[1, 0, 2]);
        assert_eq!(Permutation::from_index(6).offsets(), &[2, 1, 0]);
        assert_eq!(Permutation::from_index(7).offsets(), &[0, 1, 3, 2]);
        assert_eq!(Permutation::from_index(29).offsets(), &[3, 2, 1, 0]);
    }

    #[test]
    fn test_next_permutation_sequence() {
        let mut offsets = [0, 1, 2];
        let mut seen = vec![offsets.to_vec()];
        while next_permutation(&mut offsets) {
            seen.push(offsets.to_vec());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
        // The last arrangement is left alone
        assert_eq!(offsets, [2, 1, 0]);
    }

    #[test]
    fn test_next_permutation_single() {
        let mut offsets = [0];
        assert!(!next_permutation(&mut offsets));
    }

    #[test]
    fn test_identity() {
        assert_eq!(Permutation::identity(4).offsets(), &[0, 1, 2, 3]);
        assert_eq!(Permutation::identity(0).window_size(), 1);
        assert!(!Permutation::from_index(5).is_identity());
    }

    #[test]
    fn test_display() {
        assert_eq!(Permutation::from_index(867).to_string(), "[5, 4, 3, 2, 1, 0]");
    }
}
