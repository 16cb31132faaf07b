//! Combinatorics Module
//!
//! Binomial coefficients and the combinatorial number system ("combinadics").
//!
//! A combinadic maps a lexicographic rank onto the unique `n`-bit pattern with
//! exactly `k` bits set that occupies that rank in ascending numeric order.
//! See <https://en.wikipedia.org/wiki/Combinatorial_number_system>.

use malachite::base::num::basic::traits::{One, Zero};
use malachite::base::num::logic::traits::BitAccess;

use crate::big::UInt;

/// Number of ways to choose `k` of `n` bits: C(n, k)
///
/// Uses the multiplicative recurrence iteratively, so every intermediate
/// value is itself a binomial coefficient and the division is always exact.
///
/// # Returns
///
/// * `0` if `k > n`
/// * `1` if `k == 0` or `k == n`
///
/// # Examples
///
/// ```rust
/// use entities_utilities::{n_choose_k, UInt};
///
/// assert_eq!(n_choose_k(5, 2), UInt::from(10u32));
/// assert_eq!(n_choose_k(4, 7), UInt::from(0u32));
/// ```
pub fn n_choose_k(n: u64, k: u64) -> UInt {
    if k > n {
        return UInt::ZERO;
    }
    let k = k.min(n - k);
    let mut result = UInt::ONE;
    for i in 1..=k {
        result *= UInt::from(n - k + i);
        result /= UInt::from(i);
    }
    result
}

/// The `rank`'th `n`-bit pattern with `k` bits set, in ascending order.
///
/// Walks the bit positions from the top down, setting a bit whenever the
/// remaining rank is at least C(position, still-needed).
///
/// A rank of `C(n, k)` or more has no such pattern; the result then has a
/// different weight and callers are expected to reject it.
///
/// # Arguments
///
/// * `n` - Width of the pattern in bits
/// * `k` - Number of bits that must be set
/// * `rank` - Position in the lexicographic ordering (0 based)
pub fn combinadic(n: u64, k: u64, rank: &UInt) -> UInt {
    let mut remaining = rank.clone();
    let mut needed = k;
    let mut pattern = UInt::ZERO;
    for position in (0..n).rev() {
        let below = n_choose_k(position, needed);
        if remaining >= below {
            remaining -= &below;
            pattern.set_bit(position);
            needed = needed.saturating_sub(1);
        }
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::big::weight;

    #[test]
    fn test_n_choose_k_edges() {
        assert_eq!(n_choose_k(5, 0), UInt::from(1u32));
        assert_eq!(n_choose_k(5, 5), UInt::from(1u32));
        assert_eq!(n_choose_k(5, 2), UInt::from(10u32));
        assert_eq!(n_choose_k(4, 7), UInt::from(0u32));
        assert_eq!(n_choose_k(0, 0), UInt::from(1u32));
    }

    #[test]
    fn test_n_choose_k_pascal() {
        // Every row of Pascal's triangle up to 40
        for n in 1..40u64 {
            for k in 1..n {
                let expected = n_choose_k(n - 1, k - 1) + n_choose_k(n - 1, k);
                assert_eq!(n_choose_k(n, k), expected, "C({}, {})", n, k);
            }
        }
    }

    #[test]
    fn test_n_choose_k_wide() {
        // C(100, 50) = 100891344545564193334812497256
        let expected: UInt = "100891344545564193334812497256".parse().unwrap();
        assert_eq!(n_choose_k(100, 50), expected);
    }

    #[test]
    fn test_combinadic_first_and_last() {
        assert_eq!(combinadic(4, 2, &UInt::from(0u32)), UInt::from(0b0011u32));
        assert_eq!(combinadic(4, 2, &UInt::from(5u32)), UInt::from(0b1100u32));
    }

    #[test]
    fn test_combinadic_enumerates_in_order() {
        // All 8-bit patterns of weight 3, by brute force
        let expected: Vec<UInt> = (0u32..256)
            .filter(|v| v.count_ones() == 3)
            .map(UInt::from)
            .collect();
        let produced: Vec<UInt> = (0u32..56)
            .map(|rank| combinadic(8, 3, &UInt::from(rank)))
            .collect();
        assert_eq!(produced, expected);
    }

    #[test]
    fn test_combinadic_out_of_range_has_wrong_weight() {
        // Only 6 patterns exist for (4, 2)
        for rank in 6u32..16 {
            let pattern = combinadic(4, 2, &UInt::from(rank));
            assert_ne!(weight(&pattern), 2, "rank {}", rank);
        }
    }

    #[test]
    fn test_combinadic_weight_zero() {
        assert_eq!(combinadic(5, 0, &UInt::from(0u32)), UInt::from(0u32));
    }

    #[test]
    fn test_combinadic_full_weight() {
        assert_eq!(combinadic(5, 5, &UInt::from(0u32)), UInt::from(0b11111u32));
    }
}
