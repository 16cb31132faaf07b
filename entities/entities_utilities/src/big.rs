//! Wide Bit Pattern Operations
//!
//! Provides the bit-level primitives every sequence transform is built on.
//!
//! This module uses the `malachite` crate's `Natural` so patterns can be as
//! wide as the caller likes. A pattern's width is implicit: it is whatever
//! width the producing generator was built for.

use malachite::base::num::basic::traits::One;
use malachite::base::num::conversion::traits::ToStringBase;
use malachite::base::num::logic::traits::{BitAccess, CountOnes, SignificantBits};
use malachite::Natural;

/// Unbounded unsigned integer used for every sequence value
pub type UInt = Natural;

/// Number of set bits in `value`
pub fn weight(value: &UInt) -> u64 {
    value.count_ones()
}

/// Number of bits needed to represent `value` (zero for zero)
pub fn bit_length(value: &UInt) -> u64 {
    value.significant_bits()
}

/// Mask selecting every bit below `bit`: `2^bit - 1`
pub fn low_mask(bit: u64) -> UInt {
    (UInt::ONE << bit) - UInt::ONE
}

/// Test a single bit (0 -> lowest)
pub fn is_bit_set(value: &UInt, bit: u64) -> bool {
    value.get_bit(bit)
}

/// Delete `bit` from `value`, closing the gap.
///
/// Bits below `bit` keep their positions, bits above it move down by one.
/// The result is one bit narrower than `value`'s domain.
///
/// # Examples
///
/// ```rust
/// use entities_utilities::{remove_bit, UInt};
///
/// // 0b1101 without bit 2 is 0b101
/// assert_eq!(remove_bit(&UInt::from(0b1101u32), 2), UInt::from(0b101u32));
/// ```
pub fn remove_bit(value: &UInt, bit: u64) -> UInt {
    let masked = value & &low_mask(bit);
    let mut cleared = value.clone();
    cleared.clear_bit(bit);
    ((cleared ^ &masked) >> 1u64) | masked
}

/// Inverse of [`remove_bit`] for values that had `bit` set.
///
/// Opens a gap at `bit` and fills it with a one.
pub fn insert_set_bit(value: &UInt, bit: u64) -> UInt {
    let masked = value & &low_mask(bit);
    let mut widened = ((value ^ &masked) << 1u64) | masked;
    widened.set_bit(bit);
    widened
}

/// Render `value` in the given radix (2 to 36, lowercase digits).
///
/// Returns None for an unsupported radix.
pub fn format_radix(value: &UInt, radix: u8) -> Option<String> {
    if !(2..=36).contains(&radix) {
        return None;
    }
    Some(value.to_string_base(radix))
}
