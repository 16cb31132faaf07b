//! Cursor Module
//!
//! Pull-based access to a sequence with exactly one value of lookahead.
//!
//! Asking whether a value exists may do work (generate, filter, refill a
//! window) but never skips or duplicates a value: the value prepared by
//! [`Cursor::has_next`] is the one the next [`Cursor::next_value`] returns,
//! no matter how often `has_next` is called in between.

use std::iter::Fuse;

use crate::error::SequenceError;
use entities_utilities::UInt;

/// A sequence of wide unsigned values with single-value lookahead
pub trait Cursor {
    /// Whether another value is available.
    ///
    /// Idempotent: repeated calls without consuming prepare at most one value.
    fn has_next(&mut self) -> bool;

    /// Take the prepared value (preparing it first if needed).
    ///
    /// # Errors
    ///
    /// [`SequenceError::Exhausted`] once the sequence has run out. This is a
    /// contract violation by the caller, not a condition to retry.
    fn next_value(&mut self) -> Result<UInt, SequenceError>;

    /// Consume and drop `count` values.
    ///
    /// Stops quietly if the sequence runs out first.
    fn discard(&mut self, count: usize) -> &mut Self
    where
        Self: Sized,
    {
        for _ in 0..count {
            if self.next_value().is_err() {
                break;
            }
        }
        self
    }

    /// A view that ends after `count` values or when this sequence ends.
    fn limit(self, count: usize) -> Limit<Self>
    where
        Self: Sized,
    {
        Limit::new(self, count)
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next_value(&mut self) -> Result<UInt, SequenceError> {
        (**self).next_value()
    }
}

/// Cursor over any iterator, holding the prepared value in an explicit slot
///
/// The source is fused, so once it reports the end it is never polled again.
#[derive(Debug, Clone)]
pub struct Lookahead<I: Iterator> {
    source: Fuse<I>,
    pending: Option<I::Item>,
}

impl<I: Iterator> Lookahead<I> {
    /// Wrap a source of values
    pub fn new(source: I) -> Self {
        Self {
            source: source.fuse(),
            pending: None,
        }
    }

    /// Borrow the next value without consuming it
    pub fn peek(&mut self) -> Option<&I::Item> {
        if self.pending.is_none() {
            self.pending = self.source.next();
        }
        self.pending.as_ref()
    }
}

impl<I: Iterator<Item = UInt>> Cursor for Lookahead<I> {
    fn has_next(&mut self) -> bool {
        self.peek().is_some()
    }

    fn next_value(&mut self) -> Result<UInt, SequenceError> {
        self.next().ok_or(SequenceError::Exhausted)
    }
}

impl<I: Iterator> Iterator for Lookahead<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        // Deliver the prepared value exactly once.
        match self.pending.take() {
            Some(value) => Some(value),
            None => self.source.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let extra = usize::from(self.pending.is_some());
        let (low, high) = self.source.size_hint();
        (
            low.saturating_add(extra),
            high.and_then(|high| high.checked_add(extra)),
        )
    }
}

/// Bounded view over a cursor
///
/// Reports exhaustion after `limit` values have been delivered or the
/// underlying cursor ends, whichever comes first. The underlying cursor is
/// never asked for a value past the limit.
#[derive(Debug, Clone)]
pub struct Limit<C> {
    source: C,
    limit: usize,
    delivered: usize,
}

impl<C> Limit<C> {
    /// Bound `source` to at most `limit` values
    pub fn new(source: C, limit: usize) -> Self {
        Self {
            source,
            limit,
            delivered: 0,
        }
    }

    /// How many values may still be delivered
    pub fn remaining(&self) -> usize {
        self.limit - self.delivered
    }
}

impl<C: Cursor> Cursor for Limit<C> {
    fn has_next(&mut self) -> bool {
        self.delivered < self.limit && self.source.has_next()
    }

    fn next_value(&mut self) -> Result<UInt, SequenceError> {
        if !self.has_next() {
            return Err(SequenceError::Exhausted);
        }
        self.delivered += 1;
        self.source.next_value()
    }
}

impl<C: Cursor> Iterator for Limit<C> {
    type Item = UInt;

    fn next(&mut self) -> Option<UInt> {
        self.next_value().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(range: std::ops::Range<u32>) -> Lookahead<impl Iterator<Item = UInt>> {
        Lookahead::new(range.map(UInt::from))
    }

    #[test]
    fn test_has_next_is_idempotent() {
        let mut cursor = values(1..4);
        for _ in 0..10 {
            assert!(cursor.has_next());
        }
        assert_eq!(cursor.next_value(), Ok(UInt::from(1u32)));
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.next_value(), Ok(UInt::from(2u32)));
        assert_eq!(cursor.next_value(), Ok(UInt::from(3u32)));
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_next_without_has_next() {
        // next_value prepares implicitly
        let mut cursor = values(7..9);
        assert_eq!(cursor.next_value(), Ok(UInt::from(7u32)));
        assert_eq!(cursor.next_value(), Ok(UInt::from(8u32)));
    }

    #[test]
    fn test_next_past_end_is_an_error() {
        let mut cursor = values(0..1);
        assert!(cursor.next_value().is_ok());
        assert_eq!(cursor.next_value(), Err(SequenceError::Exhausted));
        // And stays that way
        assert_eq!(cursor.next_value(), Err(SequenceError::Exhausted));
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = values(5..7);
        assert_eq!(cursor.peek(), Some(&UInt::from(5u32)));
        assert_eq!(cursor.peek(), Some(&UInt::from(5u32)));
        assert_eq!(cursor.next(), Some(UInt::from(5u32)));
        assert_eq!(cursor.peek(), Some(&UInt::from(6u32)));
    }

    #[test]
    fn test_discard() {
        let mut cursor = values(0..10);
        cursor.discard(3);
        assert_eq!(cursor.next_value(), Ok(UInt::from(3u32)));
    }

    #[test]
    fn test_discard_past_end() {
        let mut cursor = values(0..3);
        assert!(!cursor.discard(50).has_next());
    }

    #[test]
    fn test_discard_keeps_pending_value_in_count() {
        let mut cursor = values(0..10);
        assert!(cursor.has_next());
        // The prepared 0 is the first discarded value
        cursor.discard(1);
        assert_eq!(cursor.next_value(), Ok(UInt::from(1u32)));
    }

    #[test]
    fn test_limit() {
        let limited: Vec<UInt> = values(0..100).limit(3).collect();
        assert_eq!(limited, vec![UInt::from(0u32), UInt::from(1u32), UInt::from(2u32)]);
    }

    #[test]
    fn test_limit_longer_than_source() {
        let mut limited = values(0..2).limit(5);
        assert_eq!(limited.by_ref().count(), 2);
        assert_eq!(limited.remaining(), 3);
        assert_eq!(limited.next_value(), Err(SequenceError::Exhausted));
    }

    #[test]
    fn test_limit_zero() {
        let mut limited = values(0..2).limit(0);
        assert!(!limited.has_next());
    }

    #[test]
    fn test_size_hint_counts_pending() {
        let mut cursor = values(0..4);
        assert!(cursor.has_next());
        assert_eq!(cursor.size_hint(), (4, Some(4)));
    }
}
