//! Bounded iteration over zero-terminated sequences.
//!
//! A [`Cursor`] can only be built from a non-null reference and can never be
//! moved past the terminator, so every element it hands out is one the
//! caller's storage actually holds.

mod raw;

pub use raw::RawCursor;

use crate::require;
use crate::require::PreconditionViolation;
use crate::sequence::{SeqRef, Terminated};

/// Validated, non-null cursor over a borrowed sequence.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a, T> {
    elems: &'a [T],
    pos: usize,
}

impl<'a, T: Terminated> Cursor<'a, T> {
    /// Position a cursor at the first element of `seq`.
    ///
    /// Fails when `seq` is null.
    pub fn new(seq: impl Into<SeqRef<'a, T>>) -> Result<Self, PreconditionViolation> {
        let seq: SeqRef<'a, T> = seq.into();
        let Some(elems) = seq.as_slice() else {
            return Err(PreconditionViolation::new(
                file!(),
                line!(),
                "!seq.is_null()",
            ));
        };
        Ok(Self { elems, pos: 0 })
    }

    /// Element under the cursor.
    ///
    /// Fails when the storage ran out before a terminator was seen.
    #[inline]
    pub fn current(&self) -> Result<T, PreconditionViolation> {
        require!(self.pos < self.elems.len());
        Ok(self.elems[self.pos])
    }

    /// Step to the next element.
    ///
    /// Fails, leaving the cursor where it was, when the current element is
    /// the terminator.
    #[inline]
    pub fn advance(&mut self) -> Result<(), PreconditionViolation> {
        require!(!self.current()?.is_terminator());
        self.pos += 1;
        Ok(())
    }

    /// Offset from the start of the sequence.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of elements between `start` and this cursor.
    ///
    /// Both cursors must walk the same sequence and `start` must not be
    /// ahead of `self`.
    pub fn distance_from(&self, start: &Self) -> Result<usize, PreconditionViolation> {
        require!(std::ptr::eq(self.elems, start.elems));
        require!(start.pos <= self.pos);
        Ok(self.pos - start.pos)
    }
}

impl Default for Cursor<'static, u8> {
    fn default() -> Self {
        Self {
            elems: <u8 as Terminated>::EMPTY,
            pos: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_reference_is_rejected() {
        let err = Cursor::new(SeqRef::<u8>::null()).unwrap_err();
        assert_eq!(err.condition(), "!seq.is_null()");
    }

    #[test]
    fn test_absent_slice_never_becomes_empty_string() {
        let err = Cursor::new(None::<&[u8]>).unwrap_err();
        assert!(err.file().ends_with("mod.rs"));
        assert_eq!(err.condition(), "!seq.is_null()");
    }

    #[test]
    fn test_walks_to_terminator() {
        let mut cur = Cursor::new(b"ab\0").unwrap();
        assert_eq!(cur.current().unwrap(), b'a');
        cur.advance().unwrap();
        assert_eq!(cur.current().unwrap(), b'b');
        cur.advance().unwrap();
        assert_eq!(cur.current().unwrap(), 0);
        assert_eq!(cur.position(), 2);
    }

    #[test]
    fn test_cannot_advance_past_terminator() {
        let mut cur = Cursor::new(b"\0tail").unwrap();
        assert!(cur.advance().is_err());
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn test_unterminated_storage_is_reported() {
        let mut cur = Cursor::new(b"ab").unwrap();
        cur.advance().unwrap();
        cur.advance().unwrap();
        assert!(cur.current().is_err());
        assert!(cur.advance().is_err());
    }

    #[test]
    fn test_distance_between_cursors() {
        let text = b"hello\0";
        let start = Cursor::new(text).unwrap();
        let mut end = start;
        for _ in 0..3 {
            end.advance().unwrap();
        }
        assert_eq!(end.distance_from(&start).unwrap(), 3);
        assert!(start.distance_from(&end).is_err());
    }

    #[test]
    fn test_distance_across_sequences_is_rejected() {
        let a = Cursor::new(b"x\0").unwrap();
        let b = Cursor::new(b"yy\0").unwrap();
        assert!(a.distance_from(&b).is_err());
    }

    #[test]
    fn test_default_is_empty_string() {
        let cur = Cursor::default();
        assert_eq!(cur.current().unwrap(), 0);
    }
}
