//! Length of zero-terminated sequences.
//!
//! Every entry point is a single forward pass that stops at the first
//! terminator. A null reference is a [`PreconditionViolation`], never a
//! length of zero.

use crate::cursor::{Cursor, RawCursor};
use crate::require::PreconditionViolation;
use crate::sequence::{SeqRef, Terminated};

/// Anything that can report its current element, step forward, and say how
/// far it has come.
pub trait Scan {
    /// Element type, which knows its own terminator.
    type Elem: Terminated;

    /// Element under the scanner.
    fn current(&self) -> Result<Self::Elem, PreconditionViolation>;

    /// Step to the next element; refused on the terminator.
    fn advance(&mut self) -> Result<(), PreconditionViolation>;

    /// Elements stepped over since the start of the sequence.
    fn position(&self) -> usize;
}

impl<T: Terminated> Scan for Cursor<'_, T> {
    type Elem = T;

    #[inline]
    fn current(&self) -> Result<T, PreconditionViolation> {
        Cursor::current(self)
    }

    #[inline]
    fn advance(&mut self) -> Result<(), PreconditionViolation> {
        Cursor::advance(self)
    }

    #[inline]
    fn position(&self) -> usize {
        Cursor::position(self)
    }
}

impl<T: Terminated> Scan for RawCursor<'_, T> {
    type Elem = T;

    #[inline]
    fn current(&self) -> Result<T, PreconditionViolation> {
        Ok(RawCursor::current(self))
    }

    #[inline]
    fn advance(&mut self) -> Result<(), PreconditionViolation> {
        RawCursor::advance(self)
    }

    #[inline]
    fn position(&self) -> usize {
        RawCursor::position(self)
    }
}

/// Number of elements `scanner` travels before reaching the terminator.
///
/// The scanner is already validated, so null is out of the picture here.
pub fn length_of<S: Scan>(mut scanner: S) -> Result<usize, PreconditionViolation> {
    let start = scanner.position();
    while !scanner.current()?.is_terminator() {
        scanner.advance()?;
    }
    let len = scanner.position() - start;
    tracing::trace!(len, "scan complete");
    Ok(len)
}

/// Number of elements in `seq` before its first terminator.
///
/// ```
/// use slen::{length, SeqRef};
///
/// assert_eq!(length(b"abc\0"), Ok(3));
/// assert_eq!(length(b"a\0b\0"), Ok(1));
/// assert!(length(SeqRef::<u8>::null()).is_err());
/// ```
pub fn length<'a, T: Terminated>(
    seq: impl Into<SeqRef<'a, T>>,
) -> Result<usize, PreconditionViolation> {
    let seq: SeqRef<'a, T> = seq.into();
    length_of(Cursor::new(seq)?)
}

/// Number of elements before the terminator `ptr` points into.
///
/// Fails when `ptr` is null.
///
/// # Safety
///
/// When non-null, `ptr` must point to initialised elements followed, within
/// the same allocation, by a terminator.
pub unsafe fn strlen<T: Terminated>(ptr: *const T) -> Result<usize, PreconditionViolation> {
    // SAFETY: forwarded from the caller.
    let cursor = unsafe { RawCursor::from_ptr(ptr)? };
    length_of(cursor)
}
