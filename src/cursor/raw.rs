//! Cursor over a raw pointer, for sequences handed over from C.

use std::marker::PhantomData;

use crate::require;
use crate::require::PreconditionViolation;
use crate::sequence::Terminated;

/// Non-null cursor over a raw zero-terminated sequence.
///
/// Same contract as [`super::Cursor`], minus the storage bound: the creator
/// of the cursor vouches that a terminator is reachable.
#[derive(Debug, Clone, Copy)]
pub struct RawCursor<'a, T> {
    start: *const T,
    cur: *const T,
    _storage: PhantomData<&'a [T]>,
}

impl<'a, T: Terminated> RawCursor<'a, T> {
    /// Position a cursor at `ptr`.
    ///
    /// Fails when `ptr` is null.
    ///
    /// # Safety
    ///
    /// When non-null, `ptr` must point to a run of initialised `T` that
    /// contains a terminator, and that run must stay alive and unmodified
    /// for `'a`.
    pub unsafe fn from_ptr(ptr: *const T) -> Result<Self, PreconditionViolation> {
        require!(!ptr.is_null());
        Ok(Self {
            start: ptr,
            cur: ptr,
            _storage: PhantomData,
        })
    }

    /// Element under the cursor.
    #[inline]
    pub fn current(&self) -> T {
        // SAFETY: `cur` starts at a valid element and `advance` never steps
        // past the terminator, so it always points into the caller's run.
        unsafe { self.cur.read() }
    }

    /// Step to the next element. Fails when on the terminator.
    #[inline]
    pub fn advance(&mut self) -> Result<(), PreconditionViolation> {
        require!(!self.current().is_terminator());
        // SAFETY: the current element is not the terminator, so the next one
        // is still inside the run.
        self.cur = unsafe { self.cur.add(1) };
        Ok(())
    }

    /// Offset from the pointer the cursor was created at.
    #[inline]
    pub fn position(&self) -> usize {
        // SAFETY: both pointers are in the same run and `cur` never moves
        // backwards.
        unsafe { self.cur.offset_from(self.start) as usize }
    }
}
