//! # Precondition-checked sequence length
//!
//! `strlen` with the undefined behaviour taken out. Handing a null
//! reference to a length function, or stepping a cursor past the end of
//! its sequence, is reported as a [`PreconditionViolation`] instead of
//! reading whatever memory happens to be there.
//!
//! ## Pieces
//!
//! 1. **Sequence reference** ([`SeqRef`]): possibly-null handle to a
//!    zero-terminated run of elements
//! 2. **Bounded iterator** ([`Cursor`], [`RawCursor`]): non-null cursor that
//!    refuses to move past the terminator
//! 3. **Length scanner** ([`length`], [`length_of`], [`strlen`]): one forward
//!    pass to the first terminator
//! 4. **Require** ([`require!`], [`ViolationReporter`]): the checks, and the
//!    strategy that reports a violation nobody caught
//!
//! ## Usage Example
//!
//! ```
//! use slen::{length, length_of, Cursor, SeqRef};
//!
//! assert_eq!(length(c"abc"), Ok(3));
//! assert_eq!(length_of(Cursor::new(b"a\0b\0")?), Ok(1));
//!
//! let err = length(SeqRef::<u8>::null()).unwrap_err();
//! assert!(err.to_string().ends_with("assertion failed: !seq.is_null()"));
//! # Ok::<(), slen::PreconditionViolation>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod require;   // Precondition checks and top-level reporting
pub mod sequence;  // Terminated elements and sequence references
pub mod cursor;    // Bounded iterators
pub mod scan;      // Length scanning

pub use require::{
    exit_code, exit_status, PreconditionViolation, RecordingReporter, StderrReporter,
    TracingReporter, ViolationReporter, EXIT_FAILURE, EXIT_SUCCESS,
};
pub use sequence::{SeqRef, Terminated};
pub use cursor::{Cursor, RawCursor};
pub use scan::{length, length_of, strlen, Scan};

/// Scenarios every build must get right, as `(label, outcome)` pairs.
///
/// Each outcome is the result of one check. A scan of a null reference is
/// expected to fail; its outcome is `Ok` only when it did.
pub fn self_check() -> Vec<(&'static str, Result<(), PreconditionViolation>)> {
    vec![
        ("empty string", expect_len(length(c""), 0)),
        ("abc", expect_len(length(c"abc"), 3)),
        ("embedded terminator", expect_len(length(b"a\0b\0"), 1)),
        ("null reference", expect_violation(length(SeqRef::<u8>::null()))),
        (
            "null cursor",
            expect_violation(Cursor::new(SeqRef::<u8>::null()).map(|_| 0)),
        ),
    ]
}

fn expect_len(
    got: Result<usize, PreconditionViolation>,
    want: usize,
) -> Result<(), PreconditionViolation> {
    let got = got?;
    require!(got == want);
    Ok(())
}

fn expect_violation(got: Result<usize, PreconditionViolation>) -> Result<(), PreconditionViolation> {
    let got_violation = got.is_err();
    require!(got_violation);
    Ok(())
}
