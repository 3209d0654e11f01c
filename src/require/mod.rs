//! Precondition checks that fail loudly instead of invoking undefined
//! behaviour.
//!
//! A failed [`require!`] returns a [`PreconditionViolation`] from the
//! enclosing function. The violation records where the check lives and the
//! source text of the condition, and renders as
//! `<file>:<line> assertion failed: <condition>`.

mod reporter;

pub use reporter::{
    exit_code, exit_status, RecordingReporter, StderrReporter, TracingReporter,
    ViolationReporter, EXIT_FAILURE, EXIT_SUCCESS,
};

use thiserror::Error;

/// A caller-supplied input broke a documented contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{file}:{line} assertion failed: {condition}")]
pub struct PreconditionViolation {
    file: &'static str,
    line: u32,
    condition: &'static str,
}

impl PreconditionViolation {
    /// Build a violation for `condition` checked at `file:line`.
    pub fn new(file: &'static str, line: u32, condition: &'static str) -> Self {
        tracing::debug!(file, line, condition, "precondition failed");
        Self {
            file,
            line,
            condition,
        }
    }

    /// Source file containing the failed check.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Line of the failed check.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Source text of the condition that evaluated to false.
    pub fn condition(&self) -> &'static str {
        self.condition
    }
}

/// Return early with a [`PreconditionViolation`] unless the condition holds.
///
/// The error is converted with `Into`, so the enclosing function may return
/// any error type that implements `From<PreconditionViolation>`.
///
/// ```
/// use slen::{require, PreconditionViolation};
///
/// fn half(n: u32) -> Result<u32, PreconditionViolation> {
///     require!(n % 2 == 0);
///     Ok(n / 2)
/// }
///
/// assert_eq!(half(4), Ok(2));
/// let err = half(3).unwrap_err();
/// assert_eq!(err.condition(), "n % 2 == 0");
/// ```
#[macro_export]
macro_rules! require {
    ($cond:expr $(,)?) => {
        if !($cond) {
            return ::core::result::Result::Err(
                $crate::PreconditionViolation::new(
                    ::core::file!(),
                    ::core::line!(),
                    ::core::stringify!($cond),
                )
                .into(),
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(n: i32) -> Result<i32, PreconditionViolation> {
        require!(n > 0);
        Ok(n)
    }

    #[test]
    fn test_require_passes_through_on_true() {
        assert_eq!(positive(7), Ok(7));
    }

    #[test]
    fn test_require_captures_condition_and_location() {
        let err = positive(-1).unwrap_err();
        assert_eq!(err.condition(), "n > 0");
        assert!(err.file().ends_with("mod.rs"));
        assert!(err.line() > 0);
    }

    #[test]
    fn test_display_format() {
        let err = PreconditionViolation::new("src/c_str.rs", 12, "str");
        assert_eq!(err.to_string(), "src/c_str.rs:12 assertion failed: str");
    }

    #[test]
    fn test_require_converts_into_wider_error() {
        #[derive(Debug)]
        enum Wide {
            Violation(PreconditionViolation),
        }

        impl From<PreconditionViolation> for Wide {
            fn from(v: PreconditionViolation) -> Self {
                Wide::Violation(v)
            }
        }

        fn check(flag: bool) -> Result<(), Wide> {
            require!(flag);
            Ok(())
        }

        assert!(check(true).is_ok());
        let Err(Wide::Violation(v)) = check(false) else {
            panic!("expected a violation");
        };
        assert_eq!(v.condition(), "flag");
    }
}
