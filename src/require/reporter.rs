//! Top-level reporting of violations that escaped every caller.
//!
//! The reporter is passed in by whoever owns the process entry point; nothing
//! here installs global hooks.

use std::fmt;
use std::process::ExitCode;
use std::sync::Mutex;

use super::PreconditionViolation;

/// Strategy for surfacing an uncaught [`PreconditionViolation`].
pub trait ViolationReporter: fmt::Debug {
    /// Emit a diagnostic for `violation`.
    fn report(&self, violation: &PreconditionViolation);
}

/// Writes one diagnostic line per violation to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl ViolationReporter for StderrReporter {
    fn report(&self, violation: &PreconditionViolation) {
        eprintln!("{violation}");
    }
}

/// Emits violations as `tracing` error events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ViolationReporter for TracingReporter {
    fn report(&self, violation: &PreconditionViolation) {
        tracing::error!(
            file = violation.file(),
            line = violation.line(),
            condition = violation.condition(),
            "{violation}"
        );
    }
}

/// Keeps rendered diagnostics in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<String>>,
}

impl RecordingReporter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics recorded so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A poisoned recorder still holds valid strings.
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ViolationReporter for RecordingReporter {
    fn report(&self, violation: &PreconditionViolation) {
        self.lock().push(violation.to_string());
    }
}

/// Status returned when every check passed.
pub const EXIT_SUCCESS: u8 = 0;
/// Status returned when a violation reached the top level.
pub const EXIT_FAILURE: u8 = 1;

/// Map the outcome of a program to its numeric exit status.
///
/// `Ok` becomes [`EXIT_SUCCESS`]. A violation is handed to `reporter` once and
/// becomes [`EXIT_FAILURE`].
pub fn exit_status<T>(
    result: Result<T, PreconditionViolation>,
    reporter: &dyn ViolationReporter,
) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(violation) => {
            reporter.report(&violation);
            EXIT_FAILURE
        }
    }
}

/// [`exit_status`] as a process [`ExitCode`], for returning from `main`.
pub fn exit_code<T>(
    result: Result<T, PreconditionViolation>,
    reporter: &dyn ViolationReporter,
) -> ExitCode {
    ExitCode::from(exit_status(result, reporter))
}
