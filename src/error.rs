use std::io;

use thiserror::Error;

/// The resource could not be obtained; no guard was produced.
///
/// Carries the provider's diagnostic, so Display reads like
/// `error opening file: No such file or directory (os error 2)`.
#[derive(Debug, Error)]
#[error("error {what}: {source}")]
pub struct AcquireError {
    what: &'static str,
    #[source]
    source: io::Error,
}

impl AcquireError {
    pub(crate) fn new(what: &'static str, source: io::Error) -> Self {
        AcquireError { what, source }
    }
}

/// An operation through a guard failed.
#[derive(Debug, Error)]
pub enum UseError {
    /// The guard's handle is already gone; the operation never reached
    /// the provider.
    #[error("resource already released")]
    Released,

    /// The provider failed the operation outright.
    #[error("error {op}: {source}")]
    Io {
        op: &'static str,
        #[source]
        source: io::Error,
    },

    /// The provider made partial progress and stopped. Distinct from a
    /// hard failure and never silently ignored.
    #[error("incomplete write: {written} of {requested} bytes")]
    Partial { written: usize, requested: usize },
}

impl UseError {
    pub(crate) fn io(op: &'static str, source: io::Error) -> Self {
        UseError::Io { op, source }
    }

    pub(crate) fn os(op: &'static str, code: i32) -> Self {
        Self::io(op, io::Error::from_raw_os_error(code))
    }
}

/// Teardown failed.
///
/// The handle is gone regardless: retrying teardown on a released handle
/// is undefined, so failure does not revert the guard's one-way
/// transition.
#[derive(Debug, Error)]
#[error("error {what}: {source}")]
pub struct ReleaseError {
    what: &'static str,
    #[source]
    source: io::Error,
}

impl ReleaseError {
    pub(crate) fn new(what: &'static str, source: io::Error) -> Self {
        ReleaseError { what, source }
    }

    /// The raw platform code, when the provider reported one.
    pub fn os_code(&self) -> Option<i32> {
        self.source.raw_os_error()
    }
}

/// A release failure observed while another failure was already unwinding
/// the stack.
///
/// Unrecoverable: no single handler can receive both failures, so this is
/// never returned as a `Result`. It is formatted to the diagnostic channel
/// immediately before the process aborts.
#[derive(Debug, Error)]
#[error("release failed while another failure was unwinding: {0}")]
pub struct CascadingFailure(#[from] ReleaseError);
