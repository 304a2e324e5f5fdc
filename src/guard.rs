use std::process;
use std::thread;

use crate::error::{CascadingFailure, ReleaseError, UseError};

/// A resource handle that can be wound down exactly once.
///
/// `release` consumes the handle: whether or not teardown succeeds, the
/// resource is gone and must never be touched again. The one-way
/// transition is enforced by move semantics.
pub trait Scoped {
    /// Short noun used in diagnostics, e.g. "file" or "mutex".
    fn kind(&self) -> &'static str;

    /// Tears down the underlying resource.
    fn release(self) -> Result<(), ReleaseError>;
}

/// An RAII implementation of a "scoped resource" pattern. The guard owns
/// exactly one live handle; when this structure is dropped (falls out of
/// scope), the handle is released unless the caller already released it
/// explicitly.
///
/// A guard has two states, live and released, with a single one-way
/// transition between them. Release failure does not create a third state
/// and does not revert the transition.
#[derive(Debug)]
pub struct ScopeGuard<R: Scoped> {
    handle: Option<R>,
}

impl<R: Scoped> ScopeGuard<R> {
    /// Wraps an already-acquired resource.
    pub fn new(resource: R) -> ScopeGuard<R> {
        ScopeGuard {
            handle: Some(resource),
        }
    }

    /// Returns true while the guard still owns its handle.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }

    /// Borrows the live resource, failing fast once it is gone.
    #[inline]
    pub fn resource(&self) -> Result<&R, UseError> {
        self.handle.as_ref().ok_or(UseError::Released)
    }

    /// Mutably borrows the live resource, failing fast once it is gone.
    #[inline]
    pub fn resource_mut(&mut self) -> Result<&mut R, UseError> {
        self.handle.as_mut().ok_or(UseError::Released)
    }

    /// Releases the resource now instead of at end of scope.
    ///
    /// The handle is taken out of the guard before teardown runs, so the
    /// guard is released even when teardown reports failure. Releasing an
    /// already-released guard is a no-op that succeeds trivially.
    pub fn release(&mut self) -> Result<(), ReleaseError> {
        match self.handle.take() {
            Some(resource) => resource.release(),
            None => Ok(()),
        }
    }

    /// Moves the handle into a fresh guard, leaving this one released.
    ///
    /// Exclusivity is preserved: the handle changes owner atomically and
    /// at no point do two guards own it.
    pub fn transfer(&mut self) -> ScopeGuard<R> {
        ScopeGuard {
            handle: self.handle.take(),
        }
    }
}

impl<R: Scoped> Drop for ScopeGuard<R> {
    fn drop(&mut self) {
        if let Some(resource) = self.handle.take() {
            let kind = resource.kind();
            if let Err(err) = resource.release() {
                if thread::panicking() {
                    // A failure is already unwinding the stack; no handler
                    // can receive both it and this one.
                    tracing::error!("{}", CascadingFailure::from(err));
                    process::abort();
                }
                tracing::error!(kind = kind, "release failed at scope exit: {}", err);
            }
        }
    }
}
