use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::IntoRawFd;
use std::path::{Path, PathBuf};

use crate::error::{AcquireError, ReleaseError, UseError};
use crate::guard::{ScopeGuard, Scoped};

/// An owned write handle for one file path.
///
/// Only reachable through a [`ScopeGuard`], which closes the descriptor at
/// end of scope if the caller never closed it explicitly. The raw
/// descriptor is never exposed for independent manipulation.
#[derive(Debug)]
pub struct WriteFile {
    file: File,
    path: PathBuf,
}

impl WriteFile {
    /// Opens `path` for writing (created if absent, truncated otherwise)
    /// and hands the handle to a guard.
    ///
    /// On provider failure no guard is produced and the error carries the
    /// platform diagnostic.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<ScopeGuard<WriteFile>, AcquireError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|err| AcquireError::new("opening file", err))?;

        Ok(ScopeGuard::new(WriteFile {
            file,
            path: path.to_path_buf(),
        }))
    }

    /// The path this handle writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), UseError> {
        let written = self
            .file
            .write(bytes)
            .map_err(|err| UseError::io("writing data", err))?;
        if written != bytes.len() {
            return Err(UseError::Partial {
                written,
                requested: bytes.len(),
            });
        }
        Ok(())
    }
}

impl ScopeGuard<WriteFile> {
    /// Writes all of `bytes` through the live handle.
    ///
    /// A short provider write is reported as [`UseError::Partial`] rather
    /// than retried or swallowed.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), UseError> {
        self.resource_mut()?.write(bytes)
    }
}

impl Scoped for WriteFile {
    fn kind(&self) -> &'static str {
        "file"
    }

    fn release(self) -> Result<(), ReleaseError> {
        // The descriptor is gone whether or not close succeeds; retrying
        // a failed close is undefined.
        let fd = self.file.into_raw_fd();
        if unsafe { libc::close(fd) } == -1 {
            return Err(ReleaseError::new(
                "closing file",
                io::Error::last_os_error(),
            ));
        }
        Ok(())
    }
}
