use std::io;
use std::ptr;

use crate::error::{AcquireError, ReleaseError, UseError};
use crate::guard::{ScopeGuard, Scoped};

/// An owned pthread mutex primitive.
///
/// Boxed so the primitive's address is stable for the lifetime of the
/// handle; the raw primitive is never exposed for independent
/// manipulation. Balanced lock/unlock nesting is the caller's duty: the
/// guard does not track lock depth, it only guarantees the primitive is
/// destroyed exactly once.
pub struct OsMutex {
    inner: Box<libc::pthread_mutex_t>,
}

impl OsMutex {
    /// Initializes a mutex with default attributes and hands it to a
    /// guard. A nonzero provider code means no guard is produced.
    pub fn init() -> Result<ScopeGuard<OsMutex>, AcquireError> {
        let mut inner = Box::new(libc::PTHREAD_MUTEX_INITIALIZER);
        let code = unsafe { libc::pthread_mutex_init(&mut *inner, ptr::null()) };
        if code != 0 {
            return Err(AcquireError::new(
                "creating mutex",
                io::Error::from_raw_os_error(code),
            ));
        }
        Ok(ScopeGuard::new(OsMutex { inner }))
    }

    fn lock(&mut self) -> Result<(), UseError> {
        let code = unsafe { libc::pthread_mutex_lock(&mut *self.inner) };
        if code != 0 {
            return Err(UseError::os("locking mutex", code));
        }
        Ok(())
    }

    fn unlock(&mut self) -> Result<(), UseError> {
        let code = unsafe { libc::pthread_mutex_unlock(&mut *self.inner) };
        if code != 0 {
            return Err(UseError::os("unlocking mutex", code));
        }
        Ok(())
    }
}

impl ScopeGuard<OsMutex> {
    /// Locks the live mutex.
    pub fn lock(&mut self) -> Result<(), UseError> {
        self.resource_mut()?.lock()
    }

    /// Unlocks the live mutex.
    pub fn unlock(&mut self) -> Result<(), UseError> {
        self.resource_mut()?.unlock()
    }
}

impl Scoped for OsMutex {
    fn kind(&self) -> &'static str {
        "mutex"
    }

    fn release(mut self) -> Result<(), ReleaseError> {
        // Destroying a still-locked mutex is a caller error the provider
        // reports (EBUSY class); the primitive is gone either way.
        let code = unsafe { libc::pthread_mutex_destroy(&mut *self.inner) };
        if code != 0 {
            return Err(ReleaseError::new(
                "destroying mutex",
                io::Error::from_raw_os_error(code),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::OsMutex;
    use crate::error::UseError;

    #[test]
    fn lock_unlock_destroy_cycle_succeeds() {
        let mut mutex = OsMutex::init().unwrap();
        mutex.lock().unwrap();
        mutex.unlock().unwrap();
        assert!(mutex.release().is_ok());
    }

    #[test]
    fn destroy_while_locked_reports_busy_and_still_clears_the_handle() {
        let mut mutex = OsMutex::init().unwrap();
        mutex.lock().unwrap();

        let err = mutex.release().unwrap_err();
        assert!(err.os_code().is_some());

        // The failed teardown did not leave a live handle behind.
        assert!(!mutex.is_live());
        assert!(mutex.release().is_ok());
        assert!(matches!(mutex.lock(), Err(UseError::Released)));
    }

    #[test]
    fn drop_destroys_an_unlocked_mutex_silently() {
        let mut mutex = OsMutex::init().unwrap();
        mutex.lock().unwrap();
        mutex.unlock().unwrap();
        // End of scope destroys the unlocked, hence destructible, mutex.
    }
}
