use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Serializes tests that touch `XDG_CONFIG_HOME`
static XDG_LOCK: Mutex<()> = Mutex::new(());

/// RAII helper: set `XDG_CONFIG_HOME` to a tempdir for the lifetime of this guard.
pub(crate) struct XdgTemp {
    prev: Option<OsString>,
    dir: tempfile::TempDir,
    _lock: MutexGuard<'static, ()>,
}

impl XdgTemp {
    /// Create and activate a temporary `XDG_CONFIG_HOME`.
    ///
    /// # Panics
    ///
    /// Panics if a temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let lock = XDG_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let dir = tempfile::tempdir().expect("failed to create tempdir for XDG_CONFIG_HOME");
        let prev = std::env::var_os("XDG_CONFIG_HOME");
        // SAFETY: every test that reads or writes XDG_CONFIG_HOME holds XDG_LOCK.
        unsafe { std::env::set_var("XDG_CONFIG_HOME", dir.path()) };
        Self {
            prev,
            dir,
            _lock: lock,
        }
    }

    /// Path to the temporary `XDG_CONFIG_HOME` directory.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}

impl Drop for XdgTemp {
    fn drop(&mut self) {
        // SAFETY: still holding XDG_LOCK; it is released after this body runs.
        unsafe {
            if let Some(ref val) = self.prev {
                std::env::set_var("XDG_CONFIG_HOME", val);
            } else {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }
}
