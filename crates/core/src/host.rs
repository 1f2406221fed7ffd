//! Host boundary for process environment and filesystem checks
//!
//! The wrapper touches the outside world in exactly two ways: setting the
//! app-id environment variables the Steam library reads during its own init,
//! and checking whether a candidate library path exists. Both sit behind
//! this trait so bring-up is testable without a process or filesystem.

use std::path::Path;

/// Process environment and filesystem as seen by bring-up
pub trait Host {
    /// Set an environment variable for the current process
    fn set_env(&self, key: &str, value: &str);

    /// Check whether a file exists
    fn file_exists(&self, path: &Path) -> bool;
}

/// The real process environment
pub struct ProcessHost;

impl Host for ProcessHost {
    fn set_env(&self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
