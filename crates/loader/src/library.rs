//! Loaded Steam library handle and symbol resolution
//!
//! This is the one place raw symbol addresses are reinterpreted as function
//! pointers. Every shape lives in `steambridge-sdk`; nothing outside this
//! module handles an untyped address.

use std::path::Path;

use crate::error::LoadError;

/// Ownership token for the loaded Steam library.
///
/// Exactly one instance exists per wrapper context; resolved function
/// pointers stay valid only while it is alive, so the context must own it
/// alongside them and drop it last. Dropping unloads the library.
pub struct SteamLibrary {
    lib: libloading::Library,
}

impl SteamLibrary {
    /// Open the shared library at `path`.
    ///
    /// Failure disables the subsystem, never the process.
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        // SAFETY: the library runs arbitrary initialization code on load;
        // the path was produced by the locator, pointing at the Steam
        // redistributable shipped next to the executable.
        let lib = unsafe { libloading::Library::new(path) }?;
        tracing::debug!(path = %path.display(), "Steam library opened");
        Ok(Self { lib })
    }

    /// Resolve `name` as a function pointer of shape `T`, `None` if absent.
    ///
    /// Absence is a valid state (alternate entry-point generations), not an
    /// error by itself.
    ///
    /// # Safety
    ///
    /// `T` must be the exact C-ABI function-pointer shape of the exported
    /// symbol, and the returned pointer must not be called after `self` is
    /// dropped.
    pub unsafe fn resolve<T: Copy>(&self, name: &'static str) -> Option<T> {
        match self.lib.get::<T>(name.as_bytes()) {
            Ok(symbol) => Some(*symbol),
            Err(err) => {
                tracing::debug!(symbol = name, %err, "symbol not exported");
                None
            }
        }
    }

    /// Resolve a symbol whose absence aborts the current bring-up step.
    ///
    /// # Safety
    ///
    /// Same contract as [`resolve`](Self::resolve).
    pub unsafe fn resolve_required<T: Copy>(&self, name: &'static str) -> Result<T, LoadError> {
        self.resolve(name).ok_or(LoadError::MissingSymbol(name))
    }
}
