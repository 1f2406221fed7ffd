//! Candidate path search for the Steam shared library
//!
//! The library ships unversioned next to the game executable, with one
//! extra fallback location per platform packaging convention. Filesystem
//! access stays outside: callers supply the existence check.

use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// Platforms with a known Steam library packaging convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Linux and the BSDs: `libsteam_api.so`
    LinuxBsd,
    /// Windows: `steam_api64.dll` / `steam_api.dll` by architecture
    Windows { x86_64: bool },
    /// macOS: `libsteam_api.dylib`
    MacOs,
}

impl Platform {
    /// Resolve the build target's platform, `None` where Steam does not ship
    pub fn current() -> Option<Self> {
        if cfg!(any(
            target_os = "linux",
            target_os = "freebsd",
            target_os = "netbsd",
            target_os = "openbsd"
        )) {
            Some(Self::LinuxBsd)
        } else if cfg!(target_os = "windows") {
            Some(Self::Windows {
                x86_64: cfg!(target_arch = "x86_64"),
            })
        } else if cfg!(target_os = "macos") {
            Some(Self::MacOs)
        } else {
            None
        }
    }

    /// Candidate library paths relative to the executable directory,
    /// in preference order
    pub fn candidates(self, base_dir: &Path) -> Vec<PathBuf> {
        match self {
            Self::LinuxBsd => vec![
                base_dir.join("libsteam_api.so"),
                base_dir.join("../lib").join("libsteam_api.so"),
            ],
            Self::Windows { x86_64: true } => vec![base_dir.join("steam_api64.dll")],
            Self::Windows { x86_64: false } => vec![base_dir.join("steam_api.dll")],
            Self::MacOs => vec![
                base_dir.join("libsteam_api.dylib"),
                base_dir.join("../Frameworks").join("libsteam_api.dylib"),
            ],
        }
    }
}

/// Return the first existing candidate path for `platform`.
///
/// `exists` is the host-supplied filesystem check; this function never
/// touches the filesystem itself. `platform = None` (unsupported target)
/// yields [`LoadError::Unsupported`] without consulting `exists`, so the
/// caller can log "platform not supported" instead of "library missing".
pub fn locate(
    platform: Option<Platform>,
    base_dir: &Path,
    exists: impl Fn(&Path) -> bool,
) -> Result<PathBuf, LoadError> {
    let platform = platform.ok_or(LoadError::Unsupported)?;

    for candidate in platform.candidates(base_dir) {
        if exists(&candidate) {
            tracing::debug!(path = %candidate.display(), "Steam library candidate found");
            return Ok(candidate);
        }
    }

    Err(LoadError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn linux_prefers_executable_dir_over_lib_fallback() {
        let base = Path::new("/game/bin");
        let candidates = Platform::LinuxBsd.candidates(base);
        assert_eq!(candidates[0], base.join("libsteam_api.so"));
        assert_eq!(candidates[1], base.join("../lib/libsteam_api.so"));
    }

    #[test]
    fn windows_picks_dll_by_architecture() {
        let base = Path::new(r"C:\game");
        assert_eq!(
            Platform::Windows { x86_64: true }.candidates(base),
            vec![base.join("steam_api64.dll")]
        );
        assert_eq!(
            Platform::Windows { x86_64: false }.candidates(base),
            vec![base.join("steam_api.dll")]
        );
    }

    #[test]
    fn macos_falls_back_to_frameworks() {
        let base = Path::new("/Games/App.app/Contents/MacOS");
        let candidates = Platform::MacOs.candidates(base);
        assert_eq!(candidates[0], base.join("libsteam_api.dylib"));
        assert_eq!(candidates[1], base.join("../Frameworks/libsteam_api.dylib"));
    }

    #[test]
    fn locate_returns_first_existing_candidate() {
        let base = Path::new("/game/bin");
        let fallback = base.join("../lib/libsteam_api.so");
        let found = locate(Some(Platform::LinuxBsd), base, |p| p == fallback).unwrap();
        assert_eq!(found, fallback);
    }

    #[test]
    fn locate_reports_not_found_when_no_candidate_exists() {
        let err = locate(Some(Platform::LinuxBsd), Path::new("/game/bin"), |_| false).unwrap_err();
        assert!(matches!(err, LoadError::NotFound));
    }

    #[test]
    fn unsupported_platform_never_checks_the_filesystem() {
        let checked = RefCell::new(Vec::new());
        let err = locate(None, Path::new("/game/bin"), |p| {
            checked.borrow_mut().push(p.to_path_buf());
            true
        })
        .unwrap_err();

        assert!(matches!(err, LoadError::Unsupported));
        assert!(checked.borrow().is_empty());
    }
}
