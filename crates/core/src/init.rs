//! Initialization negotiation across entry-point generations
//!
//! The library exports either the modern structured init (`SteamAPI_InitFlat`,
//! 1.59+), the legacy boolean one (`SteamAPI_Init`), or both. One attempt is
//! made per context lifetime; a failed attempt permanently disables dependent
//! bring-up, because the library does not re-init cleanly after failure.

use std::ffi::{c_char, CStr};
use std::fmt;

use steambridge_loader::SteamLibrary;
use steambridge_sdk::{symbols, SteamApiInitFlatFn, SteamApiInitFn, SteamInitResult, ERR_MSG_LEN};

/// Why initialization failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitFailure {
    /// Unspecified failure
    Generic,
    /// The Steam client is not running or not reachable
    NoSteamClient,
    /// Library/client version mismatch
    VersionMismatch,
    /// Neither init entry point is exported
    NoEntryPoint,
}

impl fmt::Display for InitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "Generic Fail",
            Self::NoSteamClient => "No Steam Client",
            Self::VersionMismatch => "Version Mismatch",
            Self::NoEntryPoint => "No Init Entry Point",
        })
    }
}

/// Normalized outcome of the single initialization attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The library initialized; interface bring-up may proceed
    Ok,
    /// Recoverable failure; the subsystem stays disabled for this run
    Failed(InitFailure),
}

impl fmt::Display for InitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("OK"),
            Self::Failed(reason) => reason.fmt(f),
        }
    }
}

/// The two init entry points, as seen by the negotiator.
///
/// `None` means "entry point not exported". The live implementation calls
/// through resolved function pointers; tests substitute fakes.
pub trait InitApi {
    /// Call the modern flat entry point, with any message the library wrote
    fn init_flat(&mut self) -> Option<(SteamInitResult, String)>;

    /// Call the legacy boolean entry point
    fn init_legacy(&mut self) -> Option<bool>;
}

/// Try the modern entry point, fall back to the legacy one.
///
/// When the modern entry point is present the legacy one is never resolved
/// or called. Neither present is a generic failure with its own reason,
/// never silently treated as success.
pub fn negotiate(api: &mut impl InitApi) -> InitOutcome {
    if let Some((result, message)) = api.init_flat() {
        if !message.is_empty() {
            tracing::debug!(%message, "init message from Steam library");
        }
        return match result {
            SteamInitResult::Ok => InitOutcome::Ok,
            SteamInitResult::NoSteamClient => InitOutcome::Failed(InitFailure::NoSteamClient),
            SteamInitResult::VersionMismatch => InitOutcome::Failed(InitFailure::VersionMismatch),
            SteamInitResult::FailedGeneric => InitOutcome::Failed(InitFailure::Generic),
        };
    }

    match api.init_legacy() {
        Some(true) => InitOutcome::Ok,
        Some(false) => InitOutcome::Failed(InitFailure::Generic),
        None => InitOutcome::Failed(InitFailure::NoEntryPoint),
    }
}

/// [`InitApi`] backed by the loaded library.
///
/// The modern entry point is resolved at bind time; the legacy one only
/// inside [`init_legacy`](InitApi::init_legacy), so it stays unresolved on
/// the modern path.
pub struct LiveInitApi<'lib> {
    library: &'lib SteamLibrary,
    flat: Option<SteamApiInitFlatFn>,
}

impl<'lib> LiveInitApi<'lib> {
    pub fn bind(library: &'lib SteamLibrary) -> Self {
        // SAFETY: shape matches the SteamAPI_InitFlat export.
        let flat = unsafe { library.resolve::<SteamApiInitFlatFn>(symbols::INIT_FLAT) };
        Self { library, flat }
    }

    /// Whether either init entry point is exported.
    ///
    /// Resolves the legacy symbol only when the modern one is absent.
    pub fn has_entry_point(&self) -> bool {
        if self.flat.is_some() {
            return true;
        }
        // SAFETY: shape matches the SteamAPI_Init export.
        unsafe { self.library.resolve::<SteamApiInitFn>(symbols::INIT) }.is_some()
    }
}

impl InitApi for LiveInitApi<'_> {
    fn init_flat(&mut self) -> Option<(SteamInitResult, String)> {
        let init = self.flat?;
        let mut err_msg = [0 as c_char; ERR_MSG_LEN];
        // SAFETY: the entry point expects a writable ERR_MSG_LEN buffer and
        // leaves it nul-terminated; the shape was declared at resolution.
        let raw = unsafe { init(err_msg.as_mut_ptr()) };
        let message = unsafe { CStr::from_ptr(err_msg.as_ptr()) }
            .to_string_lossy()
            .into_owned();
        Some((SteamInitResult::from_raw(raw), message))
    }

    fn init_legacy(&mut self) -> Option<bool> {
        // SAFETY: shape matches the SteamAPI_Init export.
        let init = unsafe { self.library.resolve::<SteamApiInitFn>(symbols::INIT) }?;
        // SAFETY: no-argument call into the successfully opened library.
        Some(unsafe { init() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fake entry points that record which generation was touched
    struct FakeInitApi {
        flat: Option<SteamInitResult>,
        legacy: Option<bool>,
        legacy_called: bool,
    }

    impl FakeInitApi {
        fn new(flat: Option<SteamInitResult>, legacy: Option<bool>) -> Self {
            Self {
                flat,
                legacy,
                legacy_called: false,
            }
        }
    }

    impl InitApi for FakeInitApi {
        fn init_flat(&mut self) -> Option<(SteamInitResult, String)> {
            self.flat.map(|r| (r, String::new()))
        }

        fn init_legacy(&mut self) -> Option<bool> {
            self.legacy_called = true;
            self.legacy
        }
    }

    #[test]
    fn modern_ok_never_touches_legacy() {
        let mut api = FakeInitApi::new(Some(SteamInitResult::Ok), Some(true));
        assert_eq!(negotiate(&mut api), InitOutcome::Ok);
        assert!(!api.legacy_called);
    }

    #[test]
    fn modern_failure_never_touches_legacy() {
        let mut api = FakeInitApi::new(Some(SteamInitResult::VersionMismatch), Some(true));
        assert_eq!(
            negotiate(&mut api),
            InitOutcome::Failed(InitFailure::VersionMismatch)
        );
        assert!(!api.legacy_called);
    }

    #[test]
    fn absent_modern_falls_back_to_legacy() {
        let mut api = FakeInitApi::new(None, Some(true));
        assert_eq!(negotiate(&mut api), InitOutcome::Ok);
        assert!(api.legacy_called);

        let mut api = FakeInitApi::new(None, Some(false));
        assert_eq!(negotiate(&mut api), InitOutcome::Failed(InitFailure::Generic));
    }

    #[test]
    fn no_entry_point_is_a_distinct_failure() {
        let mut api = FakeInitApi::new(None, None);
        assert_eq!(
            negotiate(&mut api),
            InitOutcome::Failed(InitFailure::NoEntryPoint)
        );
    }

    #[test]
    fn no_steam_client_maps_through() {
        let mut api = FakeInitApi::new(Some(SteamInitResult::NoSteamClient), None);
        assert_eq!(
            negotiate(&mut api),
            InitOutcome::Failed(InitFailure::NoSteamClient)
        );
    }

    #[test]
    fn outcome_display_matches_status_strings() {
        assert_eq!(InitOutcome::Ok.to_string(), "OK");
        assert_eq!(
            InitOutcome::Failed(InitFailure::Generic).to_string(),
            "Generic Fail"
        );
        assert_eq!(
            InitOutcome::Failed(InitFailure::NoSteamClient).to_string(),
            "No Steam Client"
        );
        assert_eq!(
            InitOutcome::Failed(InitFailure::VersionMismatch).to_string(),
            "Version Mismatch"
        );
    }
}
