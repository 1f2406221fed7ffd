//! Steamworks flat API interface and function-pointer definitions
//!
//! These are opaque types representing Steam client interfaces. We don't
//! need their internal structure - just pointers. Calls go through flat
//! functions that take the interface pointer as their first argument.

use std::ffi::c_char;

/// Opaque type for ISteamUser
/// Per-session user interface (Steam ID, auth tickets, ...)
#[repr(C)]
pub struct ISteamUser {
    _opaque: [u8; 0],
}

/// Opaque type for ISteamUserStats
/// Achievements and stats interface
#[repr(C)]
pub struct ISteamUserStats {
    _opaque: [u8; 0],
}

/// Session user handle, identifies the local user within the Steam client
pub type HSteamUser = i32;

/// Session pipe handle, addresses one communication channel (and its
/// manual-dispatch callback queue) within the Steam client
pub type HSteamPipe = i32;

/// Size of the error-message buffer `SteamAPI_InitFlat` writes into
pub const ERR_MSG_LEN: usize = 1024;

/// Structured result code returned by `SteamAPI_InitFlat`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SteamInitResult {
    /// Initialization succeeded
    Ok = 0,
    /// Unspecified failure
    FailedGeneric = 1,
    /// The Steam client is not running or not reachable
    NoSteamClient = 2,
    /// Library/client version mismatch
    VersionMismatch = 3,
}

impl SteamInitResult {
    /// Map a raw result code from the library.
    ///
    /// Codes outside the known set collapse to [`FailedGeneric`]; the
    /// library is unversioned, so unknown codes must stay recoverable.
    ///
    /// [`FailedGeneric`]: SteamInitResult::FailedGeneric
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Ok,
            2 => Self::NoSteamClient,
            3 => Self::VersionMismatch,
            _ => Self::FailedGeneric,
        }
    }

    /// Human-readable status, matching the Steamworks documentation wording
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::FailedGeneric => "Generic Fail",
            Self::NoSteamClient => "No Steam Client",
            Self::VersionMismatch => "Version Mismatch",
        }
    }
}

// Init/shutdown entry points. The flat variant (1.59+) reports a structured
// result and writes a message into a caller-provided ERR_MSG_LEN buffer; the
// legacy variant only returns success.
pub type SteamApiInitFn = unsafe extern "C" fn() -> bool;
pub type SteamApiInitFlatFn = unsafe extern "C" fn(err_msg: *mut c_char) -> i32;
pub type SteamApiShutdownFn = unsafe extern "C" fn();

// Interface accessors and flat methods
pub type SteamUserAccessorFn = unsafe extern "C" fn() -> *mut ISteamUser;
pub type GetSteamIdFn = unsafe extern "C" fn(this: *mut ISteamUser) -> u64;
pub type SteamUserStatsAccessorFn = unsafe extern "C" fn() -> *mut ISteamUserStats;
pub type GetAchievementFn =
    unsafe extern "C" fn(this: *mut ISteamUserStats, name: *const c_char, achieved: *mut bool) -> bool;
pub type SetAchievementFn =
    unsafe extern "C" fn(this: *mut ISteamUserStats, name: *const c_char) -> bool;
pub type ClearAchievementFn =
    unsafe extern "C" fn(this: *mut ISteamUserStats, name: *const c_char) -> bool;
pub type StoreStatsFn = unsafe extern "C" fn(this: *mut ISteamUserStats) -> bool;

// Session handles
pub type GetHSteamUserFn = unsafe extern "C" fn() -> HSteamUser;
pub type GetHSteamPipeFn = unsafe extern "C" fn() -> HSteamPipe;

// Manual dispatch. `GetNextCallback` fills the caller-provided record and
// returns false once the queue is empty; every filled record must be
// released with `FreeLastCallback` before the next call.
pub type ManualDispatchInitFn = unsafe extern "C" fn();
pub type ManualDispatchRunFrameFn = unsafe extern "C" fn(pipe: HSteamPipe);
pub type ManualDispatchGetNextCallbackFn =
    unsafe extern "C" fn(pipe: HSteamPipe, msg: *mut crate::callbacks::CallbackMsg) -> bool;
pub type ManualDispatchFreeLastCallbackFn = unsafe extern "C" fn(pipe: HSteamPipe);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_result_maps_known_codes() {
        assert_eq!(SteamInitResult::from_raw(0), SteamInitResult::Ok);
        assert_eq!(SteamInitResult::from_raw(1), SteamInitResult::FailedGeneric);
        assert_eq!(SteamInitResult::from_raw(2), SteamInitResult::NoSteamClient);
        assert_eq!(SteamInitResult::from_raw(3), SteamInitResult::VersionMismatch);
    }

    #[test]
    fn init_result_collapses_unknown_codes_to_generic() {
        for raw in [-1, 4, 5, 42, i32::MAX, i32::MIN] {
            assert_eq!(SteamInitResult::from_raw(raw), SteamInitResult::FailedGeneric);
        }
    }

    #[test]
    fn init_result_strings_match_documentation() {
        assert_eq!(SteamInitResult::from_raw(0).as_str(), "OK");
        assert_eq!(SteamInitResult::from_raw(1).as_str(), "Generic Fail");
        assert_eq!(SteamInitResult::from_raw(2).as_str(), "No Steam Client");
        assert_eq!(SteamInitResult::from_raw(3).as_str(), "Version Mismatch");
        assert_eq!(SteamInitResult::from_raw(99).as_str(), "Generic Fail");
    }
}
