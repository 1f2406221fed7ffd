//! Exported symbol names the binder resolves
//!
//! These strings must match exactly what the Steam library exports.
//! Derived from steam_api.h / steam_api_flat.h.

/// Structured init entry point, 1.59+
pub const INIT_FLAT: &str = "SteamAPI_InitFlat";

/// Legacy boolean init entry point
pub const INIT: &str = "SteamAPI_Init";

/// Shutdown entry point
pub const SHUTDOWN: &str = "SteamAPI_Shutdown";

/// ISteamUser accessor.
///
/// Versioned accessors resolve where the unversioned `SteamAPI_SteamUser`
/// does not; pinned to the v023 interface generation.
pub const STEAM_USER: &str = "SteamAPI_SteamUser_v023";

/// ISteamUser::GetSteamID flat method
pub const GET_STEAM_ID: &str = "SteamAPI_ISteamUser_GetSteamID";

/// Session user handle getter
pub const GET_HSTEAM_USER: &str = "SteamAPI_GetHSteamUser";

/// Session pipe handle getter
pub const GET_HSTEAM_PIPE: &str = "SteamAPI_GetHSteamPipe";

/// One-time switch into manual callback dispatch
pub const MANUAL_DISPATCH_INIT: &str = "SteamAPI_ManualDispatch_Init";

/// Per-tick client bookkeeping for one pipe
pub const MANUAL_DISPATCH_RUN_FRAME: &str = "SteamAPI_ManualDispatch_RunFrame";

/// Pop the next pending callback record, false when empty
pub const MANUAL_DISPATCH_GET_NEXT_CALLBACK: &str = "SteamAPI_ManualDispatch_GetNextCallback";

/// Release the record returned by the last GetNextCallback
pub const MANUAL_DISPATCH_FREE_LAST_CALLBACK: &str = "SteamAPI_ManualDispatch_FreeLastCallback";

/// ISteamUserStats accessor, pinned to the v013 interface generation
pub const STEAM_USER_STATS: &str = "SteamAPI_SteamUserStats_v013";

/// ISteamUserStats::GetAchievement flat method
pub const GET_ACHIEVEMENT: &str = "SteamAPI_ISteamUserStats_GetAchievement";

/// ISteamUserStats::SetAchievement flat method
pub const SET_ACHIEVEMENT: &str = "SteamAPI_ISteamUserStats_SetAchievement";

/// ISteamUserStats::ClearAchievement flat method
pub const CLEAR_ACHIEVEMENT: &str = "SteamAPI_ISteamUserStats_ClearAchievement";

/// ISteamUserStats::StoreStats flat method
pub const STORE_STATS: &str = "SteamAPI_ISteamUserStats_StoreStats";
