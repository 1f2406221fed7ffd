//! Manual-dispatch callback record layouts
//!
//! These structs mirror the wire layout the Steam client fills in for
//! `SteamAPI_ManualDispatch_GetNextCallback`. Payloads are owned by the
//! client's internal queue and stay valid only until the record is released.

use crate::interfaces::HSteamUser;

/// One pending callback record, as filled in by the client.
///
/// `data`/`len` describe a payload whose layout is selected by `tag`. The
/// record is a cursor into native-owned memory: it must be released via
/// `SteamAPI_ManualDispatch_FreeLastCallback` before the next record is
/// requested, whether or not the tag was recognized.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct CallbackMsg {
    /// User the callback is addressed to
    pub user: HSteamUser,
    /// Numeric tag selecting the payload layout
    pub tag: i32,
    /// Payload bytes, owned by the client queue
    pub data: *mut u8,
    /// Payload size in bytes
    pub len: i32,
}

/// Callback tag for [`GameOverlayActivated`]
pub const GAME_OVERLAY_ACTIVATED: i32 = 331;

/// Payload prefix for tag 331 (overlay opened/closed).
///
/// Later SDK generations append more fields; only the leading byte is
/// declared because only it is read, and records are length-checked against
/// this prefix before decoding.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct GameOverlayActivated {
    /// Non-zero when the overlay is now active
    pub active: u8,
}
