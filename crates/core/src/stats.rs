//! Optional achievements/stats interface
//!
//! A second flat interface, bound after init when its accessor and methods
//! are exported. Absence disables only this feature; every operation on a
//! missing binding returns the neutral `false`.

use std::ffi::CString;
use std::ptr::NonNull;

use steambridge_loader::SteamLibrary;
use steambridge_sdk::{
    symbols, ClearAchievementFn, GetAchievementFn, ISteamUserStats, SetAchievementFn,
    SteamUserStatsAccessorFn, StoreStatsFn,
};

/// Bound ISteamUserStats interface with its flat methods
pub struct UserStats {
    iface: NonNull<ISteamUserStats>,
    get_achievement: GetAchievementFn,
    set_achievement: SetAchievementFn,
    clear_achievement: ClearAchievementFn,
    store_stats: StoreStatsFn,
}

// SAFETY: the interface pointer targets client-owned state valid for the
// library's lifetime; all calls happen on the host's single wrapper thread.
unsafe impl Send for UserStats {}

impl UserStats {
    /// Bind the stats interface, `None` when any part of it is absent.
    pub fn bind(library: &SteamLibrary) -> Option<Self> {
        // SAFETY: shapes match the flat user-stats exports; pointers are
        // only called while the context keeps the library alive.
        unsafe {
            let accessor =
                library.resolve::<SteamUserStatsAccessorFn>(symbols::STEAM_USER_STATS)?;
            let iface = NonNull::new(accessor())?;

            let stats = Self {
                iface,
                get_achievement: library.resolve::<GetAchievementFn>(symbols::GET_ACHIEVEMENT)?,
                set_achievement: library.resolve::<SetAchievementFn>(symbols::SET_ACHIEVEMENT)?,
                clear_achievement: library
                    .resolve::<ClearAchievementFn>(symbols::CLEAR_ACHIEVEMENT)?,
                store_stats: library.resolve::<StoreStatsFn>(symbols::STORE_STATS)?,
            };
            tracing::debug!("user stats interface bound");
            Some(stats)
        }
    }

    /// Whether the achievement is unlocked; false when unknown
    pub fn achievement(&self, name: &str) -> bool {
        let Some(c_name) = c_name(name) else {
            return false;
        };
        let mut achieved = false;
        // SAFETY: interface and shape were established at bind time.
        let known =
            unsafe { (self.get_achievement)(self.iface.as_ptr(), c_name.as_ptr(), &mut achieved) };
        known && achieved
    }

    /// Unlock an achievement; call [`store_stats`](Self::store_stats) to persist
    pub fn set_achievement(&self, name: &str) -> bool {
        let Some(c_name) = c_name(name) else {
            return false;
        };
        // SAFETY: interface and shape were established at bind time.
        unsafe { (self.set_achievement)(self.iface.as_ptr(), c_name.as_ptr()) }
    }

    /// Relock an achievement
    pub fn clear_achievement(&self, name: &str) -> bool {
        let Some(c_name) = c_name(name) else {
            return false;
        };
        // SAFETY: interface and shape were established at bind time.
        unsafe { (self.clear_achievement)(self.iface.as_ptr(), c_name.as_ptr()) }
    }

    /// Push pending stat/achievement changes to the Steam backend
    pub fn store_stats(&self) -> bool {
        // SAFETY: interface and shape were established at bind time.
        unsafe { (self.store_stats)(self.iface.as_ptr()) }
    }
}

/// Achievement names cross the C boundary; interior nul means no such name
fn c_name(name: &str) -> Option<CString> {
    CString::new(name).ok()
}
