//! Host-owned Steam wrapper context
//!
//! One `SteamContext` is constructed by the host's composition root and
//! passed by reference to every consumer; there is no process-wide
//! singleton. Bring-up runs once in the constructor. Every failure degrades
//! to a disabled context with a recorded reason - nothing here panics or
//! propagates errors to the host - and disabled accessors return neutral
//! defaults while the tick does nothing.

use std::fmt;
use std::path::Path;
use std::ptr::NonNull;

use steambridge_loader::{locate, LoadError, Platform, SteamLibrary};
use steambridge_sdk::{
    symbols, GetHSteamPipeFn, GetHSteamUserFn, GetSteamIdFn, HSteamPipe, HSteamUser, ISteamUser,
    SteamApiShutdownFn, SteamUserAccessorFn,
};

use crate::dispatch::{self, LivePump};
use crate::events::SinkRegistry;
use crate::host::Host;
use crate::init::{negotiate, InitFailure, InitOutcome, LiveInitApi};
use crate::settings::SteamSettings;
use crate::stats::UserStats;

/// Why the subsystem is disabled for this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledReason {
    /// `app_id` is 0; nothing was attempted
    AppIdUnset,
    /// No known Steam library packaging for this platform
    PlatformUnsupported,
    /// No candidate library path existed
    LibraryNotFound,
    /// The library existed but could not be opened
    LibraryOpenFailed,
    /// Bring-up aborted at the first missing required symbol
    RequiredSymbolMissing(&'static str),
    /// The user interface accessor returned null
    UserInterfaceUnavailable,
    /// The single initialization attempt failed
    InitFailed(InitFailure),
}

impl fmt::Display for DisabledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AppIdUnset => f.write_str("app_id not set"),
            Self::PlatformUnsupported => f.write_str("platform not supported"),
            Self::LibraryNotFound => f.write_str("Steam library not found"),
            Self::LibraryOpenFailed => f.write_str("Steam library failed to open"),
            Self::RequiredSymbolMissing(name) => write!(f, "missing required symbol {name}"),
            Self::UserInterfaceUnavailable => f.write_str("SteamUser interface unavailable"),
            Self::InitFailed(reason) => write!(f, "init failed: {reason}"),
        }
    }
}

/// Armed dispatch state: exists only after init succeeded, the interface and
/// dispatch symbols resolved, and the session handles were acquired.
struct Session {
    user_iface: NonNull<ISteamUser>,
    get_steam_id: GetSteamIdFn,
    user: HSteamUser,
    pipe: HSteamPipe,
    pump: LivePump,
    stats: Option<UserStats>,
}

// SAFETY: the interface pointer targets client-owned state valid while the
// library stays loaded; the context serializes all access on one thread.
unsafe impl Send for Session {}

/// State that exists once the library was opened, kept even when a later
/// bring-up step disabled the subsystem (the original unloads only at
/// teardown, and a failed init does not tolerate early unload).
struct Bound {
    shutdown: Option<SteamApiShutdownFn>,
    initialized: bool,
    session: Option<Session>,
    // Dropped last: every resolved pointer above dangles once this unloads.
    library: SteamLibrary,
}

impl Drop for Bound {
    fn drop(&mut self) {
        if self.initialized {
            if let Some(shutdown) = self.shutdown {
                // SAFETY: init succeeded, the library is still loaded, and
                // the host guarantees no tick is in flight during teardown.
                unsafe { shutdown() };
            }
        }
    }
}

/// Post-init bring-up failure
enum ArmError {
    Load(LoadError),
    UserInterfaceNull,
}

impl From<LoadError> for ArmError {
    fn from(err: LoadError) -> Self {
        Self::Load(err)
    }
}

/// The Steam API wrapper.
///
/// Bring-up happens once in [`bring_up`](Self::bring_up); afterwards the
/// state is written only by `Drop`. Ticks must be serialized by the caller -
/// the client's queue cursor is not reentrant.
pub struct SteamContext {
    settings: SteamSettings,
    sinks: SinkRegistry,
    disabled: Option<DisabledReason>,
    bound: Option<Bound>,
}

impl SteamContext {
    /// Run the full bring-up sequence on the build target's platform.
    ///
    /// `base_dir` is the executable's directory; `host` supplies env and
    /// filesystem access. Always returns a context - failures disable it.
    pub fn bring_up(settings: SteamSettings, base_dir: &Path, host: &dyn Host) -> Self {
        Self::bring_up_on(settings, Platform::current(), base_dir, host)
    }

    /// Bring-up with an explicit platform, `None` meaning unsupported.
    pub fn bring_up_on(
        settings: SteamSettings,
        platform: Option<Platform>,
        base_dir: &Path,
        host: &dyn Host,
    ) -> Self {
        let print_logs = settings.print_logs;
        let note = |msg: &str| {
            if print_logs {
                tracing::info!("[Steam] {msg}");
            }
        };

        if settings.app_id == 0 {
            note("To use the Steam API, set app_id in the steam settings");
            return Self::disabled(settings, DisabledReason::AppIdUnset);
        }

        // The library reads these during its own init; they must be in
        // place before it is opened.
        let app_id = settings.app_id.to_string();
        host.set_env("SteamAppId", &app_id);
        host.set_env("SteamGameId", &app_id);

        note("Trying to load the Steam API library");

        let path = match locate(platform, base_dir, |p| host.file_exists(p)) {
            Ok(path) => path,
            Err(LoadError::Unsupported) => {
                note("Platform not supported");
                return Self::disabled(settings, DisabledReason::PlatformUnsupported);
            }
            Err(_) => {
                note("Cannot locate the Steam API library, place the dll/so next to the executable");
                return Self::disabled(settings, DisabledReason::LibraryNotFound);
            }
        };

        let library = match SteamLibrary::open(&path) {
            Ok(library) => library,
            Err(err) => {
                note(&format!("Error loading the Steam API library: {err}"));
                return Self::disabled(settings, DisabledReason::LibraryOpenFailed);
            }
        };
        note("Steam API library loaded");

        let mut init_api = LiveInitApi::bind(&library);
        if !init_api.has_entry_point() {
            note("Error loading an init entry point");
            return Self::with_library(
                settings,
                DisabledReason::InitFailed(InitFailure::NoEntryPoint),
                library,
                None,
                false,
            );
        }

        // SAFETY: shape matches the SteamAPI_Shutdown export.
        let shutdown =
            match unsafe { library.resolve_required::<SteamApiShutdownFn>(symbols::SHUTDOWN) } {
                Ok(shutdown) => shutdown,
                Err(err) => {
                    note(&err.to_string());
                    return Self::with_library(
                        settings,
                        DisabledReason::RequiredSymbolMissing(symbols::SHUTDOWN),
                        library,
                        None,
                        false,
                    );
                }
            };

        let outcome = negotiate(&mut init_api);
        note(&format!("Status: {outcome}"));

        if let InitOutcome::Failed(reason) = outcome {
            note("Init: FAIL");
            return Self::with_library(
                settings,
                DisabledReason::InitFailed(reason),
                library,
                Some(shutdown),
                false,
            );
        }
        note("Init: OK");

        // Interface and dispatch bring-up; aborts at the first missing
        // required symbol. The library stays initialized either way, so
        // shutdown still runs at teardown.
        match Self::arm(&library) {
            Ok(session) => Self {
                settings,
                sinks: SinkRegistry::new(),
                disabled: None,
                bound: Some(Bound {
                    shutdown: Some(shutdown),
                    initialized: true,
                    session: Some(session),
                    library,
                }),
            },
            Err(ArmError::Load(err)) => {
                note(&err.to_string());
                let reason = match err {
                    LoadError::MissingSymbol(name) => DisabledReason::RequiredSymbolMissing(name),
                    _ => DisabledReason::LibraryOpenFailed,
                };
                Self::with_library(settings, reason, library, Some(shutdown), true)
            }
            Err(ArmError::UserInterfaceNull) => {
                note("SteamUser interface cannot be loaded");
                Self::with_library(
                    settings,
                    DisabledReason::UserInterfaceUnavailable,
                    library,
                    Some(shutdown),
                    true,
                )
            }
        }
    }

    /// Resolve the post-init interface and dispatch surface.
    fn arm(library: &SteamLibrary) -> Result<Session, ArmError> {
        // SAFETY: all shapes below match their flat API exports; the
        // resulting pointers live alongside the library in Bound.
        unsafe {
            let user_accessor =
                library.resolve_required::<SteamUserAccessorFn>(symbols::STEAM_USER)?;
            let user_iface =
                NonNull::new(user_accessor()).ok_or(ArmError::UserInterfaceNull)?;

            let get_steam_id =
                library.resolve_required::<GetSteamIdFn>(symbols::GET_STEAM_ID)?;

            let get_huser =
                library.resolve_required::<GetHSteamUserFn>(symbols::GET_HSTEAM_USER)?;
            let user = get_huser();

            let get_hpipe =
                library.resolve_required::<GetHSteamPipeFn>(symbols::GET_HSTEAM_PIPE)?;
            let pipe = get_hpipe();
            tracing::debug!(user, pipe, "session handles acquired");

            let pump = LivePump::bind(library, pipe)?;
            let stats = UserStats::bind(library);

            Ok(Session {
                user_iface,
                get_steam_id,
                user,
                pipe,
                pump,
                stats,
            })
        }
    }

    fn disabled(settings: SteamSettings, reason: DisabledReason) -> Self {
        Self {
            settings,
            sinks: SinkRegistry::new(),
            disabled: Some(reason),
            bound: None,
        }
    }

    fn with_library(
        settings: SteamSettings,
        reason: DisabledReason,
        library: SteamLibrary,
        shutdown: Option<SteamApiShutdownFn>,
        initialized: bool,
    ) -> Self {
        Self {
            settings,
            sinks: SinkRegistry::new(),
            disabled: Some(reason),
            bound: Some(Bound {
                shutdown,
                initialized,
                session: None,
                library,
            }),
        }
    }

    /// Configured application id; kept even when disabled
    pub fn app_id(&self) -> u32 {
        self.settings.app_id
    }

    /// Whether the single init attempt succeeded.
    ///
    /// Can be true with dispatch never armed, when a post-init symbol was
    /// missing; shutdown still runs at teardown in that state.
    pub fn is_initialized(&self) -> bool {
        self.bound.as_ref().is_some_and(|b| b.initialized)
    }

    /// Why the subsystem is disabled, `None` when fully armed
    pub fn disabled_reason(&self) -> Option<DisabledReason> {
        self.disabled
    }

    /// Version of this wrapper
    pub fn wrapper_version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Flat API generation the bound symbol names belong to
    pub fn steam_api_version(&self) -> &'static str {
        steambridge_sdk::STEAM_API_VERSION
    }

    /// The current user's Steam ID, 0 when unavailable
    pub fn user_steam_id(&self) -> u64 {
        let Some(session) = self.session() else {
            if self.settings.print_logs {
                tracing::info!("[Steam] Cannot retrieve Steam user ID, interface not available");
            }
            return 0;
        };
        // SAFETY: interface and shape were established during arm; the
        // library outlives the session.
        unsafe { (session.get_steam_id)(session.user_iface.as_ptr()) }
    }

    /// Session user/pipe handles, `None` unless armed
    pub fn session_handles(&self) -> Option<(HSteamUser, HSteamPipe)> {
        self.session().map(|s| (s.user, s.pipe))
    }

    /// Event sinks fed by [`run_callbacks`](Self::run_callbacks)
    pub fn sinks(&self) -> &SinkRegistry {
        &self.sinks
    }

    /// Whether the achievement is unlocked; false when stats are unavailable
    pub fn achievement(&self, name: &str) -> bool {
        self.stats().is_some_and(|s| s.achievement(name))
    }

    /// Unlock an achievement; false when stats are unavailable
    pub fn set_achievement(&self, name: &str) -> bool {
        self.stats().is_some_and(|s| s.set_achievement(name))
    }

    /// Relock an achievement; false when stats are unavailable
    pub fn clear_achievement(&self, name: &str) -> bool {
        self.stats().is_some_and(|s| s.clear_achievement(name))
    }

    /// Persist pending stat changes; false when stats are unavailable
    pub fn store_stats(&self) -> bool {
        self.stats().is_some_and(|s| s.store_stats())
    }

    /// Drain the callback queue once, publishing decoded events to the
    /// registered sinks. A no-op unless armed. Callers must not overlap
    /// ticks - the client's queue cursor is not reentrant.
    pub fn run_callbacks(&mut self) {
        let sinks = &self.sinks;
        let Some(session) = self.bound.as_mut().and_then(|b| b.session.as_mut()) else {
            tracing::trace!("run_callbacks skipped, dispatcher not armed");
            return;
        };
        dispatch::pump(&mut session.pump, sinks);
    }

    fn session(&self) -> Option<&Session> {
        self.bound.as_ref().and_then(|b| b.session.as_ref())
    }

    fn stats(&self) -> Option<&UserStats> {
        self.session().and_then(|s| s.stats.as_ref())
    }
}
