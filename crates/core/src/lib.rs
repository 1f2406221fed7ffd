//! steambridge - Runtime Steamworks Binder
//!
//! Binds the Steamworks flat (C-ABI) library at runtime - no headers, no
//! import libraries - tolerating multiple init entry-point generations, and
//! pumps the client's manual-dispatch callback queue into a typed event
//! stream for the host.
//!
//! # Re-exports
//!
//! This crate re-exports the SDK and loader crates for convenience:
//! - [`sdk`] - Flat API types, callback layouts, and symbol names
//! - [`loader`] - Library locating and symbol binding
//!
//! # Usage
//!
//! ```ignore
//! use steambridge_core::{ProcessHost, SteamContext, SteamSettings};
//!
//! let settings = SteamSettings::load(&settings_path).unwrap_or_default();
//! let mut steam = SteamContext::bring_up(settings, &exe_dir, &ProcessHost);
//!
//! // once per simulation step:
//! steam.run_callbacks();
//! ```

// Re-export SDK and loader crates
pub use steambridge_loader as loader;
pub use steambridge_sdk as sdk;

pub mod context;
pub mod dispatch;
pub mod events;
pub mod host;
pub mod init;
pub mod logging;
pub mod settings;
pub mod stats;

// Re-export commonly used items
pub use context::{DisabledReason, SteamContext};
pub use dispatch::{CallbackPump, LivePump};
pub use events::{ChannelSink, EventSink, FnSink, SinkRegistry, SteamEvent};
pub use host::{Host, ProcessHost};
pub use init::{negotiate, InitApi, InitFailure, InitOutcome, LiveInitApi};
pub use settings::{SettingsError, SettingsResult, SteamSettings};
pub use stats::UserStats;
