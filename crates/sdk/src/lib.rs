//! steambridge SDK - Steamworks Flat API Type Definitions
//!
//! This crate contains the type surface of the Steamworks flat (C-ABI) API
//! as consumed by the runtime binder. It has no dependencies and compiles
//! quickly, allowing parallel compilation of dependent crates.
//!
//! Nothing here links against the Steam library; these are the shapes that
//! resolved symbol addresses are reinterpreted as at runtime.
//!
//! # Modules
//!
//! - [`interfaces`] - Opaque interface types, handles, and function-pointer shapes
//! - [`callbacks`] - Manual-dispatch callback record layouts and tags
//! - [`symbols`] - Exported symbol names the binder resolves

pub mod callbacks;
pub mod interfaces;
pub mod symbols;

pub use callbacks::*;
pub use interfaces::*;

/// Flat API generation the symbol names in [`symbols`] are taken from.
///
/// `SteamAPI_InitFlat` exists from 1.59 onwards; the legacy `SteamAPI_Init`
/// fallback keeps older redistributables working.
pub const STEAM_API_VERSION: &str = "1.59+";
