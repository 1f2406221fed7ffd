//! steambridge loader - Library Locating and Symbol Binding
//!
//! This crate handles:
//! - Producing candidate filesystem paths for the Steam library per platform
//! - Opening the shared library at runtime (no headers, no import library)
//! - Resolving exported symbols into predeclared function-pointer shapes
//!
//! # Architecture
//!
//! [`locate::locate`] picks the first existing candidate path for the
//! current [`locate::Platform`]. [`library::SteamLibrary`] owns the loaded
//! handle and is the single audited point where raw symbol addresses become
//! typed function pointers; everything above it only sees the shapes
//! declared in `steambridge-sdk`.
//!
//! # Failure model
//!
//! Nothing here aborts the process. A missing library or symbol surfaces as
//! a [`LoadError`] the caller turns into a disabled subsystem.

pub mod error;
pub mod library;
pub mod locate;

pub use error::LoadError;
pub use library::SteamLibrary;
pub use locate::{locate, Platform};
