//! Typed Steam events and host-facing sinks
//!
//! Opaque callback records drained from the manual-dispatch queue are
//! demultiplexed by numeric tag into [`SteamEvent`] values and broadcast to
//! registered [`EventSink`]s.
//!
//! # Example
//!
//! ```ignore
//! use steambridge_core::events::{FnSink, SteamEvent};
//!
//! context.sinks().register(FnSink::new(|event| {
//!     if let SteamEvent::OverlayToggled { active } = event {
//!         tracing::info!("overlay now {}", if *active { "open" } else { "closed" });
//!     }
//! }));
//! ```

mod sink;
mod typed;

pub use sink::{ChannelSink, EventSink, FnSink, SinkRegistry};
pub use typed::{decode, SteamEvent};
