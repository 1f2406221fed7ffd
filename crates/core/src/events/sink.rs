//! Event sinks - where decoded events go
//!
//! The host consumes events through [`EventSink`]. Sinks are registered on
//! a [`SinkRegistry`]; publication happens on the tick path only.

use crossbeam_channel::{Sender, TrySendError};
use parking_lot::RwLock;

use super::SteamEvent;

/// Receives every decoded event, in dispatch order
pub trait EventSink: Send + Sync {
    fn publish(&self, event: &SteamEvent);
}

/// Registered sinks, broadcast in registration order
#[derive(Default)]
pub struct SinkRegistry {
    sinks: RwLock<Vec<Box<dyn EventSink>>>,
}

impl SinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink; registration order is delivery order
    pub fn register<S: EventSink + 'static>(&self, sink: S) {
        self.sinks.write().push(Box::new(sink));
        tracing::debug!("Registered event sink (total: {})", self.sinks.read().len());
    }

    /// Broadcast one event to every registered sink
    pub fn publish(&self, event: &SteamEvent) {
        for sink in self.sinks.read().iter() {
            sink.publish(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.read().is_empty()
    }
}

/// Closure adapter for ad-hoc handlers
pub struct FnSink<F>(F);

impl<F> FnSink<F>
where
    F: Fn(&SteamEvent) + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> EventSink for FnSink<F>
where
    F: Fn(&SteamEvent) + Send + Sync,
{
    fn publish(&self, event: &SteamEvent) {
        (self.0)(event);
    }
}

/// Channel adapter so hosts can drain events on their own schedule.
///
/// Publication must never block the tick, so a full channel drops the
/// event with a warning instead of waiting.
pub struct ChannelSink {
    sender: Sender<SteamEvent>,
}

impl ChannelSink {
    pub fn new(sender: Sender<SteamEvent>) -> Self {
        Self { sender }
    }
}

impl EventSink for ChannelSink {
    fn publish(&self, event: &SteamEvent) {
        match self.sender.try_send(*event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::warn!(event = event.name(), "event channel full, dropping event");
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!(event = event.name(), "event channel disconnected");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn registry_broadcasts_in_registration_order() {
        let registry = SinkRegistry::new();
        let order = Arc::new(RwLock::new(Vec::new()));

        for id in 0..3 {
            let order = Arc::clone(&order);
            registry.register(FnSink::new(move |_e: &SteamEvent| {
                order.write().push(id);
            }));
        }

        registry.publish(&SteamEvent::OverlayToggled { active: true });
        assert_eq!(*order.read(), vec![0, 1, 2]);
    }

    #[test]
    fn fn_sink_counts_events() {
        let registry = SinkRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        registry.register(FnSink::new(move |_e: &SteamEvent| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        for _ in 0..5 {
            registry.publish(&SteamEvent::OverlayToggled { active: false });
        }
        assert_eq!(hits.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn channel_sink_delivers_and_drops_when_full() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let sink = ChannelSink::new(tx);

        sink.publish(&SteamEvent::OverlayToggled { active: true });
        // Channel is full now; the second publish is dropped, not blocked.
        sink.publish(&SteamEvent::OverlayToggled { active: false });

        assert_eq!(rx.try_recv(), Ok(SteamEvent::OverlayToggled { active: true }));
        assert!(rx.try_recv().is_err());
    }
}
