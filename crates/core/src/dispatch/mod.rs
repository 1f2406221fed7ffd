//! Manual callback dispatch
//!
//! One tick drains the Steam client's per-pipe callback queue: run-frame
//! once, then pop records until the queue reports empty. Each record is
//! native-owned and must be released exactly once before the next is
//! requested - recognized or not. The release is structural: a drop guard
//! covers every exit path of the per-record block.

mod live;

use steambridge_sdk::CallbackMsg;

use crate::events::{self, SinkRegistry};

pub use live::LivePump;

/// The manual-dispatch queue as seen by one tick.
///
/// The live implementation wraps the four resolved dispatch entry points;
/// tests substitute fakes that assert the release discipline.
pub trait CallbackPump {
    /// Drive the client's per-pipe bookkeeping; once per tick
    fn run_frame(&mut self);

    /// Pop the next pending record, `None` when the queue is empty
    fn next(&mut self) -> Option<CallbackMsg>;

    /// Release the record returned by the last [`next`](Self::next)
    fn free_last(&mut self);
}

/// Releases the pending record when the per-record block exits
struct FreeOnDrop<'a, P: CallbackPump + ?Sized>(&'a mut P);

impl<P: CallbackPump + ?Sized> Drop for FreeOnDrop<'_, P> {
    fn drop(&mut self) {
        self.0.free_last();
    }
}

/// Run one tick: run-frame, then drain the queue into `sinks`.
///
/// Returns the number of events published. The loop terminates only when
/// the queue reports empty; a producer that never empties is an accepted
/// external-contract assumption, not guarded against.
pub fn pump<P: CallbackPump>(queue: &mut P, sinks: &SinkRegistry) -> usize {
    queue.run_frame();

    let mut published = 0;
    while let Some(msg) = queue.next() {
        let guard = FreeOnDrop(&mut *queue);
        if let Some(event) = events::decode(&msg) {
            tracing::trace!(tag = msg.tag, event = event.name(), "callback decoded");
            sinks.publish(&event);
            published += 1;
        } else {
            tracing::trace!(tag = msg.tag, "unrecognized callback tag");
        }
        drop(guard);
    }

    published
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{FnSink, SteamEvent};
    use parking_lot::RwLock;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use steambridge_sdk::callbacks::GAME_OVERLAY_ACTIVATED;

    /// Fake queue that asserts every record is released before the next
    /// one is requested.
    struct FakePump {
        pending: VecDeque<(i32, Box<[u8]>)>,
        current: Option<(i32, Box<[u8]>)>,
        frames: usize,
        freed: usize,
    }

    impl FakePump {
        fn new(records: Vec<(i32, Vec<u8>)>) -> Self {
            Self {
                pending: records
                    .into_iter()
                    .map(|(tag, data)| (tag, data.into_boxed_slice()))
                    .collect(),
                current: None,
                frames: 0,
                freed: 0,
            }
        }
    }

    impl CallbackPump for FakePump {
        fn run_frame(&mut self) {
            self.frames += 1;
        }

        fn next(&mut self) -> Option<CallbackMsg> {
            assert!(
                self.current.is_none(),
                "record requested before the previous one was released"
            );
            self.current = self.pending.pop_front();
            self.current.as_mut().map(|(tag, data)| CallbackMsg {
                user: 1,
                tag: *tag,
                data: data.as_mut_ptr(),
                len: data.len() as i32,
            })
        }

        fn free_last(&mut self) {
            assert!(
                self.current.take().is_some(),
                "release without a pending record"
            );
            self.freed += 1;
        }
    }

    fn collecting_registry() -> (SinkRegistry, Arc<RwLock<Vec<SteamEvent>>>) {
        let registry = SinkRegistry::new();
        let seen = Arc::new(RwLock::new(Vec::new()));
        let sink_seen = Arc::clone(&seen);
        registry.register(FnSink::new(move |event: &SteamEvent| {
            sink_seen.write().push(*event);
        }));
        (registry, seen)
    }

    #[test]
    fn empty_queue_runs_one_frame_and_publishes_nothing() {
        let (registry, seen) = collecting_registry();
        let mut queue = FakePump::new(vec![]);

        let published = pump(&mut queue, &registry);

        assert_eq!(published, 0);
        assert_eq!(queue.frames, 1);
        assert_eq!(queue.freed, 0);
        assert!(seen.read().is_empty());
    }

    #[test]
    fn alternating_overlay_records_publish_in_order() {
        let (registry, seen) = collecting_registry();
        let records = (0..6)
            .map(|i| (GAME_OVERLAY_ACTIVATED, vec![(i % 2 == 0) as u8]))
            .collect();
        let mut queue = FakePump::new(records);

        let published = pump(&mut queue, &registry);

        assert_eq!(published, 6);
        assert_eq!(queue.freed, 6);
        let expected: Vec<_> = (0..6)
            .map(|i| SteamEvent::OverlayToggled { active: i % 2 == 0 })
            .collect();
        assert_eq!(*seen.read(), expected);
    }

    #[test]
    fn unrecognized_tags_are_released_but_not_published() {
        let (registry, seen) = collecting_registry();
        let mut queue = FakePump::new(vec![
            (12345, vec![0xde, 0xad]),
            (GAME_OVERLAY_ACTIVATED, vec![1]),
            (777, vec![]),
        ]);

        let published = pump(&mut queue, &registry);

        assert_eq!(published, 1);
        // All three records released, in order, recognized or not.
        assert_eq!(queue.freed, 3);
        assert_eq!(*seen.read(), vec![SteamEvent::OverlayToggled { active: true }]);
    }

    #[test]
    fn consecutive_ticks_drain_independently() {
        let (registry, seen) = collecting_registry();
        let mut queue = FakePump::new(vec![(GAME_OVERLAY_ACTIVATED, vec![1])]);

        assert_eq!(pump(&mut queue, &registry), 1);
        assert_eq!(pump(&mut queue, &registry), 0);
        assert_eq!(queue.frames, 2);
        assert_eq!(seen.read().len(), 1);
    }
}
