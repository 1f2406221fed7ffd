//! Typed projections of raw callback records

use steambridge_sdk::{callbacks, CallbackMsg, GameOverlayActivated};

/// A recognized, decoded callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteamEvent {
    /// The Steam overlay opened or closed (tag 331)
    OverlayToggled {
        /// True when the overlay is now shown
        active: bool,
    },
}

impl SteamEvent {
    /// Event name as published to the host sink
    pub fn name(&self) -> &'static str {
        match self {
            Self::OverlayToggled { .. } => "game_overlay_toggled",
        }
    }
}

/// Decode one record into a typed event, `None` for unrecognized tags.
///
/// The payload is reinterpreted only when the tag is known and the record
/// length covers the declared payload prefix. Decoding never takes ownership
/// of the record; releasing it stays with the dispatch loop.
pub fn decode(msg: &CallbackMsg) -> Option<SteamEvent> {
    match msg.tag {
        callbacks::GAME_OVERLAY_ACTIVATED => {
            if msg.data.is_null()
                || msg.len < std::mem::size_of::<GameOverlayActivated>() as i32
            {
                tracing::warn!(len = msg.len, "truncated overlay callback record");
                return None;
            }
            // SAFETY: tag selects the layout and the length was checked
            // against it; the pointer is valid until the record is released,
            // which happens after this call returns.
            let payload = unsafe { &*(msg.data as *const GameOverlayActivated) };
            Some(SteamEvent::OverlayToggled {
                active: payload.active != 0,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay_msg(payload: &mut GameOverlayActivated) -> CallbackMsg {
        CallbackMsg {
            user: 1,
            tag: callbacks::GAME_OVERLAY_ACTIVATED,
            data: payload as *mut GameOverlayActivated as *mut u8,
            len: std::mem::size_of::<GameOverlayActivated>() as i32,
        }
    }

    #[test]
    fn overlay_record_decodes_active_flag() {
        let mut payload = GameOverlayActivated { active: 1 };
        assert_eq!(
            decode(&overlay_msg(&mut payload)),
            Some(SteamEvent::OverlayToggled { active: true })
        );

        payload.active = 0;
        assert_eq!(
            decode(&overlay_msg(&mut payload)),
            Some(SteamEvent::OverlayToggled { active: false })
        );
    }

    #[test]
    fn unknown_tags_are_skipped() {
        let mut byte = 1u8;
        let msg = CallbackMsg {
            user: 1,
            tag: 9999,
            data: &mut byte,
            len: 1,
        };
        assert_eq!(decode(&msg), None);
    }

    #[test]
    fn truncated_records_are_skipped() {
        let mut payload = GameOverlayActivated { active: 1 };
        let mut msg = overlay_msg(&mut payload);
        msg.len = 0;
        assert_eq!(decode(&msg), None);

        msg.data = std::ptr::null_mut();
        msg.len = 8;
        assert_eq!(decode(&msg), None);
    }

    #[test]
    fn event_names_are_stable() {
        assert_eq!(
            SteamEvent::OverlayToggled { active: true }.name(),
            "game_overlay_toggled"
        );
    }
}
