//! Dispatch pump backed by the loaded library

use std::ptr;

use steambridge_loader::{LoadError, SteamLibrary};
use steambridge_sdk::{
    symbols, CallbackMsg, HSteamPipe, ManualDispatchFreeLastCallbackFn,
    ManualDispatchGetNextCallbackFn, ManualDispatchInitFn, ManualDispatchRunFrameFn,
};

use super::CallbackPump;

/// The four manual-dispatch entry points bound to one pipe.
///
/// Constructed only after a successful init; binding performs the one-time
/// `SteamAPI_ManualDispatch_Init` call, so an existing `LivePump` implies
/// the armed state.
pub struct LivePump {
    pipe: HSteamPipe,
    run_frame: ManualDispatchRunFrameFn,
    get_next: ManualDispatchGetNextCallbackFn,
    free_last: ManualDispatchFreeLastCallbackFn,
}

impl LivePump {
    /// Resolve the dispatch entry points and switch the client into manual
    /// dispatch. Any missing symbol aborts with that symbol's name.
    pub fn bind(library: &SteamLibrary, pipe: HSteamPipe) -> Result<Self, LoadError> {
        // SAFETY: shapes match the manual-dispatch exports; the pointers are
        // only called while the context keeps the library alive.
        let dispatch_init = unsafe {
            library.resolve_required::<ManualDispatchInitFn>(symbols::MANUAL_DISPATCH_INIT)?
        };
        let run_frame = unsafe {
            library
                .resolve_required::<ManualDispatchRunFrameFn>(symbols::MANUAL_DISPATCH_RUN_FRAME)?
        };
        let get_next = unsafe {
            library.resolve_required::<ManualDispatchGetNextCallbackFn>(
                symbols::MANUAL_DISPATCH_GET_NEXT_CALLBACK,
            )?
        };
        let free_last = unsafe {
            library.resolve_required::<ManualDispatchFreeLastCallbackFn>(
                symbols::MANUAL_DISPATCH_FREE_LAST_CALLBACK,
            )?
        };

        // SAFETY: one-time mode switch, called once per process by
        // construction (bring-up happens at most once).
        unsafe { dispatch_init() };
        tracing::debug!(pipe, "manual dispatch armed");

        Ok(Self {
            pipe,
            run_frame,
            get_next,
            free_last,
        })
    }
}

impl CallbackPump for LivePump {
    fn run_frame(&mut self) {
        // SAFETY: pipe handle was acquired from the initialized library.
        unsafe { (self.run_frame)(self.pipe) };
    }

    fn next(&mut self) -> Option<CallbackMsg> {
        let mut msg = CallbackMsg {
            user: 0,
            tag: 0,
            data: ptr::null_mut(),
            len: 0,
        };
        // SAFETY: the record is filled in by the client and stays valid
        // until free_last; the dispatch loop releases it before the next
        // call.
        if unsafe { (self.get_next)(self.pipe, &mut msg) } {
            Some(msg)
        } else {
            None
        }
    }

    fn free_last(&mut self) {
        // SAFETY: called exactly once per record popped by next().
        unsafe { (self.free_last)(self.pipe) };
    }
}
