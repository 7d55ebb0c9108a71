//! The named hook slots and their harness-side surface.
//!
//! One slot per distinguished allocator event, each with the exact
//! callback signature of its call site. Both hooks are
//! notification-only: the callback observes the event and returns `()`,
//! and production control flow continues unchanged.
//!
//! This module only exists in instrumented builds (the `test-hooks`
//! feature). It is reachable from separately-built harness code but is
//! hidden from rendered documentation: the slots are a test seam, not
//! part of the allocator's supported API. There is deliberately no
//! registration list here — assigning a slot replaces whatever was in
//! it, and `None` restores the default behaviour.

use std::ptr;

use clinker_core::{ArenaId, LibcEntryPoint};

use crate::slot::RawSlot;

/// Callback signature for the arena-creation event.
///
/// Receives the index of the arena that was just created.
pub type ArenaNewHook = fn(ArenaId);

/// Callback signature for the libc entry-point event.
///
/// Receives the entry point that is about to run.
pub type LibcHook = fn(LibcEntryPoint);

/// Slot consulted by the arena-creation path.
static ARENA_NEW: RawSlot = RawSlot::unset();

/// Slot consulted by the interposed libc call sites.
static LIBC: RawSlot = RawSlot::unset();

/// Install or clear the arena-creation hook.
///
/// `None` restores the default (no interception). For the change to be
/// observed deterministically, the assignment must happen-before any
/// thread reaches an arena-creation point; see the crate-level
/// concurrency contract.
pub fn set_arena_new(hook: Option<ArenaNewHook>) {
    ARENA_NEW.store(match hook {
        Some(f) => f as *mut (),
        None => ptr::null_mut(),
    });
}

/// Current value of the arena-creation slot.
#[allow(unsafe_code)]
pub fn arena_new() -> Option<ArenaNewHook> {
    let ptr = ARENA_NEW.load();
    if ptr.is_null() {
        return None;
    }
    // SAFETY: the only writer of this slot is `set_arena_new`, which
    // stores either null or an `ArenaNewHook`. Null was ruled out
    // above, so this pointer came from an `ArenaNewHook` cast.
    Some(unsafe { std::mem::transmute::<*mut (), ArenaNewHook>(ptr) })
}

/// Install or clear the libc entry-point hook.
///
/// `None` restores the default (no interception). The same
/// happens-before requirement as [`set_arena_new`] applies.
pub fn set_libc(hook: Option<LibcHook>) {
    LIBC.store(match hook {
        Some(f) => f as *mut (),
        None => ptr::null_mut(),
    });
}

/// Current value of the libc entry-point slot.
#[allow(unsafe_code)]
pub fn libc() -> Option<LibcHook> {
    let ptr = LIBC.load();
    if ptr.is_null() {
        return None;
    }
    // SAFETY: the only writer of this slot is `set_libc`, which stores
    // either null or a `LibcHook`. Null was ruled out above.
    Some(unsafe { std::mem::transmute::<*mut (), LibcHook>(ptr) })
}

/// Serialize unit tests that touch the process-global slots.
///
/// Poisoning is swallowed so one failed test cannot wedge the rest of
/// the suite.
#[cfg(test)]
pub(crate) fn exclusive() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, PoisonError};
    static GATE: Mutex<()> = Mutex::new(());
    GATE.lock().unwrap_or_else(PoisonError::into_inner)
}
