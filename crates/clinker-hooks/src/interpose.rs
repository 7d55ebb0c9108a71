//! Allocator-side instrumentation points.
//!
//! These are the only functions through which the allocator's internals
//! consult the hook slots. Each reads its slot exactly once (a
//! snapshot), fires the callback if one is installed, and continues
//! with production behaviour. With the `test-hooks` feature off, both
//! compile to plain passthroughs — a production build behaves
//! bit-for-bit as if the slots did not exist.

use clinker_core::{ArenaId, LibcEntryPoint};

/// Notify the arena-creation hook, if one is installed.
///
/// The allocator calls this once per arena, after the arena is fully
/// constructed and before it is published to other threads.
/// Notification-only: the callback cannot alter the creation path.
#[cfg(any(test, feature = "test-hooks"))]
pub fn arena_created(arena: ArenaId) {
    if let Some(hook) = crate::slots::arena_new() {
        hook(arena);
    }
}

/// Notify the arena-creation hook, if one is installed.
///
/// Instrumentation is compiled out of this build; this is a no-op.
#[cfg(not(any(test, feature = "test-hooks")))]
#[inline(always)]
pub fn arena_created(_arena: ArenaId) {}

/// Run a libc call through its interception point.
///
/// Fires the libc hook (if one is installed) naming `entry`, then
/// evaluates `call` and returns its value unchanged. The hook runs
/// strictly before the call and cannot suppress or replace it.
#[cfg(any(test, feature = "test-hooks"))]
pub fn interposed<T>(entry: LibcEntryPoint, call: impl FnOnce() -> T) -> T {
    if let Some(hook) = crate::slots::libc() {
        hook(entry);
    }
    call()
}

/// Run a libc call through its interception point.
///
/// Instrumentation is compiled out of this build; this evaluates
/// `call` directly.
#[cfg(not(any(test, feature = "test-hooks")))]
#[inline(always)]
pub fn interposed<T>(_entry: LibcEntryPoint, call: impl FnOnce() -> T) -> T {
    call()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    static ARENA_CALLS: AtomicUsize = AtomicUsize::new(0);
    static LAST_ARENA: AtomicUsize = AtomicUsize::new(usize::MAX);

    fn record_arena(arena: ArenaId) {
        ARENA_CALLS.fetch_add(1, Ordering::Relaxed);
        LAST_ARENA.store(arena.0 as usize, Ordering::Relaxed);
    }

    /// Order of hook firing vs. call evaluation, shared across threads
    /// of this test binary via the slots test gate.
    static TRACE: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

    fn trace_libc(_entry: LibcEntryPoint) {
        TRACE.lock().unwrap().push("hook");
    }

    #[test]
    fn unset_slot_is_pure_passthrough() {
        let _gate = slots::exclusive();
        slots::set_libc(None);

        let mut evaluations = 0;
        let value = interposed(LibcEntryPoint::Read, || {
            evaluations += 1;
            17u64
        });
        assert_eq!(value, 17);
        assert_eq!(evaluations, 1);
    }

    #[test]
    fn hook_fires_before_call() {
        let _gate = slots::exclusive();
        TRACE.lock().unwrap().clear();
        slots::set_libc(Some(trace_libc));

        let value = interposed(LibcEntryPoint::Open, || {
            TRACE.lock().unwrap().push("call");
            3i32
        });
        slots::set_libc(None);

        assert_eq!(value, 3);
        assert_eq!(*TRACE.lock().unwrap(), ["hook", "call"]);
    }

    #[test]
    fn arena_created_passes_arena_id() {
        let _gate = slots::exclusive();
        ARENA_CALLS.store(0, Ordering::Relaxed);
        slots::set_arena_new(Some(record_arena));

        arena_created(ArenaId(5));
        slots::set_arena_new(None);

        assert_eq!(ARENA_CALLS.load(Ordering::Relaxed), 1);
        assert_eq!(LAST_ARENA.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn arena_created_with_unset_slot_is_noop() {
        let _gate = slots::exclusive();
        slots::set_arena_new(None);
        ARENA_CALLS.store(0, Ordering::Relaxed);

        arena_created(ArenaId(0));

        assert_eq!(ARENA_CALLS.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn libc_hook_does_not_observe_arena_events() {
        let _gate = slots::exclusive();
        TRACE.lock().unwrap().clear();
        slots::set_libc(Some(trace_libc));

        arena_created(ArenaId(1));
        slots::set_libc(None);

        assert!(TRACE.lock().unwrap().is_empty());
    }

    #[test]
    fn one_invocation_per_event_occurrence() {
        let _gate = slots::exclusive();
        ARENA_CALLS.store(0, Ordering::Relaxed);
        slots::set_arena_new(Some(record_arena));

        for i in 0..4 {
            arena_created(ArenaId(i));
        }
        slots::set_arena_new(None);

        assert_eq!(ARENA_CALLS.load(Ordering::Relaxed), 4);
    }
}
