//! Test harness fixtures and mock collaborators for Clinker hook
//! development.
//!
//! Provides a [`MockAllocator`] standing in for the external allocator
//! (the real owner of the instrumentation points), static hook
//! implementations for counting and recording events ([`counting`],
//! [`recorder`]), and process-level test plumbing ([`serial`],
//! [`SlotResetGuard`]) for suites that mutate the global slots.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::{Mutex, MutexGuard, PoisonError};

use clinker_core::{ArenaId, LibcEntryPoint};
use clinker_hooks::interpose;

/// Serialize tests that mutate the process-global hook slots.
///
/// The slots are process-wide and `cargo test` runs tests on parallel
/// threads, so any test that sets or clears a slot must hold this guard
/// for its duration. Poisoning is swallowed: a panicking test must not
/// wedge the rest of the suite.
pub fn serial() -> MutexGuard<'static, ()> {
    static GATE: Mutex<()> = Mutex::new(());
    GATE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// RAII guard that clears both hook slots on drop.
///
/// Create one at the top of a test that installs hooks, so a failed
/// assertion cannot leak a live hook into later tests. Nesting-safe
/// only in the trivial sense — the inner drop already restores the
/// unset default.
pub struct SlotResetGuard;

impl SlotResetGuard {
    pub fn new() -> Self {
        SlotResetGuard
    }
}

impl Default for SlotResetGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SlotResetGuard {
    fn drop(&mut self) {
        clinker_hooks::slots::set_arena_new(None);
        clinker_hooks::slots::set_libc(None);
    }
}

/// How many bytes [`MockAllocator::probe_config`] consumes per
/// simulated `read(2)`.
pub const CONFIG_READ_CHUNK: usize = 64;

/// Mock of the external allocator collaborator.
///
/// The real allocator owns the instrumentation points; this mock drives
/// them the same way so harness code can be exercised without linking
/// an allocator. Exactly two paths consult the hook seam:
/// [`create_arena`](MockAllocator::create_arena) fires the
/// arena-creation point once per new arena, and
/// [`probe_config`](MockAllocator::probe_config) routes its simulated
/// libc calls through the interposition wrapper.
pub struct MockAllocator {
    arenas: Vec<ArenaId>,
}

impl MockAllocator {
    pub fn new() -> Self {
        Self { arenas: Vec::new() }
    }

    /// Create a new arena and fire the arena-creation point.
    ///
    /// Arena indices are sequential from 0, matching the allocator's
    /// bootstrap numbering. The hook fires after the arena exists and
    /// before anything else can see it.
    pub fn create_arena(&mut self) -> ArenaId {
        let id = ArenaId(self.arenas.len() as u32);
        self.arenas.push(id);
        interpose::arena_created(id);
        id
    }

    /// Number of arenas created so far.
    pub fn arena_count(&self) -> usize {
        self.arenas.len()
    }

    /// Probe a configuration source the way the allocator's bootstrap
    /// does: one `open`, chunked `read`s until a zero-length read
    /// signals EOF, one `close`. Returns the bytes read.
    ///
    /// For `contents` of length `n` this makes exactly
    /// `n.div_ceil(CONFIG_READ_CHUNK) + 1` reads.
    pub fn probe_config(&self, contents: &[u8]) -> Vec<u8> {
        let fd = interpose::interposed(LibcEntryPoint::Open, || 3i32);
        let mut out = Vec::with_capacity(contents.len());
        for chunk in contents.chunks(CONFIG_READ_CHUNK) {
            let n = interpose::interposed(LibcEntryPoint::Read, || {
                out.extend_from_slice(chunk);
                chunk.len()
            });
            debug_assert!(n <= CONFIG_READ_CHUNK);
        }
        let eof = interpose::interposed(LibcEntryPoint::Read, || 0usize);
        debug_assert_eq!(eof, 0);
        interpose::interposed(LibcEntryPoint::Close, || {
            let _ = fd;
            0i32
        });
        out
    }

    /// Look up an allocator option the way bootstrap does, through the
    /// `secure_getenv` interposition point.
    pub fn read_option(&self, name: &str) -> Option<String> {
        interpose::interposed(LibcEntryPoint::SecureGetenv, || {
            std::env::var(name).ok()
        })
    }
}

impl Default for MockAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Static counting hook for the arena-creation slot.
///
/// Hook slots hold plain `fn` pointers, so the counter has to live in a
/// static. Install with
/// `clinker_hooks::slots::set_arena_new(Some(counting::hook))`, and
/// [`reset`](counting::reset) between tests.
pub mod counting {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use clinker_core::ArenaId;

    static CALLS: AtomicUsize = AtomicUsize::new(0);

    /// The hook to install in the arena-creation slot.
    pub fn hook(_arena: ArenaId) {
        CALLS.fetch_add(1, Ordering::Relaxed);
    }

    /// Zero the counter.
    pub fn reset() {
        CALLS.store(0, Ordering::Relaxed);
    }

    /// Invocations since the last [`reset`].
    pub fn count() -> usize {
        CALLS.load(Ordering::Relaxed)
    }
}

/// Static per-entry-point recorder for the libc slot.
///
/// Counts invocations per [`LibcEntryPoint`] in an atomic table.
/// Install with `clinker_hooks::slots::set_libc(Some(recorder::hook))`,
/// and [`reset`](recorder::reset) between tests.
pub mod recorder {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use clinker_core::LibcEntryPoint;
    use indexmap::IndexMap;

    const ENTRY_POINT_COUNT: usize = LibcEntryPoint::ALL.len();

    static CALLS: [AtomicUsize; ENTRY_POINT_COUNT] =
        [const { AtomicUsize::new(0) }; ENTRY_POINT_COUNT];

    /// The hook to install in the libc slot.
    pub fn hook(entry: LibcEntryPoint) {
        CALLS[entry as usize].fetch_add(1, Ordering::Relaxed);
    }

    /// Zero every entry point's counter.
    pub fn reset() {
        for counter in &CALLS {
            counter.store(0, Ordering::Relaxed);
        }
    }

    /// Invocations of a single entry point since the last [`reset`].
    pub fn count(entry: LibcEntryPoint) -> usize {
        CALLS[entry as usize].load(Ordering::Relaxed)
    }

    /// Snapshot of all per-entry-point counts, in declaration order.
    ///
    /// IndexMap keeps the iteration order deterministic, so assertion
    /// failures print the table stably.
    pub fn counts() -> IndexMap<LibcEntryPoint, usize> {
        LibcEntryPoint::ALL
            .iter()
            .map(|&entry| (entry, count(entry)))
            .collect()
    }

    /// Total invocations across all entry points since the last
    /// [`reset`].
    pub fn total() -> usize {
        LibcEntryPoint::ALL.iter().map(|&entry| count(entry)).sum()
    }
}
