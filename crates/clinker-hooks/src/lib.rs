//! Process-wide test hook slots for Clinker allocator instrumentation.
//!
//! The allocator's internals expose a small, fixed set of events — an
//! arena being created, an interposed libc entry point about to run —
//! that an external test harness can observe without rebuilding the
//! allocator with test code linked in. Each event has exactly one named
//! slot holding an optional callback. Every slot starts unset, and an
//! unset slot costs one null check at the instrumentation point.
//!
//! This crate is one of two in the workspace that may contain `unsafe`
//! code (confined to the null-checked pointer transmute at slot load).
//!
//! # Architecture
//!
//! ```text
//! harness (test-only)          allocator internals
//!   slots::set_arena_new ──┐     ┌── interpose::arena_created
//!   slots::set_libc ───────┤     ├── interpose::interposed
//!                          ▼     ▼
//!                   ARENA_NEW / LIBC slots
//!                   (static, null = unset)
//! ```
//!
//! # Build gating
//!
//! The slots and the harness-side surface (the `slots` module) only
//! exist when the `test-hooks` cargo feature is enabled. Production
//! builds leave the feature off: [`interpose`] then compiles to plain
//! passthroughs,
//! and there is no mutation surface for anything to link against. The
//! feature is not part of the allocator's advertised API; harnesses
//! opt in explicitly.
//!
//! # Concurrency contract
//!
//! The slots are process-wide shared state with no lock. Installing a
//! callback and firing it from allocator threads is only deterministic
//! if the installation happens-before any thread reaches the
//! corresponding instrumentation point — the intended pattern is to set
//! every hook during single-threaded setup, or only while all allocator
//! threads are quiesced. The slot cells use atomic loads and stores so
//! an unsynchronized set/fire race stays defined (the firing thread
//! sees either the old or the new callback, never a torn value), but
//! there is no atomicity across a load-then-call sequence and no
//! built-in synchronization. That coordination belongs to the harness.
//!
//! # Failure semantics
//!
//! None. The slots cannot fail to read or write, nothing is validated
//! or logged, and a panic inside a callback unwinds straight through
//! the instrumentation point.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod interpose;
#[cfg(any(test, feature = "test-hooks"))]
mod slot;
#[cfg(any(test, feature = "test-hooks"))]
#[doc(hidden)]
pub mod slots;
