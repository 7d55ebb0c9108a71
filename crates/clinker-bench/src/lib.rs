//! Benchmark helpers for the Clinker hook seam.
//!
//! Provides the shared no-op hooks and a small deterministic workload
//! standing in for the wrapped libc call, so dispatch overhead is
//! measured against a stable baseline.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use clinker_core::{ArenaId, LibcEntryPoint};

/// No-op hook for the arena-creation slot.
pub fn nop_arena_hook(_arena: ArenaId) {}

/// No-op hook for the libc slot.
pub fn nop_libc_hook(_entry: LibcEntryPoint) {}

/// Tiny deterministic workload standing in for the wrapped call.
///
/// FNV-style wrapping arithmetic over `rounds` iterations — cheap
/// enough that slot dispatch is visible next to it, data-dependent
/// enough that it cannot be folded away around `black_box`.
pub fn checksum_workload(rounds: u64) -> u64 {
    let mut acc = 0xcbf2_9ce4_8422_2325u64;
    for i in 0..rounds {
        acc = acc.wrapping_mul(0x0100_0000_01b3).wrapping_add(i);
    }
    acc
}
