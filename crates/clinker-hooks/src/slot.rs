//! Raw nullable code-pointer cell shared by the typed hook slots.

use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};

/// A process-wide nullable code-pointer cell. Null is the unset
/// sentinel.
///
/// Stores use `Release` and loads use `Acquire`, so state a harness
/// prepared before installing a callback is visible to the thread that
/// fires it. The cell provides no atomicity across a load-then-call
/// sequence; see the crate-level concurrency contract.
pub(crate) struct RawSlot {
    cell: AtomicPtr<()>,
}

impl RawSlot {
    /// A slot in its default, unset state.
    pub const fn unset() -> Self {
        Self {
            cell: AtomicPtr::new(ptr::null_mut()),
        }
    }

    /// Replace the slot's value. Null clears it.
    pub fn store(&self, ptr: *mut ()) {
        self.cell.store(ptr, Ordering::Release);
    }

    /// Snapshot the slot's current value. Null means unset.
    pub fn load(&self) -> *mut () {
        self.cell.load(Ordering::Acquire)
    }
}
