//! Core event identity types for the Clinker allocator hook seam.
//!
//! This is the leaf crate with zero dependencies. It defines the
//! strongly-typed identities of the allocator events that the hook
//! seam distinguishes: which arena was created, and which libc entry
//! point is about to run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod libc;

pub use id::ArenaId;
pub use libc::LibcEntryPoint;
