//! The closed set of libc entry points the allocator interposes.

use std::fmt;

/// A libc entry point wrapped by instrumented builds of the allocator.
///
/// The allocator's metadata paths (configuration probing, page-size
/// discovery, environment lookup) make a small, fixed set of libc calls.
/// Instrumented builds route each of these calls through the libc hook
/// slot immediately before the real call runs, so a harness can observe
/// exactly when the allocator touches the OS.
///
/// The set is closed: only calls made by the allocator's own internals
/// are wrapped, and adding an entry point here means adding a wrapped
/// call site in the allocator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LibcEntryPoint {
    /// `open(2)` — used when probing configuration files.
    Open,
    /// `read(2)` — used when reading probed files.
    Read,
    /// `write(2)` — used by the abort/stat dump paths.
    Write,
    /// `readlink(2)` — used when resolving configuration symlinks.
    Readlink,
    /// `close(2)` — pairs with [`LibcEntryPoint::Open`].
    Close,
    /// `creat(2)` — used by the profiling dump path.
    Creat,
    /// `secure_getenv(3)` — used when reading option environment
    /// variables.
    SecureGetenv,
}

impl LibcEntryPoint {
    /// Every interposable entry point, in declaration order.
    ///
    /// Harness code iterates this to reset or snapshot per-entry-point
    /// state exhaustively.
    pub const ALL: [LibcEntryPoint; 7] = [
        LibcEntryPoint::Open,
        LibcEntryPoint::Read,
        LibcEntryPoint::Write,
        LibcEntryPoint::Readlink,
        LibcEntryPoint::Close,
        LibcEntryPoint::Creat,
        LibcEntryPoint::SecureGetenv,
    ];

    /// The libc symbol name for this entry point.
    pub fn name(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Read => "read",
            Self::Write => "write",
            Self::Readlink => "readlink",
            Self::Close => "close",
            Self::Creat => "creat",
            Self::SecureGetenv => "secure_getenv",
        }
    }
}

impl fmt::Display for LibcEntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
