//! Strongly-typed identifiers for allocator events.

use std::fmt;

/// Identifies an arena within the allocator.
///
/// Arenas are created on demand and assigned sequential indices.
/// `ArenaId(n)` is the n-th arena the allocator has created since
/// process start; index 0 is the arena created during bootstrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaId(pub u32);

impl fmt::Display for ArenaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ArenaId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_index() {
        assert_eq!(ArenaId(7).to_string(), "7");
    }

    #[test]
    fn from_u32_round_trip() {
        let id: ArenaId = 3u32.into();
        assert_eq!(id, ArenaId(3));
    }

    #[test]
    fn ordering_follows_index() {
        assert!(ArenaId(0) < ArenaId(1));
        assert!(ArenaId(1) < ArenaId(100));
    }
}
