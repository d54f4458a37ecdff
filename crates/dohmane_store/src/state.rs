//! Derived per-record entity states.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The change state of a record, derived from the buckets it occupies.
///
/// Never stored; computed by `EntityType::state` from the rules:
/// a record is NEW when `current` holds it and `initial` does not,
/// DELETED when a tombstone exists, MODIFIED when it differs from its
/// baseline, and UNCHANGED otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntityState {
    /// The current value equals the accepted baseline.
    Unchanged,
    /// The current value differs from the accepted baseline.
    Modified,
    /// The record exists only locally; no baseline yet.
    New,
    /// The record is marked for deletion, pending acceptance.
    Deleted,
}

impl fmt::Display for EntityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unchanged => "UNCHANGED",
            Self::Modified => "MODIFIED",
            Self::New => "NEW",
            Self::Deleted => "DELETED",
        };
        write!(f, "{s}")
    }
}
