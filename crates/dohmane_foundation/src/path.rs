//! Key paths: ordered sequences of field names addressing a location
//! inside a record.
//!
//! All data access in the store goes through paths, so the type is defined
//! once here and reused by typedefs, accessors, and cascades.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A path into a record: a non-empty-in-practice sequence of field names.
///
/// Paths are cheap to clone; segments are shared `Arc<str>` values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyPath(Vec<Arc<str>>);

impl KeyPath {
    /// Creates a path from an ordered sequence of field names.
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the path has no segments.
    ///
    /// An empty path addresses nothing; record access through one always
    /// misses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the segments.
    pub fn segments(&self) -> impl Iterator<Item = &Arc<str>> {
        self.0.iter()
    }

    /// Returns the first segment and the remainder of the path.
    #[must_use]
    pub fn split_first(&self) -> Option<(&Arc<str>, &[Arc<str>])> {
        self.0.split_first()
    }

    /// Returns the segments as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Arc<str>] {
        &self.0
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// A single-segment path. The string is one field name; it is not split.
impl From<&str> for KeyPath {
    fn from(segment: &str) -> Self {
        Self(vec![segment.into()])
    }
}

impl<const N: usize> From<[&str; N]> for KeyPath {
    fn from(segments: [&str; N]) -> Self {
        Self::new(segments)
    }
}

impl FromIterator<Arc<str>> for KeyPath {
    fn from_iter<I: IntoIterator<Item = Arc<str>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
