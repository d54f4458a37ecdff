//! Immutable records: field-name to value mappings.
//!
//! The store treats record contents as opaque except at the paths declared
//! in a typedef, so `Record` exposes both direct field access and the
//! path forms `get_in` / `set_in`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::sync::Arc;

use crate::collections::DmMap;
use crate::error::Error;
use crate::path::KeyPath;
use crate::value::Value;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An immutable mapping from field name to [`Value`].
///
/// All mutators are persistent: they take `&self` and return a new record
/// sharing structure with the original. Equality is structural and
/// insertion-order independent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Record(DmMap<Arc<str>, Value>);

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self(DmMap::new())
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets a field value by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns true if the field is present.
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Returns a new record with the field set.
    #[must_use]
    pub fn set(&self, field: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        Self(self.0.insert(field.into(), value.into()))
    }

    /// Returns a new record with the field removed.
    #[must_use]
    pub fn remove(&self, field: &str) -> Self {
        Self(self.0.remove(field))
    }

    /// Returns an iterator over (field, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &Value)> {
        self.0.iter()
    }

    /// Returns an iterator over field names.
    pub fn fields(&self) -> impl Iterator<Item = &Arc<str>> {
        self.0.keys()
    }

    /// Gets the value at a path, descending through nested records.
    ///
    /// Returns `None` if any segment is missing, an intermediate value is
    /// not a record, or the path is empty.
    #[must_use]
    pub fn get_in(&self, path: &KeyPath) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut value = self.0.get(first)?;
        for segment in rest {
            value = value.as_record()?.0.get(segment)?;
        }
        Some(value)
    }

    /// Returns a new record with the value at a path overwritten.
    ///
    /// Missing intermediate records are created; an intermediate value that
    /// is not a record is replaced by a fresh one. An empty path addresses
    /// nothing and leaves the record unchanged.
    #[must_use]
    pub fn set_in(&self, path: &KeyPath, value: impl Into<Value>) -> Self {
        match path.split_first() {
            None => self.clone(),
            Some((first, rest)) => self.set_in_segments(first, rest, value.into()),
        }
    }

    fn set_in_segments(&self, first: &Arc<str>, rest: &[Arc<str>], value: Value) -> Self {
        match rest.split_first() {
            None => Self(self.0.insert(first.clone(), value)),
            Some((next, remainder)) => {
                let inner = match self.0.get(first).and_then(Value::as_record) {
                    Some(existing) => existing.clone(),
                    None => Self::new(),
                };
                let updated = inner.set_in_segments(next, remainder, value);
                Self(self.0.insert(first.clone(), Value::Record(updated)))
            }
        }
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (field, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<S: Into<Arc<str>>> FromIterator<(S, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl TryFrom<Value> for Record {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Error> {
        match value {
            Value::Record(r) => Ok(r),
            other => Err(Error::invalid_record(format!("{other}"))),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DmMap::deserialize(deserializer).map(Self)
    }
}

/// Builds a [`Record`] from `field => value` pairs.
///
/// ```
/// use dohmane_foundation::{record, Value};
///
/// let account = record! { "id" => 1, "name" => "A" };
/// assert_eq!(account.get("id"), Some(&Value::Int(1)));
/// ```
#[macro_export]
macro_rules! record {
    () => { $crate::Record::new() };
    ($($field:expr => $value:expr),+ $(,)?) => {{
        let mut rec = $crate::Record::new();
        $( rec = rec.set($field, $crate::Value::from($value)); )+
        rec
    }};
}
