//! The store value: three buckets and a key counter.
//!
//! The store is a pure value. Mutations take `&Store` and return a fresh
//! `Store`; clones are O(1) thanks to structural sharing in the underlying
//! persistent maps. Any number of threads may read any number of store
//! values in parallel.

use std::sync::Arc;

use dohmane_foundation::{DmMap, Record, Value};

/// Records of one entity type, keyed by primary key.
pub type TypeRecords = DmMap<Value, Record>;

/// A full bucket: entity-type name to that type's records.
pub type BucketRecords = DmMap<Arc<str>, TypeRecords>;

/// Which of the store's three buckets an operation addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Bucket {
    Initial,
    Current,
    Deleted,
}

/// An immutable aggregate of the three buckets and the primary-key counter.
///
/// - `initial` holds what the remote system knows (the baseline),
/// - `current` holds what the user is editing,
/// - `deleted` holds tombstones for baselined records pending deletion.
///
/// `next_key` starts at −1 and only ever decreases; each auto-assigned
/// primary key consumes it. The negative range marks local-only identifiers,
/// distinguishing them from server-issued ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Store {
    initial: BucketRecords,
    current: BucketRecords,
    deleted: BucketRecords,
    next_key: i64,
}

impl Store {
    /// Creates an empty store: three empty buckets, `next_key` at −1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            initial: DmMap::new(),
            current: DmMap::new(),
            deleted: DmMap::new(),
            next_key: -1,
        }
    }

    /// Returns the key that the next auto-keyed `create` will consume.
    #[must_use]
    pub fn next_key(&self) -> i64 {
        self.next_key
    }

    /// Returns true if no bucket holds any record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.initial, &self.current, &self.deleted]
            .iter()
            .all(|bucket| bucket.values().all(TypeRecords::is_empty))
    }

    pub(crate) fn bucket(&self, bucket: Bucket) -> &BucketRecords {
        match bucket {
            Bucket::Initial => &self.initial,
            Bucket::Current => &self.current,
            Bucket::Deleted => &self.deleted,
        }
    }

    fn with_bucket(&self, bucket: Bucket, records: BucketRecords) -> Self {
        let mut new = self.clone();
        match bucket {
            Bucket::Initial => new.initial = records,
            Bucket::Current => new.current = records,
            Bucket::Deleted => new.deleted = records,
        }
        new
    }

    /// All records of one type in one bucket, if the type has any.
    pub(crate) fn records(&self, bucket: Bucket, type_name: &str) -> Option<&TypeRecords> {
        self.bucket(bucket).get(type_name)
    }

    /// One record by bucket, type, and primary key.
    pub(crate) fn record(&self, bucket: Bucket, type_name: &str, key: &Value) -> Option<&Record> {
        self.records(bucket, type_name)?.get(key)
    }

    /// Returns a new store with the record written at (bucket, type, key).
    pub(crate) fn with_record(
        &self,
        bucket: Bucket,
        type_name: &Arc<str>,
        key: Value,
        record: Record,
    ) -> Self {
        let records = self
            .records(bucket, type_name)
            .cloned()
            .unwrap_or_default()
            .insert(key, record);
        self.with_bucket(bucket, self.bucket(bucket).insert(type_name.clone(), records))
    }

    /// Returns a new store with the record at (bucket, type, key) removed.
    ///
    /// Removing an absent record is a no-op.
    pub(crate) fn without_record(&self, bucket: Bucket, type_name: &Arc<str>, key: &Value) -> Self {
        match self.records(bucket, type_name) {
            None => self.clone(),
            Some(records) => self.with_bucket(
                bucket,
                self.bucket(bucket)
                    .insert(type_name.clone(), records.remove(key)),
            ),
        }
    }

    /// Consumes the current `next_key`, returning the allocated key and a
    /// store whose counter has been decremented.
    pub(crate) fn allocate_key(&self) -> (Self, Value) {
        let key = Value::Int(self.next_key);
        let mut new = self.clone();
        new.next_key -= 1;
        (new, key)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::Store;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Store {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut state = serializer.serialize_struct("Store", 4)?;
            state.serialize_field("initial", &self.initial)?;
            state.serialize_field("current", &self.current)?;
            state.serialize_field("deleted", &self.deleted)?;
            state.serialize_field("nextKey", &self.next_key)?;
            state.end()
        }
    }

    impl<'de> Deserialize<'de> for Store {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            #[derive(Deserialize)]
            #[serde(field_identifier)]
            enum Field {
                #[serde(rename = "initial")]
                Initial,
                #[serde(rename = "current")]
                Current,
                #[serde(rename = "deleted")]
                Deleted,
                #[serde(rename = "nextKey")]
                NextKey,
            }

            struct StoreVisitor;

            impl<'de> Visitor<'de> for StoreVisitor {
                type Value = Store;

                fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter.write_str("struct Store")
                }

                fn visit_map<V>(self, mut map: V) -> Result<Store, V::Error>
                where
                    V: MapAccess<'de>,
                {
                    let mut initial = None;
                    let mut current = None;
                    let mut deleted = None;
                    let mut next_key = None;

                    while let Some(key) = map.next_key()? {
                        match key {
                            Field::Initial => {
                                if initial.is_some() {
                                    return Err(de::Error::duplicate_field("initial"));
                                }
                                initial = Some(map.next_value()?);
                            }
                            Field::Current => {
                                if current.is_some() {
                                    return Err(de::Error::duplicate_field("current"));
                                }
                                current = Some(map.next_value()?);
                            }
                            Field::Deleted => {
                                if deleted.is_some() {
                                    return Err(de::Error::duplicate_field("deleted"));
                                }
                                deleted = Some(map.next_value()?);
                            }
                            Field::NextKey => {
                                if next_key.is_some() {
                                    return Err(de::Error::duplicate_field("nextKey"));
                                }
                                next_key = Some(map.next_value()?);
                            }
                        }
                    }

                    Ok(Store {
                        initial: initial.ok_or_else(|| de::Error::missing_field("initial"))?,
                        current: current.ok_or_else(|| de::Error::missing_field("current"))?,
                        deleted: deleted.ok_or_else(|| de::Error::missing_field("deleted"))?,
                        next_key: next_key.ok_or_else(|| de::Error::missing_field("nextKey"))?,
                    })
                }
            }

            const FIELDS: &[&str] = &["initial", "current", "deleted", "nextKey"];
            deserializer.deserialize_struct("Store", FIELDS, StoreVisitor)
        }
    }
}
