//! The initial-bucket accessor: the accepted baseline.

use dohmane_foundation::{Error, Record, Result, Value};

use crate::entity::EntityType;
use crate::store::{Bucket, Store, TypeRecords};

/// Accessor over `initial[T]` for one entity type.
///
/// Writing here means "this is the new baseline": `set` discards any
/// pending current-side edit for the key by rejecting it, which also
/// mirrors the baseline into `current`.
#[derive(Clone, Copy)]
pub struct Initial<'a> {
    entity: EntityType<'a>,
}

impl<'a> Initial<'a> {
    pub(crate) fn new(entity: EntityType<'a>) -> Self {
        Self { entity }
    }

    /// The baseline record at `key`, if any.
    #[must_use]
    pub fn get(&self, store: &Store, key: &Value) -> Option<Record> {
        store
            .record(Bucket::Initial, self.entity.name(), key)
            .cloned()
    }

    /// All baseline records of this type, keyed by primary key.
    #[must_use]
    pub fn get_all(&self, store: &Store) -> TypeRecords {
        store
            .records(Bucket::Initial, self.entity.name())
            .cloned()
            .unwrap_or_default()
    }

    /// Writes a new baseline at `key` and rejects any pending current-side
    /// edit, so that afterwards `initial[T][key] == current[T][key]` and no
    /// deleted mark remains.
    #[must_use]
    pub fn set(&self, store: &Store, key: Value, record: Record) -> Store {
        let store =
            store.with_record(Bucket::Initial, self.entity.def().name(), key.clone(), record);
        self.entity.current().reject(&store, &key)
    }

    /// Loads a batch of externally-obtained records as new baselines.
    ///
    /// Each value is raised to a record, its primary key read, and `set`
    /// applied. After `load`, every loaded record is UNCHANGED.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` for a non-record value, or `MissingKey` for
    /// a record with nothing (or nil) at the key path. On error the caller's
    /// store is untouched.
    pub fn load(&self, store: &Store, records: impl IntoIterator<Item = Value>) -> Result<Store> {
        let mut store = store.clone();
        for value in records {
            let record = self.entity.raise(value)?;
            let key = self
                .entity
                .key_for(&record)
                .ok_or_else(|| Error::missing_key(self.entity.name()))?;
            store = self.set(&store, key, record);
        }
        Ok(store)
    }
}
