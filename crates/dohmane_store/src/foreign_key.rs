//! The foreign-key accessor: reads and writes the FK field on a record
//! given a relation name.

use dohmane_foundation::{Error, KeyPath, Record, Result, Value};

use crate::entity::EntityType;
use crate::store::{Bucket, Store};

/// Accessor over the foreign-key fields of one entity type's records.
#[derive(Clone, Copy)]
pub struct ForeignKey<'a> {
    entity: EntityType<'a>,
}

impl<'a> ForeignKey<'a> {
    pub(crate) fn new(entity: EntityType<'a>) -> Self {
        Self { entity }
    }

    /// The value at the FK path for `relation` inside `record`.
    ///
    /// `None` when the field is absent; the store never requires a FK to
    /// resolve to an existing parent.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRelation` if the typedef declares no FK for
    /// `relation`.
    pub fn get(&self, record: &Record, relation: &str) -> Result<Option<Value>> {
        let path = self
            .entity
            .def()
            .foreign_key(relation)
            .ok_or_else(|| Error::unknown_relation(self.entity.name(), relation))?;
        Ok(record.get_in(path).cloned())
    }

    /// Builds a new record with the FK for `relation` overwritten and
    /// writes it into `current` under the record's own primary key.
    ///
    /// Returns the new store and the new record, for chained cascades.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRelation` if the typedef declares no FK for
    /// `relation`, or `MissingKey` if the record has no primary key to
    /// write under.
    pub fn set(
        &self,
        store: &Store,
        relation: &str,
        record: &Record,
        value: impl Into<Value>,
    ) -> Result<(Store, Record)> {
        let path = self
            .entity
            .def()
            .foreign_key(relation)
            .ok_or_else(|| Error::unknown_relation(self.entity.name(), relation))?;
        let updated = record.set_in(path, value.into());
        let key = self
            .entity
            .key_for(&updated)
            .ok_or_else(|| Error::missing_key(self.entity.name()))?;
        Ok((
            store.with_record(Bucket::Current, self.entity.def().name(), key, updated.clone()),
            updated,
        ))
    }

    /// FK rewrite along a known path, writing under a known bucket key.
    ///
    /// Cascades use this so the inverse-FK path declared by the parent
    /// typedef governs, whether or not this type declares the matching
    /// forward FK.
    pub(crate) fn set_at(
        &self,
        store: &Store,
        path: &KeyPath,
        bucket_key: &Value,
        record: &Record,
        value: Value,
    ) -> (Store, Record) {
        let updated = record.set_in(path, value);
        (
            store.with_record(
                Bucket::Current,
                self.entity.def().name(),
                bucket_key.clone(),
                updated.clone(),
            ),
            updated,
        )
    }
}
