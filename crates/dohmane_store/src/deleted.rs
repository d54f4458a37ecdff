//! The deleted-bucket accessor: tombstones pending acceptance.

use dohmane_foundation::{Record, Value};

use crate::entity::EntityType;
use crate::store::{Bucket, Store, TypeRecords};

/// Accessor over `deleted[T]` for one entity type.
#[derive(Clone, Copy)]
pub struct Deleted<'a> {
    entity: EntityType<'a>,
}

impl<'a> Deleted<'a> {
    pub(crate) fn new(entity: EntityType<'a>) -> Self {
        Self { entity }
    }

    /// The tombstoned record at `key`, if any.
    #[must_use]
    pub fn get(&self, store: &Store, key: &Value) -> Option<Record> {
        store
            .record(Bucket::Deleted, self.entity.name(), key)
            .cloned()
    }

    /// All tombstoned records of this type, keyed by primary key.
    #[must_use]
    pub fn get_all(&self, store: &Store) -> TypeRecords {
        store
            .records(Bucket::Deleted, self.entity.name())
            .cloned()
            .unwrap_or_default()
    }

    /// Writes a tombstone at `key` directly.
    #[must_use]
    pub fn set(&self, store: &Store, key: Value, record: Record) -> Store {
        store.with_record(Bucket::Deleted, self.entity.def().name(), key, record)
    }

    /// Confirms a deletion: recursively accepts the deletion of every child
    /// along every inverse-FK relation, then scrubs the record from all
    /// three buckets. Afterwards no trace of the record remains.
    ///
    /// A key absent from every bucket is a no-op; the record is scrubbed
    /// before the cascade so re-entrant accepts over cyclic relation graphs
    /// terminate.
    #[must_use]
    pub fn accept(&self, store: &Store, key: &Value) -> Store {
        let name = self.entity.def().name();
        let present = [Bucket::Current, Bucket::Deleted, Bucket::Initial]
            .iter()
            .any(|bucket| store.record(*bucket, self.entity.name(), key).is_some());
        if !present {
            return store.clone();
        }

        let mut store = store
            .without_record(Bucket::Initial, name, key)
            .without_record(Bucket::Current, name, key)
            .without_record(Bucket::Deleted, name, key);

        for (relation, fk_path) in self.entity.def().inverse_foreign_keys() {
            let Some(child) = self.entity.registry().get_entity(relation) else {
                continue;
            };
            let children = EntityType::children_by_path(&store, relation, fk_path, key);
            for (child_key, _) in children.iter() {
                store = child.deleted().accept(&store, child_key);
            }
        }

        store
    }

    /// Abandons a deletion: removes only the tombstone. The current value,
    /// which `current.delete` left in place, is untouched. Idempotent.
    #[must_use]
    pub fn reject(&self, store: &Store, key: &Value) -> Store {
        store.without_record(Bucket::Deleted, self.entity.def().name(), key)
    }
}
