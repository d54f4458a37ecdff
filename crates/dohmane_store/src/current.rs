//! The current-bucket accessor: what the user is editing.

use dohmane_foundation::{Error, Record, Result, Value};

use crate::entity::EntityType;
use crate::store::{Bucket, Store, TypeRecords};

/// Accessor over `current[T]` for one entity type.
///
/// Note that `delete` leaves the tombstoned value visible in `current` as
/// well as in `deleted`; views of "current records" show tombstones unless
/// they filter against the deleted bucket themselves.
#[derive(Clone, Copy)]
pub struct Current<'a> {
    entity: EntityType<'a>,
}

impl<'a> Current<'a> {
    pub(crate) fn new(entity: EntityType<'a>) -> Self {
        Self { entity }
    }

    /// The current record at `key`, if any.
    #[must_use]
    pub fn get(&self, store: &Store, key: &Value) -> Option<Record> {
        store
            .record(Bucket::Current, self.entity.name(), key)
            .cloned()
    }

    /// All current records of this type, keyed by primary key.
    #[must_use]
    pub fn get_all(&self, store: &Store) -> TypeRecords {
        store
            .records(Bucket::Current, self.entity.name())
            .cloned()
            .unwrap_or_default()
    }

    /// Writes a record at `key` directly.
    #[must_use]
    pub fn set(&self, store: &Store, key: Value, record: Record) -> Store {
        store.with_record(Bucket::Current, self.entity.def().name(), key, record)
    }

    /// Creates a record in `current`, auto-keying it if needed.
    ///
    /// If the raised record (an empty one when `record` is `None`) has
    /// nothing, or nil, at the key path, the store's `next_key` is
    /// consumed, embedded at the key path, and the counter decremented.
    /// A supplied key is used verbatim and the counter left untouched.
    /// Nothing is written to `initial`.
    ///
    /// Returns the new store, the (possibly keyed) record, and its key.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` if `record` is not a record value.
    pub fn create(&self, store: &Store, record: Option<Value>) -> Result<(Store, Record, Value)> {
        let record = match record {
            Some(value) => self.entity.raise(value)?,
            None => Record::new(),
        };

        let (store, record, key) = match self.entity.key_for(&record) {
            Some(key) => (store.clone(), record, key),
            None => {
                let (store, key) = store.allocate_key();
                let record = record.set_in(self.entity.def().key(), key.clone());
                (store, record, key)
            }
        };

        let store = self.set(&store, key.clone(), record.clone());
        Ok((store, record, key))
    }

    /// Current records with no baseline: NEW records.
    #[must_use]
    pub fn get_all_new(&self, store: &Store) -> TypeRecords {
        let initial = store.records(Bucket::Initial, self.entity.name());
        self.get_all(store)
            .iter()
            .filter(|(key, _)| !initial.is_some_and(|records| records.contains_key(*key)))
            .map(|(key, record)| (key.clone(), record.clone()))
            .collect()
    }

    /// Current records that have a baseline, differ from it structurally,
    /// and are not marked deleted: MODIFIED records.
    #[must_use]
    pub fn get_all_changed(&self, store: &Store) -> TypeRecords {
        let initial = store.records(Bucket::Initial, self.entity.name());
        let deleted = store.records(Bucket::Deleted, self.entity.name());
        self.get_all(store)
            .iter()
            .filter(|(key, record)| {
                initial
                    .and_then(|records| records.get(*key))
                    .is_some_and(|baseline| baseline != *record)
                    && !deleted.is_some_and(|records| records.contains_key(*key))
            })
            .map(|(key, record)| (key.clone(), record.clone()))
            .collect()
    }

    /// The fields of the current record whose values differ from the
    /// baseline's. With no baseline, the entire current record: everything
    /// is a change. With no current record, the empty record.
    #[must_use]
    pub fn changed_properties(&self, store: &Store, key: &Value) -> Record {
        let Some(current) = store.record(Bucket::Current, self.entity.name(), key) else {
            return Record::new();
        };
        match store.record(Bucket::Initial, self.entity.name(), key) {
            None => current.clone(),
            Some(baseline) => current
                .iter()
                .filter(|(field, value)| baseline.get(field) != Some(*value))
                .map(|(field, value)| (field.clone(), value.clone()))
                .collect(),
        }
    }

    /// Promotes a record to the baseline under its authoritative value.
    ///
    /// `record_key` is the old primary key (possibly a locally allocated
    /// negative one) and `new_record` carries the authoritative value,
    /// possibly under a new key. When the key changes, every child along
    /// every inverse-FK relation has its FK rewritten to the new key, and
    /// the old key is scrubbed from all three buckets before the new
    /// baseline is written. The result is UNCHANGED at the new key.
    ///
    /// The baseline is written even when nothing changed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` if `new_record` is not a record value, or
    /// `MissingKey` if it has nothing at the key path.
    pub fn accept(&self, store: &Store, record_key: &Value, new_record: Value) -> Result<Store> {
        let new_record = self.entity.raise(new_record)?;
        let new_key = self
            .entity
            .key_for(&new_record)
            .ok_or_else(|| Error::missing_key(self.entity.name()))?;

        let mut store = store.clone();
        if new_key != *record_key {
            if store
                .record(Bucket::Current, self.entity.name(), record_key)
                .is_some()
            {
                for (relation, fk_path) in self.entity.def().inverse_foreign_keys() {
                    let Some(child) = self.entity.registry().get_entity(relation) else {
                        continue;
                    };
                    let children =
                        EntityType::children_by_path(&store, relation, fk_path, record_key);
                    for (child_key, child_record) in children.iter() {
                        let (next, _) = child.foreign_key().set_at(
                            &store,
                            fk_path,
                            child_key,
                            child_record,
                            new_key.clone(),
                        );
                        store = next;
                    }
                }
            }

            let name = self.entity.def().name();
            store = store
                .without_record(Bucket::Initial, name, record_key)
                .without_record(Bucket::Current, name, record_key)
                .without_record(Bucket::Deleted, name, record_key);
        }

        Ok(self.entity.initial().set(&store, new_key, new_record))
    }

    /// Discards pending changes at `key`: a local rollback, no cascade.
    ///
    /// With a baseline, the deleted mark (if any) is cleared and the
    /// baseline copied back into `current`. Without one, the record was NEW
    /// and is removed outright. Idempotent.
    #[must_use]
    pub fn reject(&self, store: &Store, key: &Value) -> Store {
        match store
            .record(Bucket::Initial, self.entity.name(), key)
            .cloned()
        {
            Some(baseline) => {
                let store = self.entity.deleted().reject(store, key);
                store.with_record(
                    Bucket::Current,
                    self.entity.def().name(),
                    key.clone(),
                    baseline,
                )
            }
            None => store.without_record(Bucket::Current, self.entity.def().name(), key),
        }
    }

    /// Deletes the record at `key`, cascading to children along every
    /// inverse-FK relation.
    ///
    /// A baselined record is tombstoned: its current value is copied into
    /// `deleted` and stays visible in `current`. A record with no baseline
    /// is removed from `current` outright. Absent or already-tombstoned
    /// keys are a no-op, which also bounds cascades over cyclic relation
    /// graphs.
    #[must_use]
    pub fn delete(&self, store: &Store, key: &Value) -> Store {
        let name = self.entity.def().name();
        let Some(current) = store.record(Bucket::Current, self.entity.name(), key).cloned() else {
            return store.clone();
        };
        if store
            .record(Bucket::Deleted, self.entity.name(), key)
            .is_some()
        {
            return store.clone();
        }

        // Mark before cascading so re-entrant deletes terminate.
        let mut store = if store
            .record(Bucket::Initial, self.entity.name(), key)
            .is_some()
        {
            store.with_record(Bucket::Deleted, name, key.clone(), current)
        } else {
            store.without_record(Bucket::Current, name, key)
        };

        for (relation, fk_path) in self.entity.def().inverse_foreign_keys() {
            let Some(child) = self.entity.registry().get_entity(relation) else {
                continue;
            };
            let children = EntityType::children_by_path(&store, relation, fk_path, key);
            for (child_key, _) in children.iter() {
                store = child.current().delete(&store, child_key);
            }
        }

        store
    }
}
