//! The per-entity-type facade.
//!
//! An [`EntityType`] bundles the three bucket accessors for one type with
//! the relational helpers `parents` and `children` and the `state`
//! classifier. It borrows the registry so cascades can reach sibling types
//! by name: an arena-and-index shape that breaks the reference cycle a
//! facade graph would otherwise need.

use dohmane_foundation::{DmMap, Error, KeyPath, Record, Result, Value};

use crate::current::Current;
use crate::deleted::Deleted;
use crate::foreign_key::ForeignKey;
use crate::initial::Initial;
use crate::registry::Registry;
use crate::state::EntityState;
use crate::store::{Bucket, Store, TypeRecords};
use crate::typedef::Typedef;

/// Facade over one entity type: accessors, relational helpers, and the
/// state classifier.
///
/// Cheap to copy; borrows the registry it was created from.
#[derive(Clone, Copy, Debug)]
pub struct EntityType<'a> {
    registry: &'a Registry,
    def: &'a Typedef,
}

impl<'a> EntityType<'a> {
    pub(crate) fn new(registry: &'a Registry, def: &'a Typedef) -> Self {
        Self { registry, def }
    }

    /// The entity-type name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.def.name()
    }

    pub(crate) fn def(&self) -> &'a Typedef {
        self.def
    }

    pub(crate) fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// The initial-bucket accessor.
    #[must_use]
    pub fn initial(&self) -> Initial<'a> {
        Initial::new(*self)
    }

    /// The current-bucket accessor.
    #[must_use]
    pub fn current(&self) -> Current<'a> {
        Current::new(*self)
    }

    /// The deleted-bucket accessor.
    #[must_use]
    pub fn deleted(&self) -> Deleted<'a> {
        Deleted::new(*self)
    }

    /// The foreign-key accessor.
    #[must_use]
    pub fn foreign_key(&self) -> ForeignKey<'a> {
        ForeignKey::new(*self)
    }

    /// Reads the primary key at the typedef's key path.
    ///
    /// `Nil` at the key path counts as absent, like a missing field.
    #[must_use]
    pub fn key_for(&self, record: &Record) -> Option<Value> {
        record
            .get_in(self.def.key())
            .filter(|value| !value.is_nil())
            .cloned()
    }

    /// Normalizes a value to a record.
    ///
    /// Idempotent on records.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` for any non-record value.
    pub fn raise(&self, value: Value) -> Result<Record> {
        Record::try_from(value)
    }

    /// Classifies a record as UNCHANGED, MODIFIED, NEW, or DELETED.
    ///
    /// # Errors
    ///
    /// Returns `UnknownState` if the record is found in neither `current`
    /// nor `initial` for its type, or carries no value at the key path.
    pub fn state(&self, store: &Store, record: &Record) -> Result<EntityState> {
        let Some(key) = self.key_for(record) else {
            return Err(Error::unknown_state(self.name(), Value::Nil));
        };

        let current = store.record(Bucket::Current, self.name(), &key);
        let initial = store.record(Bucket::Initial, self.name(), &key);

        match (current, initial) {
            (None, None) => Err(Error::unknown_state(self.name(), key)),
            (Some(_), None) => Ok(EntityState::New),
            (current, Some(initial)) => {
                if store.record(Bucket::Deleted, self.name(), &key).is_some() {
                    Ok(EntityState::Deleted)
                } else if current == Some(initial) {
                    Ok(EntityState::Unchanged)
                } else {
                    Ok(EntityState::Modified)
                }
            }
        }
    }

    /// The `relation`-type records whose primary key equals this record's
    /// FK for `relation`. Reads from `current`; zero or more matches.
    ///
    /// An absent or `Nil` FK yields the empty mapping; dangling foreign
    /// keys are legal.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRelation` if the typedef declares no FK for
    /// `relation`, or `UnregisteredType` if `relation` is unknown.
    pub fn parents(
        &self,
        store: &Store,
        relation: &str,
        record: &Record,
    ) -> Result<DmMap<Value, Record>> {
        let fk_path = self
            .def
            .foreign_key(relation)
            .ok_or_else(|| Error::unknown_relation(self.name(), relation))?;
        let parent = self.registry.entity(relation)?;

        let Some(fk) = record.get_in(fk_path).filter(|v| !v.is_nil()).cloned() else {
            return Ok(DmMap::new());
        };

        let matches = store
            .records(Bucket::Current, relation)
            .map(|records| {
                records
                    .iter()
                    .filter(|(_, candidate)| parent.key_for(candidate) == Some(fk.clone()))
                    .map(|(key, candidate)| (key.clone(), candidate.clone()))
                    .collect()
            })
            .unwrap_or_default();

        Ok(matches)
    }

    /// The `relation`-type records whose FK-for-this-type equals this
    /// record's primary key. Reads from `current`; zero or more matches.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRelation` if the typedef declares no inverse FK for
    /// `relation`.
    pub fn children(
        &self,
        store: &Store,
        relation: &str,
        record: &Record,
    ) -> Result<DmMap<Value, Record>> {
        let fk_path = self
            .def
            .inverse_foreign_key(relation)
            .ok_or_else(|| Error::unknown_relation(self.name(), relation))?;

        let Some(key) = self.key_for(record) else {
            return Ok(DmMap::new());
        };

        Ok(Self::children_by_path(store, relation, fk_path, &key))
    }

    /// Children of `key` along one inverse-FK path: `relation`-type records
    /// in `current` whose value at `fk_path` equals `key`.
    pub(crate) fn children_by_path(
        store: &Store,
        relation: &str,
        fk_path: &KeyPath,
        key: &Value,
    ) -> TypeRecords {
        store
            .records(Bucket::Current, relation)
            .map(|records| {
                records
                    .iter()
                    .filter(|(_, child)| child.get_in(fk_path) == Some(key))
                    .map(|(child_key, child)| (child_key.clone(), child.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}
