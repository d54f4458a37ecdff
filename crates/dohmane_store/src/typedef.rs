//! Declarative entity-type descriptors.
//!
//! A typedef names an entity type, locates its primary key, and declares
//! its relations: foreign keys on this type's records, and inverse foreign
//! keys on related types' records pointing back here.

use std::collections::BTreeMap;
use std::sync::Arc;

use dohmane_foundation::KeyPath;

/// Static description of one entity type.
///
/// Relation maps are ordered by related-type name so cascade traversal is
/// deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typedef {
    name: Arc<str>,
    key: KeyPath,
    foreign_keys: BTreeMap<Arc<str>, KeyPath>,
    inverse_foreign_keys: BTreeMap<Arc<str>, KeyPath>,
}

impl Typedef {
    /// Creates a typedef with the given unique name and primary-key path.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, key: impl Into<KeyPath>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            foreign_keys: BTreeMap::new(),
            inverse_foreign_keys: BTreeMap::new(),
        }
    }

    /// Declares a foreign key: `path` locates, on **this** type's records,
    /// the primary key of a `related`-type parent.
    #[must_use]
    pub fn with_foreign_key(
        mut self,
        related: impl Into<Arc<str>>,
        path: impl Into<KeyPath>,
    ) -> Self {
        self.foreign_keys.insert(related.into(), path.into());
        self
    }

    /// Declares an inverse foreign key: `path` locates, on records of the
    /// `related` type, the foreign key pointing back at this type.
    #[must_use]
    pub fn with_inverse_foreign_key(
        mut self,
        related: impl Into<Arc<str>>,
        path: impl Into<KeyPath>,
    ) -> Self {
        self.inverse_foreign_keys.insert(related.into(), path.into());
        self
    }

    /// The unique type name.
    #[must_use]
    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    /// The path locating the primary key inside a record of this type.
    #[must_use]
    pub fn key(&self) -> &KeyPath {
        &self.key
    }

    /// The FK path for a relation, if declared.
    #[must_use]
    pub fn foreign_key(&self, related: &str) -> Option<&KeyPath> {
        self.foreign_keys.get(related)
    }

    /// The inverse-FK path for a relation, if declared.
    #[must_use]
    pub fn inverse_foreign_key(&self, related: &str) -> Option<&KeyPath> {
        self.inverse_foreign_keys.get(related)
    }

    /// Iterates declared foreign keys in related-type-name order.
    pub fn foreign_keys(&self) -> impl Iterator<Item = (&Arc<str>, &KeyPath)> {
        self.foreign_keys.iter()
    }

    /// Iterates declared inverse foreign keys in related-type-name order.
    pub fn inverse_foreign_keys(&self) -> impl Iterator<Item = (&Arc<str>, &KeyPath)> {
        self.inverse_foreign_keys.iter()
    }

    /// All related-type names this typedef mentions, FK and inverse-FK.
    pub(crate) fn related_types(&self) -> impl Iterator<Item = &Arc<str>> {
        self.foreign_keys
            .keys()
            .chain(self.inverse_foreign_keys.keys())
    }
}
