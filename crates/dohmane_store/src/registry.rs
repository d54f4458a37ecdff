//! The type registry: all entity-type facades, instantiated up front.
//!
//! Built once from a collection of typedefs and immutable afterwards. Each
//! facade handed out by [`Registry::entity`] carries a reference back to the
//! registry, because cascade operations must dispatch into sibling types by
//! name.

use std::collections::BTreeMap;
use std::sync::Arc;

use dohmane_foundation::{Error, ErrorKind, Result};

use crate::entity::EntityType;
use crate::typedef::Typedef;

/// Immutable collection of entity-type descriptors.
#[derive(Clone, Debug)]
pub struct Registry {
    types: BTreeMap<Arc<str>, Typedef>,
}

impl Registry {
    /// Builds a registry from typedefs.
    ///
    /// # Errors
    ///
    /// Returns an error if two typedefs share a name, or if any foreign-key
    /// or inverse-foreign-key relation references a type that is not itself
    /// registered. Catching dangling relation names here is what lets the
    /// cascade code dispatch by name without failure paths.
    pub fn new(typedefs: impl IntoIterator<Item = Typedef>) -> Result<Self> {
        let mut types = BTreeMap::new();
        for def in typedefs {
            let name = def.name().clone();
            if types.insert(name.clone(), def).is_some() {
                return Err(Error::new(ErrorKind::DuplicateType(name.to_string())));
            }
        }

        for def in types.values() {
            for related in def.related_types() {
                if !types.contains_key(related) {
                    return Err(Error::unregistered_type(related.as_ref()));
                }
            }
        }

        Ok(Self { types })
    }

    /// Returns the facade for an entity type.
    ///
    /// # Errors
    ///
    /// Returns `UnregisteredType` if the name is unknown.
    pub fn entity(&self, name: &str) -> Result<EntityType<'_>> {
        self.get_entity(name)
            .ok_or_else(|| Error::unregistered_type(name))
    }

    /// Returns true if a type with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Iterates registered type names in name order.
    pub fn type_names(&self) -> impl Iterator<Item = &Arc<str>> {
        self.types.keys()
    }

    pub(crate) fn get_entity(&self, name: &str) -> Option<EntityType<'_>> {
        self.types
            .get(name)
            .map(|def| EntityType::new(self, def))
    }
}
