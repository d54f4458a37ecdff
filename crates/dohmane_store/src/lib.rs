//! Store value, type registry, bucket accessors, and cascades for Dohmane.
//!
//! This crate provides:
//! - [`Store`] - The immutable aggregate of the three buckets and key counter
//! - [`Typedef`] / [`Registry`] - Declarative entity-type descriptors
//! - [`EntityType`] - Per-type facade: accessors, relations, state
//! - [`EntityState`] - The derived UNCHANGED/MODIFIED/NEW/DELETED classifier

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod current;
pub mod deleted;
pub mod entity;
pub mod foreign_key;
pub mod initial;
pub mod registry;
pub mod state;
pub mod store;
pub mod typedef;

pub use current::Current;
pub use deleted::Deleted;
pub use entity::EntityType;
pub use foreign_key::ForeignKey;
pub use initial::Initial;
pub use registry::Registry;
pub use state::EntityState;
pub use store::{BucketRecords, Store, TypeRecords};
pub use typedef::Typedef;
