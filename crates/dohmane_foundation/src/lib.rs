//! Core types, values, and persistent collections for Dohmane.
//!
//! This crate provides:
//! - [`Value`] - The field value type for all record data
//! - [`Record`] - Immutable field-name to value mappings
//! - [`KeyPath`] - Paths addressing locations inside records
//! - [`Error`] - Categorized error types
//! - Persistent collections ([`DmMap`], [`DmVec`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod path;
pub mod record;
pub mod value;

// Re-export primary types at crate root for convenience
pub use collections::{DmMap, DmVec};
pub use error::{Error, ErrorKind};
pub use path::KeyPath;
pub use record::Record;
pub use value::Value;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
