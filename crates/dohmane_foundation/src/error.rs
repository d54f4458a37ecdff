//! Error types for Dohmane operations.
//!
//! Uses `thiserror` for ergonomic error definition. Every error is surfaced
//! to the caller immediately; nothing is recovered locally, and a failed
//! operation leaves the caller's store value untouched.

use thiserror::Error;

use crate::value::Value;

/// The main error type for Dohmane operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unknown-state error for a record absent from both the
    /// current and initial buckets.
    #[must_use]
    pub fn unknown_state(type_name: impl Into<String>, key: Value) -> Self {
        Self::new(ErrorKind::UnknownState {
            type_name: type_name.into(),
            key,
        })
    }

    /// Creates an unregistered-type error.
    #[must_use]
    pub fn unregistered_type(type_name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnregisteredType(type_name.into()))
    }

    /// Creates a missing-key error for a record with nothing at its type's
    /// key path.
    #[must_use]
    pub fn missing_key(type_name: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingKey {
            type_name: type_name.into(),
        })
    }

    /// Creates an unknown-relation error.
    #[must_use]
    pub fn unknown_relation(type_name: impl Into<String>, relation: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownRelation {
            type_name: type_name.into(),
            relation: relation.into(),
        })
    }

    /// Creates an invalid-record error for a value that is not a record.
    #[must_use]
    pub fn invalid_record(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRecord(value.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// `state()` was called on a record absent from both `current` and
    /// `initial` for its type.
    #[error("unknown state: {type_name} record {key} is in neither current nor initial")]
    UnknownState {
        /// The entity type that was queried.
        type_name: String,
        /// The primary key of the record.
        key: Value,
    },

    /// An operation referenced a type name not in the registry.
    #[error("unregistered type: {0}")]
    UnregisteredType(String),

    /// A record arrived with nothing (or nil) at its type's key path.
    #[error("missing key: {type_name} record has no value at its key path")]
    MissingKey {
        /// The entity type the record was presented as.
        type_name: String,
    },

    /// A relation name is not declared by the typedef.
    #[error("unknown relation: {type_name} declares no relation to {relation}")]
    UnknownRelation {
        /// The entity type whose typedef was consulted.
        type_name: String,
        /// The relation name that was requested.
        relation: String,
    },

    /// A value that should have been a record was not.
    #[error("not a record: {0}")]
    InvalidRecord(String),

    /// A typedef was registered twice under the same name.
    #[error("duplicate type: {0}")]
    DuplicateType(String),
}
