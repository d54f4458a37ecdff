//! Dohmane - In-memory, relational, change-tracking record store
//!
//! This crate re-exports all layers of the Dohmane system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: dohmane_store      — store value, typedefs, registry, bucket
//!                               accessors, cascades
//! Layer 0: dohmane_foundation — core types (Value, Record, KeyPath, Error)
//!                               and persistent collections
//! ```
//!
//! # Example
//!
//! ```
//! use dohmane::foundation::{record, Value};
//! use dohmane::store::{Registry, Store, Typedef};
//!
//! let registry = Registry::new([
//!     Typedef::new("Account", ["id"]).with_inverse_foreign_key("Campaign", ["account_id"]),
//!     Typedef::new("Campaign", ["id"]).with_foreign_key("Account", ["account_id"]),
//! ])?;
//! let account = registry.entity("Account")?;
//!
//! let store = Store::new();
//! let store = account
//!     .initial()
//!     .load(&store, [record! { "id" => 1, "name" => "A" }.into()])?;
//! let (store, _, key) = account
//!     .current()
//!     .create(&store, Some(record! { "name" => "B" }.into()))?;
//! let store = account
//!     .current()
//!     .accept(&store, &key, record! { "id" => 2, "name" => "B" }.into())?;
//!
//! assert_eq!(account.current().get_all(&store).len(), 2);
//! # Ok::<(), dohmane::foundation::Error>(())
//! ```

pub use dohmane_foundation as foundation;
pub use dohmane_store as store;
