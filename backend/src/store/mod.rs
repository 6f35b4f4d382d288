//! Persistence port for specification records.
//!
//! The catalog service only ever talks to a [`SpecificationStore`]; the
//! concrete backend is chosen in `main.rs` and injected at construction time.
//! [`SqliteSpecificationStore`] is the adapter shipped with the server.

mod sqlite;

pub use sqlite::SqliteSpecificationStore;

use catalog_common::model::specification::Specification;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Stored document is not valid: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Connection lock poisoned")]
    Poisoned,
}

/// The capability set the catalog service needs from a document store.
///
/// Each call is one independent read or write; there is no transaction
/// spanning several calls.
pub trait SpecificationStore: Send + Sync {
    /// Every stored record, in insertion order.
    fn find_all(&self) -> Result<Vec<Specification>, StoreError>;

    fn find_by_id(&self, id: &str) -> Result<Option<Specification>, StoreError>;

    fn insert(&self, specification: &Specification) -> Result<(), StoreError>;

    /// Replaces the stored record with the same `id`.
    /// Returns `false` if no such record exists.
    fn update_by_id(&self, specification: &Specification) -> Result<bool, StoreError>;

    /// Returns `false` if no record had this `id`.
    fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;
}
