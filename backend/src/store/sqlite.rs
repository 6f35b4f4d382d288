use super::{SpecificationStore, StoreError};
use catalog_common::model::specification::{Specification, SpecificationDetails};
use chrono::{DateTime, Utc};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// Raw column values of one `specifications` row: id, document, created_at, updated_at.
type RawRow = (String, String, DateTime<Utc>, DateTime<Utc>);

/// [`SpecificationStore`] backed by a single SQLite table.
///
/// Each record's details are kept as one JSON document column, so the table
/// shape does not change when the specification schema grows. The `seq`
/// column only exists to give `find_all` a stable insertion order.
#[derive(Debug, Clone)]
pub struct SqliteSpecificationStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSpecificationStore {
    /// Opens (or creates) the database file at `path` and ensures the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS specifications (
                seq        INTEGER PRIMARY KEY AUTOINCREMENT,
                id         TEXT NOT NULL UNIQUE,
                document   TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );",
        )
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
    }

    fn from_row(
        (id, document, created_at, updated_at): RawRow,
    ) -> Result<Specification, StoreError> {
        let details: SpecificationDetails = serde_json::from_str(&document)?;
        Ok(Specification {
            id,
            details,
            created_at,
            updated_at,
        })
    }
}

impl SpecificationStore for SqliteSpecificationStore {
    fn find_all(&self) -> Result<Vec<Specification>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, document, created_at, updated_at FROM specifications ORDER BY seq",
        )?;
        let rows = stmt
            .query_map([], Self::read_row)?
            .collect::<Result<Vec<RawRow>, _>>()?;

        rows.into_iter().map(Self::from_row).collect()
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Specification>, StoreError> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                "SELECT id, document, created_at, updated_at FROM specifications WHERE id = ?1",
                params![id],
                Self::read_row,
            )
            .optional()?;

        row.map(Self::from_row).transpose()
    }

    fn insert(&self, specification: &Specification) -> Result<(), StoreError> {
        let document = serde_json::to_string(&specification.details)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO specifications (id, document, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                &specification.id,
                &document,
                &specification.created_at,
                &specification.updated_at
            ],
        )?;
        debug!("Inserted specification row {}", specification.id);
        Ok(())
    }

    fn update_by_id(&self, specification: &Specification) -> Result<bool, StoreError> {
        let document = serde_json::to_string(&specification.details)?;
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE specifications SET document = ?2, updated_at = ?3 WHERE id = ?1",
            params![&specification.id, &document, &specification.updated_at],
        )?;
        Ok(changed > 0)
    }

    fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let conn = self.lock()?;
        let changed = conn.execute("DELETE FROM specifications WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_details;
    use chrono::Duration;

    fn record(id: &str) -> Specification {
        let now = Utc::now();
        Specification {
            id: id.to_string(),
            details: sample_details(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = SqliteSpecificationStore::open_in_memory().unwrap();
        assert!(store.find_all().unwrap().is_empty());
        assert!(store.find_by_id("missing").unwrap().is_none());
    }

    #[test]
    fn find_all_keeps_insertion_order() {
        let store = SqliteSpecificationStore::open_in_memory().unwrap();
        for id in ["c", "a", "b"] {
            store.insert(&record(id)).unwrap();
        }

        let ids: Vec<String> = store.find_all().unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn insert_then_find_returns_the_same_record() {
        let store = SqliteSpecificationStore::open_in_memory().unwrap();
        let spec = record("one");
        store.insert(&spec).unwrap();

        assert_eq!(store.find_by_id("one").unwrap(), Some(spec));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let store = SqliteSpecificationStore::open_in_memory().unwrap();
        store.insert(&record("dup")).unwrap();

        let err = store.insert(&record("dup")).unwrap_err();
        assert!(matches!(err, StoreError::Sqlite(_)));
        assert_eq!(store.find_all().unwrap().len(), 1);
    }

    #[test]
    fn update_replaces_document_but_not_created_at() {
        let store = SqliteSpecificationStore::open_in_memory().unwrap();
        let original = record("one");
        store.insert(&original).unwrap();

        let mut changed = original.clone();
        changed.details.ram = 16;
        changed.updated_at = original.updated_at + Duration::seconds(5);
        changed.created_at = original.created_at + Duration::days(1);
        assert!(store.update_by_id(&changed).unwrap());

        let stored = store.find_by_id("one").unwrap().unwrap();
        assert_eq!(stored.details.ram, 16);
        assert_eq!(stored.updated_at, changed.updated_at);
        assert_eq!(stored.created_at, original.created_at);
    }

    #[test]
    fn update_and_delete_report_missing_rows() {
        let store = SqliteSpecificationStore::open_in_memory().unwrap();
        assert!(!store.update_by_id(&record("ghost")).unwrap());
        assert!(!store.delete_by_id("ghost").unwrap());
    }

    #[test]
    fn delete_removes_the_row() {
        let store = SqliteSpecificationStore::open_in_memory().unwrap();
        store.insert(&record("one")).unwrap();
        store.insert(&record("two")).unwrap();

        assert!(store.delete_by_id("one").unwrap());
        assert!(store.find_by_id("one").unwrap().is_none());
        assert_eq!(store.find_all().unwrap().len(), 1);
    }

    #[test]
    fn records_survive_reopening_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.sqlite");
        let spec = record("persisted");

        {
            let store = SqliteSpecificationStore::open(&path).unwrap();
            store.insert(&spec).unwrap();
        }

        let reopened = SqliteSpecificationStore::open(&path).unwrap();
        assert_eq!(reopened.find_by_id("persisted").unwrap(), Some(spec));
    }

    #[test]
    fn corrupt_document_surfaces_as_document_error() {
        let store = SqliteSpecificationStore::open_in_memory().unwrap();
        {
            let conn = store.lock().unwrap();
            conn.execute(
                "INSERT INTO specifications (id, document, created_at, updated_at) VALUES ('bad', '{}', ?1, ?1)",
                params![Utc::now()],
            )
            .unwrap();
        }

        assert!(matches!(store.find_by_id("bad"), Err(StoreError::Document(_))));
    }
}
