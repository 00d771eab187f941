pub mod models;


use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};

pub use models::*;

/// Read-only record store over the pre-existing `zipfiles` table.
///
/// Independent requests may each open their own store; nothing here mutates
/// after creation, so no coordination is needed.
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Open an existing subtitle database read-only.
    ///
    /// A missing or unopenable database is the store-unavailable failure:
    /// fatal for the current request, never retried.
    pub fn open(db_path: &Path) -> Result<Self> {
        if !db_path.exists() {
            bail!("subtitle database not found at {}", db_path.display());
        }

        let conn = Connection::open_with_flags(db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .with_context(|| format!("failed to open {}", db_path.display()))?;

        conn.execute_batch(
            "
            PRAGMA cache_size=10000;
            PRAGMA temp_store=MEMORY;
        ",
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create a fresh, writable database. Only the sample-database seeder and
    /// tests go through here; normal operation is read-only.
    pub fn create(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("failed to create {}", db_path.display()))?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;

        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS zipfiles (
                num INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                content BLOB NOT NULL
            );
        "#,
        )?;
        Ok(())
    }

    // =========================================================================
    // Record access
    // =========================================================================

    /// Fetch records in ascending id order. `limit` caps how many rows are
    /// loaded; `None` loads everything.
    pub fn all_records(&self, limit: Option<i64>) -> Result<Vec<SubtitleRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare("SELECT num, name, content FROM zipfiles ORDER BY num LIMIT ?1")?;

        let records = stmt
            .query_map(params![limit.unwrap_or(-1)], |row| {
                Ok(SubtitleRecord {
                    id: row.get(0)?,
                    file_name: row.get(1)?,
                    payload: row.get(2)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(records)
    }

    /// Fetch a single record by id.
    pub fn record_by_id(&self, id: i64) -> Result<Option<SubtitleRecord>> {
        let conn = self.conn.lock().unwrap();
        let record = conn
            .query_row(
                "SELECT num, name, content FROM zipfiles WHERE num = ?1",
                params![id],
                |row| {
                    Ok(SubtitleRecord {
                        id: row.get(0)?,
                        file_name: row.get(1)?,
                        payload: row.get(2)?,
                    })
                },
            )
            .optional()?;

        Ok(record)
    }

    /// Listing rows (id, name, payload size) without loading payload bytes.
    pub fn summaries(&self, limit: Option<i64>) -> Result<Vec<RecordSummary>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare("SELECT num, name, length(content) FROM zipfiles ORDER BY num LIMIT ?1")?;

        let summaries = stmt
            .query_map(params![limit.unwrap_or(-1)], |row| {
                Ok(RecordSummary {
                    id: row.get(0)?,
                    file_name: row.get(1)?,
                    payload_size: row.get(2)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(summaries)
    }

    pub fn record_count(&self) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM zipfiles", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Insert one record. Seeder/test path only.
    pub fn insert_record(&self, id: i64, file_name: &str, payload: &[u8]) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO zipfiles (num, name, content) VALUES (?1, ?2, ?3)",
            params![id, file_name, payload],
        )?;
        Ok(())
    }
}
