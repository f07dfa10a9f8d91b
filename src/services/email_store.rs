//! SQLite-backed sink for email addresses captured from chat messages.
//!
//! The store is append-only: rows are inserted, never updated or deleted.
//! A single rusqlite `Connection` sits behind a mutex; async callers go
//! through [`EmailStore::save_email`], which hops onto the blocking pool.

use std::{
    fmt::Debug,
    path::Path,
    sync::{Arc, Mutex},
};

use rusqlite::{Connection, params};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("database lock poisoned")]
    LockPoisoned,
    #[error("blocking task failed: {0}")]
    Join(String),
}

/// A row of the `emails` table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailRecord {
    pub id: i64,
    pub email: String,
}

#[derive(Clone)]
pub struct EmailStore {
    conn: Arc<Mutex<Connection>>,
}

impl Debug for EmailStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailStore").finish_non_exhaustive()
    }
}

impl EmailStore {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        info!("email store opened at {}", path.display());
        Ok(store)
    }

    /// In-memory database, mostly for tests.
    pub fn in_memory() -> Result<Self, StoreError> {
        let store = Self {
            conn: Arc::new(Mutex::new(Connection::open_in_memory()?)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create the `emails` table if it does not exist yet. Safe to call repeatedly.
    pub fn init_schema(&self) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS emails (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    email TEXT NOT NULL
                )",
            )?;
            Ok(())
        })
    }

    /// Run `f` with exclusive access to the connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, StoreError>,
    {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        f(&conn)
    }

    /// Synchronous insert. Returns the new row id.
    pub fn insert_email(&self, email: &str) -> Result<i64, StoreError> {
        self.with_conn(|conn| {
            conn.execute("INSERT INTO emails (email) VALUES (?1)", params![email])?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Append `email` to the store without blocking the async runtime.
    pub async fn save_email(&self, email: &str) -> Result<i64, StoreError> {
        let store = self.clone();
        let email = email.to_string();
        let id = tokio::task::spawn_blocking(move || store.insert_email(&email))
            .await
            .map_err(|e| StoreError::Join(e.to_string()))??;
        debug!(id, "email row inserted");
        Ok(id)
    }

    pub fn list_emails(&self) -> Result<Vec<EmailRecord>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, email FROM emails ORDER BY id")?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(EmailRecord {
                        id: row.get(0)?,
                        email: row.get(1)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn count(&self) -> Result<i64, StoreError> {
        self.with_conn(|conn| {
            Ok(conn.query_row("SELECT COUNT(*) FROM emails", [], |row| row.get(0))?)
        })
    }
}
