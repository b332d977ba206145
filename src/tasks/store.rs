//! Task store trait and `SQLite` implementation.
//!
//! Every status transition is a single conditional write
//! (`UPDATE ... WHERE status = <expected>`): the precondition is checked by
//! the database atomically with the mutation, and the affected-row count is
//! the sole signal deciding success vs. "precondition not met". There is no
//! read-then-write anywhere, so concurrent invocations against the same
//! database cannot both complete the same todo or leave a half-set
//! completion timestamp.

use crate::error::{Error, Result};
use crate::tasks::models::{StatusFilter, Task};
use crate::tasks::uid::generate_uid;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

/// Trait for todo storage operations.
///
/// All methods return a `Result` and may fail with database errors.
#[allow(clippy::missing_errors_doc)]
pub trait TaskStore {
    /// Create a new pending task with the given description (stored
    /// verbatim, empty allowed) and a freshly generated uid.
    fn create(&self, description: &str) -> Result<Task>;

    /// List tasks matching the filter, ascending by creation time.
    /// An empty result is not an error.
    fn list(&self, filter: StatusFilter) -> Result<Vec<Task>>;

    /// Transition one pending task to done, setting its completion time.
    /// Fails with [`Error::NotFoundOrAlreadyDone`] when no pending row
    /// matches the uid.
    fn mark_done(&self, uid: &str) -> Result<()>;

    /// Transition every pending task to done in one statement; returns the
    /// number of tasks affected (0 is success).
    fn mark_all_done(&self) -> Result<usize>;

    /// Transition one done task back to pending, clearing its completion
    /// time. Fails with [`Error::NotFoundOrAlreadyUndone`] when no done row
    /// matches the uid.
    fn mark_undone(&self, uid: &str) -> Result<()>;

    /// Transition every done task back to pending; returns the number of
    /// tasks affected.
    fn mark_all_undone(&self) -> Result<usize>;

    /// Delete the task with the given uid. Returns whether a row was
    /// removed; absence of a match is not an error (idempotent).
    fn delete(&self, uid: &str) -> Result<bool>;

    /// Delete every task; returns the number removed.
    fn delete_all(&self) -> Result<usize>;
}

/// How many times an insert retries a fresh uid after a UNIQUE rejection.
const UID_INSERT_ATTEMPTS: u32 = 3;

/// Columns selected whenever a full task row is read.
const TASK_COLUMNS: &str = "id, uid, task, status, created_at, completed_at";

/// SQLite-based todo store.
///
/// Holds only the database path; each operation opens a fresh connection
/// that is dropped (and the database released) when the operation returns,
/// on error paths included.
#[derive(Debug, Clone)]
pub struct SqliteTaskStore {
    db_path: PathBuf,
}

impl SqliteTaskStore {
    /// Create a new `SQLite` todo store at the given database path.
    ///
    /// Creates the parent directory and ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageUnavailable`] if the database cannot be
    /// opened or its schema initialized.
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self> {
        let store = Self { db_path: db_path.as_ref().to_path_buf() };
        store.init_schema()?;
        Ok(store)
    }

    /// Get the database path.
    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Open a connection to the database.
    fn open(&self) -> Result<Connection> {
        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        tracing::debug!(path = %self.db_path.display(), "opening todo database");
        let conn = Connection::open(&self.db_path).map_err(|e| self.unavailable(e))?;
        // busy_timeout bounds how long a concurrent invocation waits for the
        // database lock before the operation fails.
        conn.execute_batch(
            "PRAGMA foreign_keys = ON; PRAGMA journal_mode = WAL; PRAGMA busy_timeout = 5000;",
        )
        .map_err(|e| self.unavailable(e))?;
        Ok(conn)
    }

    /// Initialize the database schema.
    fn init_schema(&self) -> Result<()> {
        let conn = self.open()?;

        conn.execute_batch(
            r"
            -- Core todos table
            CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                uid TEXT NOT NULL UNIQUE,
                task TEXT NOT NULL,
                status INTEGER NOT NULL DEFAULT 0 CHECK (status IN (0, 1)),
                created_at TEXT NOT NULL DEFAULT (datetime('now')),
                completed_at TEXT,
                -- completed_at is set exactly while the todo is done
                CHECK ((completed_at IS NULL) = (status = 0))
            );

            -- Index for status-filtered listings
            CREATE INDEX IF NOT EXISTS idx_todos_status ON todos(status);
            ",
        )
        .map_err(|e| self.unavailable(e))?;

        Ok(())
    }

    /// Wrap a `SQLite` failure from connection setup as storage
    /// unavailability.
    fn unavailable(&self, source: rusqlite::Error) -> Error {
        Error::StorageUnavailable { path: self.db_path.clone(), source }
    }

    /// Parse a task from a row (column order as in [`TASK_COLUMNS`]).
    fn parse_task(row: &rusqlite::Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            uid: row.get(1)?,
            description: row.get(2)?,
            done: row.get(3)?,
            created_at: row.get(4)?,
            completed_at: row.get(5)?,
        })
    }
}

/// Whether an insert was rejected by a constraint (here only the uid UNIQUE
/// constraint can fire).
fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

impl TaskStore for SqliteTaskStore {
    fn create(&self, description: &str) -> Result<Task> {
        let conn = self.open()?;

        let mut attempt = 0;
        let uid = loop {
            attempt += 1;
            let uid = generate_uid();
            match conn.execute(
                "INSERT INTO todos (uid, task) VALUES (?1, ?2)",
                params![&uid, description],
            ) {
                Ok(_) => break uid,
                Err(e) if is_unique_violation(&e) && attempt < UID_INSERT_ATTEMPTS => {
                    tracing::debug!(%uid, "uid collision, retrying with a fresh token");
                }
                Err(e) => return Err(e.into()),
            }
        };

        // Read the row back so the caller sees the database-assigned id and
        // creation time.
        let task = conn.query_row(
            &format!("SELECT {TASK_COLUMNS} FROM todos WHERE uid = ?1"),
            params![&uid],
            Self::parse_task,
        )?;

        Ok(task)
    }

    fn list(&self, filter: StatusFilter) -> Result<Vec<Task>> {
        let conn = self.open()?;

        // The id tie-break keeps same-second inserts in creation order
        // (created_at has second granularity).
        let tasks = match filter.as_status_predicate() {
            Some(done) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {TASK_COLUMNS} FROM todos
                     WHERE status = ?1 ORDER BY created_at ASC, id ASC"
                ))?;
                let rows = stmt.query_map(params![done], Self::parse_task)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            None => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {TASK_COLUMNS} FROM todos ORDER BY created_at ASC, id ASC"
                ))?;
                let rows = stmt.query_map(params![], Self::parse_task)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
        };

        Ok(tasks)
    }

    fn mark_done(&self, uid: &str) -> Result<()> {
        let conn = self.open()?;

        let rows = conn.execute(
            "UPDATE todos SET status = 1, completed_at = datetime('now')
             WHERE uid = ?1 AND status = 0",
            params![uid],
        )?;

        if rows == 0 {
            return Err(Error::NotFoundOrAlreadyDone(uid.to_string()));
        }
        Ok(())
    }

    fn mark_all_done(&self) -> Result<usize> {
        let conn = self.open()?;

        let rows = conn.execute(
            "UPDATE todos SET status = 1, completed_at = datetime('now') WHERE status = 0",
            params![],
        )?;

        Ok(rows)
    }

    fn mark_undone(&self, uid: &str) -> Result<()> {
        let conn = self.open()?;

        let rows = conn.execute(
            "UPDATE todos SET status = 0, completed_at = NULL
             WHERE uid = ?1 AND status = 1",
            params![uid],
        )?;

        if rows == 0 {
            return Err(Error::NotFoundOrAlreadyUndone(uid.to_string()));
        }
        Ok(())
    }

    fn mark_all_undone(&self) -> Result<usize> {
        let conn = self.open()?;

        let rows = conn.execute(
            "UPDATE todos SET status = 0, completed_at = NULL WHERE status = 1",
            params![],
        )?;

        Ok(rows)
    }

    fn delete(&self, uid: &str) -> Result<bool> {
        let conn = self.open()?;

        let rows = conn.execute("DELETE FROM todos WHERE uid = ?1", params![uid])?;

        Ok(rows > 0)
    }

    fn delete_all(&self) -> Result<usize> {
        let conn = self.open()?;

        let rows = conn.execute("DELETE FROM todos", params![])?;

        Ok(rows)
    }
}
