//! Error types for `todo_cli`.

use std::path::PathBuf;

/// Errors that can occur while running the todo CLI.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The database could not be opened or its schema initialized.
    #[error("storage unavailable at {path}: {source}")]
    StorageUnavailable {
        /// The database path that could not be opened.
        path: PathBuf,
        /// The underlying `SQLite` failure.
        #[source]
        source: rusqlite::Error,
    },

    /// A statement failed against an open database.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A conditional done transition matched no pending row: the uid does
    /// not exist or the todo is already done.
    #[error("no matching todo or already done: {0}")]
    NotFoundOrAlreadyDone(String),

    /// A conditional undone transition matched no done row: the uid does
    /// not exist or the todo is already pending.
    #[error("no matching todo or already undone: {0}")]
    NotFoundOrAlreadyUndone(String),
}

impl Error {
    /// Whether this error is a failed transition precondition rather than a
    /// storage failure.
    ///
    /// Transition preconditions are checked by the database atomically with
    /// the write, so this is the only signal distinguishing "nothing to do"
    /// from "storage broke".
    #[must_use]
    pub const fn is_precondition_failure(&self) -> bool {
        matches!(self, Self::NotFoundOrAlreadyDone(_) | Self::NotFoundOrAlreadyUndone(_))
    }
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
