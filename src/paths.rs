//! Path resolution for the todo database.
//!
//! The database location is resolved in order: the `TODO_DB` environment
//! variable if set, otherwise `~/.todo/todo.sqlite3`, falling back to
//! `./todo.sqlite3` when no home directory can be determined.

use std::path::PathBuf;

/// Environment variable overriding the database path.
pub const DB_ENV_VAR: &str = "TODO_DB";

/// The data directory name under the home directory.
const DATA_DIR_NAME: &str = ".todo";

/// The database filename.
pub const DATABASE_FILENAME: &str = "todo.sqlite3";

/// Where a resolved database path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// The `TODO_DB` environment variable.
    Environment,
    /// The built-in default location.
    Default,
}

/// Get the default database path.
///
/// Returns `~/.todo/todo.sqlite3`, or `./todo.sqlite3` if the home
/// directory cannot be determined.
#[must_use]
pub fn default_db_path() -> PathBuf {
    dirs::home_dir().map_or_else(
        || PathBuf::from(DATABASE_FILENAME),
        |home| home.join(DATA_DIR_NAME).join(DATABASE_FILENAME),
    )
}

/// Resolve the database path, reporting which source decided it.
#[must_use]
pub fn resolve_db_path() -> (PathBuf, PathSource) {
    match std::env::var_os(DB_ENV_VAR) {
        Some(value) if !value.is_empty() => (PathBuf::from(value), PathSource::Environment),
        _ => (default_db_path(), PathSource::Default),
    }
}
