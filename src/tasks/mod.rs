//! Todo task management.
//!
//! This module provides the persistent todo store:
//! - Tasks identified by a stable 8-hex-character uid
//! - Conditional done/undone transitions (the status precondition is checked
//!   atomically with the write)
//! - Bulk transitions and deletes returning affected counts
//! - Idempotent single-task delete
//!
//! # Example
//!
//! ```no_run
//! use todo_cli::tasks::{SqliteTaskStore, StatusFilter, TaskStore};
//!
//! let store = SqliteTaskStore::new("/tmp/todo.sqlite3").unwrap();
//!
//! // Create a task and complete it
//! let task = store.create("Buy milk").unwrap();
//! store.mark_done(&task.uid).unwrap();
//!
//! // Only done tasks
//! let done = store.list(StatusFilter::Done).unwrap();
//! assert_eq!(done.len(), 1);
//! ```

pub mod models;
pub mod store;
pub mod uid;

pub use models::{StatusFilter, Task};
pub use store::{SqliteTaskStore, TaskStore};
pub use uid::{disable_deterministic_uids, enable_deterministic_uids, generate_uid};
