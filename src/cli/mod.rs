//! Command-line interface for the todo tracker.
//!
//! Parsing is declared with clap derive; execution lives in [`run`]. The
//! router owns every exit code, including the ones clap would normally
//! exit with itself, so unrecognized tokens can be routed through the
//! suggestion layer in [`crate::suggest`] instead of clap's default
//! error path.

mod run;


pub use run::{run, CliOutput};

use clap::{Parser, Subcommand};

/// Recognized command names, in the order ties are broken when suggesting
/// a replacement for a mistyped command.
pub const COMMAND_VOCABULARY: &[&str] =
    &["add", "list", "done", "undone", "delete", "help", "version"];

/// Recognized option flags, in the order ties are broken when suggesting
/// a replacement for a mistyped flag.
pub const FLAG_VOCABULARY: &[&str] = &["--done", "--help", "--version"];

/// A single-shot todo tracker.
///
/// Every invocation performs one operation against the todo database and
/// exits. The database lives at the path in the `TODO_DB` environment
/// variable, falling back to `~/.todo/todo.sqlite3`.
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new todo
    ///
    /// The description is one argument; quote it to include spaces. It is
    /// stored exactly as given and never rewritten afterwards.
    Add {
        /// Text of the todo
        #[arg(value_name = "TASK")]
        text: String,
    },

    /// List todos in a table
    ///
    /// Rows appear in creation order. The UID column is how todos are
    /// addressed in done, undone, and delete.
    List {
        /// Show only completed todos
        #[arg(long)]
        done: bool,
    },

    /// Mark a todo as done
    ///
    /// Records the completion time. A todo that is already done, or does
    /// not exist, is reported as an error.
    Done {
        /// Todo uid, or `all` for every pending todo
        #[arg(value_name = "UID")]
        target: String,
    },

    /// Mark a todo as not done
    ///
    /// Clears the completion time. A todo that is still pending, or does
    /// not exist, is reported as an error.
    Undone {
        /// Todo uid, or `all` for every completed todo
        #[arg(value_name = "UID")]
        target: String,
    },

    /// Delete a todo
    ///
    /// Deleting a uid that does not exist is not an error.
    Delete {
        /// Todo uid, or `all` for every todo
        #[arg(value_name = "UID")]
        target: String,
    },

    /// Print the version banner
    Version,
}

/// What a mutating command operates on: one todo addressed by uid, or
/// every row the operation applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single todo addressed by its uid.
    Single(String),
    /// Every matching todo.
    All,
}

impl Target {
    /// Resolve the bulk sentinel in a target argument.
    ///
    /// Generated uids are eight hex characters, so the literal `all` can
    /// never name a real todo.
    #[must_use]
    pub fn parse(arg: &str) -> Self {
        if arg == "all" {
            Self::All
        } else {
            Self::Single(arg.to_string())
        }
    }
}
