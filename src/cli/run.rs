//! Command execution for the CLI.
//!
//! This module handles running CLI commands and producing output. clap
//! parse failures are intercepted here instead of being allowed to exit
//! the process, which routes mistyped commands and flags through the
//! suggestion layer and keeps every exit code under the router's control.

use crate::cli::{Cli, Command, Target, COMMAND_VOCABULARY, FLAG_VOCABULARY};
use crate::error::{Error, Result};
use crate::paths;
use crate::style::{paint, Style};
use crate::suggest::{closest, MAX_SUGGEST_DISTANCE};
use crate::table;
use crate::tasks::{SqliteTaskStore, StatusFilter, TaskStore};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Output from running the CLI, with separate stdout and stderr messages.
#[derive(Debug)]
pub struct CliOutput {
    /// Exit code for the process.
    pub exit_code: ExitCode,
    /// Messages to print to stdout.
    pub stdout: Vec<String>,
    /// Messages to print to stderr.
    pub stderr: Vec<String>,
}

/// Run the CLI for a full argument vector, `argv[0]` included.
pub fn run(args: &[String]) -> CliOutput {
    match Cli::try_parse_from(args) {
        Ok(cli) => dispatch(cli.command),
        Err(err) => handle_parse_error(&err),
    }
}

fn dispatch(command: Command) -> CliOutput {
    tracing::debug!(?command, "dispatching command");
    match command {
        Command::Add { text } => run_add(&text),
        Command::List { done } => run_list(done),
        Command::Done { target } => run_done(&Target::parse(&target)),
        Command::Undone { target } => run_undone(&Target::parse(&target)),
        Command::Delete { target } => run_delete(&Target::parse(&target)),
        Command::Version => run_version(),
    }
}

// === Parse failures ===

/// Map a clap parse failure onto router-owned output.
///
/// Help and version requests succeed; everything else exits 1. Unknown
/// commands and flags go through [`closest`] before falling back to the
/// not-found messages.
fn handle_parse_error(err: &clap::Error) -> CliOutput {
    match err.kind() {
        ErrorKind::DisplayHelp => CliOutput {
            exit_code: ExitCode::SUCCESS,
            stdout: vec![err.to_string()],
            stderr: vec![],
        },
        ErrorKind::DisplayVersion => run_version(),
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => CliOutput {
            exit_code: ExitCode::from(1),
            stdout: vec![],
            stderr: vec![
                paint(
                    "No command provided. Use 'todo help' for usage instructions.",
                    &[Style::Bold, Style::Red],
                ),
                err.to_string(),
            ],
        },
        ErrorKind::InvalidSubcommand => {
            advise_unknown_command(&error_token(err, ContextKind::InvalidSubcommand), err)
        }
        ErrorKind::UnknownArgument => {
            let token = error_token(err, ContextKind::InvalidArg);
            if token.starts_with('-') {
                advise_unknown_flag(&token, err)
            } else {
                error_output(err.to_string())
            }
        }
        _ => error_output(err.to_string()),
    }
}

/// The offending token attached to a rich clap error, if any.
fn error_token(err: &clap::Error, kind: ContextKind) -> String {
    match err.get(kind) {
        Some(ContextValue::String(token)) => token.clone(),
        _ => String::new(),
    }
}

fn advise_unknown_command(token: &str, err: &clap::Error) -> CliOutput {
    if token.is_empty() {
        return error_output(err.to_string());
    }
    if let Some(suggestion) = closest(token, COMMAND_VOCABULARY, MAX_SUGGEST_DISTANCE) {
        return error_output(format!("Did you mean {suggestion}?"));
    }
    CliOutput {
        exit_code: ExitCode::from(1),
        stdout: vec![],
        stderr: vec!["No such command".to_string(), top_level_help()],
    }
}

fn advise_unknown_flag(token: &str, err: &clap::Error) -> CliOutput {
    // An exact vocabulary member in the wrong position is an arity
    // problem, not a typo.
    if token.is_empty() || FLAG_VOCABULARY.contains(&token) {
        return error_output(err.to_string());
    }
    match closest(token, FLAG_VOCABULARY, MAX_SUGGEST_DISTANCE) {
        Some(suggestion) => error_output(format!("Did you mean {suggestion}?")),
        None => error_output("No such option available".to_string()),
    }
}

/// Rendered top-level help, shown after "No such command".
fn top_level_help() -> String {
    Cli::command().render_help().to_string()
}

// === Commands ===

fn run_add(text: &str) -> CliOutput {
    let store = match open_store() {
        Ok(store) => store,
        Err(e) => return init_failure_output(&e),
    };
    match store.create(text) {
        Ok(task) => {
            tracing::debug!(uid = %task.uid, "todo added");
            success_output(paint("Todo added successfully!", &[Style::Bold, Style::Green]))
        }
        Err(e) => error_output(format!("Failed to add todo: {e}")),
    }
}

fn run_list(done_only: bool) -> CliOutput {
    let filter = if done_only {
        StatusFilter::Done
    } else {
        StatusFilter::All
    };
    let store = match open_store() {
        Ok(store) => store,
        Err(e) => return init_failure_output(&e),
    };
    match store.list(filter) {
        Ok(tasks) => success_output(table::render(&tasks)),
        Err(e) => error_output(format!("Failed to list todos: {e}")),
    }
}

fn run_done(target: &Target) -> CliOutput {
    let store = match open_store() {
        Ok(store) => store,
        Err(e) => return init_failure_output(&e),
    };
    match target {
        Target::All => match store.mark_all_done() {
            Ok(count) => success_output(format!("Marked {count} todos as done!")),
            Err(e) => error_output(format!("Failed to mark all todos as done: {e}")),
        },
        Target::Single(uid) => match store.mark_done(uid) {
            Ok(()) => success_output(paint("Todo marked done!", &[Style::Bold, Style::Green])),
            Err(e) => error_output(format!("Failed to mark todo as done: {e}")),
        },
    }
}

fn run_undone(target: &Target) -> CliOutput {
    let store = match open_store() {
        Ok(store) => store,
        Err(e) => return init_failure_output(&e),
    };
    match target {
        Target::All => match store.mark_all_undone() {
            Ok(count) => success_output(format!("Unmarked {count} todos as undone!")),
            Err(e) => error_output(format!("Failed to mark all todos as undone: {e}")),
        },
        Target::Single(uid) => match store.mark_undone(uid) {
            Ok(()) => success_output(paint("Todo marked undone!", &[Style::Bold, Style::Green])),
            Err(e) => error_output(format!("Failed to mark todo as undone: {e}")),
        },
    }
}

fn run_delete(target: &Target) -> CliOutput {
    let store = match open_store() {
        Ok(store) => store,
        Err(e) => return init_failure_output(&e),
    };
    match target {
        Target::All => match store.delete_all() {
            Ok(count) => success_output(paint(
                &format!("All {count} todos deleted successfully!"),
                &[Style::Bold, Style::Green],
            )),
            Err(e) => error_output(format!("Failed to delete all todos: {e}")),
        },
        Target::Single(uid) => match store.delete(uid) {
            Ok(removed) => {
                if !removed {
                    tracing::debug!(uid = %uid, "delete matched no rows");
                }
                success_output(paint(
                    "Todo deleted successfully!",
                    &[Style::Bold, Style::Green],
                ))
            }
            Err(e) => error_output(format!("Failed to delete todo: {e}")),
        },
    }
}

fn run_version() -> CliOutput {
    success_output(paint(
        &format!("Todo CLI v{}", crate::VERSION),
        &[Style::Bold, Style::Green, Style::Underline],
    ))
}

// === Store bootstrap ===

/// Open the todo store via the documented fallback chain.
///
/// The path comes from `TODO_DB` or the default location. If that open
/// fails the user is prompted once for an alternative path; a second
/// failure is final.
fn open_store() -> Result<SqliteTaskStore> {
    open_store_with(prompt_for_db_path)
}

pub(super) fn open_store_with<F>(prompt: F) -> Result<SqliteTaskStore>
where
    F: FnOnce() -> Option<PathBuf>,
{
    let (path, source) = paths::resolve_db_path();
    tracing::debug!(path = %path.display(), ?source, "resolved todo database path");
    match SqliteTaskStore::new(&path) {
        Ok(store) => Ok(store),
        Err(first) => {
            eprintln!("Failed to open todo database at {}: {first}", path.display());
            match prompt() {
                Some(alternative) => SqliteTaskStore::new(alternative),
                None => Err(first),
            }
        }
    }
}

/// Ask for an alternative database path on stderr and read one line.
///
/// Returns `None` on EOF, read failure, or blank input.
fn prompt_for_db_path() -> Option<PathBuf> {
    eprint!("Enter database path: ");
    let _ = std::io::stderr().flush();
    let mut line = String::new();
    match std::io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(PathBuf::from(trimmed))
            }
        }
    }
}

// === Output helpers ===

fn init_failure_output(e: &Error) -> CliOutput {
    error_output(format!("Failed to initialize database: {e}"))
}

fn success_output(message: String) -> CliOutput {
    CliOutput {
        exit_code: ExitCode::SUCCESS,
        stdout: vec![message],
        stderr: vec![],
    }
}

fn error_output(message: String) -> CliOutput {
    CliOutput {
        exit_code: ExitCode::from(1),
        stdout: vec![],
        stderr: vec![message],
    }
}
