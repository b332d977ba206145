//! Integration tests for `todo_cli`.

use std::process::ExitCode;
use tempfile::TempDir;
use todo_cli::cli::run;
use todo_cli::tasks::{SqliteTaskStore, StatusFilter, TaskStore};
use todo_cli::VERSION;

#[test]
fn test_version_exists() {
    assert!(!VERSION.is_empty());
}

fn argv(parts: &[&str]) -> Vec<String> {
    std::iter::once("todo")
        .chain(parts.iter().copied())
        .map(String::from)
        .collect()
}

#[test]
#[serial_test::serial]
fn test_full_todo_lifecycle() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("todo.sqlite3");
    std::env::set_var("TODO_DB", &db);

    // Add a todo and find it pending in the list.
    let output = run(&argv(&["add", "Buy milk"]));
    assert_eq!(output.exit_code, ExitCode::SUCCESS);
    assert!(output.stdout[0].contains("Todo added successfully!"));

    let output = run(&argv(&["list"]));
    assert_eq!(output.exit_code, ExitCode::SUCCESS);
    assert!(output.stdout[0].contains("Buy milk"));
    assert!(output.stdout[0].contains("\u{274c}"));

    // Complete it by uid and find it in the done view with a timestamp.
    let store = SqliteTaskStore::new(&db).unwrap();
    let uid = store.list(StatusFilter::All).unwrap()[0].uid.clone();

    let output = run(&argv(&["done", &uid]));
    assert_eq!(output.exit_code, ExitCode::SUCCESS);

    let output = run(&argv(&["list", "--done"]));
    assert_eq!(output.exit_code, ExitCode::SUCCESS);
    let done_view = &output.stdout[0];
    assert!(done_view.contains("Buy milk"));
    assert!(done_view.contains("\u{2705}"));
    assert!(done_view.contains(&uid));
    assert!(done_view.contains("AM") || done_view.contains("PM"));

    // Delete everything and end with an empty store.
    let output = run(&argv(&["delete", "all"]));
    assert_eq!(output.exit_code, ExitCode::SUCCESS);
    assert!(output.stdout[0].contains("All 1 todos deleted successfully!"));

    assert!(store.list(StatusFilter::All).unwrap().is_empty());
}
