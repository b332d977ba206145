//! CLI binary for the todo tracker.
//!
//! A thin wrapper that collects arguments and delegates to the library.

use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    if env::var("TODO_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("todo_cli=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let args: Vec<String> = env::args().collect();
    let output = todo_cli::cli::run(&args);

    for msg in output.stdout {
        println!("{msg}");
    }
    for msg in output.stderr {
        eprintln!("{msg}");
    }

    output.exit_code
}
