//! # `todo_cli`
//!
//! A single-shot command-line todo tracker backed by SQLite.

pub mod cli;
pub mod error;
pub mod paths;
pub mod style;
pub mod suggest;
pub mod table;
pub mod tasks;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
