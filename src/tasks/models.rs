//! Task model types for the todo tracker.

/// A single todo task.
///
/// Timestamps are the store's UTC text form (`YYYY-MM-DD HH:MM:SS`); they are
/// parsed only at the presentation edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Internal sequential identifier. Assigned by the store, used only for
    /// storage ordering, never shown to the user.
    pub id: i64,
    /// Externally visible stable identifier: exactly 8 lowercase hex
    /// characters, assigned at creation, immutable.
    pub uid: String,
    /// Free-text task content, stored verbatim (may be empty).
    pub description: String,
    /// Whether the task has been completed.
    pub done: bool,
    /// Creation timestamp, set by the database, immutable.
    pub created_at: String,
    /// Completion timestamp. Non-null exactly while `done` is true.
    pub completed_at: Option<String>,
}

/// Status filter for listing tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every task regardless of status.
    #[default]
    All,
    /// Only completed tasks.
    Done,
    /// Only tasks still pending.
    Pending,
}

impl StatusFilter {
    /// The `status` column value this filter matches, or `None` for no
    /// predicate at all.
    #[must_use]
    pub const fn as_status_predicate(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Done => Some(true),
            Self::Pending => Some(false),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::Done => "done",
            Self::Pending => "pending",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_predicates() {
        assert_eq!(StatusFilter::All.as_status_predicate(), None);
        assert_eq!(StatusFilter::Done.as_status_predicate(), Some(true));
        assert_eq!(StatusFilter::Pending.as_status_predicate(), Some(false));
    }

    #[test]
    fn test_status_filter_default_is_all() {
        assert_eq!(StatusFilter::default(), StatusFilter::All);
    }

    #[test]
    fn test_status_filter_display() {
        assert_eq!(StatusFilter::All.to_string(), "all");
        assert_eq!(StatusFilter::Done.to_string(), "done");
        assert_eq!(StatusFilter::Pending.to_string(), "pending");
    }
}
