//! Tabular rendering of todo lists.
//!
//! Renders a rounded-border table whose column widths fit the content.
//! Widths are measured in terminal display columns, not bytes, so the
//! status emoji (2 columns wide) and non-ASCII descriptions stay aligned.

use crate::tasks::Task;
use chrono::NaiveDateTime;
use unicode_width::UnicodeWidthStr;

/// Column headers, in render order.
const HEADERS: [&str; 6] = ["S.No.", "UID", "Task", "Status", "Created At", "Completed At"];

/// Status cell for a completed todo.
const STATUS_DONE: &str = "\u{2705}";

/// Status cell for a pending todo.
const STATUS_PENDING: &str = "\u{274c}";

/// Placeholder for a completion time that is not set.
const NO_TIMESTAMP: &str = "-";

/// Display form of timestamps, e.g. `02-Jan-2026 3:04:05 PM`.
const TIME_DISPLAY_FORMAT: &str = "%d-%b-%Y %-I:%M:%S %p";

/// Stored form written by `datetime('now')`.
const TIME_STORED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render tasks as a table.
///
/// An empty slice renders the header-only table (zero body rows).
#[must_use]
pub fn render(tasks: &[Task]) -> String {
    let rows: Vec<[String; 6]> =
        tasks.iter().enumerate().map(|(index, task)| row_cells(index, task)).collect();

    let mut widths: [usize; 6] = HEADERS.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.as_str().width());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(border(&widths, '\u{256d}', '\u{252c}', '\u{256e}'));
    lines.push(format_row(&widths, &HEADERS.map(String::from)));
    if !rows.is_empty() {
        lines.push(border(&widths, '\u{251c}', '\u{253c}', '\u{2524}'));
    }
    for row in &rows {
        lines.push(format_row(&widths, row));
    }
    lines.push(border(&widths, '\u{2570}', '\u{2534}', '\u{256f}'));

    lines.join("\n")
}

/// Build the cells for one task row.
fn row_cells(index: usize, task: &Task) -> [String; 6] {
    let status = if task.done { STATUS_DONE } else { STATUS_PENDING };
    let completed =
        task.completed_at.as_deref().map_or_else(|| NO_TIMESTAMP.to_string(), format_timestamp);

    [
        (index + 1).to_string(),
        task.uid.clone(),
        task.description.clone(),
        status.to_string(),
        format_timestamp(&task.created_at),
        completed,
    ]
}

/// Format a stored UTC timestamp for display.
///
/// Values that do not parse as the stored form pass through untouched.
fn format_timestamp(stored: &str) -> String {
    NaiveDateTime::parse_from_str(stored, TIME_STORED_FORMAT)
        .map_or_else(|_| stored.to_string(), |dt| dt.format(TIME_DISPLAY_FORMAT).to_string())
}

/// A horizontal border line.
fn border(widths: &[usize; 6], left: char, sep: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(sep);
        }
        line.push_str(&"\u{2500}".repeat(width + 2));
    }
    line.push(right);
    line
}

/// A content line, each cell left-aligned and padded to its column width.
fn format_row(widths: &[usize; 6], cells: &[String; 6]) -> String {
    let mut line = String::new();
    for (width, cell) in widths.iter().zip(cells.iter()) {
        line.push('\u{2502}');
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(width - cell.as_str().width()));
        line.push(' ');
    }
    line.push('\u{2502}');
    line
}
