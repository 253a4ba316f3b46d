//! Display helpers for list rows, the preview pane and pagination links

use chrono::{DateTime, Utc};
use serde::Serialize;

use tm_core::task::{Task, TaskId, TaskStatus};

const ELLIPSIS: char = '…';
const NO_DESCRIPTION: &str = "(no description)";

/// Cut `text` to at most `width` characters, marking the cut with `…`
pub fn preview(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push(ELLIPSIS);
    out
}

/// Human-readable timestamp for "Created:" labels
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// One line in the task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub created: String,
}

impl TaskRow {
    pub fn from_task(task: &Task, preview_width: usize) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: preview(&task.description, preview_width),
            status: task.status,
            created: format_timestamp(task.created_at),
        }
    }
}

/// Full details for the preview pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub created: String,
}

impl From<&Task> for TaskDetail {
    fn from(task: &Task) -> Self {
        let description = if task.description.is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            task.description.clone()
        };
        Self {
            title: task.title.clone(),
            description,
            status: task.status,
            created: format_timestamp(task.created_at),
        }
    }
}

/// Prev / numbered / next links for a pager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLinks {
    /// Target of the "Prev" link; `None` when disabled
    pub prev: Option<usize>,
    /// Contiguous run of page numbers to show
    pub pages: Vec<usize>,
    pub current: usize,
    /// Target of the "Next" link; `None` when disabled
    pub next: Option<usize>,
}

impl PageLinks {
    /// At most `window` page numbers around `current`, shifted to stay
    /// inside `[1, total_pages]`.
    pub fn new(current: usize, total_pages: usize, window: usize) -> Self {
        let total_pages = total_pages.max(1);
        let window = window.clamp(1, total_pages);
        let current = current.clamp(1, total_pages);

        let mut start = current.saturating_sub(window / 2).max(1);
        let end = start.saturating_add(window - 1).min(total_pages);
        if end - start < window - 1 {
            start = (end + 1).saturating_sub(window).max(1);
        }

        Self {
            prev: (current > 1).then(|| current - 1),
            pages: (start..=end).collect(),
            current,
            next: (current < total_pages).then(|| current + 1),
        }
    }
}
