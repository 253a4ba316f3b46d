//! View parameter and result types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::task::{Task, TaskStatus};
use crate::{Error, Result};

/// Which statuses are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    Pending,
    Done,
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

impl StatusFilter {
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == TaskStatus::Pending,
            Self::Done => status == TaskStatus::Done,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "done" => Ok(Self::Done),
            other => Err(Error::InvalidInput(format!("Unknown status filter: {}", other))),
        }
    }
}

/// Display order by creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Newest,
    Oldest,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Newest
    }
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            other => Err(Error::InvalidInput(format!("Unknown sort order: {}", other))),
        }
    }
}

/// The search/filter/sort/page combination the user has selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewParameters {
    pub search_text: String,
    pub status_filter: StatusFilter,
    pub sort_order: SortOrder,
    /// 1-based; out-of-range values are clamped when the view is computed
    pub page: usize,
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            status_filter: StatusFilter::default(),
            sort_order: SortOrder::default(),
            page: 1,
        }
    }
}

impl ViewParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_status_filter(mut self, filter: StatusFilter) -> Self {
        self.status_filter = filter;
        self
    }

    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

/// Totals across the whole collection, independent of any view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    pub total: usize,
    pub pending: usize,
    pub done: usize,
}

impl TaskCounts {
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            counts.record(task.status);
        }
        counts
    }

    pub(crate) fn record(&mut self, status: TaskStatus) {
        self.total += 1;
        match status {
            TaskStatus::Pending => self.pending += 1,
            TaskStatus::Done => self.done += 1,
        }
    }
}

/// One computed page plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResult {
    pub items: Vec<Task>,
    pub total_matched: usize,
    pub total_pages: usize,
    /// Requested page clamped to `[1, total_pages]`
    pub current_page: usize,
    pub counts: TaskCounts,
}

impl ViewResult {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_matches() {
        assert!(StatusFilter::All.matches(TaskStatus::Pending));
        assert!(StatusFilter::All.matches(TaskStatus::Done));
        assert!(StatusFilter::Done.matches(TaskStatus::Done));
        assert!(!StatusFilter::Done.matches(TaskStatus::Pending));
        assert!(!StatusFilter::Pending.matches(TaskStatus::Done));
    }

    #[test]
    fn test_selector_values_parse() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!("oldest".parse::<SortOrder>().unwrap(), SortOrder::Oldest);
        assert!("title".parse::<SortOrder>().is_err());
        assert!("archived".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_default_parameters() {
        let params = ViewParameters::default();
        assert_eq!(params.search_text, "");
        assert_eq!(params.status_filter, StatusFilter::All);
        assert_eq!(params.sort_order, SortOrder::Newest);
        assert_eq!(params.page, 1);
    }

    #[test]
    fn test_parameters_deserialize_partial() {
        let params: ViewParameters =
            serde_json::from_str(r#"{"searchText":"milk","statusFilter":"done"}"#).unwrap();
        assert_eq!(params.search_text, "milk");
        assert_eq!(params.status_filter, StatusFilter::Done);
        assert_eq!(params.sort_order, SortOrder::Newest);
        assert_eq!(params.page, 1);
    }
}
