//! The view engine

use std::num::NonZeroUsize;

use super::model::{SortOrder, TaskCounts, ViewParameters, ViewResult};
use crate::task::Task;

/// Tasks per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(size) => size,
    None => panic!("page size must be non-zero"),
};

/// Number of pages needed for `matched` tasks; at least one
pub fn total_pages(matched: usize, page_size: NonZeroUsize) -> usize {
    matched.div_ceil(page_size.get()).max(1)
}

/// Compute the page of tasks to display.
///
/// `tasks` is the full collection in stored order. Steps run in a fixed
/// order: status filter, search filter, stable sort on `created_at`,
/// pagination with the requested page clamped into range. Counts always
/// cover the whole collection.
pub fn compute_view<'a, I>(tasks: I, params: &ViewParameters, page_size: NonZeroUsize) -> ViewResult
where
    I: IntoIterator<Item = &'a Task>,
{
    let query = SearchQuery::new(&params.search_text);
    let mut counts = TaskCounts::default();
    let mut matched: Vec<&Task> = Vec::new();

    for task in tasks {
        counts.record(task.status);
        if params.status_filter.matches(task.status) && query.matches(task) {
            matched.push(task);
        }
    }

    // sort_by is stable: equal timestamps keep their filtered order
    match params.sort_order {
        SortOrder::Newest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }

    let total_matched = matched.len();
    let total_pages = total_pages(total_matched, page_size);
    let current_page = params.page.clamp(1, total_pages);
    let start = (current_page - 1) * page_size.get();

    let items = matched
        .into_iter()
        .skip(start)
        .take(page_size.get())
        .cloned()
        .collect();

    ViewResult {
        items,
        total_matched,
        total_pages,
        current_page,
        counts,
    }
}

/// Trimmed, lower-cased needle; `None` matches everything
struct SearchQuery(Option<String>);

impl SearchQuery {
    fn new(text: &str) -> Self {
        let needle = text.trim().to_lowercase();
        Self((!needle.is_empty()).then_some(needle))
    }

    fn matches(&self, task: &Task) -> bool {
        match &self.0 {
            Some(needle) => task.search_text().contains(needle.as_str()),
            None => true,
        }
    }
}
