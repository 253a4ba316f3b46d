//! Derived-view computation
//!
//! Turns the full task collection plus the user's view parameters into the
//! page of tasks to display. Pure: the collection is never mutated and the
//! same inputs always produce the same result.

mod engine;
mod model;

pub use engine::{compute_view, total_pages, DEFAULT_PAGE_SIZE};
pub use model::{SortOrder, StatusFilter, TaskCounts, ViewParameters, ViewResult};
