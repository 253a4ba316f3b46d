//! Presentation-session state
//!
//! Drives the control flow: mutation, then save, then a fresh view on the
//! next render.

use tracing::{info, warn};

use tm_core::ports::{Clock, IdGenerator, SystemClock, UuidIdGenerator};
use tm_core::store::KeyValueStore;
use tm_core::task::{Task, TaskId, TaskInput, TaskPersistence, TaskRepository};
use tm_core::view::{compute_view, SortOrder, StatusFilter, TaskCounts, ViewParameters, ViewResult};
use tm_core::Result;

use crate::config::SessionConfig;
use crate::display::{PageLinks, TaskDetail, TaskRow};
use crate::seed::demo_tasks;

/// One user's task list session
pub struct TaskSession<S> {
    config: SessionConfig,
    repo: TaskRepository,
    persistence: TaskPersistence<S>,
    params: ViewParameters,
}

impl<S: KeyValueStore> TaskSession<S> {
    /// Open a session using the system clock and random ids
    pub fn open(store: S, config: SessionConfig) -> Result<Self> {
        Self::open_with(store, config, SystemClock, UuidIdGenerator)
    }

    /// Open a session with explicit time and id sources.
    ///
    /// Loads the saved collection. When it is empty and demo seeding is
    /// enabled, the demo tasks are inserted and saved.
    pub fn open_with(
        store: S,
        config: SessionConfig,
        clock: impl Clock + 'static,
        ids: impl IdGenerator + 'static,
    ) -> Result<Self> {
        config.validate()?;
        let persistence = TaskPersistence::with_key(store, config.storage_key.clone())?;

        let mut tasks = persistence.load();
        let seeded = tasks.is_empty() && config.seed_demo_on_empty;
        if seeded {
            tasks = demo_tasks(clock.now(), &ids);
            info!(count = tasks.len(), "Seeded demo tasks");
        }

        let repo = TaskRepository::from_tasks(tasks)
            .with_clock(clock)
            .with_id_generator(ids);

        let mut session = Self {
            config,
            repo,
            persistence,
            params: ViewParameters::default(),
        };
        if seeded {
            session.persist();
        }
        Ok(session)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn repository(&self) -> &TaskRepository {
        &self.repo
    }

    pub fn persistence(&self) -> &TaskPersistence<S> {
        &self.persistence
    }

    pub fn params(&self) -> &ViewParameters {
        &self.params
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    pub fn create(&mut self, input: TaskInput) -> Result<Task> {
        let task = self.repo.create(input)?;
        self.persist();
        Ok(task)
    }

    pub fn update(&mut self, id: &TaskId, input: TaskInput) -> Result<Task> {
        let task = self.repo.update(id, input)?;
        self.persist();
        Ok(task)
    }

    pub fn toggle_status(&mut self, id: &TaskId) -> Result<Task> {
        let task = self.repo.toggle_status(id)?;
        self.persist();
        Ok(task)
    }

    /// Delete a task; an unknown id changes nothing and saves nothing
    pub fn delete(&mut self, id: &TaskId) -> Option<Task> {
        let removed = self.repo.delete(id);
        if removed.is_some() {
            self.persist();
        }
        removed
    }

    /// Save the collection. Failures are logged; in-memory state stands.
    fn persist(&mut self) {
        if let Err(e) = self.persistence.save(self.repo.iter()) {
            warn!(error = %e, "Failed to save tasks, keeping in-memory state");
        }
    }

    // ------------------------------------------------------------------
    // View parameters
    // ------------------------------------------------------------------

    /// New search text; returns to the first page
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.params.search_text = text.into();
        self.params.page = 1;
    }

    /// New status filter; returns to the first page
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.params.status_filter = filter;
        self.params.page = 1;
    }

    /// New sort order; the page is kept
    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.params.sort_order = order;
    }

    /// Jump to a page. Page numbers below 1 are ignored; pages past the end
    /// are clamped by the next [`view`](Self::view).
    pub fn go_to_page(&mut self, page: usize) {
        if page >= 1 {
            self.params.page = page;
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Compute the current page and remember the clamped page number
    pub fn view(&mut self) -> ViewResult {
        let result = compute_view(self.repo.iter(), &self.params, self.config.page_size);
        self.params.page = result.current_page;
        result
    }

    /// List rows for a computed view
    pub fn rows(&self, view: &ViewResult) -> Vec<TaskRow> {
        view.items
            .iter()
            .map(|task| TaskRow::from_task(task, self.config.preview_width))
            .collect()
    }

    /// Pagination links for a computed view
    pub fn page_links(&self, view: &ViewResult) -> PageLinks {
        PageLinks::new(view.current_page, view.total_pages, self.config.page_window)
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.repo.get(id)
    }

    /// Preview-pane details for a task
    pub fn detail(&self, id: &TaskId) -> Option<TaskDetail> {
        self.repo.get(id).map(TaskDetail::from)
    }

    pub fn counts(&self) -> TaskCounts {
        self.repo.counts()
    }
}
