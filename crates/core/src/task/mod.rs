//! Task module
//!
//! Task model, the owning repository and the persistence adapter.

mod model;
mod persistence;
mod repository;

pub use model::*;
pub use persistence::{TaskPersistence, DEFAULT_STORAGE_KEY};
pub use repository::TaskRepository;
