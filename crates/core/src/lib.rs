//! Core library for the task list
//!
//! This crate contains the core business logic, including:
//! - The task model and the repository that owns the collection
//! - The derived-view engine (filter, search, sort, paginate, count)
//! - Persistence of the collection into a named key-value slot

pub mod error;
pub mod ports;
pub mod store;
pub mod task;
pub mod view;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
