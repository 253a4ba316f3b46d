//! Presentation-session layer for the task list
//!
//! Owns what the UI would otherwise keep in globals: the repository, the
//! persistence adapter and the current view parameters. Every mutation is
//! followed by a save and every render starts from a fresh view computation.

pub mod config;
pub mod display;
pub mod seed;
mod session;

pub use config::SessionConfig;
pub use display::{preview, PageLinks, TaskDetail, TaskRow};
pub use session::TaskSession;
