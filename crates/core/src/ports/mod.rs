//! Ports for time and identity
//!
//! The repository reads the current time and mints task ids through these
//! traits so that callers can substitute deterministic implementations.

mod clock;
mod id_gen;

pub use clock::{Clock, ManualClock, SystemClock};
pub use id_gen::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
