//! Embassy async tasks
//!
//! The feeder is a single poll-driven loop, so there is one task.

pub mod feeder;

pub use feeder::{feeder_task, FeederApp};
