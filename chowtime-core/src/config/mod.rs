//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware reads them from
//! `feeder.toml` at build time, validates them there, and bakes the result
//! into the binary as constants.

pub mod types;

pub use types::*;
