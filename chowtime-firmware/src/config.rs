//! Build-time configuration
//!
//! `feeder.toml` is validated by build.rs and turned into the constants
//! below; there is no runtime parsing.

use chowtime_core::config::{ClockConfig, DispenseConfig, FeederConfig, TimingConfig};

include!(concat!(env!("OUT_DIR"), "/feeder_config.rs"));
