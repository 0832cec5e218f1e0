//! Board-agnostic core logic for the alarm feeder firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display, actuators, buttons, clock)
//! - Alarm time model with wrapping arithmetic
//! - State machine for the set-alarm / armed / dispense UI
//! - Output effect catalog (sounds, blinks, servo motion)
//! - Fixed-width display frames with diffed presentation
//! - The poll-driven main loop tying it all together
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod effects;
pub mod runtime;
pub mod state;
pub mod time;
pub mod traits;
