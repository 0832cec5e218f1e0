//! RP2040-specific HAL for the feeder firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `chowtime-hal` traits, plus the on-chip real-time clock:
//!
//! - GPIO wrappers (implement `chowtime_hal::OutputPin` / `InputPin`)
//! - PWM channel with runtime frequency changes (implements `PwmOutput`)
//! - RTC-backed wall clock (implements `chowtime_core::traits::WallClock`)

#![no_std]

pub mod gpio;
pub mod pwm;
pub mod rtc;

pub use gpio::{RpInput, RpOutput};
pub use pwm::RpPwm;
pub use rtc::RtcClock;
