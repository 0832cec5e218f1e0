//! Chowtime Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the feeder needs,
//! implemented by chip-specific HALs (RP2040 today). Drivers in
//! `chowtime-drivers` are written against these traits only, which keeps
//! them testable on the host with mock pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  chowtime-drivers (LCD, servo, buzzer)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  chowtime-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ chowtime-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`pwm::PwmOutput`] - Single PWM channel (frequency + 16-bit duty)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pwm;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use pwm::{PwmOutput, DUTY_MAX};
