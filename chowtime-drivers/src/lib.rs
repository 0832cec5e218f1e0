//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in chowtime-core, built on the pin and PWM traits from chowtime-hal:
//!
//! - HD44780 character LCD in 4-bit parallel mode
//! - Hobby servo, passive buzzer and PWM backlight
//! - Active-low push buttons

#![no_std]
#![deny(unsafe_code)]

pub mod actuator;
pub mod display;
pub mod input;
