//! GPIO wrappers
//!
//! embassy-rp pins wrapped so the shared HAL traits can be implemented
//! for them.

use embassy_rp::gpio::{Input, Output};

/// Push-pull output pin
pub struct RpOutput<'d>(pub Output<'d>);

impl chowtime_hal::OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Input pin (pull configured at construction)
pub struct RpInput<'d>(pub Input<'d>);

impl chowtime_hal::InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
