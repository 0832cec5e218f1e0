//! Active-low push buttons

use chowtime_core::state::Button;
use chowtime_core::traits::InputSource;
use chowtime_hal::InputPin;

/// Three push buttons wired to ground with pull-ups enabled
///
/// A pressed button reads low.
pub struct ActiveLowButtons<I> {
    increment: I,
    decrement: I,
    confirm: I,
}

impl<I: InputPin> ActiveLowButtons<I> {
    /// Create from the three input pins
    pub fn new(increment: I, decrement: I, confirm: I) -> Self {
        Self {
            increment,
            decrement,
            confirm,
        }
    }
}

impl<I: InputPin> InputSource for ActiveLowButtons<I> {
    fn is_pressed(&mut self, button: Button) -> bool {
        let pin = match button {
            Button::Increment => &self.increment,
            Button::Decrement => &self.decrement,
            Button::Confirm => &self.confirm,
        };
        pin.is_low()
    }
}
