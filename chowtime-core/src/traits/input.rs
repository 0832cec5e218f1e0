//! Button input trait

use crate::state::{Button, ButtonSample};

/// Trait for the three-button input panel
///
/// Buttons are polled; implementations report the debounced-at-the-edge
/// level of each button at the moment of the call.
pub trait InputSource {
    /// Check if a button is currently held down
    fn is_pressed(&mut self, button: Button) -> bool;

    /// Read all three buttons
    fn sample(&mut self) -> ButtonSample {
        ButtonSample {
            increment: self.is_pressed(Button::Increment),
            decrement: self.is_pressed(Button::Decrement),
            confirm: self.is_pressed(Button::Confirm),
        }
    }
}
