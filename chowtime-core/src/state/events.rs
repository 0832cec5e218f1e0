//! Events that trigger state transitions

/// The three front-panel buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Increment,
    Decrement,
    Confirm,
}

/// How long a button was held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Press {
    /// Released before the hold threshold
    Tap,
    /// Held for at least the hold threshold
    Hold,
}

/// A classified button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    pub button: Button,
    pub press: Press,
}

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A button was tapped
    Tap(Button),
    /// A button was held past the threshold
    Hold(Button),
    /// The wall clock reached the armed alarm time
    AlarmDue,
}

impl From<InputEvent> for Event {
    fn from(input: InputEvent) -> Self {
        match input.press {
            Press::Tap => Event::Tap(input.button),
            Press::Hold => Event::Hold(input.button),
        }
    }
}

/// Levels of all three buttons at one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSample {
    pub increment: bool,
    pub decrement: bool,
    pub confirm: bool,
}

impl ButtonSample {
    /// Nothing pressed
    pub const NONE: Self = Self {
        increment: false,
        decrement: false,
        confirm: false,
    };

    /// Only `button` pressed
    pub const fn only(button: Button) -> Self {
        Self {
            increment: matches!(button, Button::Increment),
            decrement: matches!(button, Button::Decrement),
            confirm: matches!(button, Button::Confirm),
        }
    }

    /// Check the level of one button
    pub const fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Increment => self.increment,
            Button::Decrement => self.decrement,
            Button::Confirm => self.confirm,
        }
    }

    /// Check if any button is down
    pub const fn any(&self) -> bool {
        self.increment || self.decrement || self.confirm
    }
}
