//! State machine definition
//!
//! Which screen is up, and which events move between screens. Alarm-time
//! edits inside a screen are handled by [`AlarmClock`](super::AlarmClock);
//! this table only answers "where next".

use super::events::{Button, Event};

/// UI states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Power-on and post-alarm welcome screen
    Greeting,
    /// Editing the alarm hour
    SetHour,
    /// Editing the alarm minute
    SetMinute,
    /// Choosing AM or PM
    SetMeridiem,
    /// Reviewing the alarm, then tap to arm or hold to go back
    ConfirmScreen,
    /// Waiting for the alarm time
    Armed,
}

impl State {
    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use Button::Confirm;
        use Event::*;
        use State::*;

        match (self, event) {
            // Greeting transitions
            (Greeting, Tap(Confirm)) => SetHour,

            // Alarm editing, one field per screen
            (SetHour, Tap(Confirm)) => SetMinute,
            (SetMinute, Tap(Confirm)) => SetMeridiem,
            (SetMeridiem, Tap(Confirm)) => ConfirmScreen,

            // ConfirmScreen transitions
            (ConfirmScreen, Tap(Confirm)) => Armed,
            (ConfirmScreen, Hold(Confirm)) => SetHour,

            // Armed transitions
            (Armed, Hold(Confirm)) => Greeting,
            (Armed, AlarmDue) => Greeting,

            // Default: stay in current state
            _ => self,
        }
    }
}
