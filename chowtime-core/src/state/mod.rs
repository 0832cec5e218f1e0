//! State machine for the alarm feeder UI
//!
//! Defines the authoritative runtime behavior of the appliance.
//! The state machine is explicit, finite, and deterministic: one call to
//! [`AlarmClock::step`] per poll, no sleeping inside.

pub mod alarm_clock;
pub mod events;
pub mod gesture;
pub mod machine;

pub use alarm_clock::{AlarmClock, ConfirmPhase, Reaction, MAX_EFFECTS};
pub use events::{Button, ButtonSample, Event, InputEvent, Press};
pub use gesture::{classify, Gesture, HoldCounter};
pub use machine::State;
