//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod actuators;
pub mod clock;
pub mod display;
pub mod input;

pub use actuators::{Actuators, BACKLIGHT_FULL};
pub use clock::WallClock;
pub use display::{CharacterDisplay, CharacterDisplayExt, DisplayError};
pub use input::InputSource;
