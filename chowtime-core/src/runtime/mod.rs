//! Async runtime glue
//!
//! Everything that waits lives here. The controller decides, the player
//! executes effects step by step, and the main loop ties one tick
//! together. All waiting goes through an `embedded_hal_async` delay, so
//! the same code runs under embassy on the board and under a recording
//! fake delay in tests.

pub mod main_loop;
pub mod player;

pub use main_loop::MainLoop;
pub use player::{play, sound_tone};
