//! Display frames
//!
//! The LCD is a 16x2 character grid. Every screen is built from a fixed
//! template into a [`Frame`], which can never exceed the grid, and pushed
//! by a [`Presenter`] only when it differs from what is already showing.

pub mod frame;
pub mod presenter;
pub mod renderer;

pub use frame::{Frame, FRAME_COLS, FRAME_ROWS};
pub use presenter::Presenter;
