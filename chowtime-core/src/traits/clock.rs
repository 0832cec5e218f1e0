//! Wall clock trait

use crate::time::WallTime;

/// Trait for a source of local wall-clock time
pub trait WallClock {
    /// Read the current hour, minute and day of the week
    fn now(&mut self) -> WallTime;
}
