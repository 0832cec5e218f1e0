//! Timed one-line messages

/// Messages shown on their own for a while
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notice {
    GoingBack,
    AlarmArmed,
    AlarmCanceled,
    Ready,
    Dispensing,
    FoodReady,
}

impl Notice {
    /// Get the message text
    pub const fn text(self) -> &'static str {
        match self {
            Notice::GoingBack => "Going Back",
            Notice::AlarmArmed => "Alarm Armed",
            Notice::AlarmCanceled => "Alarm Canceled",
            Notice::Ready => "Ready",
            Notice::Dispensing => "Dispensing...",
            Notice::FoodReady => "Food Ready!",
        }
    }

    /// How long a standalone notice stays up
    ///
    /// The dispense messages are timed by the dispense sequence itself.
    pub const fn hold_ms(self) -> u32 {
        match self {
            Notice::GoingBack | Notice::AlarmCanceled | Notice::Ready => 1000,
            Notice::AlarmArmed => 1500,
            Notice::Dispensing | Notice::FoodReady => 0,
        }
    }
}
