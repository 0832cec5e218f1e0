//! Wall-clock readings

use super::alarm::AlarmTime;

/// Day of the week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days, Monday first
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Day from a Monday-based index (0 = Monday), wrapping modulo 7
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % 7) as usize]
    }

    /// Monday-based index, 0-6
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Full English name
    pub const fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// A reading from the wall clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    /// Hour, 0-23
    pub hour24: u8,
    /// Minute, 0-59
    pub minute: u8,
    /// Day of the week
    pub weekday: Weekday,
}

impl WallTime {
    /// Create a new reading
    pub const fn new(hour24: u8, minute: u8, weekday: Weekday) -> Self {
        Self {
            hour24,
            minute,
            weekday,
        }
    }

    /// The reading as displayed: 12-hour time with meridiem
    pub const fn to_twelve_hour(&self) -> AlarmTime {
        AlarmTime::from_24h(self.hour24, self.minute)
    }
}
