//! Unix timestamp to civil date conversion
//!
//! Used once at boot to seed the real-time clock.

use chrono::{DateTime, Datelike, Timelike};

use super::weekday::Weekday;

/// Largest year the RP2040 RTC can hold (12-bit field)
pub const MAX_YEAR: u16 = 4095;

/// A calendar date and time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CivilDateTime {
    pub year: u16,
    /// Month, 1-12
    pub month: u8,
    /// Day of month, 1-31
    pub day: u8,
    pub weekday: Weekday,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl CivilDateTime {
    /// Convert seconds since 1970-01-01T00:00:00
    ///
    /// Returns `None` for instants before the epoch or after [`MAX_YEAR`].
    pub fn from_unix(secs: i64) -> Option<Self> {
        if secs < 0 {
            return None;
        }

        let t = DateTime::from_timestamp(secs, 0)?.naive_utc();
        let year = u16::try_from(t.year()).ok().filter(|y| *y <= MAX_YEAR)?;

        Some(Self {
            year,
            month: t.month() as u8,
            day: t.day() as u8,
            weekday: Weekday::from_index(t.weekday().num_days_from_monday() as u8),
            hour: t.hour() as u8,
            minute: t.minute() as u8,
            second: t.second() as u8,
        })
    }

    /// Convert a UTC timestamp shifted into local time
    pub fn from_unix_with_offset(secs: i64, utc_offset_minutes: i16) -> Option<Self> {
        Self::from_unix(secs.checked_add(i64::from(utc_offset_minutes) * 60)?)
    }
}
