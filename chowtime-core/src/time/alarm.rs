//! Alarm time with wrapping field arithmetic

use core::fmt;

/// Lowest 12-hour clock hour
pub const HOUR_MIN: u8 = 1;

/// Highest 12-hour clock hour
pub const HOUR_MAX: u8 = 12;

/// Highest minute value
pub const MINUTE_MAX: u8 = 59;

/// Half of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Meridiem {
    /// Ante meridiem (midnight to noon)
    #[default]
    Am,
    /// Post meridiem (noon to midnight)
    Pm,
}

impl Meridiem {
    /// The other half of the day
    pub const fn toggled(self) -> Self {
        match self {
            Meridiem::Am => Meridiem::Pm,
            Meridiem::Pm => Meridiem::Am,
        }
    }

    /// Two-letter display form
    pub const fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 12-hour time of day
///
/// Fields are private so the ranges (`hour` 1-12, `minute` 0-59) hold for
/// every value that exists. All adjustments wrap instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmTime {
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

impl Default for AlarmTime {
    /// 01:00 AM, the value the UI starts from after power-on
    fn default() -> Self {
        Self {
            hour: HOUR_MIN,
            minute: 0,
            meridiem: Meridiem::Am,
        }
    }
}

impl AlarmTime {
    /// Create an alarm time, or `None` if a field is out of range
    pub const fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Option<Self> {
        if hour < HOUR_MIN || hour > HOUR_MAX || minute > MINUTE_MAX {
            return None;
        }
        Some(Self {
            hour,
            minute,
            meridiem,
        })
    }

    /// Convert a 24-hour clock reading
    ///
    /// Hour 0 is 12 AM, hour 12 is 12 PM. Out-of-range inputs wrap
    /// (`hour24 % 24`, `minute % 60`).
    pub const fn from_24h(hour24: u8, minute: u8) -> Self {
        let hour24 = hour24 % 24;
        let (hour, meridiem) = match hour24 {
            0 => (12, Meridiem::Am),
            1..=11 => (hour24, Meridiem::Am),
            12 => (12, Meridiem::Pm),
            _ => (hour24 - 12, Meridiem::Pm),
        };
        Self {
            hour,
            minute: minute % 60,
            meridiem,
        }
    }

    /// Hour, 1-12
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute, 0-59
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// AM or PM
    pub const fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// Advance the hour, 12 wraps to 1
    pub fn increment_hour(&mut self) {
        self.hour = if self.hour >= HOUR_MAX {
            HOUR_MIN
        } else {
            self.hour + 1
        };
    }

    /// Step the hour back, 1 wraps to 12
    pub fn decrement_hour(&mut self) {
        self.hour = if self.hour <= HOUR_MIN {
            HOUR_MAX
        } else {
            self.hour - 1
        };
    }

    /// Advance the minute, 59 wraps to 0
    pub fn increment_minute(&mut self) {
        self.minute = if self.minute >= MINUTE_MAX {
            0
        } else {
            self.minute + 1
        };
    }

    /// Step the minute back, 0 wraps to 59
    pub fn decrement_minute(&mut self) {
        self.minute = if self.minute == 0 {
            MINUTE_MAX
        } else {
            self.minute - 1
        };
    }

    /// Switch between AM and PM
    pub fn toggle_meridiem(&mut self) {
        self.meridiem = self.meridiem.toggled();
    }
}

impl fmt::Display for AlarmTime {
    /// `hh:mm AM`, always 8 characters
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_is_one_am() {
        let t = AlarmTime::default();
        assert_eq!(t.hour(), 1);
        assert_eq!(t.minute(), 0);
        assert_eq!(t.meridiem(), Meridiem::Am);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(AlarmTime::new(0, 0, Meridiem::Am).is_none());
        assert!(AlarmTime::new(13, 0, Meridiem::Am).is_none());
        assert!(AlarmTime::new(12, 60, Meridiem::Pm).is_none());
        assert!(AlarmTime::new(12, 59, Meridiem::Pm).is_some());
    }

    #[test]
    fn test_hour_wraps() {
        let mut t = AlarmTime::new(12, 0, Meridiem::Am).unwrap();
        t.increment_hour();
        assert_eq!(t.hour(), 1);
        t.decrement_hour();
        assert_eq!(t.hour(), 12);
    }

    #[test]
    fn test_minute_wraps() {
        let mut t = AlarmTime::new(1, 59, Meridiem::Am).unwrap();
        t.increment_minute();
        assert_eq!(t.minute(), 0);
        t.decrement_minute();
        assert_eq!(t.minute(), 59);
    }

    #[test]
    fn test_from_24h() {
        let cases = [
            (0, 12, Meridiem::Am),
            (1, 1, Meridiem::Am),
            (11, 11, Meridiem::Am),
            (12, 12, Meridiem::Pm),
            (13, 1, Meridiem::Pm),
            (19, 7, Meridiem::Pm),
            (23, 11, Meridiem::Pm),
        ];
        for (hour24, hour, meridiem) in cases {
            let t = AlarmTime::from_24h(hour24, 30);
            assert_eq!((t.hour(), t.meridiem()), (hour, meridiem), "hour24={}", hour24);
            assert_eq!(t.minute(), 30);
        }
    }

    #[test]
    fn test_display_format() {
        extern crate std;
        use std::string::ToString;

        let t = AlarmTime::new(7, 5, Meridiem::Pm).unwrap();
        assert_eq!(t.to_string(), "07:05 PM");
    }

    proptest! {
        #[test]
        fn prop_hour_stays_in_range(hour in 1u8..=12, steps in 0usize..40, up in any::<bool>()) {
            let mut t = AlarmTime::new(hour, 0, Meridiem::Am).unwrap();
            for _ in 0..steps {
                if up { t.increment_hour() } else { t.decrement_hour() }
                prop_assert!((HOUR_MIN..=HOUR_MAX).contains(&t.hour()));
            }
        }

        #[test]
        fn prop_minute_increment_then_decrement_is_identity(minute in 0u8..=59) {
            let mut t = AlarmTime::new(1, minute, Meridiem::Am).unwrap();
            t.increment_minute();
            prop_assert!(t.minute() <= MINUTE_MAX);
            t.decrement_minute();
            prop_assert_eq!(t.minute(), minute);
        }

        #[test]
        fn prop_hour_increment_then_decrement_is_identity(hour in 1u8..=12) {
            let mut t = AlarmTime::new(hour, 0, Meridiem::Pm).unwrap();
            t.increment_hour();
            t.decrement_hour();
            prop_assert_eq!(t.hour(), hour);
        }

        #[test]
        fn prop_meridiem_toggle_twice_is_identity(pm in any::<bool>()) {
            let m = if pm { Meridiem::Pm } else { Meridiem::Am };
            prop_assert_eq!(m.toggled().toggled(), m);
            prop_assert_ne!(m.toggled(), m);
        }

        #[test]
        fn prop_from_24h_always_valid(hour24 in 0u8..=23, minute in 0u8..=59) {
            let t = AlarmTime::from_24h(hour24, minute);
            prop_assert!(AlarmTime::new(t.hour(), t.minute(), t.meridiem()).is_some());
        }
    }
}
