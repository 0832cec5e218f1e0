//! Wall clock backed by the RP2040 real-time clock

use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc, RtcError};

use chowtime_core::time::{CivilDateTime, WallTime, Weekday};
use chowtime_core::traits::WallClock;

/// Map the RTC's Sunday-first weekday onto the core's Monday-first one
pub fn weekday_from_rtc(day: DayOfWeek) -> Weekday {
    match day {
        DayOfWeek::Monday => Weekday::Monday,
        DayOfWeek::Tuesday => Weekday::Tuesday,
        DayOfWeek::Wednesday => Weekday::Wednesday,
        DayOfWeek::Thursday => Weekday::Thursday,
        DayOfWeek::Friday => Weekday::Friday,
        DayOfWeek::Saturday => Weekday::Saturday,
        DayOfWeek::Sunday => Weekday::Sunday,
    }
}

fn weekday_to_rtc(day: Weekday) -> DayOfWeek {
    match day {
        Weekday::Monday => DayOfWeek::Monday,
        Weekday::Tuesday => DayOfWeek::Tuesday,
        Weekday::Wednesday => DayOfWeek::Wednesday,
        Weekday::Thursday => DayOfWeek::Thursday,
        Weekday::Friday => DayOfWeek::Friday,
        Weekday::Saturday => DayOfWeek::Saturday,
        Weekday::Sunday => DayOfWeek::Sunday,
    }
}

/// RTC wall clock
///
/// A failed read returns the last good reading, so a glitch never shows up
/// as a jump to midnight.
pub struct RtcClock<'d> {
    rtc: Rtc<'d, embassy_rp::peripherals::RTC>,
    last: WallTime,
}

impl<'d> RtcClock<'d> {
    /// Wrap an RTC driver
    pub fn new(rtc: Rtc<'d, embassy_rp::peripherals::RTC>) -> Self {
        Self {
            rtc,
            last: WallTime::default(),
        }
    }

    /// Set the RTC from a calendar date and time
    pub fn seed(&mut self, civil: &CivilDateTime) -> Result<(), RtcError> {
        let datetime = DateTime {
            year: civil.year,
            month: civil.month,
            day: civil.day,
            day_of_week: weekday_to_rtc(civil.weekday),
            hour: civil.hour,
            minute: civil.minute,
            second: civil.second,
        };
        self.rtc.set_datetime(datetime)?;
        self.last = WallTime::new(civil.hour, civil.minute, civil.weekday);
        Ok(())
    }

    /// Check if the RTC has been set and is counting
    pub fn is_running(&self) -> bool {
        self.rtc.is_running()
    }
}

impl WallClock for RtcClock<'_> {
    fn now(&mut self) -> WallTime {
        match self.rtc.now() {
            Ok(datetime) => {
                self.last = WallTime::new(
                    datetime.hour,
                    datetime.minute,
                    weekday_from_rtc(datetime.day_of_week),
                );
            }
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("RTC read failed: {}", defmt::Debug2Format(&_err));
            }
        }
        self.last
    }
}
