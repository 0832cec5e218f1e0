//! Time of day types
//!
//! The alarm is kept in 12-hour form because that is what the operator
//! sets and sees. The clock reports 24-hour time, which is converted with
//! [`AlarmTime::from_24h`] before comparing.

pub mod alarm;
pub mod calendar;
pub mod weekday;

pub use alarm::{AlarmTime, Meridiem};
pub use calendar::CivilDateTime;
pub use weekday::{WallTime, Weekday};
