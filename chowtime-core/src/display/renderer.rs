//! Screen templates
//!
//! One function per screen. All output goes through [`Frame`], so nothing
//! here can overflow the 16-column display.

use crate::effects::Notice;
use crate::time::{AlarmTime, Weekday};

use super::Frame;

/// Welcome screen
pub fn greeting() -> Frame {
    Frame::new("Hello User", "Press Enter...")
}

/// Hour editor
pub fn set_hour(alarm: &AlarmTime) -> Frame {
    Frame::from_fmt(format_args!("Set Hour:"), format_args!("{:02}", alarm.hour()))
}

/// Minute editor
pub fn set_minute(alarm: &AlarmTime) -> Frame {
    Frame::from_fmt(
        format_args!("Set Minute:"),
        format_args!("{:02}", alarm.minute()),
    )
}

/// AM/PM chooser
pub fn set_meridiem(alarm: &AlarmTime) -> Frame {
    Frame::new("AM or PM?", alarm.meridiem().as_str())
}

/// Alarm review with the weekday captured when it was confirmed
pub fn review(alarm: &AlarmTime, weekday: Weekday) -> Frame {
    Frame::from_fmt(format_args!("{}", alarm), format_args!("{}", weekday.name()))
}

/// Arm-or-go-back prompt
pub fn prompt() -> Frame {
    Frame::new("Press=Enter", "Hold=Back")
}

/// Armed status: current time over the alarm time
pub fn armed(now: &AlarmTime, alarm: &AlarmTime) -> Frame {
    Frame::from_fmt(format_args!("Now:{}", now), format_args!("Set:{}", alarm))
}

/// A one-line notice
pub fn notice(notice: Notice) -> Frame {
    Frame::new(notice.text(), "")
}
