//! Configuration type definitions
//!
//! Defaults reproduce the timing of the original appliance.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest servo angle in degrees
pub const MAX_SERVO_ANGLE: u8 = 180;

/// Audible range accepted for the dispense tone
pub const TONE_HZ_RANGE: core::ops::RangeInclusive<u32> = 20..=20_000;

/// Longest accepted wait or hold, in milliseconds
pub const MAX_INTERVAL_MS: u32 = 60_000;

/// Largest accepted UTC offset (14 hours)
pub const MAX_UTC_OFFSET_MINUTES: i16 = 14 * 60;

/// Input sampling and UI pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    /// Wait after acting on a button sample (bounce suppression)
    pub debounce_ms: u32,
    /// Idle poll interval while nothing is pressed
    pub poll_ms: u32,
    /// Interval between samples when measuring a Confirm hold
    pub hold_sample_ms: u32,
    /// Consecutive pressed samples that make a hold
    pub hold_threshold: u8,
    /// Wait after confirming the meridiem, before the review interval
    pub confirm_settle_ms: u32,
    /// How long the set alarm and weekday are reviewed before the prompt
    pub review_ms: u32,
    /// Poll interval while armed
    pub armed_poll_ms: u32,
}

impl TimingConfig {
    pub const DEFAULT: Self = Self {
        debounce_ms: 300,
        poll_ms: 20,
        hold_sample_ms: 100,
        hold_threshold: 10,
        confirm_settle_ms: 1200,
        review_ms: 2000,
        armed_poll_ms: 1000,
    };
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Servo and tone settings for a dispense cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispenseConfig {
    /// Servo angle with the hopper open
    pub open_angle: u8,
    /// Servo angle with the hopper closed (also the boot position)
    pub closed_angle: u8,
    /// How long the hopper stays open
    pub open_ms: u32,
    /// How long "Food Ready!" stays up after closing
    pub closed_ms: u32,
    pub tone_hz: u32,
    pub tone_ms: u32,
}

impl DispenseConfig {
    pub const DEFAULT: Self = Self {
        open_angle: 180,
        closed_angle: 0,
        open_ms: 5000,
        closed_ms: 2000,
        tone_hz: 1500,
        tone_ms: 300,
    };
}

impl Default for DispenseConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Wall-clock settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClockConfig {
    /// Local time offset from UTC, used when seeding the RTC
    pub utc_offset_minutes: i16,
}

/// Complete feeder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FeederConfig {
    pub timing: TimingConfig,
    pub dispense: DispenseConfig,
    pub clock: ClockConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `hold_threshold` is zero, so every press would be a hold
    ZeroHoldThreshold,
    /// A poll or sample interval is zero
    ZeroInterval,
    /// A wait or hold exceeds [`MAX_INTERVAL_MS`]
    IntervalTooLong,
    /// A servo angle exceeds [`MAX_SERVO_ANGLE`]
    AngleOutOfRange,
    /// Open and closed angles are equal, the hopper would never move
    AnglesEqual,
    /// Dispense tone outside [`TONE_HZ_RANGE`]
    ToneOutOfRange,
    /// UTC offset beyond [`MAX_UTC_OFFSET_MINUTES`]
    OffsetOutOfRange,
}

impl ConfigError {
    /// Human-readable description (used by the build script)
    pub const fn message(&self) -> &'static str {
        match self {
            ConfigError::ZeroHoldThreshold => "timing.hold_threshold must be at least 1",
            ConfigError::ZeroInterval => {
                "timing.poll_ms, timing.hold_sample_ms and timing.armed_poll_ms must be at least 1"
            }
            ConfigError::IntervalTooLong => "timing and dispense durations must be at most 60000 ms",
            ConfigError::AngleOutOfRange => "dispense angles must be between 0 and 180",
            ConfigError::AnglesEqual => "dispense.open_angle and dispense.closed_angle must differ",
            ConfigError::ToneOutOfRange => "dispense.tone_hz must be between 20 and 20000",
            ConfigError::OffsetOutOfRange => "clock.utc_offset_minutes must be within +/-840",
        }
    }
}

impl FeederConfig {
    pub const DEFAULT: Self = Self {
        timing: TimingConfig::DEFAULT,
        dispense: DispenseConfig::DEFAULT,
        clock: ClockConfig {
            utc_offset_minutes: 0,
        },
    };

    /// Check every field against its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timing;
        if t.hold_threshold == 0 {
            return Err(ConfigError::ZeroHoldThreshold);
        }
        if t.poll_ms == 0 || t.hold_sample_ms == 0 || t.armed_poll_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        let d = &self.dispense;
        let intervals = [
            t.debounce_ms,
            t.poll_ms,
            t.hold_sample_ms,
            t.confirm_settle_ms,
            t.review_ms,
            t.armed_poll_ms,
            d.open_ms,
            d.closed_ms,
            d.tone_ms,
        ];
        if intervals.iter().any(|ms| *ms > MAX_INTERVAL_MS) {
            return Err(ConfigError::IntervalTooLong);
        }

        if d.open_angle > MAX_SERVO_ANGLE || d.closed_angle > MAX_SERVO_ANGLE {
            return Err(ConfigError::AngleOutOfRange);
        }
        if d.open_angle == d.closed_angle {
            return Err(ConfigError::AnglesEqual);
        }
        if !TONE_HZ_RANGE.contains(&d.tone_hz) {
            return Err(ConfigError::ToneOutOfRange);
        }

        if self.clock.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigError::OffsetOutOfRange);
        }

        Ok(())
    }
}
