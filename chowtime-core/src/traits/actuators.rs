//! Output actuator trait

/// Backlight level for full brightness
pub const BACKLIGHT_FULL: u16 = u16::MAX;

/// Trait for the feeder's time-bounded outputs
///
/// Every method returns immediately. Anything that lasts (a tone, a
/// servo travel) is bounded by the caller waiting and then issuing the
/// next command, so one control flow owns all actuator timing.
pub trait Actuators {
    /// Set backlight intensity, 0 (off) to [`BACKLIGHT_FULL`]
    fn set_backlight(&mut self, level: u16);

    /// Move the servo, 0-180 degrees
    fn set_servo_angle(&mut self, degrees: u8);

    /// Start a buzzer tone
    ///
    /// `duty` sets the volume, 0 to 65535 (half scale is loudest on a
    /// passive buzzer).
    fn start_tone(&mut self, frequency_hz: u32, duty: u16);

    /// Silence the buzzer
    fn stop_tone(&mut self);
}
