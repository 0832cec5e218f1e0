//! PWM channel abstraction
//!
//! One trait covers every PWM consumer on the feeder: the LCD backlight
//! (fixed 1 kHz, variable duty), the servo (fixed 50 Hz, pulse width as
//! duty) and the passive buzzer (variable frequency, duty as volume).

/// Full-scale duty value
pub const DUTY_MAX: u16 = u16::MAX;

/// A single PWM output channel
pub trait PwmOutput {
    /// Set the PWM frequency in Hz
    ///
    /// Implementations keep the current duty fraction across frequency
    /// changes where the hardware allows it.
    fn set_frequency(&mut self, hz: u32);

    /// Set the duty cycle as a fraction of [`DUTY_MAX`]
    ///
    /// `0` is always fully off and `DUTY_MAX` fully on.
    fn set_duty_u16(&mut self, duty: u16);

    /// Get the last duty value written
    fn duty_u16(&self) -> u16;

    /// Drive the output fully off
    fn off(&mut self) {
        self.set_duty_u16(0);
    }
}
