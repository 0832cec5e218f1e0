//! PWM-dimmed LCD backlight

use chowtime_hal::PwmOutput;

/// Backlight PWM frequency
pub const BACKLIGHT_FREQUENCY_HZ: u32 = 1000;

/// LCD backlight on a PWM channel
pub struct Backlight<P> {
    pwm: P,
}

impl<P: PwmOutput> Backlight<P> {
    /// Take a PWM channel; the backlight starts off
    pub fn new(mut pwm: P) -> Self {
        pwm.off();
        pwm.set_frequency(BACKLIGHT_FREQUENCY_HZ);
        Self { pwm }
    }

    /// Set brightness, 0 (off) to 65535 (full)
    pub fn set_level(&mut self, level: u16) {
        self.pwm.set_duty_u16(level);
    }

    /// Get the current brightness
    pub fn level(&self) -> u16 {
        self.pwm.duty_u16()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuator::mock::MockPwm;

    #[test]
    fn test_backlight() {
        let mut backlight = Backlight::new(MockPwm::default());
        assert_eq!(backlight.pwm.frequency, BACKLIGHT_FREQUENCY_HZ);
        assert_eq!(backlight.level(), 0);

        backlight.set_level(u16::MAX);
        assert_eq!(backlight.level(), u16::MAX);
    }
}
