//! Passive piezo buzzer

use chowtime_hal::PwmOutput;

/// Passive buzzer driven by a variable-frequency PWM channel
///
/// The pitch is the PWM frequency and the duty sets the volume.
pub struct Buzzer<P> {
    pwm: P,
    frequency_hz: u32,
}

impl<P: PwmOutput> Buzzer<P> {
    /// Take a PWM channel, silenced
    pub fn new(mut pwm: P) -> Self {
        pwm.off();
        Self {
            pwm,
            frequency_hz: 0,
        }
    }

    /// Start sounding
    pub fn start(&mut self, frequency_hz: u32, duty: u16) {
        if frequency_hz == 0 {
            self.stop();
            return;
        }
        if frequency_hz != self.frequency_hz {
            self.pwm.set_frequency(frequency_hz);
            self.frequency_hz = frequency_hz;
        }
        self.pwm.set_duty_u16(duty);
    }

    /// Stop sounding
    pub fn stop(&mut self) {
        self.pwm.off();
    }

    /// Check if a tone is playing
    pub fn is_sounding(&self) -> bool {
        self.pwm.duty_u16() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuator::mock::MockPwm;

    #[test]
    fn test_start_and_stop() {
        let mut buzzer = Buzzer::new(MockPwm::default());
        assert!(!buzzer.is_sounding());

        buzzer.start(2000, 32768);
        assert!(buzzer.is_sounding());
        assert_eq!(buzzer.pwm.frequency, 2000);
        assert_eq!(buzzer.pwm.duty, 32768);

        buzzer.stop();
        assert!(!buzzer.is_sounding());
    }

    #[test]
    fn test_same_pitch_skips_reconfigure() {
        let mut buzzer = Buzzer::new(MockPwm::default());
        buzzer.start(800, 12_000);
        buzzer.stop();
        buzzer.start(800, 12_000);
        assert_eq!(buzzer.pwm.frequency_writes, 1);
    }

    #[test]
    fn test_zero_frequency_is_silence() {
        let mut buzzer = Buzzer::new(MockPwm::default());
        buzzer.start(0, 32768);
        assert!(!buzzer.is_sounding());
    }
}
