//! Hobby servo on a 50 Hz PWM channel

use chowtime_hal::{PwmOutput, DUTY_MAX};

/// Servo frame rate
pub const SERVO_FREQUENCY_HZ: u32 = 50;

/// Pulse width at 0 degrees
const MIN_PULSE_US: u32 = 500;
/// Pulse width at 180 degrees
const MAX_PULSE_US: u32 = 2500;
/// One 50 Hz period
const PERIOD_US: u32 = 20_000;
const MAX_ANGLE: u8 = 180;

/// Convert an angle to a 16-bit duty value
///
/// Angles above 180 are clamped.
pub const fn angle_to_duty(degrees: u8) -> u16 {
    let angle = (if degrees > MAX_ANGLE { MAX_ANGLE } else { degrees }) as u32;
    let pulse_us = MIN_PULSE_US + (MAX_PULSE_US - MIN_PULSE_US) * angle / MAX_ANGLE as u32;
    (pulse_us * DUTY_MAX as u32 / PERIOD_US) as u16
}

/// Positional servo
pub struct Servo<P> {
    pwm: P,
    angle: Option<u8>,
}

impl<P: PwmOutput> Servo<P> {
    /// Take a PWM channel and set it to the servo frame rate
    ///
    /// The output stays off (no holding torque) until the first
    /// [`set_angle`](Self::set_angle).
    pub fn new(mut pwm: P) -> Self {
        pwm.off();
        pwm.set_frequency(SERVO_FREQUENCY_HZ);
        Self { pwm, angle: None }
    }

    /// Move to an angle, 0-180 degrees
    pub fn set_angle(&mut self, degrees: u8) {
        let degrees = degrees.min(MAX_ANGLE);
        self.pwm.set_duty_u16(angle_to_duty(degrees));
        self.angle = Some(degrees);
    }

    /// Get the last commanded angle
    pub fn angle(&self) -> Option<u8> {
        self.angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuator::mock::MockPwm;

    #[test]
    fn test_angle_to_duty() {
        assert_eq!(angle_to_duty(0), 1638);
        assert_eq!(angle_to_duty(90), 4915);
        assert_eq!(angle_to_duty(180), 8191);
        assert_eq!(angle_to_duty(255), angle_to_duty(180));
    }

    #[test]
    fn test_new_sets_frame_rate() {
        let servo = Servo::new(MockPwm::default());
        assert_eq!(servo.pwm.frequency, SERVO_FREQUENCY_HZ);
        assert_eq!(servo.pwm.duty, 0);
        assert_eq!(servo.angle(), None);
    }

    #[test]
    fn test_set_angle() {
        let mut servo = Servo::new(MockPwm::default());
        servo.set_angle(85);
        assert_eq!(servo.angle(), Some(85));
        assert_eq!(servo.pwm.duty, angle_to_duty(85));

        servo.set_angle(200);
        assert_eq!(servo.angle(), Some(180));
    }
}
