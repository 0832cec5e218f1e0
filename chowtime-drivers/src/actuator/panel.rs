//! The feeder's output panel

use chowtime_core::traits::Actuators;
use chowtime_hal::PwmOutput;

use super::{Backlight, Buzzer, Servo};

/// Backlight, hopper servo and buzzer together
pub struct Panel<L, S, B> {
    pub backlight: Backlight<L>,
    pub servo: Servo<S>,
    pub buzzer: Buzzer<B>,
}

impl<L, S, B> Panel<L, S, B>
where
    L: PwmOutput,
    S: PwmOutput,
    B: PwmOutput,
{
    /// Bundle the three outputs
    pub fn new(backlight: Backlight<L>, servo: Servo<S>, buzzer: Buzzer<B>) -> Self {
        Self {
            backlight,
            servo,
            buzzer,
        }
    }
}

impl<L, S, B> Actuators for Panel<L, S, B>
where
    L: PwmOutput,
    S: PwmOutput,
    B: PwmOutput,
{
    fn set_backlight(&mut self, level: u16) {
        self.backlight.set_level(level);
    }

    fn set_servo_angle(&mut self, degrees: u8) {
        self.servo.set_angle(degrees);
    }

    fn start_tone(&mut self, frequency_hz: u32, duty: u16) {
        self.buzzer.start(frequency_hz, duty);
    }

    fn stop_tone(&mut self) {
        self.buzzer.stop();
    }
}
