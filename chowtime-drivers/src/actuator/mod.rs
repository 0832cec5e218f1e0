//! PWM actuators
//!
//! Each driver owns one PWM channel. [`Panel`] bundles the three of them
//! behind the core `Actuators` trait.

pub mod backlight;
pub mod buzzer;
pub mod panel;
pub mod servo;

pub use backlight::Backlight;
pub use buzzer::Buzzer;
pub use panel::Panel;
pub use servo::Servo;

#[cfg(test)]
pub(crate) mod mock {
    use chowtime_hal::PwmOutput;

    /// PWM channel that remembers what was written
    #[derive(Debug, Default)]
    pub struct MockPwm {
        pub frequency: u32,
        pub duty: u16,
        pub frequency_writes: usize,
    }

    impl PwmOutput for MockPwm {
        fn set_frequency(&mut self, hz: u32) {
            self.frequency = hz;
            self.frequency_writes += 1;
        }

        fn set_duty_u16(&mut self, duty: u16) {
            self.duty = duty;
        }

        fn duty_u16(&self) -> u16 {
            self.duty
        }
    }
}
