//! PWM channel on one half of an RP2040 PWM slice
//!
//! The slice counter wraps at `top`; the 8.4 fixed-point clock divider is
//! picked so `top` stays as large as possible for the requested frequency,
//! which keeps 16-bit duty values accurate.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config, Pwm};
use fixed::types::U12F4;

use chowtime_hal::PwmOutput;

/// Which output of the slice this channel drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    A,
    B,
}

const COUNTER_STEPS: u32 = 1 << 16;
const MAX_DIVIDER: u32 = 255;

/// Divider and wrap value for a target frequency
///
/// Returns `(divider, top)`.
pub fn timing_for(clk_hz: u32, hz: u32) -> (u32, u16) {
    let hz = hz.max(1);
    let divider = clk_hz
        .div_ceil(hz.saturating_mul(COUNTER_STEPS))
        .clamp(1, MAX_DIVIDER);
    let top = (clk_hz / (divider * hz)).saturating_sub(1).min(u16::MAX as u32);
    (divider, top as u16)
}

/// Compare value for a 16-bit duty at a given wrap value
pub fn compare_for(top: u16, duty: u16) -> u16 {
    if duty == u16::MAX {
        // Compare above top keeps the output high all period
        return top.saturating_add(1);
    }
    ((top as u32 + 1) * duty as u32 / COUNTER_STEPS) as u16
}

/// A single RP2040 PWM output
pub struct RpPwm<'d> {
    pwm: Pwm<'d>,
    config: Config,
    channel: Channel,
    duty: u16,
}

impl<'d> RpPwm<'d> {
    /// Wrap a slice configured with one output
    pub fn new(pwm: Pwm<'d>, channel: Channel) -> Self {
        let mut this = Self {
            pwm,
            config: Config::default(),
            channel,
            duty: 0,
        };
        this.apply();
        this
    }

    fn apply(&mut self) {
        let compare = compare_for(self.config.top, self.duty);
        match self.channel {
            Channel::A => self.config.compare_a = compare,
            Channel::B => self.config.compare_b = compare,
        }
        self.pwm.set_config(&self.config);
    }
}

impl PwmOutput for RpPwm<'_> {
    fn set_frequency(&mut self, hz: u32) {
        let (divider, top) = timing_for(clk_sys_freq(), hz);
        self.config.divider = U12F4::from_num(divider);
        self.config.top = top;

        #[cfg(feature = "defmt")]
        defmt::trace!("pwm {}: {} Hz div={} top={}", self.channel, hz, divider, top);

        self.apply();
    }

    fn set_duty_u16(&mut self, duty: u16) {
        self.duty = duty;
        self.apply();
    }

    fn duty_u16(&self) -> u16 {
        self.duty
    }
}
