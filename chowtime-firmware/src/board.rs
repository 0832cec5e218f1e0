//! Board wiring
//!
//! | Function          | GPIO | Peripheral  |
//! |-------------------|------|-------------|
//! | LCD RS            | 1    | SIO         |
//! | LCD EN            | 9    | SIO         |
//! | LCD D4-D7         | 10, 11, 12, 14 | SIO |
//! | Increment button  | 2    | SIO, pull-up |
//! | Decrement button  | 3    | SIO, pull-up |
//! | Confirm button    | 4    | SIO, pull-up |
//! | Servo             | 13   | PWM slice 6 B |
//! | Buzzer            | 15   | PWM slice 7 B |
//! | LCD backlight     | 16   | PWM slice 0 A |
//!
//! The backlight sits on GP16 because GP28 would share slice 6 with the
//! servo, and the two need different frequencies.

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::rtc::Rtc;
use embassy_rp::Peripherals;
use embassy_time::Delay;

use chowtime_drivers::actuator::{Backlight, Buzzer, Panel, Servo};
use chowtime_drivers::display::Hd44780;
use chowtime_drivers::input::ActiveLowButtons;
use chowtime_hal_rp2040::pwm::Channel;
use chowtime_hal_rp2040::{RpInput, RpOutput, RpPwm, RtcClock};

/// Character LCD on its six GPIOs
pub type Lcd = Hd44780<RpOutput<'static>, Delay>;

/// Backlight, servo and buzzer
pub type FeederPanel = Panel<RpPwm<'static>, RpPwm<'static>, RpPwm<'static>>;

/// The three front-panel buttons
pub type Buttons = ActiveLowButtons<RpInput<'static>>;

/// All board peripherals the feeder uses
pub struct Board {
    pub lcd: Lcd,
    pub panel: FeederPanel,
    pub buttons: Buttons,
    pub clock: RtcClock<'static>,
}

impl Board {
    /// Claim and configure the board's pins
    pub fn new(p: Peripherals) -> Self {
        let lcd = Hd44780::new(
            RpOutput(Output::new(p.PIN_1, Level::Low)),
            RpOutput(Output::new(p.PIN_9, Level::Low)),
            [
                RpOutput(Output::new(p.PIN_10, Level::Low)),
                RpOutput(Output::new(p.PIN_11, Level::Low)),
                RpOutput(Output::new(p.PIN_12, Level::Low)),
                RpOutput(Output::new(p.PIN_14, Level::Low)),
            ],
            Delay,
        );

        let buttons = ActiveLowButtons::new(
            RpInput(Input::new(p.PIN_2, Pull::Up)),
            RpInput(Input::new(p.PIN_3, Pull::Up)),
            RpInput(Input::new(p.PIN_4, Pull::Up)),
        );

        let servo = RpPwm::new(
            Pwm::new_output_b(p.PWM_SLICE6, p.PIN_13, PwmConfig::default()),
            Channel::B,
        );
        let buzzer = RpPwm::new(
            Pwm::new_output_b(p.PWM_SLICE7, p.PIN_15, PwmConfig::default()),
            Channel::B,
        );
        let backlight = RpPwm::new(
            Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, PwmConfig::default()),
            Channel::A,
        );
        let panel = Panel::new(
            Backlight::new(backlight),
            Servo::new(servo),
            Buzzer::new(buzzer),
        );

        let clock = RtcClock::new(Rtc::new(p.RTC));

        Self {
            lcd,
            panel,
            buttons,
            clock,
        }
    }
}
