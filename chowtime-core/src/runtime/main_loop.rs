//! Poll-driven main loop
//!
//! One tick: sample the buttons and the clock, bring the screen up to date
//! with that sample, step the controller, play the requested effects in
//! order, present the resulting screen, then wait.

use embedded_hal_async::delay::DelayNs;

use crate::config::FeederConfig;
use crate::display::{renderer, Frame, Presenter};
use crate::state::{AlarmClock, Reaction};
use crate::traits::{Actuators, CharacterDisplay, InputSource, WallClock, BACKLIGHT_FULL};

use super::player::play;

/// The feeder application, generic over its hardware
pub struct MainLoop<D, A, I, C, T> {
    controller: AlarmClock,
    presenter: Presenter<D>,
    actuators: A,
    input: I,
    clock: C,
    delay: T,
    rest_angle: u8,
}

impl<D, A, I, C, T> MainLoop<D, A, I, C, T>
where
    D: CharacterDisplay,
    A: Actuators,
    I: InputSource,
    C: WallClock,
    T: DelayNs,
{
    /// Assemble the loop; nothing is touched until [`start`](Self::start)
    pub fn new(config: &FeederConfig, display: D, actuators: A, input: I, clock: C, delay: T) -> Self {
        Self {
            controller: AlarmClock::new(config),
            presenter: Presenter::new(display),
            actuators,
            input,
            clock,
            delay,
            rest_angle: config.dispense.closed_angle,
        }
    }

    /// Put the outputs in their power-on state and show the greeting
    pub fn start(&mut self) {
        self.actuators.set_backlight(BACKLIGHT_FULL);
        self.actuators.set_servo_angle(self.rest_angle);
        self.actuators.stop_tone();
        self.show(&renderer::greeting());
    }

    /// Run one tick, returning the reaction that drove it
    pub async fn tick(&mut self) -> Reaction {
        let sample = self.input.sample();
        let now = self.clock.now();

        // The armed screen shows the reading that a dispense is decided on
        let current = self.controller.frame(now);
        self.show(&current);

        let reaction = self.controller.step(sample, now);
        for effect in &reaction.effects {
            play(effect, &mut self.presenter, &mut self.actuators, &mut self.delay).await;
        }

        let frame = self.controller.frame(now);
        self.show(&frame);

        self.delay.delay_ms(reaction.wait_ms).await;
        reaction
    }

    /// Start, then tick forever
    pub async fn run(&mut self) -> ! {
        self.start();

        #[cfg(feature = "defmt")]
        defmt::info!("feeder running");

        loop {
            self.tick().await;
        }
    }

    /// Get the controller
    pub fn controller(&self) -> &AlarmClock {
        &self.controller
    }

    /// Get the presenter
    pub fn presenter(&self) -> &Presenter<D> {
        &self.presenter
    }

    fn show(&mut self, frame: &Frame) {
        if let Err(_err) = self.presenter.present(frame) {
            #[cfg(feature = "defmt")]
            defmt::warn!("display write failed: {}", _err);
        }
    }
}
