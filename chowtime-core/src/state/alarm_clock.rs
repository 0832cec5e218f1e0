//! Alarm clock controller
//!
//! Owns the alarm and the current [`State`], and turns one button sample
//! plus one clock reading into a [`Reaction`]: effects to play and how long
//! to wait before the next sample. The caller does all playing and
//! waiting, so a tick here is a pure function of inputs and owned state.

use heapless::Vec;

use crate::config::{DispenseConfig, FeederConfig, TimingConfig};
use crate::display::{renderer, Frame};
use crate::effects::{Effect, Notice};
use crate::time::{AlarmTime, WallTime, Weekday};

use super::events::{Button, ButtonSample, Event, InputEvent};
use super::gesture::{Gesture, HoldCounter};
use super::machine::State;

/// Most effects a single tick can request (the cancel sequence)
pub const MAX_EFFECTS: usize = 6;

/// Pause between the cancel notice and the ready notice
const CANCEL_PAUSE_MS: u32 = 800;

/// What the confirm screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfirmPhase {
    /// The chosen alarm and today's weekday
    #[default]
    Review,
    /// The tap-to-arm / hold-to-go-back prompt
    Prompt,
}

/// Result of one tick
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reaction {
    /// Effects to play, in order
    pub effects: Vec<Effect, MAX_EFFECTS>,
    /// Delay before the next tick, after the effects finish
    pub wait_ms: u32,
}

impl Reaction {
    /// A reaction with no effects
    pub fn wait(ms: u32) -> Self {
        Self {
            effects: Vec::new(),
            wait_ms: ms,
        }
    }

    fn push(&mut self, effect: Effect) {
        // MAX_EFFECTS covers the longest reaction built below
        let _ = self.effects.push(effect);
    }

    fn with(mut self, effects: &[Effect]) -> Self {
        for effect in effects {
            self.push(*effect);
        }
        self
    }
}

/// The alarm feeder's UI controller
#[derive(Debug, Clone)]
pub struct AlarmClock {
    state: State,
    alarm: AlarmTime,
    phase: ConfirmPhase,
    weekday: Weekday,
    confirm: HoldCounter,
    timing: TimingConfig,
    dispense: DispenseConfig,
}

impl AlarmClock {
    /// Create a controller in [`State::Greeting`] with the default alarm
    pub fn new(config: &FeederConfig) -> Self {
        Self {
            state: State::Greeting,
            alarm: AlarmTime::default(),
            phase: ConfirmPhase::default(),
            weekday: Weekday::default(),
            confirm: HoldCounter::new(config.timing.hold_threshold),
            timing: config.timing,
            dispense: config.dispense,
        }
    }

    /// Get the current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Get the alarm time
    pub fn alarm(&self) -> AlarmTime {
        self.alarm
    }

    /// Get the confirm screen phase
    pub fn phase(&self) -> ConfirmPhase {
        self.phase
    }

    /// Get the weekday captured when the alarm was confirmed
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Process one sample of the buttons and the clock
    pub fn step(&mut self, sample: ButtonSample, now: WallTime) -> Reaction {
        match self.state {
            State::Greeting => self.step_greeting(sample),
            State::SetHour | State::SetMinute | State::SetMeridiem => {
                self.step_configuring(sample, now)
            }
            State::ConfirmScreen => self.step_confirm_screen(sample),
            State::Armed => self.step_armed(sample, now),
        }
    }

    /// Render the screen for the current state
    pub fn frame(&self, now: WallTime) -> Frame {
        match self.state {
            State::Greeting => renderer::greeting(),
            State::SetHour => renderer::set_hour(&self.alarm),
            State::SetMinute => renderer::set_minute(&self.alarm),
            State::SetMeridiem => renderer::set_meridiem(&self.alarm),
            State::ConfirmScreen => match self.phase {
                ConfirmPhase::Review => renderer::review(&self.alarm, self.weekday),
                ConfirmPhase::Prompt => renderer::prompt(),
            },
            State::Armed => renderer::armed(&now.to_twelve_hour(), &self.alarm),
        }
    }

    fn step_greeting(&mut self, sample: ButtonSample) -> Reaction {
        if sample.confirm {
            self.apply(Event::Tap(Button::Confirm));
            Reaction::wait(self.timing.debounce_ms)
        } else {
            Reaction::wait(self.timing.poll_ms)
        }
    }

    /// Editing screens act on button levels, in increment, decrement,
    /// confirm order, each followed by the debounce wait.
    fn step_configuring(&mut self, sample: ButtonSample, now: WallTime) -> Reaction {
        if !sample.any() {
            return Reaction::wait(self.timing.poll_ms);
        }

        let mut reaction = Reaction::default();
        let debounce = self.timing.debounce_ms;

        match self.state {
            State::SetHour | State::SetMinute => {
                if sample.increment {
                    self.adjust(Button::Increment);
                    reaction.push(Effect::IncrementTap);
                    reaction.wait_ms = reaction.wait_ms.saturating_add(debounce);
                }
                if sample.decrement {
                    self.adjust(Button::Decrement);
                    reaction.push(Effect::DecrementTap);
                    reaction.wait_ms = reaction.wait_ms.saturating_add(debounce);
                }
            }
            State::SetMeridiem => {
                // Either button flips once
                if sample.increment || sample.decrement {
                    self.alarm.toggle_meridiem();
                    reaction.push(Effect::ConfirmTap);
                    reaction.wait_ms = reaction.wait_ms.saturating_add(debounce);
                }
            }
            _ => {}
        }

        if sample.confirm {
            reaction.push(Effect::ConfirmTap);
            self.apply(Event::Tap(Button::Confirm));

            if self.state == State::ConfirmScreen {
                self.weekday = now.weekday;
                self.phase = ConfirmPhase::Review;
                reaction.wait_ms = reaction
                    .wait_ms
                    .saturating_add(self.timing.confirm_settle_ms)
                    .saturating_add(self.timing.review_ms);
            } else {
                reaction.wait_ms = reaction.wait_ms.saturating_add(debounce);
            }
        }

        reaction
    }

    fn step_confirm_screen(&mut self, sample: ButtonSample) -> Reaction {
        if self.phase == ConfirmPhase::Review {
            // Review interval is over; start measuring from a clean count
            self.phase = ConfirmPhase::Prompt;
            self.confirm.reset();
        }

        match self.confirm.sample(sample.confirm) {
            Gesture::Idle => Reaction::wait(self.timing.poll_ms),
            Gesture::Pressing(_) => Reaction::wait(self.timing.hold_sample_ms),
            Gesture::Released(press) => {
                let event = Event::from(InputEvent {
                    button: Button::Confirm,
                    press,
                });
                self.apply(event);

                let effects: &[Effect] = match self.state {
                    State::SetHour => &[Effect::BackSound, Effect::Notice(Notice::GoingBack)],
                    _ => &[Effect::ArmedSound, Effect::Notice(Notice::AlarmArmed)],
                };
                Reaction::wait(self.timing.poll_ms).with(effects)
            }
        }
    }

    fn step_armed(&mut self, sample: ButtonSample, now: WallTime) -> Reaction {
        match self.confirm.sample(sample.confirm) {
            Gesture::Pressing(_) => return Reaction::wait(self.timing.hold_sample_ms),
            Gesture::Released(press) => {
                let event = Event::from(InputEvent {
                    button: Button::Confirm,
                    press,
                });
                if self.apply(event) {
                    return Reaction::wait(self.timing.poll_ms).with(&[
                        Effect::CancelSound,
                        Effect::BlinkNotice(Notice::AlarmCanceled),
                        Effect::ServoWiggle,
                        Effect::Pause(CANCEL_PAUSE_MS),
                        Effect::BlinkNotice(Notice::Ready),
                    ]);
                }
                // A short press falls through to the alarm check
            }
            Gesture::Idle => {}
        }

        if now.to_twelve_hour() == self.alarm {
            self.apply(Event::AlarmDue);
            return Reaction::wait(self.timing.poll_ms).with(&[Effect::Dispense(self.dispense)]);
        }

        Reaction::wait(self.timing.armed_poll_ms)
    }

    fn adjust(&mut self, button: Button) {
        match (self.state, button) {
            (State::SetHour, Button::Increment) => self.alarm.increment_hour(),
            (State::SetHour, Button::Decrement) => self.alarm.decrement_hour(),
            (State::SetMinute, Button::Increment) => self.alarm.increment_minute(),
            (State::SetMinute, Button::Decrement) => self.alarm.decrement_minute(),
            _ => {}
        }
    }

    /// Run an event through the transition table; returns true on a change
    fn apply(&mut self, event: Event) -> bool {
        let next = self.state.transition(event);
        if next == self.state {
            return false;
        }

        #[cfg(feature = "defmt")]
        defmt::info!("{} -> {} on {}", self.state, next, event);

        self.state = next;
        self.confirm.reset();
        true
    }
}
