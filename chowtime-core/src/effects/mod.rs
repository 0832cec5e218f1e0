//! Output effect catalog
//!
//! Every sound, blink, servo motion and timed message the feeder produces
//! is an [`Effect`]. An effect expands into a fixed sequence of [`Step`]s,
//! which the effect player executes against the actuators and display.
//! Nothing here touches hardware or sleeps.

mod notice;

pub use notice::Notice;

use heapless::Vec;

use crate::config::DispenseConfig;

/// Upper bound on the steps in one effect (the blinking notice is longest)
pub const MAX_STEPS: usize = 64;

/// Default tone duty: half scale, loudest on a passive buzzer
pub const HALF_DUTY: u16 = 32768;

/// Backlight level at the top of a blink ramp
const BLINK_HIGH: u16 = u16::MAX;
/// Backlight level the blink ramps toward
const BLINK_LOW: u16 = 10_000;
const BLINK_STEP: u16 = 4000;
const BLINK_STEP_MS: u32 = 20;
const BLINK_PAUSE_MS: u32 = 300;

/// Servo angles either side of center for the wiggle
const WIGGLE_ANGLES: (u8, u8) = (85, 95);
const WIGGLE_STEP_MS: u32 = 50;

/// A buzzer tone of fixed length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    pub duty: u16,
}

impl Tone {
    /// Create a tone at half duty
    pub const fn new(frequency_hz: u32, duration_ms: u32) -> Self {
        Self::with_duty(frequency_hz, duration_ms, HALF_DUTY)
    }

    /// Create a tone at a given duty
    pub const fn with_duty(frequency_hz: u32, duration_ms: u32, duty: u16) -> Self {
        Self {
            frequency_hz,
            duration_ms,
            duty,
        }
    }
}

/// One primitive output action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Replace the display contents with a notice
    Show(Notice),
    /// Set backlight level
    Backlight(u16),
    /// Move the servo (degrees)
    Servo(u8),
    /// Sound a tone, blocking for its duration
    Tone(Tone),
    /// Do nothing for a while (milliseconds)
    Wait(u32),
}

/// Output effects the state machine can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Increment button click
    IncrementTap,
    /// Decrement button click
    DecrementTap,
    /// Confirm button click
    ConfirmTap,
    /// Two low pulses when backing out of the confirm prompt
    BackSound,
    /// Ascending three-note chime when the alarm is armed
    ArmedSound,
    /// Single low tone when the alarm is canceled
    CancelSound,
    /// Nudge the servo back and forth twice
    ServoWiggle,
    /// Show a notice and hold it
    Notice(Notice),
    /// Show a notice, blink the backlight, then hold the notice
    BlinkNotice(Notice),
    /// Wait without output (milliseconds)
    Pause(u32),
    /// Open the hopper, call, and close it again
    Dispense(DispenseConfig),
}

impl Effect {
    /// Expand into the steps to execute, in order
    pub fn steps(&self) -> Vec<Step, MAX_STEPS> {
        let mut steps = Sequence::default();
        match *self {
            Effect::IncrementTap => steps.tone(Tone::new(1200, 80)),
            Effect::DecrementTap => steps.tone(Tone::new(1000, 80)),
            Effect::ConfirmTap => steps.tone(Tone::new(2000, 120)),
            Effect::BackSound => {
                for _ in 0..2 {
                    steps.tone(Tone::with_duty(800, 150, 12_000));
                    steps.wait(250);
                }
            }
            Effect::ArmedSound => {
                for hz in [1200, 1600, 2000] {
                    steps.tone(Tone::new(hz, 150));
                    steps.wait(100);
                }
            }
            Effect::CancelSound => steps.tone(Tone::with_duty(600, 250, 16_000)),
            Effect::ServoWiggle => {
                let (left, right) = WIGGLE_ANGLES;
                for _ in 0..2 {
                    steps.push(Step::Servo(left));
                    steps.wait(WIGGLE_STEP_MS);
                    steps.push(Step::Servo(right));
                    steps.wait(WIGGLE_STEP_MS);
                }
            }
            Effect::Notice(notice) => {
                steps.push(Step::Show(notice));
                steps.wait(notice.hold_ms());
            }
            Effect::BlinkNotice(notice) => {
                steps.push(Step::Show(notice));
                steps.blink();
                steps.wait(notice.hold_ms());
            }
            Effect::Pause(ms) => steps.wait(ms),
            Effect::Dispense(cfg) => {
                steps.push(Step::Show(Notice::Dispensing));
                steps.push(Step::Servo(cfg.open_angle));
                steps.tone(Tone::new(cfg.tone_hz, cfg.tone_ms));
                steps.wait(cfg.open_ms);
                steps.push(Step::Show(Notice::FoodReady));
                steps.push(Step::Servo(cfg.closed_angle));
                steps.wait(cfg.closed_ms);
            }
        }
        steps.0
    }

    /// Total time the effect blocks for, in milliseconds
    pub fn duration_ms(&self) -> u32 {
        self.steps()
            .iter()
            .map(|step| match step {
                Step::Tone(tone) => tone.duration_ms,
                Step::Wait(ms) => *ms,
                _ => 0,
            })
            .sum()
    }
}

/// Step list builder
#[derive(Default)]
struct Sequence(Vec<Step, MAX_STEPS>);

impl Sequence {
    fn push(&mut self, step: Step) {
        // MAX_STEPS covers the longest catalog entry; the tests check it
        let _ = self.0.push(step);
    }

    fn tone(&mut self, tone: Tone) {
        self.push(Step::Tone(tone));
    }

    fn wait(&mut self, ms: u32) {
        if ms > 0 {
            self.push(Step::Wait(ms));
        }
    }

    fn blink(&mut self) {
        let mut level = BLINK_HIGH;
        while level > BLINK_LOW {
            self.push(Step::Backlight(level));
            self.wait(BLINK_STEP_MS);
            level = level.saturating_sub(BLINK_STEP);
        }
        self.wait(BLINK_PAUSE_MS);

        let mut level = BLINK_LOW;
        while level < BLINK_HIGH {
            self.push(Step::Backlight(level));
            self.wait(BLINK_STEP_MS);
            level = level.saturating_add(BLINK_STEP);
        }
        // The up-ramp stops short of full; leave the backlight fully on
        self.push(Step::Backlight(BLINK_HIGH));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backlight_levels(steps: &[Step]) -> impl Iterator<Item = u16> + '_ {
        steps.iter().filter_map(|step| match step {
            Step::Backlight(level) => Some(*level),
            _ => None,
        })
    }

    #[test]
    fn test_tap_sounds() {
        assert_eq!(
            Effect::IncrementTap.steps().as_slice(),
            &[Step::Tone(Tone::with_duty(1200, 80, 32768))]
        );
        assert_eq!(
            Effect::DecrementTap.steps().as_slice(),
            &[Step::Tone(Tone::new(1000, 80))]
        );
        assert_eq!(
            Effect::ConfirmTap.steps().as_slice(),
            &[Step::Tone(Tone::new(2000, 120))]
        );
    }

    #[test]
    fn test_back_sound() {
        let pulse = Step::Tone(Tone::with_duty(800, 150, 12_000));
        assert_eq!(
            Effect::BackSound.steps().as_slice(),
            &[pulse, Step::Wait(250), pulse, Step::Wait(250)]
        );
    }

    #[test]
    fn test_armed_sound_ascends() {
        let steps = Effect::ArmedSound.steps();
        let notes: heapless::Vec<u32, 3> = steps
            .iter()
            .filter_map(|step| match step {
                Step::Tone(tone) => Some(tone.frequency_hz),
                _ => None,
            })
            .collect();
        assert_eq!(notes.as_slice(), &[1200, 1600, 2000]);
        assert_eq!(Effect::ArmedSound.duration_ms(), 3 * (150 + 100));
    }

    #[test]
    fn test_cancel_sound() {
        assert_eq!(
            Effect::CancelSound.steps().as_slice(),
            &[Step::Tone(Tone::with_duty(600, 250, 16_000))]
        );
    }

    #[test]
    fn test_blink_ramp() {
        let steps = Effect::BlinkNotice(Notice::Ready).steps();
        let levels: heapless::Vec<u16, 32> = backlight_levels(&steps).collect();

        // 14 down, 14 up, then restored to full
        assert_eq!(levels.len(), 29);
        assert_eq!(levels[0], 65535);
        assert_eq!(levels[13], 65535 - 13 * 4000);
        assert_eq!(levels[14], 10_000);
        assert_eq!(levels[27], 10_000 + 13 * 4000);
        assert_eq!(levels[28], 65535);
        assert!(levels[..14].iter().all(|&l| l > 10_000));
        assert!(levels[14..28].iter().all(|&l| l < 65535));

        assert_eq!(
            Effect::BlinkNotice(Notice::Ready).duration_ms(),
            28 * 20 + 300 + 1000
        );
    }

    #[test]
    fn test_blink_notice_fits() {
        let steps = Effect::BlinkNotice(Notice::AlarmCanceled).steps();
        assert!(steps.len() < MAX_STEPS);
        assert_eq!(steps.first(), Some(&Step::Show(Notice::AlarmCanceled)));
        assert_eq!(steps.last(), Some(&Step::Wait(1000)));
    }

    #[test]
    fn test_servo_wiggle() {
        assert_eq!(
            Effect::ServoWiggle.steps().as_slice(),
            &[
                Step::Servo(85),
                Step::Wait(50),
                Step::Servo(95),
                Step::Wait(50),
                Step::Servo(85),
                Step::Wait(50),
                Step::Servo(95),
                Step::Wait(50),
            ]
        );
    }

    #[test]
    fn test_notice_holds() {
        assert_eq!(
            Effect::Notice(Notice::AlarmArmed).steps().as_slice(),
            &[Step::Show(Notice::AlarmArmed), Step::Wait(1500)]
        );
        assert_eq!(
            Effect::Notice(Notice::GoingBack).steps().as_slice(),
            &[Step::Show(Notice::GoingBack), Step::Wait(1000)]
        );
    }

    #[test]
    fn test_pause() {
        assert_eq!(Effect::Pause(800).steps().as_slice(), &[Step::Wait(800)]);
        assert!(Effect::Pause(0).steps().is_empty());
    }

    #[test]
    fn test_dispense_sequence() {
        let cfg = DispenseConfig::DEFAULT;
        assert_eq!(
            Effect::Dispense(cfg).steps().as_slice(),
            &[
                Step::Show(Notice::Dispensing),
                Step::Servo(180),
                Step::Tone(Tone::new(1500, 300)),
                Step::Wait(5000),
                Step::Show(Notice::FoodReady),
                Step::Servo(0),
                Step::Wait(2000),
            ]
        );
        assert_eq!(Effect::Dispense(cfg).duration_ms(), 300 + 5000 + 2000);
    }
}
