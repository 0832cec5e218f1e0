//! Effect player

use embedded_hal_async::delay::DelayNs;

use crate::display::{renderer, Presenter};
use crate::effects::{Effect, Step, Tone};
use crate::traits::{Actuators, CharacterDisplay};

/// Sound a tone for its full duration
pub async fn sound_tone<A: Actuators, T: DelayNs>(actuators: &mut A, delay: &mut T, tone: Tone) {
    actuators.start_tone(tone.frequency_hz, tone.duty);
    delay.delay_ms(tone.duration_ms).await;
    actuators.stop_tone();
}

/// Play an effect to completion
///
/// Display errors are logged and skipped; the rest of the effect still
/// plays.
pub async fn play<D, A, T>(
    effect: &Effect,
    presenter: &mut Presenter<D>,
    actuators: &mut A,
    delay: &mut T,
) where
    D: CharacterDisplay,
    A: Actuators,
    T: DelayNs,
{
    #[cfg(feature = "defmt")]
    defmt::debug!("play {}", effect);

    for step in effect.steps() {
        match step {
            Step::Show(notice) => {
                if let Err(_err) = presenter.present(&renderer::notice(notice)) {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("notice not shown: {}", _err);
                }
            }
            Step::Backlight(level) => actuators.set_backlight(level),
            Step::Servo(angle) => actuators.set_servo_angle(angle),
            Step::Tone(tone) => sound_tone(actuators, delay, tone).await,
            Step::Wait(ms) => delay.delay_ms(ms).await,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    extern crate std;

    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    use embassy_futures::block_on;

    use super::*;
    use crate::display::presenter::tests::RecordingDisplay;
    use crate::effects::Notice;

    /// Everything the fakes observed, in order
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) enum Call {
        Backlight(u16),
        Servo(u8),
        ToneOn(u32, u16),
        ToneOff,
        Delay(u32),
    }

    pub(crate) type Log = Rc<RefCell<Vec<Call>>>;

    pub(crate) struct FakeActuators(pub Log);

    impl Actuators for FakeActuators {
        fn set_backlight(&mut self, level: u16) {
            self.0.borrow_mut().push(Call::Backlight(level));
        }

        fn set_servo_angle(&mut self, degrees: u8) {
            self.0.borrow_mut().push(Call::Servo(degrees));
        }

        fn start_tone(&mut self, frequency_hz: u32, duty: u16) {
            self.0.borrow_mut().push(Call::ToneOn(frequency_hz, duty));
        }

        fn stop_tone(&mut self) {
            self.0.borrow_mut().push(Call::ToneOff);
        }
    }

    /// Delay that returns at once and logs the requested milliseconds
    pub(crate) struct FakeDelay(pub Log);

    impl DelayNs for FakeDelay {
        async fn delay_ns(&mut self, ns: u32) {
            self.0.borrow_mut().push(Call::Delay(ns / 1_000_000));
        }

        async fn delay_ms(&mut self, ms: u32) {
            self.0.borrow_mut().push(Call::Delay(ms));
        }
    }

    pub(crate) fn total_delay(log: &[Call]) -> u32 {
        log.iter()
            .map(|call| match call {
                Call::Delay(ms) => *ms,
                _ => 0,
            })
            .sum()
    }

    fn run(effect: Effect) -> (Vec<Call>, Presenter<RecordingDisplay>) {
        let log = Log::default();
        let mut presenter = Presenter::new(RecordingDisplay::default());
        let mut actuators = FakeActuators(log.clone());
        let mut delay = FakeDelay(log.clone());
        block_on(play(&effect, &mut presenter, &mut actuators, &mut delay));
        let calls = log.borrow().clone();
        (calls, presenter)
    }

    #[test]
    fn test_sound_tone_brackets_delay() {
        let (calls, _) = run(Effect::ConfirmTap);
        assert_eq!(
            calls,
            [Call::ToneOn(2000, 32768), Call::Delay(120), Call::ToneOff]
        );
    }

    #[test]
    fn test_back_sound_timing() {
        let (calls, _) = run(Effect::BackSound);
        assert_eq!(
            calls,
            [
                Call::ToneOn(800, 12_000),
                Call::Delay(150),
                Call::ToneOff,
                Call::Delay(250),
                Call::ToneOn(800, 12_000),
                Call::Delay(150),
                Call::ToneOff,
                Call::Delay(250),
            ]
        );
    }

    #[test]
    fn test_notice_is_shown_and_held() {
        let (calls, presenter) = run(Effect::Notice(Notice::AlarmArmed));
        assert_eq!(calls, [Call::Delay(1500)]);
        assert_eq!(presenter.display().row(0), "Alarm Armed");
        assert_eq!(presenter.display().row(1), "");
    }

    #[test]
    fn test_blink_ends_at_full_brightness() {
        let (calls, presenter) = run(Effect::BlinkNotice(Notice::Ready));
        let last_level = calls.iter().rev().find_map(|call| match call {
            Call::Backlight(level) => Some(*level),
            _ => None,
        });
        assert_eq!(last_level, Some(u16::MAX));
        assert_eq!(calls.last(), Some(&Call::Delay(1000)));
        assert_eq!(total_delay(&calls), 28 * 20 + 300 + 1000);
        assert_eq!(presenter.display().row(0), "Ready");
    }

    #[test]
    fn test_dispense_opens_then_closes() {
        let (calls, presenter) = run(Effect::Dispense(crate::config::DispenseConfig::DEFAULT));
        assert_eq!(
            calls,
            [
                Call::Servo(180),
                Call::ToneOn(1500, 32768),
                Call::Delay(300),
                Call::ToneOff,
                Call::Delay(5000),
                Call::Servo(0),
                Call::Delay(2000),
            ]
        );
        assert_eq!(presenter.display().row(0), "Food Ready!");
    }

    #[test]
    fn test_display_failure_does_not_stop_effect() {
        let log = Log::default();
        let mut display = RecordingDisplay::default();
        display.fail = true;
        let mut presenter = Presenter::new(display);
        let mut actuators = FakeActuators(log.clone());
        let mut delay = FakeDelay(log.clone());

        block_on(play(
            &Effect::Notice(Notice::GoingBack),
            &mut presenter,
            &mut actuators,
            &mut delay,
        ));
        assert_eq!(*log.borrow(), [Call::Delay(1000)]);
    }
}
