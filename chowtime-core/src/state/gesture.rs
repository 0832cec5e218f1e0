//! Tap vs. hold recognition
//!
//! A press is measured by counting consecutive pressed samples taken at a
//! fixed interval. The count is classified when the button is released.

use super::events::Press;

/// Classify a completed press by its sample count
///
/// `0` means the button never went down. Counts at or above `threshold`
/// are holds; anything shorter is a tap.
pub const fn classify(count: u8, threshold: u8) -> Option<Press> {
    if count == 0 {
        None
    } else if count >= threshold {
        Some(Press::Hold)
    } else {
        Some(Press::Tap)
    }
}

/// Result of feeding one sample to a [`HoldCounter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Button up and no press in progress
    Idle,
    /// Button down, with the number of pressed samples so far
    Pressing(u8),
    /// Button just released
    Released(Press),
}

/// Consecutive-press counter for one button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HoldCounter {
    count: u8,
    threshold: u8,
}

impl HoldCounter {
    /// Create a counter that reports holds at `threshold` samples
    pub const fn new(threshold: u8) -> Self {
        Self {
            count: 0,
            threshold,
        }
    }

    /// Feed one sample of the button level
    pub fn sample(&mut self, pressed: bool) -> Gesture {
        if pressed {
            self.count = self.count.saturating_add(1);
            return Gesture::Pressing(self.count);
        }

        let count = self.count;
        self.count = 0;
        match classify(count, self.threshold) {
            Some(press) => Gesture::Released(press),
            None => Gesture::Idle,
        }
    }

    /// Pressed samples counted so far
    pub const fn count(&self) -> u8 {
        self.count
    }

    /// Drop any press in progress
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn press_for(counter: &mut HoldCounter, samples: u8) -> Gesture {
        for i in 1..=samples {
            assert_eq!(counter.sample(true), Gesture::Pressing(i));
        }
        counter.sample(false)
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0, 10), None);
        assert_eq!(classify(1, 10), Some(Press::Tap));
        assert_eq!(classify(9, 10), Some(Press::Tap));
        assert_eq!(classify(10, 10), Some(Press::Hold));
        assert_eq!(classify(200, 10), Some(Press::Hold));
    }

    #[test]
    fn test_idle_without_press() {
        let mut counter = HoldCounter::new(10);
        assert_eq!(counter.sample(false), Gesture::Idle);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_nine_samples_is_tap() {
        let mut counter = HoldCounter::new(10);
        assert_eq!(press_for(&mut counter, 9), Gesture::Released(Press::Tap));
    }

    #[test]
    fn test_ten_samples_is_hold() {
        let mut counter = HoldCounter::new(10);
        assert_eq!(press_for(&mut counter, 10), Gesture::Released(Press::Hold));
    }

    #[test]
    fn test_release_resets() {
        let mut counter = HoldCounter::new(10);
        press_for(&mut counter, 12);
        assert_eq!(counter.count(), 0);
        assert_eq!(press_for(&mut counter, 1), Gesture::Released(Press::Tap));
    }

    #[test]
    fn test_count_saturates() {
        let mut counter = HoldCounter::new(10);
        for _ in 0..300 {
            counter.sample(true);
        }
        assert_eq!(counter.count(), u8::MAX);
        assert_eq!(counter.sample(false), Gesture::Released(Press::Hold));
    }

    proptest! {
        #[test]
        fn prop_release_matches_classify(samples in 1u8..=40, threshold in 1u8..=20) {
            let mut counter = HoldCounter::new(threshold);
            for _ in 0..samples {
                counter.sample(true);
            }
            let expected = if samples >= threshold { Press::Hold } else { Press::Tap };
            prop_assert_eq!(counter.sample(false), Gesture::Released(expected));
        }
    }
}
