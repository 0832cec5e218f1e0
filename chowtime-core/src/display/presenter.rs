//! Diffing frame presenter

use crate::traits::{CharacterDisplay, CharacterDisplayExt, DisplayError};

use super::Frame;

/// Pushes frames to a display, skipping unchanged ones
///
/// Re-sending an identical frame would clear the LCD and visibly flicker,
/// so the last pushed frame is remembered and compared by content.
pub struct Presenter<D> {
    display: D,
    shown: Option<Frame>,
}

impl<D: CharacterDisplay> Presenter<D> {
    /// Wrap a display; the first frame is always pushed
    pub fn new(display: D) -> Self {
        Self {
            display,
            shown: None,
        }
    }

    /// Push `frame` unless it is already showing
    ///
    /// Returns `Ok(true)` if the display was written.
    pub fn present(&mut self, frame: &Frame) -> Result<bool, DisplayError> {
        if self.shown.as_ref() == Some(frame) {
            return Ok(false);
        }

        // Forget the old frame first so a failed write is retried next time
        self.shown = None;
        self.display.clear()?;
        for (row, text) in frame.lines() {
            if !text.is_empty() {
                self.display.write_line(row, text)?;
            }
        }
        self.shown = Some(frame.clone());
        Ok(true)
    }

    /// Get the frame currently on the display
    pub fn shown(&self) -> Option<&Frame> {
        self.shown.as_ref()
    }

    /// Get the underlying display
    pub fn display(&self) -> &D {
        &self.display
    }
}
