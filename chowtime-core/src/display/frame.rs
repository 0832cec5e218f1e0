//! Fixed-width two-line text frame

use core::fmt::{self, Write};

use heapless::String;

/// Character columns per line
pub const FRAME_COLS: usize = 16;

/// Number of lines
pub const FRAME_ROWS: usize = 2;

/// One line of a frame
pub type Line = String<FRAME_COLS>;

/// Contents of the whole display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    lines: [Line; FRAME_ROWS],
}

/// Writer that drops whatever does not fit
struct Truncating<'a>(&'a mut Line);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.0.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }
}

impl Frame {
    /// Create a frame from two plain lines, truncating at [`FRAME_COLS`]
    pub fn new(top: &str, bottom: &str) -> Self {
        Self::from_fmt(format_args!("{}", top), format_args!("{}", bottom))
    }

    /// Create a frame from formatted lines, truncating at [`FRAME_COLS`]
    pub fn from_fmt(top: fmt::Arguments<'_>, bottom: fmt::Arguments<'_>) -> Self {
        let mut frame = Self::default();
        // Truncating never reports an error
        let _ = Truncating(&mut frame.lines[0]).write_fmt(top);
        let _ = Truncating(&mut frame.lines[1]).write_fmt(bottom);
        frame
    }

    /// Get the text of a line (empty for rows past the end)
    pub fn line(&self, row: usize) -> &str {
        self.lines.get(row).map(|l| l.as_str()).unwrap_or("")
    }

    /// Iterate over `(row, text)` pairs
    pub fn lines(&self) -> impl Iterator<Item = (u8, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(row, line)| (row as u8, line.as_str()))
    }
}
