//! Character display trait

/// Errors that can occur when writing to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Cursor moved outside the character grid
    OutOfBounds,
    /// Text ran past the end of the current row
    Overflow,
    /// The bus to the display controller failed
    Bus,
}

/// Trait for a fixed-size character display
///
/// Text is written raw at the cursor position with no wrapping. The caller
/// keeps each write within the physical width of the grid.
pub trait CharacterDisplay {
    /// Number of character columns
    fn columns(&self) -> u8;

    /// Number of character rows
    fn rows(&self) -> u8;

    /// Clear the display and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    ///
    /// - `column`: 0-based column
    /// - `row`: 0-based row
    fn move_cursor(&mut self, column: u8, row: u8) -> Result<(), DisplayError>;

    /// Write text at the cursor, advancing it
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError>;
}

/// Helper trait for common display operations
pub trait CharacterDisplayExt: CharacterDisplay {
    /// Write text starting at the first column of a row
    fn write_line(&mut self, row: u8, text: &str) -> Result<(), DisplayError> {
        self.move_cursor(0, row)?;
        self.write_text(text)
    }
}

// Blanket implementation for all CharacterDisplay types
impl<T: CharacterDisplay> CharacterDisplayExt for T {}
