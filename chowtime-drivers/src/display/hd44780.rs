//! HD44780 character LCD, 4-bit parallel interface
//!
//! Six GPIOs: register select, enable, and data lines D4-D7. The read/write
//! line is tied to ground, so the busy flag is never read and every
//! command is followed by a fixed wait long enough for it to finish.

use chowtime_core::traits::{CharacterDisplay, DisplayError};
use chowtime_hal::OutputPin;
use embedded_hal::delay::DelayNs;

/// Display width in characters
pub const COLUMNS: u8 = 16;

/// Display height in characters
pub const ROWS: u8 = 2;

/// DDRAM address of the first column of each row
const ROW_OFFSETS: [u8; ROWS as usize] = [0x00, 0x40];

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE_INCREMENT: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FUNCTION_4BIT_2LINE: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

/// Wake-up nibble sequence that forces 4-bit mode from any state
const INIT_NIBBLES: [u8; 4] = [0x3, 0x3, 0x3, 0x2];

const POWER_ON_DELAY_MS: u32 = 50;
const INIT_NIBBLE_DELAY_US: u32 = 4_500;
const COMMAND_DELAY_US: u32 = 50;
const CLEAR_DELAY_US: u32 = 2_000;
const ENABLE_PULSE_US: u32 = 1;

/// Shown in place of characters outside the controller's ASCII range
const REPLACEMENT: u8 = b'?';

/// HD44780 driver
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    data: [P; 4],
    delay: D,
    column: u8,
    row: u8,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Create a driver; call [`init`](Self::init) before use
    ///
    /// `data` is D4, D5, D6, D7 in that order.
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
            column: 0,
            row: 0,
        }
    }

    /// Run the power-on handshake and clear the screen
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.rs.set_low();
        self.en.set_low();
        self.delay.delay_ms(POWER_ON_DELAY_MS);

        for nibble in INIT_NIBBLES {
            self.write_nibble(nibble);
            self.delay.delay_us(INIT_NIBBLE_DELAY_US);
        }

        self.command(CMD_FUNCTION_4BIT_2LINE);
        self.command(CMD_DISPLAY_ON);
        self.command(CMD_ENTRY_MODE_INCREMENT);
        self.clear()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("HD44780 initialized ({}x{})", COLUMNS, ROWS);

        Ok(())
    }

    /// Get the cursor position as (column, row)
    pub fn cursor(&self) -> (u8, u8) {
        (self.column, self.row)
    }

    fn command(&mut self, command: u8) {
        self.write_byte(command, false);
        let wait = if command == CMD_CLEAR {
            CLEAR_DELAY_US
        } else {
            COMMAND_DELAY_US
        };
        self.delay.delay_us(wait);
    }

    fn write_data(&mut self, byte: u8) {
        self.write_byte(byte, true);
        self.delay.delay_us(COMMAND_DELAY_US);
    }

    fn write_byte(&mut self, byte: u8, data: bool) {
        self.rs.set_state(data);
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_state((nibble >> bit) & 1 == 1);
        }
        self.en.set_high();
        self.delay.delay_us(ENABLE_PULSE_US);
        self.en.set_low();
        self.delay.delay_us(ENABLE_PULSE_US);
    }
}

impl<P: OutputPin, D: DelayNs> CharacterDisplay for Hd44780<P, D> {
    fn columns(&self) -> u8 {
        COLUMNS
    }

    fn rows(&self) -> u8 {
        ROWS
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CLEAR);
        self.column = 0;
        self.row = 0;
        Ok(())
    }

    fn move_cursor(&mut self, column: u8, row: u8) -> Result<(), DisplayError> {
        if column >= COLUMNS || row >= ROWS {
            return Err(DisplayError::OutOfBounds);
        }
        self.command(CMD_SET_DDRAM | (ROW_OFFSETS[row as usize] + column));
        self.column = column;
        self.row = row;
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        let len = text.chars().count();
        if self.column as usize + len > COLUMNS as usize {
            return Err(DisplayError::Overflow);
        }
        for ch in text.chars() {
            let byte = if ch.is_ascii() { ch as u8 } else { REPLACEMENT };
            self.write_data(byte);
        }
        self.column += len as u8;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    use super::*;
    use chowtime_core::traits::CharacterDisplayExt;

    /// Bus levels plus every byte latched on an enable falling edge
    #[derive(Default)]
    struct Bus {
        levels: [bool; 6],
        nibbles: Vec<(bool, u8)>,
    }

    const RS: usize = 4;
    const EN: usize = 5;

    /// Mock output pin sharing the bus with its siblings
    struct MockPin {
        line: usize,
        bus: Rc<RefCell<Bus>>,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.bus.borrow_mut().levels[self.line] = true;
        }

        fn set_low(&mut self) {
            let mut bus = self.bus.borrow_mut();
            if self.line == EN && bus.levels[EN] {
                let nibble = (0..4).fold(0u8, |acc, bit| acc | ((bus.levels[bit] as u8) << bit));
                let rs = bus.levels[RS];
                bus.nibbles.push((rs, nibble));
            }
            bus.levels[self.line] = false;
        }

        fn is_set_high(&self) -> bool {
            self.bus.borrow().levels[self.line]
        }
    }

    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn lcd() -> (Hd44780<MockPin, NoopDelay>, Rc<RefCell<Bus>>) {
        let bus = Rc::new(RefCell::new(Bus::default()));
        let pin = |line| MockPin {
            line,
            bus: bus.clone(),
        };
        let lcd = Hd44780::new(pin(RS), pin(EN), [pin(0), pin(1), pin(2), pin(3)], NoopDelay);
        (lcd, bus)
    }

    /// Pair up latched nibbles into (is_data, byte)
    fn bytes(nibbles: &[(bool, u8)]) -> Vec<(bool, u8)> {
        nibbles
            .chunks(2)
            .map(|pair| (pair[0].0, (pair[0].1 << 4) | pair[1].1))
            .collect()
    }

    #[test]
    fn test_init_sequence() {
        let (mut lcd, bus) = lcd();
        lcd.init().unwrap();

        let nibbles = bus.borrow().nibbles.clone();
        assert_eq!(
            &nibbles[..4],
            &[(false, 0x3), (false, 0x3), (false, 0x3), (false, 0x2)]
        );
        assert_eq!(
            bytes(&nibbles[4..]),
            [(false, 0x28), (false, 0x0C), (false, 0x06), (false, 0x01)]
        );
    }

    #[test]
    fn test_write_line_addresses_row() {
        let (mut lcd, bus) = lcd();
        lcd.init().unwrap();
        bus.borrow_mut().nibbles.clear();

        lcd.write_line(1, "Hi").unwrap();
        assert_eq!(
            bytes(&bus.borrow().nibbles),
            [(false, 0x80 | 0x40), (true, b'H'), (true, b'i')]
        );
        assert_eq!(lcd.cursor(), (2, 1));
    }

    #[test]
    fn test_move_out_of_bounds() {
        let (mut lcd, _) = lcd();
        assert_eq!(lcd.move_cursor(16, 0), Err(DisplayError::OutOfBounds));
        assert_eq!(lcd.move_cursor(0, 2), Err(DisplayError::OutOfBounds));
        assert_eq!(lcd.move_cursor(15, 1), Ok(()));
    }

    #[test]
    fn test_overflow_writes_nothing() {
        let (mut lcd, bus) = lcd();
        lcd.move_cursor(10, 0).unwrap();
        bus.borrow_mut().nibbles.clear();

        assert_eq!(lcd.write_text("1234567"), Err(DisplayError::Overflow));
        assert!(bus.borrow().nibbles.is_empty());
        assert_eq!(lcd.write_text("123456"), Ok(()));
        assert_eq!(lcd.cursor(), (16, 0));
    }

    #[test]
    fn test_non_ascii_is_replaced() {
        let (mut lcd, bus) = lcd();
        lcd.write_text("é").unwrap();
        assert_eq!(bytes(&bus.borrow().nibbles), [(true, b'?')]);
    }

    #[test]
    fn test_clear_homes_cursor() {
        let (mut lcd, _) = lcd();
        lcd.write_line(1, "Ready").unwrap();
        lcd.clear().unwrap();
        assert_eq!(lcd.cursor(), (0, 0));
    }
}
