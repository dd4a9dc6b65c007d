//! 4x4 matrix keypad scanner
//!
//! The keypad is a passive row/column matrix: one row line is driven
//! active at a time and the four column lines are sampled, giving a 16-bit
//! state with one bit per key position. Decoding counts the set bits:
//! none pressed, exactly one pressed (looked up in the key table), or an
//! invalid multi-key chord.

use phosphene_core::keypad::KeyStatus;
use phosphene_core::traits::Keypad;

use crate::gpio::{InputPin, OutputPin};

/// Key table for the lab keypad, indexed by `row * 4 + col`.
pub const DEFAULT_KEYTABLE: &[u8; 16] = b"0FED789C456B123A";

/// Errors that can occur configuring the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeypadError {
    /// Key table is not exactly 16 entries
    InvalidKeyTable,
}

/// Trait for the electrical side of the matrix scan.
///
/// Implementations handle line polarity; `read_columns` reports pressed
/// keys as set bits regardless of how the lines idle.
pub trait MatrixPort {
    /// Drive one row line active or inactive.
    fn drive_row(&mut self, row: usize, active: bool);

    /// Sample the four column lines for the currently driven row.
    ///
    /// Bit `c` set means the key at column `c` is closed.
    fn read_columns(&mut self) -> u8;
}

/// Matrix port over discrete GPIO pins (active-low lines on the lab board).
pub struct GpioMatrix<O, I> {
    rows: [O; 4],
    cols: [I; 4],
}

impl<O: OutputPin, I: InputPin> GpioMatrix<O, I> {
    pub fn new(mut rows: [O; 4], cols: [I; 4]) -> Self {
        // Idle all rows inactive (high) so no key reads as closed.
        for row in rows.iter_mut() {
            row.set_high();
        }
        Self { rows, cols }
    }
}

impl<O: OutputPin, I: InputPin> MatrixPort for GpioMatrix<O, I> {
    fn drive_row(&mut self, row: usize, active: bool) {
        if active {
            self.rows[row].set_low();
        } else {
            self.rows[row].set_high();
        }
    }

    fn read_columns(&mut self) -> u8 {
        let mut bits = 0;
        for (c, col) in self.cols.iter_mut().enumerate() {
            if !col.is_high() {
                bits |= 1 << c;
            }
        }
        bits
    }
}

/// Matrix keypad scanner with a configurable key table.
pub struct MatrixKeypad<P> {
    port: P,
    table: [u8; 16],
}

impl<P: MatrixPort> MatrixKeypad<P> {
    /// Create a scanner over `port` with the given 16-entry key table.
    pub fn new(port: P, table: &[u8]) -> Result<Self, KeypadError> {
        if table.len() != 16 {
            return Err(KeypadError::InvalidKeyTable);
        }
        let mut t = [0u8; 16];
        t.copy_from_slice(table);
        Ok(Self { port, table: t })
    }

    /// Replace the key table.
    pub fn load_key_table(&mut self, table: &[u8]) -> Result<(), KeypadError> {
        if table.len() != 16 {
            return Err(KeypadError::InvalidKeyTable);
        }
        self.table.copy_from_slice(table);
        Ok(())
    }
}

impl<P: MatrixPort> Keypad for MatrixKeypad<P> {
    fn key_states(&mut self) -> u16 {
        let mut states = 0u16;
        for row in 0..4 {
            self.port.drive_row(row, true);
            states |= (self.port.read_columns() as u16 & 0xF) << (row * 4);
            self.port.drive_row(row, false);
        }
        states
    }

    fn key_pressed(&self, states: u16) -> (KeyStatus, u8) {
        match states.count_ones() {
            0 => (KeyStatus::NoKey, 0),
            1 => {
                let position = states.trailing_zeros() as usize;
                (KeyStatus::SingleKey, self.table[position])
            }
            _ => (KeyStatus::MultiKey, 0),
        }
    }
}
