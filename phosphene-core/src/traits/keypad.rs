//! Keypad driver trait

use crate::keypad::KeyStatus;

/// Trait for matrix keypad drivers.
///
/// A scan produces a raw 16-bit matrix state; decoding that state yields
/// the press status and, for a single press, the key value from the
/// driver's key table.
pub trait Keypad {
    /// Scan the matrix and return the raw key state, one bit per position.
    ///
    /// Takes `&mut self` because scanning drives the matrix row lines.
    fn key_states(&mut self) -> u16;

    /// Decode a raw matrix state into `(status, key)`.
    ///
    /// The key value is only meaningful when the status is
    /// [`KeyStatus::SingleKey`].
    fn key_pressed(&self, states: u16) -> (KeyStatus, u8);

    /// Scan and decode in one step.
    fn poll(&mut self) -> (KeyStatus, u8) {
        let states = self.key_states();
        self.key_pressed(states)
    }
}
