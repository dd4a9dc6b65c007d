//! Two-digit seven-segment display bus
//!
//! The display hangs off eight GPIO lines: segments a-g on bits 0-6 and
//! the digit-select (cathode) line on bit 7. Patterns come from
//! `phosphene_core::segments::decode`.

use phosphene_core::traits::SegmentWriter;

use crate::gpio::OutputPin;

/// Seven-segment display over an 8-pin GPIO bus.
pub struct SevenSegment<P> {
    pins: [P; 8],
}

impl<P: OutputPin> SevenSegment<P> {
    /// Create the display driver, starting blanked.
    ///
    /// `pins[0]` is segment a through `pins[6]` = segment g;
    /// `pins[7]` is the digit-select line.
    pub fn new(pins: [P; 8]) -> Self {
        let mut display = Self { pins };
        display.clear();
        display
    }
}

impl<P: OutputPin> SegmentWriter for SevenSegment<P> {
    fn write_pattern(&mut self, pattern: u8) {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            if pattern & (1 << bit) != 0 {
                pin.set_high();
            } else {
                pin.set_low();
            }
        }
    }
}
