//! Seven-segment display output trait

/// Trait for the seven-segment display bus.
///
/// The pattern layout matches [`crate::segments::decode`]: bits 0-6 are
/// segments a-g, bit 7 selects the active digit. Writing a pattern
/// replaces the previous one, so exactly one digit is lit at a time.
pub trait SegmentWriter {
    /// Drive the display bus with an 8-bit pattern.
    fn write_pattern(&mut self, pattern: u8);

    /// Blank the display (all segments off, left digit selected).
    fn clear(&mut self) {
        self.write_pattern(0);
    }
}
