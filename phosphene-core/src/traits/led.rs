//! RGB LED output trait

/// RGB LED color, encoded as one bit per channel: blue = bit 0,
/// green = bit 1, red = bit 2. Matches the lab board's RGB GPIO wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Color {
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Pink = 5,
    Yellow = 6,
    White = 7,
}

impl Color {
    pub const fn bits(self) -> u8 {
        self as u8
    }

    pub const fn blue(self) -> bool {
        self.bits() & 0b001 != 0
    }

    pub const fn green(self) -> bool {
        self.bits() & 0b010 != 0
    }

    pub const fn red(self) -> bool {
        self.bits() & 0b100 != 0
    }
}

/// Trait for the RGB LED output.
pub trait RgbOutput {
    /// Light the LED in the given color.
    fn set_color(&mut self, color: Color);

    /// Turn the LED fully off.
    fn off(&mut self);
}
