//! Software-PWM duty cycle state for the RGB LED
//!
//! The LED task splits a fixed period into on-ticks and off-ticks and
//! drives the output accordingly, so perceived brightness is the duty
//! cycle. Pushbutton readings are decoded once at the boundary into a
//! [`BrightnessCommand`]; each observed command moves the split by one
//! tick, clamped at the rails.

/// Pushbutton bit that requests one brightness step up.
const BTN_UP_MASK: u32 = 0x1;
/// Pushbutton bit that requests one brightness step down.
const BTN_DOWN_MASK: u32 = 0x8;

/// Brightness adjustment decoded from a raw pushbutton sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BrightnessCommand {
    Increase,
    Decrease,
    NoOp,
}

/// Decode a raw GPIO pushbutton sample into a brightness command.
///
/// Exactly two input patterns are meaningful; everything else (no button,
/// chords, other buttons) is a no-op.
pub const fn decode_buttons(raw: u32) -> BrightnessCommand {
    match raw {
        BTN_UP_MASK => BrightnessCommand::Increase,
        BTN_DOWN_MASK => BrightnessCommand::Decrease,
        _ => BrightnessCommand::NoOp,
    }
}

/// On/off tick split over a fixed PWM period.
///
/// Invariant: `time_on + time_off == period`, both within `0..=period`.
/// Starts at full brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyCycle {
    time_on: u32,
    time_off: u32,
    period: u32,
}

impl DutyCycle {
    /// Create a duty cycle at full brightness over `period` ticks.
    pub const fn new(period: u32) -> Self {
        Self {
            time_on: period,
            time_off: 0,
            period,
        }
    }

    /// Apply one brightness command, moving the split one tick.
    ///
    /// Clamping the incremented side at `period` keeps the complement
    /// non-negative, so both sides stay in range. Returns whether the
    /// split changed.
    pub fn apply(&mut self, cmd: BrightnessCommand) -> bool {
        match cmd {
            BrightnessCommand::Increase => {
                let before = self.time_on;
                self.time_on = self.period.min(self.time_on + 1);
                self.time_off = self.period - self.time_on;
                self.time_on != before
            }
            BrightnessCommand::Decrease => {
                let before = self.time_off;
                self.time_off = self.period.min(self.time_off + 1);
                self.time_on = self.period - self.time_off;
                self.time_off != before
            }
            BrightnessCommand::NoOp => false,
        }
    }

    /// Ticks the output is driven high each period.
    pub fn time_on(&self) -> u32 {
        self.time_on
    }

    /// Ticks the output is held low each period.
    pub fn time_off(&self) -> u32 {
        self.time_off
    }

    pub fn period(&self) -> u32 {
        self.period
    }
}
