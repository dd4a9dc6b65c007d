//! Discrete RGB LED driver

use phosphene_core::traits::{Color, RgbOutput};

use crate::gpio::OutputPin;

/// RGB LED over three GPIO pins, one per channel.
pub struct RgbLed<P> {
    red: P,
    green: P,
    blue: P,
}

impl<P: OutputPin> RgbLed<P> {
    /// Create the LED driver, starting dark.
    pub fn new(red: P, green: P, blue: P) -> Self {
        let mut led = Self { red, green, blue };
        led.off();
        led
    }
}

impl<P: OutputPin> RgbOutput for RgbLed<P> {
    fn set_color(&mut self, color: Color) {
        if color.red() {
            self.red.set_high();
        } else {
            self.red.set_low();
        }
        if color.green() {
            self.green.set_high();
        } else {
            self.green.set_low();
        }
        if color.blue() {
            self.blue.set_high();
        } else {
            self.blue.set_low();
        }
    }

    fn off(&mut self) {
        self.red.set_low();
        self.green.set_low();
        self.blue.set_low();
    }
}
