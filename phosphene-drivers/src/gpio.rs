//! GPIO pin abstraction
//!
//! The drivers in this crate work against small infallible pin traits so
//! they can be unit tested with mock pins. [`HalOutput`] and [`HalInput`]
//! adapt any embedded-hal 1.0 digital pin (embassy-rp pins included) to
//! these traits; pin errors on real hardware are infallible anyway.

/// Trait for GPIO output pin abstraction
pub trait OutputPin {
    /// Set the pin high
    fn set_high(&mut self);

    /// Set the pin low
    fn set_low(&mut self);
}

/// Trait for GPIO input pin abstraction
pub trait InputPin {
    /// Check if the pin reads high
    fn is_high(&mut self) -> bool;
}

/// Adapter from an embedded-hal output pin to [`OutputPin`].
pub struct HalOutput<P>(pub P);

impl<P: embedded_hal::digital::OutputPin> OutputPin for HalOutput<P> {
    fn set_high(&mut self) {
        let _ = self.0.set_high();
    }

    fn set_low(&mut self) {
        let _ = self.0.set_low();
    }
}

/// Adapter from an embedded-hal input pin to [`InputPin`].
pub struct HalInput<P>(pub P);

impl<P: embedded_hal::digital::InputPin> InputPin for HalInput<P> {
    fn is_high(&mut self) -> bool {
        self.0.is_high().unwrap_or(false)
    }
}
