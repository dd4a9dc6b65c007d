//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod display;
pub mod keypad;
pub mod led;

pub use display::SegmentWriter;
pub use keypad::Keypad;
pub use led::{Color, RgbOutput};
