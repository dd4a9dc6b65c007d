//! Board-agnostic core logic for the Phosphene lab firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (keypad, segment display, RGB output)
//! - Single-slot overwrite mailbox for inter-task samples
//! - Keypad press-edge detection and key history
//! - Seven-segment pattern decoding
//! - Software-PWM duty cycle state

#![no_std]
#![deny(unsafe_code)]

pub mod keypad;
pub mod mailbox;
pub mod pwm;
pub mod segments;
pub mod traits;
