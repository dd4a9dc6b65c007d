//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in phosphene-core for the lab board peripherals:
//!
//! - 4x4 matrix keypad scanner
//! - Two-digit seven-segment display bus
//! - Discrete RGB LED

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod keypad;
pub mod rgb;
pub mod sevenseg;
