//! Board-concrete driver types
//!
//! Embassy tasks cannot be generic, so the driver generics are pinned to
//! the RP2040 pin types here.

use embassy_rp::gpio::{Input, Output};
use phosphene_drivers::gpio::{HalInput, HalOutput};
use phosphene_drivers::keypad::{GpioMatrix, MatrixKeypad};
use phosphene_drivers::rgb::RgbLed;
use phosphene_drivers::sevenseg::SevenSegment;

pub type BoardOutput = HalOutput<Output<'static>>;
pub type BoardInput = HalInput<Input<'static>>;

pub type BoardKeypad = MatrixKeypad<GpioMatrix<BoardOutput, BoardInput>>;
pub type BoardDisplay = SevenSegment<BoardOutput>;
pub type BoardRgb = RgbLed<BoardOutput>;
