//! Display refresh task
//!
//! Time-multiplexes the two seven-segment digits: the current key on the
//! right, the previous key on the left, each held for a short settle
//! delay. The combined cycle stays well under the flicker threshold, so
//! persistence of vision makes both digits appear continuously lit.

use defmt::*;
use embassy_time::{Duration, Timer};

use phosphene_core::keypad::KeyHistory;
use phosphene_core::segments::{decode, Digit};
use phosphene_core::traits::SegmentWriter;

use crate::channels::KEY_PRESSED;
use crate::components::BoardDisplay;

/// Display task configuration
#[derive(Clone)]
pub struct DisplayConfig {
    /// How long each digit stays lit per refresh cycle.
    ///
    /// Both digits together must cycle fast enough to avoid visible
    /// flicker; the right bound depends on the board, hence a knob.
    pub settle: Duration,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(12),
        }
    }
}

#[embassy_executor::task]
pub async fn display_task(mut display: BoardDisplay, config: DisplayConfig) {
    info!("Display task started");

    let mut history = KeyHistory::new();

    loop {
        if let Some(key) = KEY_PRESSED.try_consume() {
            history.push(key);
        }

        display.write_pattern(decode(history.current(), Digit::Right));
        Timer::after(config.settle).await;

        display.write_pattern(decode(history.previous(), Digit::Left));
        Timer::after(config.settle).await;
    }
}
