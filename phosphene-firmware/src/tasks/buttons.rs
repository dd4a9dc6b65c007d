//! Pushbutton sampling task
//!
//! Samples the four board pushbuttons on a fixed period and publishes the
//! raw bitmask unconditionally. No edge detection: the mailbox's
//! overwrite semantics keep a backlog from ever forming, and the RGB task
//! steps once per observed sample.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};

use crate::channels::BUTTON_SAMPLE;

/// Buttons task configuration
#[derive(Clone)]
pub struct ButtonsConfig {
    /// Sampling period
    pub sample_period: Duration,
}

impl Default for ButtonsConfig {
    fn default() -> Self {
        Self {
            sample_period: Duration::from_millis(100),
        }
    }
}

#[embassy_executor::task]
pub async fn buttons_task(buttons: [Input<'static>; 4], config: ButtonsConfig) {
    info!("Buttons task started");

    let mut ticker = Ticker::every(config.sample_period);

    loop {
        let mut raw = 0u32;
        for (bit, button) in buttons.iter().enumerate() {
            if button.is_high() {
                raw |= 1 << bit;
            }
        }

        BUTTON_SAMPLE.publish(raw);
        ticker.next().await;
    }
}
