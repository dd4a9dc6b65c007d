//! Startup check and status LED task
//!
//! After a fixed delay, verifies that the keypad task has actually been
//! scanning (the lab's one-shot timer check), then settles into a slow
//! status blink. The LED pin is owned by this task alone.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Timer};
use portable_atomic::Ordering;

use crate::tasks::keypad::SCAN_COUNT;

/// Heartbeat task configuration
#[derive(Clone)]
pub struct HeartbeatConfig {
    /// How long to wait before the startup liveness check
    pub check_after: Duration,
    /// Minimum keypad scans expected by then
    pub min_scans: u32,
    /// Status LED toggle interval
    pub blink_interval: Duration,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            check_after: Duration::from_secs(5),
            min_scans: 100,
            blink_interval: Duration::from_millis(500),
        }
    }
}

#[embassy_executor::task]
pub async fn heartbeat_task(mut led: Output<'static>, config: HeartbeatConfig) {
    Timer::after(config.check_after).await;

    let scans = SCAN_COUNT.load(Ordering::Relaxed);
    if scans >= config.min_scans {
        info!("Startup check passed: {} keypad scans", scans);
    } else {
        warn!("Startup check failed: only {} keypad scans", scans);
    }

    loop {
        led.toggle();
        Timer::after(config.blink_interval).await;
    }
}
