//! Keypad sampling task
//!
//! Scans the matrix keypad as fast as the scheduler allows and publishes
//! each key-down edge to the key mailbox. A held key publishes exactly
//! once. The task yields every iteration so equal-priority tasks are
//! never starved by the delay-free scan loop.

use defmt::*;
use embassy_futures::yield_now;
use portable_atomic::{AtomicU32, Ordering};

use phosphene_core::keypad::KeyEdgeDetector;
use phosphene_core::traits::Keypad;

use crate::channels::KEY_PRESSED;
use crate::components::BoardKeypad;

/// Total matrix scans since boot, read by the startup check.
pub static SCAN_COUNT: AtomicU32 = AtomicU32::new(0);

#[embassy_executor::task]
pub async fn keypad_task(mut keypad: BoardKeypad) {
    info!("Keypad task started, press any key on the keypad");

    let mut edges = KeyEdgeDetector::new();

    loop {
        let (status, key) = keypad.poll();
        let scan = edges.update(status, key);

        if let Some(key) = scan.pressed {
            info!("Key pressed: {}", key as char);
            KEY_PRESSED.publish(key);
        }
        if scan.multi_key {
            warn!("Multiple keys pressed, input ignored");
        }
        if let Some(status) = scan.status_changed {
            info!("Keypad status changed to: {}", status);
        }

        SCAN_COUNT.fetch_add(1, Ordering::Relaxed);
        yield_now().await;
    }
}
