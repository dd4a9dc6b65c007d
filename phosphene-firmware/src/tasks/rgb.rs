//! RGB LED intensity task (software PWM)
//!
//! Consumes the latest pushbutton sample, steps the duty-cycle split one
//! tick per observed command, then drives the LED high for the on-ticks
//! and low for the off-ticks of each period. The on-phase is skipped
//! entirely at zero brightness so the loop never stalls.

use defmt::*;
use embassy_time::{Duration, Timer};

use phosphene_core::pwm::{decode_buttons, DutyCycle};
use phosphene_core::traits::{Color, RgbOutput};

use crate::channels::BUTTON_SAMPLE;
use crate::components::BoardRgb;

/// RGB task configuration
#[derive(Clone)]
pub struct RgbConfig {
    /// LED color while driven
    pub color: Color,
    /// PWM period in ticks
    pub period: u32,
    /// Real-time length of one PWM tick
    pub tick: Duration,
}

impl Default for RgbConfig {
    fn default() -> Self {
        Self {
            color: Color::Cyan,
            period: 20,
            tick: Duration::from_millis(1),
        }
    }
}

#[embassy_executor::task]
pub async fn rgb_task(mut led: BoardRgb, config: RgbConfig) {
    info!("RGB task started at full brightness");

    let mut duty = DutyCycle::new(config.period);

    loop {
        if let Some(raw) = BUTTON_SAMPLE.try_consume() {
            if duty.apply(decode_buttons(raw)) {
                info!("Time on: {} --- Time off: {}", duty.time_on(), duty.time_off());
            }
        }

        if duty.time_on() > 0 {
            led.set_color(config.color);
            Timer::after(config.tick * duty.time_on()).await;
        }

        // Always end the period dark so zero brightness is truly off.
        led.off();
        Timer::after(config.tick * duty.time_off()).await;
    }
}
