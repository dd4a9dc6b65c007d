//! Phosphene - keypad / seven-segment / RGB lab firmware
//!
//! Four cooperating tasks on one core: the keypad and pushbutton tasks
//! sample inputs and publish the latest value through single-slot
//! mailboxes; the display and RGB tasks consume them to multiplex a
//! two-digit seven-segment display and software-PWM an RGB LED.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use phosphene_drivers::gpio::{HalInput, HalOutput};
use phosphene_drivers::keypad::{GpioMatrix, MatrixKeypad, DEFAULT_KEYTABLE};
use phosphene_drivers::rgb::RgbLed;
use phosphene_drivers::sevenseg::SevenSegment;

mod channels;
mod components;
mod tasks;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Phosphene firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Keypad matrix: rows driven active-low, columns read with pull-ups.
    let rows = [
        HalOutput(Output::new(p.PIN_2, Level::High)),
        HalOutput(Output::new(p.PIN_3, Level::High)),
        HalOutput(Output::new(p.PIN_4, Level::High)),
        HalOutput(Output::new(p.PIN_5, Level::High)),
    ];
    let cols = [
        HalInput(Input::new(p.PIN_6, Pull::Up)),
        HalInput(Input::new(p.PIN_7, Pull::Up)),
        HalInput(Input::new(p.PIN_8, Pull::Up)),
        HalInput(Input::new(p.PIN_9, Pull::Up)),
    ];
    let keypad = unwrap!(MatrixKeypad::new(GpioMatrix::new(rows, cols), DEFAULT_KEYTABLE));

    // Seven-segment bus: segments a-g plus the digit-select line.
    let display = SevenSegment::new([
        HalOutput(Output::new(p.PIN_10, Level::Low)),
        HalOutput(Output::new(p.PIN_11, Level::Low)),
        HalOutput(Output::new(p.PIN_12, Level::Low)),
        HalOutput(Output::new(p.PIN_13, Level::Low)),
        HalOutput(Output::new(p.PIN_14, Level::Low)),
        HalOutput(Output::new(p.PIN_15, Level::Low)),
        HalOutput(Output::new(p.PIN_16, Level::Low)),
        HalOutput(Output::new(p.PIN_17, Level::Low)),
    ]);

    let rgb = RgbLed::new(
        HalOutput(Output::new(p.PIN_18, Level::Low)),
        HalOutput(Output::new(p.PIN_19, Level::Low)),
        HalOutput(Output::new(p.PIN_20, Level::Low)),
    );

    // Pushbuttons, active-high. Bit 0 steps brightness up, bit 3 down.
    let buttons = [
        Input::new(p.PIN_21, Pull::Down),
        Input::new(p.PIN_22, Pull::Down),
        Input::new(p.PIN_26, Pull::Down),
        Input::new(p.PIN_27, Pull::Down),
    ];

    // On-board LED doubles as the status blinker.
    let status_led = Output::new(p.PIN_25, Level::Low);

    info!("Initialization complete, system ready");

    spawner.spawn(tasks::keypad_task(keypad)).unwrap();
    spawner
        .spawn(tasks::buttons_task(buttons, tasks::ButtonsConfig::default()))
        .unwrap();
    spawner
        .spawn(tasks::display_task(display, tasks::DisplayConfig::default()))
        .unwrap();
    spawner
        .spawn(tasks::rgb_task(rgb, tasks::RgbConfig::default()))
        .unwrap();
    spawner
        .spawn(tasks::heartbeat_task(status_led, tasks::HeartbeatConfig::default()))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // All work happens in the spawned tasks.
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
