//! Toddler clock firmware for nRF52840.
//!
//! A single poll loop drives everything: every `POLL_INTERVAL_MS` each
//! button samples its pin, the controls map the debounced state onto the
//! clock mode, and mode changes are reported over RTT.
//!
//! Display rendering and alarm storage live outside this binary; they
//! observe `ClockMode` through its predicates.

#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_time::{Duration, Instant, Ticker};
use panic_probe as _;

use toddler_clock::config::{BUTTON_DEBOUNCE_MS, POLL_INTERVAL_MS};
use toddler_clock::input::Button;
use toddler_clock::mode::ClockMode;
use toddler_clock::ui::{handle_buttons, Adjust};

/// Unwrap a result that cannot fail (nRF GPIO reads are infallible).
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("toddler-clock starting");

    let mut mode_button = infallible(Button::new(Input::new(p.P0_11, Pull::Up)));
    let mut up_button = infallible(Button::new(Input::new(p.P0_12, Pull::Up)));
    let mut down_button = infallible(Button::new(Input::new(p.P0_24, Pull::Up)));

    for button in [&mut mode_button, &mut up_button, &mut down_button] {
        button.debouncer_mut().set_debounce_time(BUTTON_DEBOUNCE_MS);
    }

    let mut clock = ClockMode::new();
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        // Truncating to u32 wraps after ~49.7 days; the debouncer uses
        // wrapping arithmetic throughout.
        let now = Instant::now().as_millis() as u32;

        infallible(mode_button.poll(now));
        infallible(up_button.poll(now));
        infallible(down_button.poll(now));

        let adjust = handle_buttons(
            &mut clock,
            mode_button.debouncer_mut(),
            up_button.debouncer_mut(),
            down_button.debouncer_mut(),
        );

        if clock.mode_just_changed() {
            info!("Mode: {}", clock.mode());
        }

        match adjust {
            Adjust::Increment => info!("Adjust {}: +1", clock.mode()),
            Adjust::Decrement => info!("Adjust {}: -1", clock.mode()),
            Adjust::None => {}
        }

        ticker.next().await;
    }
}
