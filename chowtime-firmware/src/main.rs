//! Chowtime - Alarm Feeder Firmware
//!
//! Main firmware binary for an RP2040 board with a 16x2 character LCD,
//! three buttons, a hopper servo and a passive buzzer. Set an alarm from
//! the buttons; when the clock reaches it, the hopper opens.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use chowtime_core::runtime::MainLoop;
use chowtime_core::time::CivilDateTime;
use chowtime_core::traits::CharacterDisplay;
use chowtime_hal_rp2040::RtcClock;

use crate::board::Board;
use crate::config::{BUILD_UNIX_SECS, FEEDER_CONFIG, UTC_OFFSET_MINUTES};

mod board;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Chowtime firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    let mut board = Board::new(p);
    info!("Peripherals initialized");

    match board.lcd.init() {
        Ok(()) => info!(
            "LCD ready ({}x{})",
            board.lcd.columns(),
            board.lcd.rows()
        ),
        Err(e) => warn!("LCD init failed: {}", e),
    }

    seed_clock(&mut board.clock);

    let app = MainLoop::new(
        &FEEDER_CONFIG,
        board.lcd,
        board.panel,
        board.buttons,
        board.clock,
        Delay,
    );

    spawner.spawn(tasks::feeder_task(app)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in the feeder task
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Start the RTC from the build time unless it is already counting
///
/// The RTC survives a soft reset, so a running clock is left alone.
fn seed_clock(clock: &mut RtcClock<'_>) {
    if clock.is_running() {
        info!("RTC already running, keeping its time");
        return;
    }

    let Some(civil) = CivilDateTime::from_unix_with_offset(BUILD_UNIX_SECS, UTC_OFFSET_MINUTES)
    else {
        warn!("Build time {} outside calendar range, RTC not seeded", BUILD_UNIX_SECS);
        return;
    };

    match clock.seed(&civil) {
        Ok(()) => info!(
            "RTC seeded: {}-{}-{} {}:{}:{}",
            civil.year, civil.month, civil.day, civil.hour, civil.minute, civil.second
        ),
        Err(e) => warn!("RTC seed failed: {}", Debug2Format(&e)),
    }
}
