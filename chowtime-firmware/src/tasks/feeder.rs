//! Feeder task
//!
//! Owns the whole application: buttons, clock, LCD and actuators are only
//! ever touched from here.

use defmt::*;
use embassy_time::Delay;

use chowtime_core::runtime::MainLoop;
use chowtime_hal_rp2040::RtcClock;

use crate::board::{Buttons, FeederPanel, Lcd};

/// The application wired to the board
pub type FeederApp = MainLoop<Lcd, FeederPanel, Buttons, RtcClock<'static>, Delay>;

/// Run the feeder forever
#[embassy_executor::task]
pub async fn feeder_task(mut app: FeederApp) {
    info!("Feeder task started");
    app.run().await
}
