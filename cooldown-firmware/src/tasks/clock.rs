//! One-second game clock tick

use cooldown_core::config::TimerConfig;
use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::with_session;

/// Clock task - advances the session once per tick period
#[embassy_executor::task]
pub async fn clock_task(config: TimerConfig) {
    info!("Clock task started");

    let mut ticker = Ticker::every(Duration::from_millis(config.tick_ms));

    loop {
        ticker.next().await;

        let expired = with_session(|session| session.tick());
        if expired > 0 {
            debug!("{} hero cooldown(s) expired", expired);
        }
    }
}
