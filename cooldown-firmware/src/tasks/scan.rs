//! Keypad scan task
//!
//! Scans the matrix every `scan_interval_ms` and applies each accepted
//! key press to the session as soon as the scanner reports it.

use cooldown_core::config::ScanConfig;
use defmt::*;
use embassy_time::{Delay, Duration, Instant, Timer};

use crate::channels::with_session;
use crate::Keypad;

/// Scan task - turns key presses into session transitions
#[embassy_executor::task]
pub async fn scan_task(mut keypad: Keypad, config: ScanConfig) {
    info!("Scan task started");

    let mut delay = Delay;
    let interval = Duration::from_millis(config.scan_interval_ms);

    loop {
        let now_ms = Instant::now().as_millis();
        keypad
            .scan(now_ms, &mut delay, |key| {
                let changed = with_session(|session| session.handle_key(key));
                debug!("K{} pressed ({})", key.number(), key.action());
                if !changed {
                    trace!("K{} had no effect", key.number());
                }
            })
            .await;

        Timer::after(interval).await;
    }
}
