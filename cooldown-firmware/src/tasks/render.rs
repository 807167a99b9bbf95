//! Render task
//!
//! Owns the panel. Every pass copies the session out of the lock, lets the
//! UI redraw whatever label changed, then sleeps for the render interval.
//! Bus failures are fatal.

use cooldown_core::config::DisplayConfig;
use cooldown_drivers::display::{Ui, UiStrip};
use defmt::*;
use embassy_time::{Duration, Instant, Timer};

use crate::channels::snapshot;
use crate::display::Surface;

/// Render task - keeps the screen in step with the session
#[embassy_executor::task]
pub async fn render_task(
    mut surface: Surface,
    strip: &'static mut UiStrip,
    config: DisplayConfig,
) {
    info!("Render task started");

    let mut ui = Ui::new(&config);
    let interval = Duration::from_millis(config.render_interval_ms);

    loop {
        let now_ms = Instant::now().as_millis();
        let session = snapshot();

        match ui.service(now_ms, &session, &mut *strip, &mut surface).await {
            Ok(0) => {}
            Ok(flushes) => trace!("Redrew {} strip(s)", flushes),
            Err(e) => {
                error!("Panel write failed: {:?}", e);
                panic!("panel bus failure");
            }
        }

        Timer::after(interval).await;
    }
}
