//! Panel bring-up
//!
//! The panel sits on SPI0 with DMA. Bring-up replays the controller init
//! table, then flashes a solid test colour before settling on the screen
//! background, so a dead or miswired panel is obvious at power-on.

use cooldown_drivers::display::{ui, PanelError, PanelSurface};
use cooldown_hal_rp2040::{OutputLine, PanelSpi};
use defmt::*;
use embassy_rp::peripherals::SPI0;
use embassy_time::{Delay, Duration, Timer};

/// Panel bus as wired on the board
pub type Surface = PanelSurface<PanelSpi<SPI0>, OutputLine, OutputLine, OutputLine>;

/// Bus error type of [`Surface`]
pub type SurfaceError = PanelError<embassy_rp::spi::Error>;

/// Power-on test colour
const TEST_COLOUR: u16 = 0xFF04;

/// How long the test colour stays up
const TEST_HOLD: Duration = Duration::from_millis(700);

/// Initialize the panel and leave it cleared to the background colour
pub async fn boot(surface: &mut Surface) -> Result<(), SurfaceError> {
    let panel = surface.panel_mut();

    panel.init(&mut Delay).await?;
    info!("Panel initialized");

    panel.clear(TEST_COLOUR).await?;
    Timer::after(TEST_HOLD).await;
    panel.clear(ui::background_raw()).await?;

    Ok(())
}
