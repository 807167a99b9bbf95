//! Colour panel drivers
//!
//! The panel is a 480x320 RGB565 controller on a write-only SPI bus with a
//! separate data/command strobe line.

pub mod init;
pub mod panel;
pub mod strip;
pub mod surface;
pub mod ui;
pub mod window;

pub use init::{InitCommand, INIT_SEQUENCE};
pub use panel::{Panel, PanelError};
pub use strip::StripBuffer;
pub use surface::{chunk_plan, swap_bytes, FlushReady, FlushTarget, PanelSurface};
pub use ui::{RefreshTimer, Ui, UiStrip};
pub use window::PixelWindow;

#[cfg(test)]
pub(crate) mod mock;
