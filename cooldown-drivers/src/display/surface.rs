//! Render surface adapter
//!
//! Bridges the label renderer's flush contract to the panel. A flush sets
//! the address window once, then streams the native RGB565 buffer in
//! bounded chunks, byte-swapping each chunk into a scratch buffer because
//! the controller expects the high byte first.

use cooldown_core::config::DisplayConfig;
use cooldown_hal::{OutputPin, SpiBus};

use super::panel::{Panel, PanelError};
use super::window::PixelWindow;

/// Scratch buffer size, the largest transfer the bus accepts
pub const MAX_TRANSFER_BYTES: usize = 4096;

/// Token returned once per completed flush
///
/// The caller may reuse its pixel buffer only after receiving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub struct FlushReady {
    /// Pixels written
    pub pixels: usize,
    /// Bus transfers issued
    pub chunks: usize,
}

/// Something a rendered rectangle can be flushed to
#[allow(async_fn_in_trait)]
pub trait FlushTarget {
    /// Error type for flush failures
    type Error;

    /// Write `pixels` (row-major, native RGB565) into `area`
    async fn flush(&mut self, area: &PixelWindow, pixels: &[u16]) -> Result<FlushReady, Self::Error>;
}

/// Swap the two bytes of an RGB565 pixel
#[inline]
pub const fn swap_bytes(px: u16) -> u16 {
    px.swap_bytes()
}

/// Lengths of the chunks a transfer of `total` pixels is split into
///
/// Every chunk is `max` long except possibly the last.
pub fn chunk_plan(total: usize, max: usize) -> impl Iterator<Item = usize> {
    let max = max.max(1);
    (0..total).step_by(max).map(move |start| (total - start).min(max))
}

/// Panel wrapped with a chunk scratch buffer
pub struct PanelSurface<SPI, CS, DC, RST> {
    panel: Panel<SPI, CS, DC, RST>,
    scratch: [u8; MAX_TRANSFER_BYTES],
    max_chunk_pixels: usize,
}

impl<SPI, CS, DC, RST> PanelSurface<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    pub fn new(panel: Panel<SPI, CS, DC, RST>, config: &DisplayConfig) -> Self {
        let max_chunk_pixels = config
            .max_chunk_pixels()
            .clamp(1, MAX_TRANSFER_BYTES / 2);
        Self {
            panel,
            scratch: [0; MAX_TRANSFER_BYTES],
            max_chunk_pixels,
        }
    }

    /// Pixels per bus transfer
    /// Direct access to the panel, for fills outside the flush path
    pub fn panel_mut(&mut self) -> &mut Panel<SPI, CS, DC, RST> {
        &mut self.panel
    }
}

impl<SPI, CS, DC, RST> FlushTarget for PanelSurface<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    type Error = PanelError<SPI::Error>;

    async fn flush(&mut self, area: &PixelWindow, pixels: &[u16]) -> Result<FlushReady, Self::Error> {
        let expected = area.area();
        if pixels.len() != expected {
            return Err(PanelError::PixelCount {
                expected,
                actual: pixels.len(),
            });
        }

        self.panel.set_window(area)?;
        self.panel.begin_pixels();

        let mut offset = 0;
        let mut chunks = 0;
        let mut result = Ok(());
        for len in chunk_plan(expected, self.max_chunk_pixels) {
            let bytes = &mut self.scratch[..len * 2];
            for (dst, &px) in bytes.chunks_exact_mut(2).zip(&pixels[offset..offset + len]) {
                dst.copy_from_slice(&swap_bytes(px).to_le_bytes());
            }
            if let Err(e) = self.panel.write_pixel_chunk(&self.scratch[..len * 2]).await {
                result = Err(e);
                break;
            }
            offset += len;
            chunks += 1;
        }
        self.panel.end_pixels();
        result?;

        Ok(FlushReady {
            pixels: expected,
            chunks,
        })
    }
}
