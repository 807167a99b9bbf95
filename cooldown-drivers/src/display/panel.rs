//! Panel bus driver
//!
//! Drives the controller over a write-only SPI bus plus three GPIO lines:
//! chip select (active low), data/command strobe (low = command, high =
//! data) and hardware reset (active low).
//!
//! Register traffic uses one CS-framed transaction per byte or word. Pixel
//! traffic opens a single data stream with [`Panel::begin_pixels`], feeds it
//! with queued chunk writes and closes it with [`Panel::end_pixels`].
//!
//! # Usage
//!
//! ```ignore
//! let mut panel = Panel::new(spi, cs, dc, rst);
//! panel.init(&mut delay).await?;
//! panel.clear(0x4504).await?;
//! ```

use cooldown_core::config::{HOR_RES, VER_RES};
use cooldown_hal::{OutputPin, SpiBus};
use embedded_hal_async::delay::DelayNs;

use super::init::{CMD_COLUMN_ADDRESS, CMD_MEMORY_WRITE, CMD_ROW_ADDRESS, INIT_SEQUENCE};
use super::window::PixelWindow;

/// Reset line hold times in milliseconds
const RESET_HOLD_MS: u32 = 100;

/// Pixels staged per bus write by the fill and stream paths
const FILL_PIXELS: usize = 64;

/// Panel driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError<E> {
    /// The SPI bus rejected a transfer
    Bus(E),
    /// Window or coordinate outside the panel
    OutOfBounds,
    /// Pixel stream length did not match the window area
    PixelCount { expected: usize, actual: usize },
}

/// Panel controller on an SPI bus
pub struct Panel<SPI, CS, DC, RST> {
    spi: SPI,
    cs: CS,
    dc: DC,
    rst: RST,
}

impl<SPI, CS, DC, RST> Panel<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Take ownership of the bus and control lines
    ///
    /// Chip select is parked high and reset released.
    pub fn new(spi: SPI, mut cs: CS, dc: DC, mut rst: RST) -> Self {
        cs.set_high();
        rst.set_high();
        Self { spi, cs, dc, rst }
    }

    /// Pulse the hardware reset line
    ///
    /// Chip select is left low; the next transaction raises it.
    pub async fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        self.cs.set_low();
        delay.delay_ms(RESET_HOLD_MS).await;
        self.rst.set_low();
        delay.delay_ms(RESET_HOLD_MS).await;
        self.rst.set_high();
    }

    fn transaction(&mut self, data: bool, bytes: &[u8]) -> Result<(), PanelError<SPI::Error>> {
        self.cs.set_low();
        self.dc.set_state(data);
        let result = self.spi.write(bytes);
        self.cs.set_high();
        result.map_err(PanelError::Bus)
    }

    /// Send a command opcode
    pub fn write_command(&mut self, opcode: u8) -> Result<(), PanelError<SPI::Error>> {
        self.transaction(false, &[opcode])
    }

    /// Send one parameter byte
    pub fn write_data_byte(&mut self, byte: u8) -> Result<(), PanelError<SPI::Error>> {
        self.transaction(true, &[byte])
    }

    /// Send one parameter word, high byte first
    pub fn write_data_word(&mut self, word: u16) -> Result<(), PanelError<SPI::Error>> {
        self.transaction(true, &word.to_be_bytes())
    }

    /// Reset the controller and replay the bring-up table
    pub async fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), PanelError<SPI::Error>> {
        self.reset(delay).await;
        for command in INIT_SEQUENCE.iter() {
            self.write_command(command.opcode)?;
            for &byte in command.data {
                self.write_data_byte(byte)?;
            }
            if command.delay_ms > 0 {
                delay.delay_ms(command.delay_ms as u32).await;
            }
        }
        Ok(())
    }

    /// Program the address window and start a memory write
    pub fn set_window(&mut self, window: &PixelWindow) -> Result<(), PanelError<SPI::Error>> {
        if !window.fits(HOR_RES, VER_RES) {
            return Err(PanelError::OutOfBounds);
        }
        self.write_command(CMD_COLUMN_ADDRESS)?;
        for byte in window.x_start.to_be_bytes().into_iter().chain(window.x_end.to_be_bytes()) {
            self.write_data_byte(byte)?;
        }
        self.write_command(CMD_ROW_ADDRESS)?;
        for byte in window.y_start.to_be_bytes().into_iter().chain(window.y_end.to_be_bytes()) {
            self.write_data_byte(byte)?;
        }
        self.write_command(CMD_MEMORY_WRITE)
    }

    /// Open a pixel data stream (CS low, D/C high)
    pub fn begin_pixels(&mut self) {
        self.cs.set_low();
        self.dc.set_high();
    }

    /// Queue one chunk of wire-order pixel bytes and wait for it to drain
    pub async fn write_pixel_chunk(&mut self, bytes: &[u8]) -> Result<(), PanelError<SPI::Error>> {
        self.spi.write_queued(bytes).await.map_err(PanelError::Bus)
    }

    /// Close the pixel data stream
    pub fn end_pixels(&mut self) {
        self.cs.set_high();
    }

    /// Set the window and stream exactly `window.area()` pixels into it
    pub async fn push_pixels<I>(
        &mut self,
        window: &PixelWindow,
        pixels: I,
    ) -> Result<(), PanelError<SPI::Error>>
    where
        I: IntoIterator<Item = u16>,
    {
        self.set_window(window)?;
        let expected = window.area();
        let mut pixels = pixels.into_iter();
        let mut staged = [0u8; FILL_PIXELS * 2];
        let mut sent = 0usize;

        self.begin_pixels();
        let mut result = Ok(());
        loop {
            let mut len = 0;
            while len < staged.len() && sent < expected {
                let Some(px) = pixels.next() else { break };
                staged[len..len + 2].copy_from_slice(&px.to_be_bytes());
                len += 2;
                sent += 1;
            }
            if len == 0 {
                break;
            }
            if let Err(e) = self.write_pixel_chunk(&staged[..len]).await {
                result = Err(e);
                break;
            }
        }
        self.end_pixels();
        result?;

        let actual = sent + pixels.count();
        if actual != expected {
            return Err(PanelError::PixelCount { expected, actual });
        }
        Ok(())
    }

    /// Fill a window with one colour
    pub async fn fill_window(
        &mut self,
        window: &PixelWindow,
        color: u16,
    ) -> Result<(), PanelError<SPI::Error>> {
        self.set_window(window)?;
        let mut staged = [0u8; FILL_PIXELS * 2];
        for pair in staged.chunks_exact_mut(2) {
            pair.copy_from_slice(&color.to_be_bytes());
        }

        let mut remaining = window.area();
        self.begin_pixels();
        let mut result = Ok(());
        while remaining > 0 {
            let n = remaining.min(FILL_PIXELS);
            if let Err(e) = self.write_pixel_chunk(&staged[..n * 2]).await {
                result = Err(e);
                break;
            }
            remaining -= n;
        }
        self.end_pixels();
        result
    }

    /// Fill the whole panel with one colour
    pub async fn clear(&mut self, color: u16) -> Result<(), PanelError<SPI::Error>> {
        self.fill_window(&PixelWindow::full_screen(), color).await
    }

    /// Write a single pixel
    pub fn set_pixel(&mut self, x: u16, y: u16, color: u16) -> Result<(), PanelError<SPI::Error>> {
        let window = PixelWindow::new(x, y, x, y).ok_or(PanelError::OutOfBounds)?;
        self.set_window(&window)?;
        self.write_data_word(color)
    }
}
