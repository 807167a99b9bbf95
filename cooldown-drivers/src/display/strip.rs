//! Partial frame buffer
//!
//! The renderer never holds a full frame. It points a strip at the band it
//! is redrawing, draws into it with embedded-graphics in absolute screen
//! coordinates, then hands [`StripBuffer::pixels`] to a
//! [`FlushTarget`](super::FlushTarget).

use core::convert::Infallible;

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::window::PixelWindow;

/// Strip of at most `N` pixels covering a window of the panel
pub struct StripBuffer<const N: usize> {
    pixels: [u16; N],
    window: PixelWindow,
}

impl<const N: usize> StripBuffer<N> {
    /// Create a strip covering a single pixel at the origin
    pub const fn new() -> Self {
        Self {
            pixels: [0; N],
            window: PixelWindow {
                x_start: 0,
                y_start: 0,
                x_end: 0,
                y_end: 0,
            },
        }
    }

    /// Retarget the strip; fails if the window does not fit in `N` pixels
    pub fn set_window(&mut self, window: PixelWindow) -> bool {
        if window.area() > N {
            return false;
        }
        self.window = window;
        true
    }

    pub fn window(&self) -> PixelWindow {
        self.window
    }

    /// Native RGB565 pixels of the current window, row-major
    pub fn pixels(&self) -> &[u16] {
        &self.pixels[..self.window.area()]
    }

    /// Fill the current window with one colour
    pub fn fill(&mut self, color: Rgb565) {
        let raw = RawU16::from(color).into_inner();
        let area = self.window.area();
        self.pixels[..area].fill(raw);
    }

    fn index(&self, point: Point) -> Option<usize> {
        if !self.window.contains(point.x, point.y) {
            return None;
        }
        let col = (point.x - self.window.x_start as i32) as usize;
        let row = (point.y - self.window.y_start as i32) as usize;
        Some(row * self.window.width() as usize + col)
    }
}

impl<const N: usize> Default for StripBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Dimensions for StripBuffer<N> {
    fn bounding_box(&self) -> Rectangle {
        self.window.to_rectangle()
    }
}

impl<const N: usize> DrawTarget for StripBuffer<N> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = RawU16::from(color).into_inner();
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}
