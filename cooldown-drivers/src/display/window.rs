//! Addressable pixel window

use cooldown_core::config::{HOR_RES, VER_RES};
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Rectangle in panel coordinates, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelWindow {
    pub x_start: u16,
    pub y_start: u16,
    pub x_end: u16,
    pub y_end: u16,
}

impl PixelWindow {
    /// Create a window, checking it is well-formed and on the panel
    pub fn new(x_start: u16, y_start: u16, x_end: u16, y_end: u16) -> Option<Self> {
        let window = Self {
            x_start,
            y_start,
            x_end,
            y_end,
        };
        window.fits(HOR_RES, VER_RES).then_some(window)
    }

    /// Window covering the whole panel
    pub const fn full_screen() -> Self {
        Self {
            x_start: 0,
            y_start: 0,
            x_end: HOR_RES - 1,
            y_end: VER_RES - 1,
        }
    }

    /// Window from an origin and a size in pixels
    pub fn from_origin(x: u16, y: u16, width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Self::new(
            x,
            y,
            x.checked_add(width - 1)?,
            y.checked_add(height - 1)?,
        )
    }

    /// Check the window is ordered and inside a `width` x `height` panel
    pub fn fits(&self, width: u16, height: u16) -> bool {
        self.x_start <= self.x_end
            && self.y_start <= self.y_end
            && self.x_end < width
            && self.y_end < height
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.x_end - self.x_start + 1
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.y_end - self.y_start + 1
    }

    /// Number of pixels covered
    pub fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Check if a point lies inside the window
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x_start as i32
            && x <= self.x_end as i32
            && y >= self.y_start as i32
            && y <= self.y_end as i32
    }

    /// The same area as an embedded-graphics rectangle
    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.x_start as i32, self.y_start as i32),
            Size::new(self.width() as u32, self.height() as u32),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_screen() {
        let window = PixelWindow::full_screen();
        assert_eq!(window.width(), 480);
        assert_eq!(window.height(), 320);
        assert_eq!(window.area(), 480 * 320);
    }

    #[test]
    fn test_single_pixel() {
        let window = PixelWindow::new(479, 319, 479, 319).unwrap();
        assert_eq!(window.area(), 1);
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(PixelWindow::new(10, 0, 9, 0).is_none());
        assert!(PixelWindow::new(0, 5, 0, 4).is_none());
        assert!(PixelWindow::new(0, 0, 480, 10).is_none());
        assert!(PixelWindow::new(0, 0, 10, 320).is_none());
        assert!(PixelWindow::from_origin(0, 0, 0, 10).is_none());
        assert!(PixelWindow::from_origin(470, 0, 11, 1).is_none());
    }

    #[test]
    fn test_from_origin() {
        let window = PixelWindow::from_origin(10, 20, 30, 40).unwrap();
        assert_eq!(window, PixelWindow::new(10, 20, 39, 59).unwrap());
        assert_eq!(window.to_rectangle().size, Size::new(30, 40));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let window = PixelWindow::new(5, 5, 9, 9).unwrap();
        assert!(window.contains(5, 5));
        assert!(window.contains(9, 9));
        assert!(!window.contains(10, 9));
        assert!(!window.contains(4, 5));
    }
}
