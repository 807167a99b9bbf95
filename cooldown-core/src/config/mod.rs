//! Configuration types
//!
//! The device has no persistent storage and no user-editable settings, so
//! configuration is a set of compile-time defaults grouped per subsystem.
//! Tasks take these structs by value, which keeps the constants in one place
//! and lets tests build variants.

/// Panel horizontal resolution in pixels
pub const HOR_RES: u16 = 480;

/// Panel vertical resolution in pixels
pub const VER_RES: u16 = 320;

/// Number of tracked heroes
pub const HERO_COUNT: usize = 5;

/// Display and bus settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Horizontal resolution in pixels
    pub width: u16,
    /// Vertical resolution in pixels
    pub height: u16,
    /// Largest single bus transfer in bytes
    pub max_transfer_bytes: usize,
    /// Lines rendered per partial buffer
    pub buffer_lines: u16,
    /// Render loop sleep between toolkit passes (ms)
    pub render_interval_ms: u64,
    /// Footer label refresh period (ms)
    pub footer_refresh_ms: u32,
    /// Hero label refresh period (ms)
    pub hero_refresh_ms: u32,
    /// Tab selection refresh period (ms)
    pub tab_refresh_ms: u32,
}

impl DisplayConfig {
    /// Pixels per bus chunk (two bytes per RGB565 pixel)
    pub const fn max_chunk_pixels(&self) -> usize {
        self.max_transfer_bytes / 2
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: HOR_RES,
            height: VER_RES,
            max_transfer_bytes: 4096,
            buffer_lines: 32,
            render_interval_ms: 10,
            footer_refresh_ms: 100,
            hero_refresh_ms: 250,
            tab_refresh_ms: 50,
        }
    }
}

/// Key matrix scan settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanConfig {
    /// Minimum time between accepted transitions of one key (ms)
    pub debounce_ms: u64,
    /// Settling time after driving a column (ms)
    pub settle_ms: u32,
    /// Sleep between scan passes (ms)
    pub scan_interval_ms: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 100,
            settle_ms: 1,
            scan_interval_ms: 50,
        }
    }
}

/// Session clock settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    /// Period of the clock tick (ms)
    pub tick_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self { tick_ms: 1000 }
    }
}

/// Backlight PWM settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BacklightConfig {
    /// PWM carrier frequency in Hz
    pub frequency_hz: u32,
    /// Duty resolution in bits
    pub resolution_bits: u8,
    /// Brightness applied at boot (0.0 - 1.0)
    pub boot_brightness: f32,
}

impl Default for BacklightConfig {
    fn default() -> Self {
        Self {
            frequency_hz: 5_000,
            resolution_bits: 13,
            boot_brightness: 0.5,
        }
    }
}
