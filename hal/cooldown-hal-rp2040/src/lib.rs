//! RP2040-specific HAL for the tracker firmware
//!
//! Newtype wrappers that implement the shared `cooldown-hal` traits on top
//! of embassy-rp peripherals:
//!
//! - GPIO lines (push-pull output, input, tri-state flex)
//! - DMA-backed, transmit-only SPI for the panel
//! - PWM output for the backlight, with carrier/divider calculation

#![no_std]

pub mod gpio;
pub mod pwm;
pub mod spi;

pub use gpio::{FlexLine, InputLine, OutputLine};
pub use pwm::BacklightPwm;
pub use spi::PanelSpi;

// Re-export shared traits from cooldown-hal for convenience
pub use cooldown_hal::{FlexPin, InputPin, OutputPin, PwmChannel, SpiBus};
