//! Cooldown Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the drivers are
//! written against. Chip-specific crates (currently RP2040) implement them,
//! and host tests implement them with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  cooldown-firmware                      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cooldown-drivers (panel, matrix, ...)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cooldown-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ cooldown-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::FlexPin`] - Digital I/O
//! - [`spi::SpiBus`] - Write-only panel bus
//! - [`pwm::PwmChannel`] - Backlight duty output

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pwm;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::{FlexPin, InputPin, OutputPin};
pub use pwm::PwmChannel;
pub use spi::SpiBus;
