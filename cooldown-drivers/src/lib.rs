//! Hardware driver implementations
//!
//! This crate provides the drivers the firmware composes, written against
//! the `cooldown-hal` traits so they can be exercised on the host:
//!
//! - Panel bus driver and vendor init sequence (SPI + D/C strobe)
//! - Render surface: partial-buffer flush with chunked, byte-swapped transfers
//! - Strip buffer the label renderer draws into
//! - Main screen layout with per-band refresh timers
//! - Key matrix scanner
//! - PWM backlight

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backlight;
pub mod display;
pub mod input;
