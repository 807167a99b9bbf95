//! Board-agnostic core logic for the cooldown tracker firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Session state machine (game clock, hero cooldown timers)
//! - Key identities and the per-key debounce state machine
//! - Label formatting for the footer and hero rows
//! - Compile-time configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod keys;
pub mod session;
