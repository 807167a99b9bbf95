//! Session state engine
//!
//! Holds the in-game clock and the hero cooldown timers, and defines every
//! transition the keys and the one-second tick can make. All arithmetic is
//! integer and clamped; no transition can fail.

pub mod format;
pub mod state;
pub mod timer;

pub use format::{footer_label, hero_label, Label};
pub use state::{SessionState, Tab};
pub use timer::{GameClock, HeroTimer, HERO_START_MINUTES};
