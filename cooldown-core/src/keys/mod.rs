//! Key identities and debounce logic
//!
//! The device has an 11-key keypad: a 2x5 strobed matrix (K1-K10) plus
//! one standalone key (K11). Scanning hardware lives in the drivers crate;
//! this module holds what a key *means* and the per-key debounce state
//! machine, so both can be tested on the host.

pub mod debounce;
pub mod id;

pub use debounce::{Debouncer, KeyState};
pub use id::{KeyAction, KeyId, MATRIX_COLS, MATRIX_ROWS};
