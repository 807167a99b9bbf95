//! Per-key debounce state machine
//!
//! Every key is either `Released` or `Pressed`. A press is only accepted
//! once the debounce interval has elapsed since the last accepted press of
//! the same key; releases are always accepted and never produce an event.
//! Only presses are actionable, so the caller receives at most one key-down
//! per physical press.

use super::id::{KeyId, MATRIX_COLS, MATRIX_ROWS};

/// Debounced state of a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyState {
    Released,
    Pressed,
}

/// State and last accepted press time of one key
#[derive(Debug, Clone, Copy)]
struct KeyTracker {
    state: KeyState,
    /// Monotonic time of the last accepted press (ms)
    last_press_ms: Option<u64>,
}

impl KeyTracker {
    const fn new() -> Self {
        Self {
            state: KeyState::Released,
            last_press_ms: None,
        }
    }

    /// Feed one sample, returns true if a key-down was accepted
    fn update(&mut self, pressed: bool, now_ms: u64, debounce_ms: u64) -> bool {
        match (self.state, pressed) {
            (KeyState::Released, true) => {
                let settled = match self.last_press_ms {
                    Some(last) => now_ms.saturating_sub(last) >= debounce_ms,
                    None => true,
                };
                if settled {
                    self.state = KeyState::Pressed;
                    self.last_press_ms = Some(now_ms);
                }
                settled
            }
            (KeyState::Pressed, false) => {
                self.state = KeyState::Released;
                false
            }
            _ => false,
        }
    }
}

/// Debounce state for the whole keypad
///
/// Owned by the scanner; only the accepted key-downs leave it.
#[derive(Debug, Clone)]
pub struct Debouncer {
    cells: [[KeyTracker; MATRIX_COLS]; MATRIX_ROWS],
    standalone: KeyTracker,
    debounce_ms: u64,
}

impl Debouncer {
    /// Create a debouncer with every key released
    pub const fn new(debounce_ms: u64) -> Self {
        Self {
            cells: [[KeyTracker::new(); MATRIX_COLS]; MATRIX_ROWS],
            standalone: KeyTracker::new(),
            debounce_ms,
        }
    }

    /// Feed a raw sample for one key
    ///
    /// Returns true exactly when a new key-down is accepted.
    pub fn sample(&mut self, key: KeyId, pressed: bool, now_ms: u64) -> bool {
        let debounce_ms = self.debounce_ms;
        match self.tracker_mut(key) {
            Some(tracker) => tracker.update(pressed, now_ms, debounce_ms),
            None => false,
        }
    }

    /// Current debounced state of a key
    pub fn state(&self, key: KeyId) -> KeyState {
        match key {
            KeyId::Matrix { row, col } => self
                .cells
                .get(row as usize)
                .and_then(|r| r.get(col as usize))
                .map(|t| t.state)
                .unwrap_or(KeyState::Released),
            KeyId::Standalone => self.standalone.state,
        }
    }

    /// Check if a key is currently held
    pub fn is_pressed(&self, key: KeyId) -> bool {
        self.state(key) == KeyState::Pressed
    }

    fn tracker_mut(&mut self, key: KeyId) -> Option<&mut KeyTracker> {
        match key {
            KeyId::Matrix { row, col } => self
                .cells
                .get_mut(row as usize)
                .and_then(|r| r.get_mut(col as usize)),
            KeyId::Standalone => Some(&mut self.standalone),
        }
    }
}
