//! State shared between tasks
//!
//! The session lives behind a single blocking mutex. Every access is a
//! short critical section with no await inside, so the scan, clock and
//! render tasks always see a consistent session and never a torn clock.

use core::cell::RefCell;

use cooldown_core::session::SessionState;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

/// Mutex type guarding the session
pub type SharedSession = Mutex<CriticalSectionRawMutex, RefCell<SessionState>>;

/// The one session aggregate
pub static SESSION: SharedSession = Mutex::new(RefCell::new(SessionState::new()));

/// Run `f` with exclusive access to the session
pub fn with_session<R>(f: impl FnOnce(&mut SessionState) -> R) -> R {
    SESSION.lock(|cell| f(&mut cell.borrow_mut()))
}

/// Copy of the session for formatting outside the lock
pub fn snapshot() -> SessionState {
    SESSION.lock(|cell| *cell.borrow())
}
