//! Hero cooldown timers and the game clock

/// Minutes a hero cooldown starts at
pub const HERO_START_MINUTES: u8 = 8;

/// Upper bound of a hero cooldown in seconds (8:00)
pub const HERO_MAX_SECS: u16 = HERO_START_MINUTES as u16 * 60;

/// Cooldown timer for one hero
///
/// Invariant: an inactive timer always reads 0:00, and an active timer is
/// never above 8:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeroTimer {
    minutes: u8,
    seconds: u8,
    active: bool,
}

impl HeroTimer {
    /// Create an inactive timer
    pub const fn new() -> Self {
        Self {
            minutes: 0,
            seconds: 0,
            active: false,
        }
    }

    /// Start the cooldown at 8:00
    pub fn start(&mut self) {
        self.minutes = HERO_START_MINUTES;
        self.seconds = 0;
        self.active = true;
    }

    /// Force-stop the timer back to 0:00
    pub fn stop(&mut self) {
        *self = Self::new();
    }

    /// Remove one second of cooldown
    ///
    /// The timer expires (becomes inactive) as soon as it reaches 0:00.
    /// Returns true if it expired on this step.
    pub fn count_down(&mut self) -> bool {
        if !self.active {
            return false;
        }

        let remaining = self.total_secs().saturating_sub(1);
        self.set_total_secs(remaining);

        if remaining == 0 {
            self.active = false;
            return true;
        }
        false
    }

    /// Give back one second of cooldown, capped at 8:00
    pub fn count_up(&mut self) {
        if !self.active {
            return;
        }
        let total = (self.total_secs() + 1).min(HERO_MAX_SECS);
        self.set_total_secs(total);
    }

    /// Remaining whole minutes
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Remaining seconds within the minute (0-59)
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Check if the cooldown is running
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Remaining cooldown in seconds
    pub fn total_secs(&self) -> u16 {
        self.minutes as u16 * 60 + self.seconds as u16
    }

    fn set_total_secs(&mut self, total: u16) {
        self.minutes = (total / 60) as u8;
        self.seconds = (total % 60) as u8;
    }
}

/// Elapsed in-game time
///
/// Counts up without bound while running; `running` is only ever set while a
/// session is open (enforced by `SessionState`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameClock {
    minutes: u32,
    seconds: u8,
    running: bool,
}

impl GameClock {
    /// Create a stopped clock at 00:00
    pub const fn new() -> Self {
        Self {
            minutes: 0,
            seconds: 0,
            running: false,
        }
    }

    /// Stop the clock and zero it
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Add one second
    pub fn advance(&mut self) {
        self.seconds += 1;
        if self.seconds >= 60 {
            self.seconds = 0;
            self.minutes = self.minutes.saturating_add(1);
        }
    }

    /// Remove one second, stopping at 00:00
    pub fn rewind(&mut self) {
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        }
    }

    /// Set whether the clock counts on the tick
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Elapsed whole minutes
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Elapsed seconds within the minute (0-59)
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Check if the clock is counting
    pub fn is_running(&self) -> bool {
        self.running
    }
}
