//! Session state and its transitions
//!
//! Every key action and the periodic tick is a transition over
//! `SessionState`. Transitions that do not apply in the current state are
//! silent no-ops, never errors.

use crate::config::HERO_COUNT;
use crate::keys::{KeyAction, KeyId};

use super::timer::{GameClock, HeroTimer};

/// Tabs of the main screen, cycled by the standalone key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tab {
    #[default]
    UltCooldowns,
    Tormentor,
    Buybacks,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Tab; 3] = [Tab::UltCooldowns, Tab::Tormentor, Tab::Buybacks];

    /// Position in the tab bar (0-based)
    pub fn index(&self) -> usize {
        match self {
            Tab::UltCooldowns => 0,
            Tab::Tormentor => 1,
            Tab::Buybacks => 2,
        }
    }

    /// The tab after this one, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Title shown in the tab bar
    pub fn title(&self) -> &'static str {
        match self {
            Tab::UltCooldowns => "Ult Cooldowns",
            Tab::Tormentor => "Tormentor",
            Tab::Buybacks => "Buybacks",
        }
    }
}

/// The shared session aggregate
///
/// Created at boot with everything inactive and mutated for the life of
/// the process. Small and `Copy` so readers can take a snapshot and format
/// it outside any lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionState {
    all_timers_active: bool,
    game_clock: GameClock,
    hero_timers: [HeroTimer; HERO_COUNT],
    active_tab: Tab,
}

impl SessionState {
    /// Create an idle session
    pub const fn new() -> Self {
        Self {
            all_timers_active: false,
            game_clock: GameClock::new(),
            hero_timers: [HeroTimer::new(); HERO_COUNT],
            active_tab: Tab::UltCooldowns,
        }
    }

    /// Apply the action bound to a key
    pub fn handle_key(&mut self, key: KeyId) -> bool {
        self.apply(key.action())
    }

    /// Apply one key action
    ///
    /// Returns true if the state changed.
    pub fn apply(&mut self, action: KeyAction) -> bool {
        let before = *self;

        match action {
            KeyAction::Hero(index) => self.toggle_hero(index as usize),
            KeyAction::EndSession => self.end_session(),
            KeyAction::ClockDecrement => self.clock_decrement(),
            KeyAction::TogglePause => self.toggle_pause(),
            KeyAction::ClockIncrement => self.clock_increment(),
            KeyAction::StartSession => self.start_session(),
            KeyAction::NextTab => self.active_tab = self.active_tab.next(),
        }

        *self != before
    }

    /// Periodic one-second tick
    ///
    /// Only counts while the session is open and the clock is running.
    /// Returns the number of hero timers that expired on this tick.
    pub fn tick(&mut self) -> usize {
        if !self.all_timers_active || !self.game_clock.is_running() {
            return 0;
        }
        self.game_clock.advance();
        self.count_down_heroes()
    }

    /// Check if a session is open
    pub fn is_active(&self) -> bool {
        self.all_timers_active
    }

    /// The in-game clock
    pub fn game_clock(&self) -> &GameClock {
        &self.game_clock
    }

    /// Cooldown timer of hero `index` (0-based)
    pub fn hero(&self, index: usize) -> Option<&HeroTimer> {
        self.hero_timers.get(index)
    }

    /// All hero timers
    pub fn heroes(&self) -> &[HeroTimer; HERO_COUNT] {
        &self.hero_timers
    }

    /// The visible tab
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    fn toggle_hero(&mut self, index: usize) {
        let session_active = self.all_timers_active;
        if let Some(timer) = self.hero_timers.get_mut(index) {
            if !timer.is_active() && session_active {
                timer.start();
            } else {
                timer.stop();
            }
        }
    }

    /// Close the session
    ///
    /// Hero timers are left untouched.
    fn end_session(&mut self) {
        self.all_timers_active = false;
        self.game_clock.reset();
    }

    fn clock_decrement(&mut self) {
        if !self.can_adjust_clock() {
            return;
        }
        self.game_clock.rewind();
        for timer in self.hero_timers.iter_mut() {
            timer.count_up();
        }
    }

    fn toggle_pause(&mut self) {
        if self.all_timers_active {
            let running = self.game_clock.is_running();
            self.game_clock.set_running(!running);
        }
    }

    fn clock_increment(&mut self) {
        if !self.can_adjust_clock() {
            return;
        }
        self.game_clock.advance();
        self.count_down_heroes();
    }

    fn start_session(&mut self) {
        if self.all_timers_active {
            return;
        }
        self.all_timers_active = true;
        self.game_clock.reset();
        self.game_clock.set_running(true);
    }

    /// Manual clock adjustment is only allowed while paused
    fn can_adjust_clock(&self) -> bool {
        self.all_timers_active && !self.game_clock.is_running()
    }

    fn count_down_heroes(&mut self) -> usize {
        self.hero_timers
            .iter_mut()
            .map(|timer| timer.count_down())
            .filter(|&expired| expired)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::timer::HERO_MAX_SECS;
    use proptest::prelude::*;

    fn press(state: &mut SessionState, number: u8) -> bool {
        state.handle_key(KeyId::from_number(number).unwrap())
    }

    fn running_session() -> SessionState {
        let mut state = SessionState::new();
        press(&mut state, 10);
        state
    }

    fn clock(state: &SessionState) -> (u32, u8) {
        (state.game_clock().minutes(), state.game_clock().seconds())
    }

    #[test]
    fn test_initial_state_idle() {
        let state = SessionState::new();
        assert!(!state.is_active());
        assert!(!state.game_clock().is_running());
        assert!(state.heroes().iter().all(|h| !h.is_active()));
        assert_eq!(state.active_tab(), Tab::UltCooldowns);
    }

    #[test]
    fn test_start_session() {
        let state = running_session();
        assert!(state.is_active());
        assert!(state.game_clock().is_running());
        assert_eq!(clock(&state), (0, 0));
    }

    #[test]
    fn test_start_session_ignored_when_active() {
        let mut state = running_session();
        state.tick();
        assert!(!press(&mut state, 10));
        assert_eq!(clock(&state), (0, 1));
    }

    #[test]
    fn test_hero_press_without_session_is_noop_stop() {
        let mut state = SessionState::new();
        assert!(!press(&mut state, 1));
        assert!(!state.hero(0).unwrap().is_active());
    }

    #[test]
    fn test_hero_toggle() {
        let mut state = running_session();
        assert!(press(&mut state, 3));
        let hero = state.hero(2).unwrap();
        assert!(hero.is_active());
        assert_eq!(hero.total_secs(), HERO_MAX_SECS);

        assert!(press(&mut state, 3));
        let hero = state.hero(2).unwrap();
        assert!(!hero.is_active());
        assert_eq!(hero.total_secs(), 0);
    }

    #[test]
    fn test_pause_toggles_only_in_session() {
        let mut idle = SessionState::new();
        assert!(!press(&mut idle, 8));
        assert!(!idle.game_clock().is_running());

        let mut state = running_session();
        press(&mut state, 8);
        assert!(!state.game_clock().is_running());
        press(&mut state, 8);
        assert!(state.game_clock().is_running());
    }

    #[test]
    fn test_manual_adjust_requires_pause() {
        let mut state = running_session();
        assert!(!press(&mut state, 9));
        assert!(!press(&mut state, 7));
        assert_eq!(clock(&state), (0, 0));
    }

    #[test]
    fn test_increment_moves_clock_and_heroes() {
        let mut state = running_session();
        press(&mut state, 1);
        press(&mut state, 8);

        press(&mut state, 9);
        assert_eq!(clock(&state), (0, 1));
        assert_eq!(state.hero(0).unwrap().total_secs(), HERO_MAX_SECS - 1);
        // Idle heroes untouched
        assert_eq!(state.hero(1).unwrap().total_secs(), 0);
    }

    #[test]
    fn test_decrement_floors_clock_and_caps_heroes() {
        let mut state = running_session();
        press(&mut state, 2);
        press(&mut state, 8);

        press(&mut state, 7);
        assert_eq!(clock(&state), (0, 0));
        assert_eq!(state.hero(1).unwrap().total_secs(), HERO_MAX_SECS);

        press(&mut state, 9);
        press(&mut state, 9);
        press(&mut state, 7);
        assert_eq!(clock(&state), (0, 1));
        assert_eq!(state.hero(1).unwrap().total_secs(), HERO_MAX_SECS - 1);
    }

    #[test]
    fn test_end_session_keeps_heroes() {
        let mut state = running_session();
        press(&mut state, 4);
        state.tick();

        press(&mut state, 6);
        assert!(!state.is_active());
        assert!(!state.game_clock().is_running());
        assert_eq!(clock(&state), (0, 0));
        assert!(state.hero(3).unwrap().is_active());
        assert_eq!(state.hero(3).unwrap().total_secs(), HERO_MAX_SECS - 1);
    }

    #[test]
    fn test_tick_requires_running_session() {
        let mut idle = SessionState::new();
        idle.tick();
        assert_eq!(clock(&idle), (0, 0));

        let mut paused = running_session();
        press(&mut paused, 8);
        paused.tick();
        assert_eq!(clock(&paused), (0, 0));
    }

    #[test]
    fn test_tick_counts_down_every_active_hero() {
        let mut state = running_session();
        press(&mut state, 1);
        press(&mut state, 5);

        assert_eq!(state.tick(), 0);
        for index in [0, 4] {
            assert_eq!(state.hero(index).unwrap().total_secs(), HERO_MAX_SECS - 1);
        }
        assert!(!state.hero(1).unwrap().is_active());

        for _ in 1..HERO_MAX_SECS - 1 {
            state.tick();
        }
        // Both started together, so both expire on the same tick
        assert_eq!(state.tick(), 2);
        assert!(state.heroes().iter().all(|h| !h.is_active()));
    }

    #[test]
    fn test_hero_expires_on_480th_tick() {
        let mut state = running_session();
        press(&mut state, 1);

        for tick in 1..=481 {
            let expired = state.tick();
            let hero = state.hero(0).unwrap();
            if tick < 480 {
                assert!(hero.is_active());
                assert_eq!(expired, 0);
            } else {
                assert!(!hero.is_active());
                assert_eq!(hero.total_secs(), 0);
                assert_eq!(expired, if tick == 480 { 1 } else { 0 });
            }
        }
        assert_eq!(clock(&state), (8, 1));
    }

    #[test]
    fn test_next_tab_wraps() {
        let mut state = SessionState::new();
        press(&mut state, 11);
        assert_eq!(state.active_tab(), Tab::Tormentor);
        press(&mut state, 11);
        assert_eq!(state.active_tab(), Tab::Buybacks);
        press(&mut state, 11);
        assert_eq!(state.active_tab(), Tab::UltCooldowns);
    }

    proptest! {
        #[test]
        fn prop_invariants_hold(
            inputs in proptest::collection::vec(0u8..=12, 0..400)
        ) {
            let mut state = SessionState::new();
            for input in inputs {
                // 12 stands in for the periodic tick
                if input == 12 || input == 0 {
                    state.tick();
                } else {
                    press(&mut state, input);
                }

                prop_assert!(state.game_clock().seconds() < 60);
                if state.game_clock().is_running() {
                    prop_assert!(state.is_active());
                }
                for hero in state.heroes() {
                    prop_assert!(hero.seconds() < 60);
                    prop_assert!(hero.total_secs() <= HERO_MAX_SECS);
                    if !hero.is_active() {
                        prop_assert_eq!(hero.total_secs(), 0);
                    }
                }
            }
        }
    }
}
