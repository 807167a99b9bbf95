//! Label text for the hero rows and the footer

use core::fmt::Write;

use heapless::String;

use super::state::SessionState;

/// Maximum label length in bytes
pub const LABEL_LEN: usize = 48;

/// Formatted label text
pub type Label = String<LABEL_LEN>;

/// Text of the row for hero `index` (0-based)
///
/// - `Hero #n: -------` while no session is open
/// - `Hero #n: Available` when the cooldown is not running
/// - `Hero #n: mm:ss` with the remaining cooldown otherwise
pub fn hero_label(state: &SessionState, index: usize) -> Label {
    let mut label = Label::new();
    let number = index + 1;

    let _ = match state.hero(index) {
        _ if !state.is_active() => write!(label, "Hero #{}: -------", number),
        Some(timer) if timer.is_active() => write!(
            label,
            "Hero #{}: {:02}:{:02}",
            number,
            timer.minutes(),
            timer.seconds()
        ),
        _ => write!(label, "Hero #{}: Available", number),
    };
    label
}

/// Text of the footer bar
pub fn footer_label(state: &SessionState) -> Label {
    let mut label = Label::new();

    if !state.is_active() {
        let _ = label.push_str("In-game Timer: --:--");
        return label;
    }

    let clock = state.game_clock();
    let _ = write!(
        label,
        "In-game Timer: {:02}:{:02}",
        clock.minutes(),
        clock.seconds()
    );
    if !clock.is_running() {
        let _ = label.push_str("\nTimer is paused.");
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyAction;

    #[test]
    fn test_idle_labels() {
        let state = SessionState::new();
        assert_eq!(footer_label(&state).as_str(), "In-game Timer: --:--");
        assert_eq!(hero_label(&state, 0).as_str(), "Hero #1: -------");
        assert_eq!(hero_label(&state, 4).as_str(), "Hero #5: -------");
    }

    #[test]
    fn test_start_session_footer() {
        let mut state = SessionState::new();
        state.apply(KeyAction::StartSession);
        assert_eq!(footer_label(&state).as_str(), "In-game Timer: 00:00");
        assert_eq!(hero_label(&state, 1).as_str(), "Hero #2: Available");
    }

    #[test]
    fn test_paused_footer() {
        let mut state = SessionState::new();
        state.apply(KeyAction::StartSession);
        state.apply(KeyAction::TogglePause);
        assert_eq!(
            footer_label(&state).as_str(),
            "In-game Timer: 00:00\nTimer is paused."
        );
    }

    #[test]
    fn test_running_hero_and_clock() {
        let mut state = SessionState::new();
        state.apply(KeyAction::StartSession);
        state.apply(KeyAction::Hero(2));
        for _ in 0..75 {
            state.tick();
        }
        assert_eq!(hero_label(&state, 2).as_str(), "Hero #3: 06:45");
        assert_eq!(footer_label(&state).as_str(), "In-game Timer: 01:15");
    }

    #[test]
    fn test_long_session_minutes_not_truncated() {
        let mut state = SessionState::new();
        state.apply(KeyAction::StartSession);
        for _ in 0..(125 * 60 + 7) {
            state.tick();
        }
        assert_eq!(footer_label(&state).as_str(), "In-game Timer: 125:07");
    }
}
