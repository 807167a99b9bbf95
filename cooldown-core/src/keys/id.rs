//! Key identities and their fixed actions

/// Number of matrix row (sense) lines
pub const MATRIX_ROWS: usize = 2;

/// Number of matrix column (strobe) lines
pub const MATRIX_COLS: usize = 5;

/// Logical key identity
///
/// Matrix keys are numbered row-major: row 0 is K1-K5, row 1 is K6-K10.
/// The standalone key is K11.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyId {
    /// Key at a matrix crossing
    Matrix { row: u8, col: u8 },
    /// Key on its own active-low line
    Standalone,
}

impl KeyId {
    /// Create a matrix key id, if the cell exists
    pub fn matrix(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < MATRIX_ROWS && (col as usize) < MATRIX_COLS {
            Some(KeyId::Matrix { row, col })
        } else {
            None
        }
    }

    /// Key number as printed on the keypad (1-11)
    pub fn number(&self) -> u8 {
        match *self {
            KeyId::Matrix { row, col } => row * MATRIX_COLS as u8 + col + 1,
            KeyId::Standalone => (MATRIX_ROWS * MATRIX_COLS) as u8 + 1,
        }
    }

    /// Look up a key by its printed number (1-11)
    pub fn from_number(number: u8) -> Option<Self> {
        let matrix_keys = (MATRIX_ROWS * MATRIX_COLS) as u8;
        match number {
            0 => None,
            n if n <= matrix_keys => {
                let index = n - 1;
                Self::matrix(index / MATRIX_COLS as u8, index % MATRIX_COLS as u8)
            }
            n if n == matrix_keys + 1 => Some(KeyId::Standalone),
            _ => None,
        }
    }

    /// The action bound to this key
    ///
    /// The mapping is fixed by the keypad legend.
    pub fn action(&self) -> KeyAction {
        match *self {
            KeyId::Matrix { row: 0, col } => KeyAction::Hero(col),
            KeyId::Matrix { row: _, col: 0 } => KeyAction::EndSession,
            KeyId::Matrix { row: _, col: 1 } => KeyAction::ClockDecrement,
            KeyId::Matrix { row: _, col: 2 } => KeyAction::TogglePause,
            KeyId::Matrix { row: _, col: 3 } => KeyAction::ClockIncrement,
            KeyId::Matrix { row: _, col: _ } => KeyAction::StartSession,
            KeyId::Standalone => KeyAction::NextTab,
        }
    }
}

/// What a key press asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// Start or force-stop the cooldown of hero `n` (0-based)
    Hero(u8),
    /// Close the session and zero the game clock (K6)
    EndSession,
    /// Step the paused clock back one second (K7)
    ClockDecrement,
    /// Pause or resume the game clock (K8)
    TogglePause,
    /// Step the paused clock forward one second (K9)
    ClockIncrement,
    /// Open a session with the clock at 00:00 and running (K10)
    StartSession,
    /// Cycle the visible tab (K11)
    NextTab,
}
