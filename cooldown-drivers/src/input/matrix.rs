//! Key matrix scanner
//!
//! Strobes the five column lines one at a time and samples the two
//! pulled-down row lines, then reads the standalone key (pulled up, active
//! low). Raw samples go through the core [`Debouncer`]; accepted presses are
//! handed to the caller's sink in the same pass.
//!
//! Idle columns are left high-impedance so a held key in one column cannot
//! back-drive another column through the shared row line.

use cooldown_core::config::ScanConfig;
use cooldown_core::keys::{Debouncer, KeyId, MATRIX_COLS, MATRIX_ROWS};
use cooldown_hal::{FlexPin, InputPin};
use embedded_hal_async::delay::DelayNs;

/// Matrix scanner owning the keypad lines
pub struct MatrixScanner<COL, ROW, KEY> {
    cols: [COL; MATRIX_COLS],
    rows: [ROW; MATRIX_ROWS],
    standalone: KEY,
    debouncer: Debouncer,
    settle_ms: u32,
}

impl<COL, ROW, KEY> MatrixScanner<COL, ROW, KEY>
where
    COL: FlexPin,
    ROW: InputPin,
    KEY: InputPin,
{
    /// Take the keypad lines and release every column
    pub fn new(
        mut cols: [COL; MATRIX_COLS],
        rows: [ROW; MATRIX_ROWS],
        standalone: KEY,
        config: &ScanConfig,
    ) -> Self {
        for col in cols.iter_mut() {
            col.set_as_input();
        }
        Self {
            cols,
            rows,
            standalone,
            debouncer: Debouncer::new(config.debounce_ms),
            settle_ms: config.settle_ms,
        }
    }

    /// Run one scan pass
    ///
    /// Calls `on_press` for every key whose press was accepted and returns
    /// how many there were.
    pub async fn scan<D, F>(&mut self, now_ms: u64, delay: &mut D, mut on_press: F) -> usize
    where
        D: DelayNs,
        F: FnMut(KeyId),
    {
        let mut accepted = 0;

        for col in 0..MATRIX_COLS {
            let line = &mut self.cols[col];
            line.set_as_output();
            line.set_high();
            delay.delay_ms(self.settle_ms).await;

            let mut levels = [false; MATRIX_ROWS];
            for (level, row) in levels.iter_mut().zip(self.rows.iter()) {
                *level = row.is_high();
            }

            let line = &mut self.cols[col];
            line.set_low();
            line.set_as_input();

            for (row, &pressed) in levels.iter().enumerate() {
                let key = KeyId::Matrix {
                    row: row as u8,
                    col: col as u8,
                };
                if self.debouncer.sample(key, pressed, now_ms) {
                    on_press(key);
                    accepted += 1;
                }
            }
        }

        if self.debouncer.sample(KeyId::Standalone, self.standalone.is_low(), now_ms) {
            on_press(KeyId::Standalone);
            accepted += 1;
        }

        accepted
    }

    /// Debounced state of a key
    pub fn is_pressed(&self, key: KeyId) -> bool {
        self.debouncer.is_pressed(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use cooldown_hal::OutputPin;
    use embassy_futures::block_on;
    use std::rc::Rc;

    #[derive(Default)]
    struct Board {
        pressed: [[bool; MATRIX_COLS]; MATRIX_ROWS],
        standalone: bool,
        output: [bool; MATRIX_COLS],
        level: [bool; MATRIX_COLS],
        settles: usize,
    }

    type Shared = Rc<RefCell<Board>>;

    struct Col(usize, Shared);
    struct Row(usize, Shared);
    struct Standalone(Shared);
    struct Settle(Shared);

    impl OutputPin for Col {
        fn set_high(&mut self) {
            self.1.borrow_mut().level[self.0] = true;
        }
        fn set_low(&mut self) {
            self.1.borrow_mut().level[self.0] = false;
        }
        fn is_set_high(&self) -> bool {
            self.1.borrow().level[self.0]
        }
    }

    impl FlexPin for Col {
        fn set_as_output(&mut self) {
            self.1.borrow_mut().output[self.0] = true;
        }
        fn set_as_input(&mut self) {
            self.1.borrow_mut().output[self.0] = false;
        }
    }

    impl InputPin for Row {
        fn is_high(&self) -> bool {
            let board = self.1.borrow();
            (0..MATRIX_COLS)
                .any(|c| board.output[c] && board.level[c] && board.pressed[self.0][c])
        }
    }

    impl InputPin for Standalone {
        fn is_high(&self) -> bool {
            !self.0.borrow().standalone
        }
    }

    impl DelayNs for Settle {
        async fn delay_ns(&mut self, _ns: u32) {}

        async fn delay_ms(&mut self, _ms: u32) {
            self.0.borrow_mut().settles += 1;
        }
    }

    fn setup() -> (MatrixScanner<Col, Row, Standalone>, Settle, Shared) {
        let board: Shared = Rc::new(RefCell::new(Board::default()));
        let cols = core::array::from_fn(|c| Col(c, board.clone()));
        let rows = core::array::from_fn(|r| Row(r, board.clone()));
        let scanner = MatrixScanner::new(
            cols,
            rows,
            Standalone(board.clone()),
            &ScanConfig::default(),
        );
        (scanner, Settle(board.clone()), board)
    }

    fn scan(
        scanner: &mut MatrixScanner<Col, Row, Standalone>,
        delay: &mut Settle,
        now_ms: u64,
    ) -> Vec<KeyId> {
        let mut keys = Vec::new();
        let count = block_on(scanner.scan(now_ms, delay, |k| keys.push(k)));
        assert_eq!(count, keys.len());
        keys
    }

    #[test]
    fn test_idle_pass() {
        let (mut scanner, mut delay, board) = setup();
        assert!(scan(&mut scanner, &mut delay, 0).is_empty());
        let board = board.borrow();
        assert_eq!(board.settles, MATRIX_COLS);
        assert!(board.output.iter().all(|o| !o));
    }

    #[test]
    fn test_matrix_key_maps_row_major() {
        let (mut scanner, mut delay, board) = setup();
        board.borrow_mut().pressed[1][3] = true;

        let keys = scan(&mut scanner, &mut delay, 1000);
        assert_eq!(keys, vec![KeyId::Matrix { row: 1, col: 3 }]);
        assert_eq!(keys[0].number(), 9);
        assert!(scanner.is_pressed(keys[0]));
    }

    #[test]
    fn test_standalone_active_low() {
        let (mut scanner, mut delay, board) = setup();
        board.borrow_mut().standalone = true;
        assert_eq!(scan(&mut scanner, &mut delay, 1000), vec![KeyId::Standalone]);
    }

    #[test]
    fn test_held_key_reports_once() {
        let (mut scanner, mut delay, board) = setup();
        board.borrow_mut().pressed[0][0] = true;

        assert_eq!(scan(&mut scanner, &mut delay, 1000).len(), 1);
        assert!(scan(&mut scanner, &mut delay, 1050).is_empty());
        assert!(scan(&mut scanner, &mut delay, 1500).is_empty());
    }

    #[test]
    fn test_bounce_inside_window_rejected() {
        let (mut scanner, mut delay, board) = setup();
        board.borrow_mut().pressed[0][2] = true;
        assert_eq!(scan(&mut scanner, &mut delay, 1000).len(), 1);

        board.borrow_mut().pressed[0][2] = false;
        scan(&mut scanner, &mut delay, 1050);
        board.borrow_mut().pressed[0][2] = true;
        assert!(scan(&mut scanner, &mut delay, 1080).is_empty());

        board.borrow_mut().pressed[0][2] = false;
        scan(&mut scanner, &mut delay, 1130);
        board.borrow_mut().pressed[0][2] = true;
        assert_eq!(scan(&mut scanner, &mut delay, 1180).len(), 1);
    }

    #[test]
    fn test_simultaneous_keys() {
        let (mut scanner, mut delay, board) = setup();
        {
            let mut board = board.borrow_mut();
            board.pressed[0][4] = true;
            board.pressed[1][0] = true;
            board.standalone = true;
        }
        let keys = scan(&mut scanner, &mut delay, 1000);
        assert_eq!(
            keys,
            vec![
                KeyId::Matrix { row: 1, col: 0 },
                KeyId::Matrix { row: 0, col: 4 },
                KeyId::Standalone,
            ]
        );
    }
}
