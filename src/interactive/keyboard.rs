//! On-screen keyboard and letter input deduplication
//!
//! Both input paths (activating an on-screen key and typing on the physical
//! keyboard) end in [`Keyboard::press`], which forwards each letter at most
//! once per round.

use crate::core::Letter;
use ratatui::layout::Rect;

/// On-screen key rows, top to bottom
pub const ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Width of one drawn key, e.g. `[ Q ]`
pub const KEY_WIDTH: u16 = 5;
const KEY_GAP: u16 = 1;
const ROW_SPACING: u16 = 2;

/// Height of the bordered keyboard block
pub const KEYBOARD_HEIGHT: u16 = ROWS.len() as u16 * ROW_SPACING - 1 + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
}

/// Input surface state for one round
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    fired: Vec<Letter>,
    cursor: (usize, usize),
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a key
    ///
    /// Returns the letter to forward to the game, or `None` if it already
    /// fired this round or is in `disabled`.
    pub fn press(&mut self, letter: Letter, disabled: &[Letter]) -> Option<Letter> {
        if self.is_disabled(letter, disabled) {
            return None;
        }
        self.fired.push(letter);
        Some(letter)
    }

    /// Physical key press
    ///
    /// Only ASCII letters count; they are case-folded before `press`.
    ///
    /// # Examples
    /// ```
    /// use hangman::interactive::Keyboard;
    ///
    /// let mut keyboard = Keyboard::new();
    /// assert_eq!(keyboard.key('e', &[]).map(|l| l.as_char()), Some('E'));
    /// assert_eq!(keyboard.key('E', &[]), None);
    /// assert_eq!(keyboard.key('3', &[]), None);
    /// ```
    pub fn key(&mut self, c: char, disabled: &[Letter]) -> Option<Letter> {
        Letter::new(c).and_then(|letter| self.press(letter, disabled))
    }

    /// Press the key under the cursor
    pub fn activate(&mut self, disabled: &[Letter]) -> Option<Letter> {
        let letter = self.cursor_letter();
        self.press(letter, disabled)
    }

    /// A key is inert once fired or when disabled from outside
    #[must_use]
    pub fn is_disabled(&self, letter: Letter, disabled: &[Letter]) -> bool {
        self.fired.contains(&letter) || disabled.contains(&letter)
    }

    #[must_use]
    pub fn fired(&self) -> &[Letter] {
        &self.fired
    }

    /// Forget fired letters; call at the start of every round
    pub fn reset(&mut self) {
        self.fired.clear();
    }

    /// The letter under the cursor
    #[must_use]
    pub fn cursor_letter(&self) -> Letter {
        let (row, col) = self.cursor;
        letter_at(row, col)
    }

    /// Move the cursor, wrapping within a row and clamping between rows
    pub fn move_cursor(&mut self, direction: CursorMove) {
        let (row, col) = self.cursor;
        let row_len = ROWS[row].len();

        self.cursor = match direction {
            CursorMove::Left => (row, (col + row_len - 1) % row_len),
            CursorMove::Right => (row, (col + 1) % row_len),
            CursorMove::Up => {
                let up = row.checked_sub(1).unwrap_or(ROWS.len() - 1);
                (up, col.min(ROWS[up].len() - 1))
            }
            CursorMove::Down => {
                let down = (row + 1) % ROWS.len();
                (down, col.min(ROWS[down].len() - 1))
            }
        };
    }

    /// Which key, if any, sits at a terminal cell
    #[must_use]
    pub fn key_at(area: Rect, column: u16, row: u16) -> Option<Letter> {
        key_rects(area)
            .into_iter()
            .find(|(_, rect)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(letter, _)| letter)
    }
}

fn letter_at(row: usize, col: usize) -> Letter {
    Letter::from_upper_byte(ROWS[row].as_bytes()[col])
}

/// Screen cells for every key inside a keyboard block's inner area
///
/// Rows are centred; anything that would fall outside `area` is dropped.
#[must_use]
pub fn key_rects(area: Rect) -> Vec<(Letter, Rect)> {
    let mut rects = Vec::with_capacity(26);

    for (row_index, row) in ROWS.iter().enumerate() {
        let keys = row.len() as u16;
        let row_width = keys * KEY_WIDTH + (keys - 1) * KEY_GAP;
        let x0 = area.x + area.width.saturating_sub(row_width) / 2;
        let y = area.y + row_index as u16 * ROW_SPACING;

        for col in 0..row.len() {
            let rect = Rect::new(x0 + col as u16 * (KEY_WIDTH + KEY_GAP), y, KEY_WIDTH, 1);
            if rect.right() <= area.right() && rect.bottom() <= area.bottom() {
                rects.push((letter_at(row_index, col), rect));
            }
        }
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn rows_cover_the_alphabet_once() {
        let mut all: Vec<char> = ROWS.iter().flat_map(|r| r.chars()).collect();
        all.sort_unstable();
        let expected: Vec<char> = ('A'..='Z').collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn press_forwards_each_letter_once() {
        let mut keyboard = Keyboard::new();
        assert_eq!(keyboard.press(l('a'), &[]), Some(l('A')));
        assert_eq!(keyboard.press(l('a'), &[]), None);
        assert_eq!(keyboard.key('a', &[]), None);
        assert_eq!(keyboard.fired(), &[l('A')]);
    }

    #[test]
    fn disabled_letters_are_inert_on_both_paths() {
        let mut keyboard = Keyboard::new();
        let disabled = [l('h')];
        assert_eq!(keyboard.press(l('H'), &disabled), None);
        assert_eq!(keyboard.key('h', &disabled), None);
        assert!(keyboard.is_disabled(l('h'), &disabled));
        assert!(keyboard.fired().is_empty());
    }

    #[test]
    fn physical_keys_must_be_letters() {
        let mut keyboard = Keyboard::new();
        for c in ['1', ' ', '-', '\n', 'ß'] {
            assert_eq!(keyboard.key(c, &[]), None);
        }
        assert!(keyboard.fired().is_empty());
    }

    #[test]
    fn physical_keys_are_case_folded() {
        let mut keyboard = Keyboard::new();
        assert_eq!(keyboard.key('z', &[]), Some(l('Z')));
        assert_eq!(keyboard.key('Z', &[]), None);
    }

    #[test]
    fn reset_clears_fired_letters() {
        let mut keyboard = Keyboard::new();
        keyboard.key('q', &[]);
        keyboard.reset();
        assert!(keyboard.fired().is_empty());
        assert_eq!(keyboard.key('q', &[]), Some(l('Q')));
    }

    #[test]
    fn cursor_starts_on_q_and_wraps() {
        let mut keyboard = Keyboard::new();
        assert_eq!(keyboard.cursor_letter(), l('Q'));

        keyboard.move_cursor(CursorMove::Left);
        assert_eq!(keyboard.cursor_letter(), l('P'));
        keyboard.move_cursor(CursorMove::Right);
        assert_eq!(keyboard.cursor_letter(), l('Q'));
    }

    #[test]
    fn cursor_clamps_to_shorter_rows() {
        let mut keyboard = Keyboard::new();
        keyboard.move_cursor(CursorMove::Left); // P, column 9
        keyboard.move_cursor(CursorMove::Down);
        assert_eq!(keyboard.cursor_letter(), l('L'));
        keyboard.move_cursor(CursorMove::Down);
        assert_eq!(keyboard.cursor_letter(), l('M'));
        keyboard.move_cursor(CursorMove::Down);
        assert_eq!(keyboard.cursor_letter(), l('U'));
        keyboard.move_cursor(CursorMove::Up);
        assert_eq!(keyboard.cursor_letter(), l('M'));
    }

    #[test]
    fn activate_presses_cursor_key() {
        let mut keyboard = Keyboard::new();
        keyboard.move_cursor(CursorMove::Down);
        assert_eq!(keyboard.activate(&[]), Some(l('A')));
        assert_eq!(keyboard.activate(&[]), None);
    }

    #[test]
    fn key_rects_fit_a_wide_area() {
        let area = Rect::new(0, 0, 80, KEYBOARD_HEIGHT - 2);
        let rects = key_rects(area);
        assert_eq!(rects.len(), 26);
        assert!(rects.iter().all(|(_, r)| r.right() <= 80));
    }

    #[test]
    fn key_at_finds_clicked_key() {
        let area = Rect::new(2, 10, 80, KEYBOARD_HEIGHT - 2);
        for (letter, rect) in key_rects(area) {
            assert_eq!(Keyboard::key_at(area, rect.x, rect.y), Some(letter));
            assert_eq!(
                Keyboard::key_at(area, rect.x + KEY_WIDTH - 1, rect.y),
                Some(letter)
            );
        }
        assert_eq!(Keyboard::key_at(area, 0, 0), None);
        // The gap between rows holds no keys
        assert_eq!(Keyboard::key_at(area, 40, 11), None);
    }

    #[test]
    fn narrow_area_drops_keys_that_do_not_fit() {
        let area = Rect::new(0, 0, 40, KEYBOARD_HEIGHT - 2);
        let rects = key_rects(area);
        assert!(rects.len() < 26);
        assert!(rects.iter().all(|(_, r)| r.right() <= 40));
    }
}
