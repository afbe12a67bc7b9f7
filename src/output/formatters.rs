//! Formatting utilities for terminal output

use crate::core::Letter;

/// Remaining guesses as filled and empty pips
#[must_use]
pub fn guess_meter(remaining: usize, max: usize) -> String {
    let remaining = remaining.min(max);
    format!("{}{}", "●".repeat(remaining), "○".repeat(max - remaining))
}

/// Letters separated by spaces, or a dash when there are none
#[must_use]
pub fn letter_list(letters: &[Letter]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Round title shown above the board
#[must_use]
pub const fn round_title(won: bool, lost: bool) -> &'static str {
    if won {
        "🎉 You Win!"
    } else if lost {
        "💀 You Lose!"
    } else {
        "🧩 Guess the Word!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_meter_full() {
        assert_eq!(guess_meter(6, 6), "●●●●●●");
    }

    #[test]
    fn guess_meter_partial() {
        assert_eq!(guess_meter(2, 6), "●●○○○○");
    }

    #[test]
    fn guess_meter_empty() {
        assert_eq!(guess_meter(0, 6), "○○○○○○");
    }

    #[test]
    fn guess_meter_clamps_overflow() {
        assert_eq!(guess_meter(9, 3), "●●●");
    }

    #[test]
    fn letter_list_formats() {
        let letters: Vec<Letter> = "xq".chars().filter_map(Letter::new).collect();
        assert_eq!(letter_list(&letters), "X Q");
        assert_eq!(letter_list(&[]), "-");
    }

    #[test]
    fn round_titles() {
        assert_eq!(round_title(false, false), "🧩 Guess the Word!");
        assert_eq!(round_title(true, false), "🎉 You Win!");
        assert_eq!(round_title(false, true), "💀 You Lose!");
    }
}
