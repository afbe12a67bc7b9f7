//! Simple interactive CLI mode
//!
//! Text-based game without the TUI. Letters go through the same `Keyboard`
//! deduplication as the TUI's physical key path.

use crate::game::{Game, GuessResult, ScoreStore};
use crate::interactive::Keyboard;
use crate::output::{Cue, print_round_result, print_round_status};
use colored::Colorize;
use std::io::{self, Write};
use tracing::debug;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(char),
    Hint,
    New,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parse a trimmed input line
    ///
    /// Single characters are guesses; commands are whole words so they never
    /// collide with a letter.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let mut chars = input.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::Guess(c);
        }

        match input.to_lowercase().as_str() {
            "hint" => Self::Hint,
            "new" | "reset" => Self::New,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(input.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// sound cues.
pub fn run_simple<S: ScoreStore>(mut game: Game<S>, sound_enabled: bool) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   WordPlay Hangman - Simple Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden word one letter at a time.");
    println!("Commands: a single letter to guess, 'hint', 'new', 'quit'");

    let mut keyboard = Keyboard::new();
    let mut stdout = io::stdout();

    loop {
        print_round_status(&game);

        if game.is_over() {
            print_round_result(&game);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game.reset_round();
                    keyboard.reset();
                    println!("\n🔄 New round started!");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let input = get_user_input("\nGuess a letter ('hint', 'new', 'quit')")?;
        let result = match Command::parse(&input) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::New => {
                game.reset_round();
                keyboard.reset();
                println!("\n🔄 New round started!");
                continue;
            }
            Command::Hint => match game.use_hint() {
                Some((letter, result)) => {
                    println!("💡 Hint: {}", letter.to_string().bright_yellow().bold());
                    result
                }
                None => {
                    println!("{}", "No hints left!".red());
                    continue;
                }
            },
            Command::Guess(c) => match keyboard.key(c, game.guessed()) {
                Some(letter) => game.submit_letter(letter),
                None if c.is_ascii_alphabetic() => {
                    println!("You already tried {}.", c.to_ascii_uppercase());
                    continue;
                }
                None => {
                    println!("{}", "Letters only, please.".red());
                    continue;
                }
            },
            Command::Unknown(other) => {
                debug!(input = %other, "unknown command");
                println!("{}", format!("Unknown command '{other}'").red());
                continue;
            }
        };

        match result {
            GuessResult::Correct(_) => println!("{}", "✓ In the word!".green()),
            GuessResult::Wrong(_) => println!("{}", "✗ Not in the word.".red()),
            GuessResult::Ignored => {}
        }

        if sound_enabled && let Some(cue) = Cue::for_result(result) {
            cue.play(&mut stdout)?;
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // EOF behaves like quitting
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_characters_are_guesses() {
        assert_eq!(Command::parse("a"), Command::Guess('a'));
        assert_eq!(Command::parse(" Q \n"), Command::Guess('Q'));
        assert_eq!(Command::parse("7"), Command::Guess('7'));
    }

    #[test]
    fn command_words() {
        assert_eq!(Command::parse("hint"), Command::Hint);
        assert_eq!(Command::parse("HINT"), Command::Hint);
        assert_eq!(Command::parse("new"), Command::New);
        assert_eq!(Command::parse("reset"), Command::New);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("exit"), Command::Quit);
    }

    #[test]
    fn unknown_input() {
        assert_eq!(
            Command::parse("banana"),
            Command::Unknown("banana".to_string())
        );
        assert_eq!(Command::parse(""), Command::Unknown(String::new()));
    }
}
