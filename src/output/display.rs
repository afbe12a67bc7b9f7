//! Display functions for the line-based game

use super::formatters::{guess_meter, letter_list, round_title};
use crate::game::rules::MAX_GUESSES;
use crate::game::{Game, ScoreStore, Tile, TileState};
use colored::{ColoredString, Colorize};
use rand::Rng;

fn colored_tile(tile: Tile) -> ColoredString {
    let text = tile.display().to_string();
    match tile.state {
        TileState::Guessed => text.bright_magenta().bold(),
        TileState::Revealed => text.red().bold(),
        TileState::Hidden => text.bright_black(),
    }
}

/// Print the board and counters for the current round
pub fn print_round_status<S: ScoreStore, R: Rng>(game: &Game<S, R>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{}",
        round_title(game.is_win(), game.is_lose())
            .bright_cyan()
            .bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let board: Vec<String> = game
        .board()
        .into_iter()
        .map(|tile| colored_tile(tile).to_string())
        .collect();
    println!("\n   {}\n", board.join(" "));

    println!(
        "   Guesses left: {} {}",
        guess_meter(game.guesses_remaining(), MAX_GUESSES).yellow(),
        game.guesses_remaining()
    );
    println!(
        "   Misses:       {}",
        letter_list(&game.incorrect_letters()).red()
    );
    println!(
        "   Score:        {}   High score: {}",
        game.score().to_string().bright_yellow().bold(),
        game.high_score().to_string().bright_white()
    );
    println!(
        "   Hints left:   {}   Difficulty: {}",
        game.hints_left(),
        game.difficulty()
    );
}

/// Print the win or lose banner
pub fn print_round_result<S: ScoreStore, R: Rng>(game: &Game<S, R>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if game.is_win() {
        println!("{}", "    🎉 Congratulations! 🎉    ".bright_green().bold());
        println!(
            "\n  You Won with a Score of {}!",
            game.score().to_string().bright_yellow().bold()
        );
    } else {
        println!("{}", "    💀 Game Over! 💀    ".bright_red().bold());
        println!(
            "\n  The word was: {}",
            game.target().text().bright_white().bold()
        );
    }
    println!("{}", "═".repeat(60).bright_cyan());
}
