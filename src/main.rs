//! WordPlay Hangman - CLI
//!
//! Hangman with a TUI (default) and a plain line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    core::TargetWord,
    game::{FileStore, Game, MemoryStore, ScoreStore},
    interactive::{App, run_tui},
    logging::init_tracing,
    wordlists::{WORDS, WordSource, loader::words_from_slice},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time, with hints and a saved high score",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (one word per line); defaults to the built-in list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// File the high score is saved in
    #[arg(long, global = true, default_value = "hangman_scores.json")]
    store: PathBuf,

    /// Keep the high score in memory only
    #[arg(long, global = true)]
    no_save: bool,

    /// Seed for word and hint selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Start with sound cues turned off
    #[arg(short, long, global = true)]
    mute: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Load the word list based on the -w flag
fn load_words(wordlist: Option<&PathBuf>) -> Result<WordSource> {
    use hangman::wordlists::loader::load_from_file;

    let words: Vec<TargetWord> = match wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("cannot read word list {}", path.display()))?,
        None => words_from_slice(WORDS),
    };

    WordSource::new(words).context("word list has no usable words")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path).with_context(|| format!("cannot log to {}", path.display()))?;
    }

    let words = load_words(cli.wordlist.as_ref())?;
    let rng = cli.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    info!(words = words.len(), seed = ?cli.seed, "starting");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let sound_enabled = !cli.mute;

    if cli.no_save {
        run_command(command, Game::new(words, MemoryStore::new(), rng), sound_enabled)
    } else {
        let store = FileStore::open(&cli.store);
        run_command(command, Game::new(words, store, rng), sound_enabled)
    }
}

fn run_command<S: ScoreStore>(command: Commands, game: Game<S>, sound_enabled: bool) -> Result<()> {
    match command {
        Commands::Play => run_tui(App::new(game, sound_enabled)),
        Commands::Simple => Ok(run_simple(game, sound_enabled)?),
    }
}
