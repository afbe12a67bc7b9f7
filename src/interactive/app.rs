//! TUI application state and logic

use super::keyboard::{CursorMove, Keyboard};
use super::rendering;
use crate::core::Letter;
use crate::game::{Game, GuessResult, Outcome, ScoreStore};
use crate::output::Cue;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long the loop waits for input before redrawing
const TICK: Duration = Duration::from_millis(200);

/// Particles drawn over the header while celebrating
const SPARKLE_COUNT: usize = 24;
const SPARKLE_GLYPHS: [char; 4] = ['✦', '*', '+', '·'];

/// A celebration particle, positioned as fractions of the header area
#[derive(Debug, Clone, Copy)]
pub struct Sparkle {
    pub x: f32,
    pub y: f32,
    pub glyph: char,
}

/// Application state
pub struct App<S: ScoreStore> {
    pub game: Game<S>,
    pub keyboard: Keyboard,
    pub messages: Vec<Message>,
    pub sound_enabled: bool,
    pub should_quit: bool,
    pub sparkles: Vec<Sparkle>,
    cues: Vec<Cue>,
    now: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: ScoreStore> App<S> {
    #[must_use]
    pub fn new(game: Game<S>, sound_enabled: bool) -> Self {
        Self {
            game,
            keyboard: Keyboard::new(),
            messages: vec![Message {
                text: "Guess the word! Type letters or pick keys with the arrows.".to_string(),
                style: MessageStyle::Info,
            }],
            sound_enabled,
            should_quit: false,
            sparkles: Vec::new(),
            cues: Vec::new(),
            now: Instant::now(),
        }
    }

    /// Typed letter (physical keyboard path)
    pub fn type_char(&mut self, c: char) {
        if let Some(letter) = self.keyboard.key(c, self.game.guessed()) {
            self.guess(letter);
        }
    }

    /// Press the on-screen key under the cursor
    pub fn press_cursor(&mut self) {
        if let Some(letter) = self.keyboard.activate(self.game.guessed()) {
            self.guess(letter);
        }
    }

    /// Mouse click somewhere on a `screen`-sized terminal
    pub fn click(&mut self, screen: Rect, column: u16, row: u16) {
        let area = rendering::keyboard_inner(rendering::layout(screen).keyboard);
        if let Some(letter) = Keyboard::key_at(area, column, row)
            && let Some(letter) = self.keyboard.press(letter, self.game.guessed())
        {
            self.guess(letter);
        }
    }

    fn guess(&mut self, letter: Letter) {
        let result = self.game.submit_letter(letter);
        match result {
            GuessResult::Ignored => return,
            GuessResult::Correct(_) => {
                self.add_message(&format!("{letter} is in the word!"), MessageStyle::Success);
            }
            GuessResult::Wrong(_) => {
                self.add_message(&format!("No {letter} in the word."), MessageStyle::Error);
            }
        }
        self.after_guess(result);
    }

    pub fn hint(&mut self) {
        if let Some((letter, result)) = self.game.use_hint() {
            self.add_message(
                &format!(
                    "Hint: {letter} ({} hint{} left)",
                    self.game.hints_left(),
                    if self.game.hints_left() == 1 { "" } else { "s" }
                ),
                MessageStyle::Info,
            );
            self.after_guess(result);
        } else if self.game.hints_left() == 0 {
            self.add_message("No hints left!", MessageStyle::Error);
        }
    }

    fn after_guess(&mut self, result: GuessResult) {
        if let Some(cue) = Cue::for_result(result)
            && self.sound_enabled
        {
            self.cues.push(cue);
        }

        match result.outcome() {
            Some(Outcome::Won) => {
                self.add_message(
                    &format!("🎉 You won with a score of {}!", self.game.score()),
                    MessageStyle::Success,
                );
                self.twinkle();
            }
            Some(Outcome::Lost) => {
                self.add_message(
                    &format!("💀 The word was {}.", self.game.target()),
                    MessageStyle::Error,
                );
            }
            _ => {}
        }
    }

    pub fn new_round(&mut self) {
        self.game.reset_round();
        self.keyboard.reset();
        self.sparkles.clear();
        self.messages.clear();
        self.add_message("New round started!", MessageStyle::Info);
    }

    pub fn cycle_difficulty(&mut self) {
        let next = self.game.difficulty().next();
        self.game.set_difficulty(next);
        self.add_message(&format!("Difficulty: {next}"), MessageStyle::Info);
    }

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
        if !self.sound_enabled {
            self.cues.clear();
        }
        let state = if self.sound_enabled { "on" } else { "off" };
        self.add_message(&format!("Sound {state}"), MessageStyle::Info);
    }

    /// Advance the clock; ends the celebration when its time is up
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        if self.game.tick(now) {
            self.sparkles.clear();
        } else if self.game.is_celebrating(now) {
            self.twinkle();
        }
    }

    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        self.game.is_celebrating(self.now)
    }

    fn twinkle(&mut self) {
        let mut rng = rand::rng();
        self.sparkles = (0..SPARKLE_COUNT)
            .map(|i| Sparkle {
                x: rng.random(),
                y: rng.random(),
                glyph: SPARKLE_GLYPHS[i % SPARKLE_GLYPHS.len()],
            })
            .collect();
    }

    /// Cues queued since the last call
    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(2) => self.new_round(),
            KeyCode::F(3) => self.cycle_difficulty(),
            KeyCode::F(4) => self.toggle_sound(),
            // The win/lose dialog only offers a new round
            KeyCode::Enter if self.game.is_over() => self.new_round(),
            _ if self.game.is_over() => {}
            KeyCode::F(1) => self.hint(),
            KeyCode::Enter => self.press_cursor(),
            KeyCode::Left => self.keyboard.move_cursor(CursorMove::Left),
            KeyCode::Right => self.keyboard.move_cursor(CursorMove::Right),
            KeyCode::Up => self.keyboard.move_cursor(CursorMove::Up),
            KeyCode::Down => self.keyboard.move_cursor(CursorMove::Down),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.type_char(c);
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, screen: Rect) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) && !self.game.is_over() {
            self.click(screen, mouse.column, mouse.row);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: ScoreStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("tui started");

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<S: ScoreStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| rendering::ui(f, &app))?;

        for cue in app.take_cues() {
            cue.play(terminal.backend_mut())?;
        }

        // Poll so the celebration can expire without input
        if !event::poll(TICK)? {
            continue;
        }

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }

        if app.should_quit {
            debug!("quit requested");
            break;
        }
    }

    Ok(())
}
