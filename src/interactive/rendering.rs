//! TUI rendering with ratatui
//!
//! The layout is a pure function of the screen size so mouse clicks can be
//! mapped back onto the keys that were drawn.

use super::app::{App, MessageStyle};
use super::keyboard::{KEYBOARD_HEIGHT, key_rects};
use crate::game::rules::MAX_GUESSES;
use crate::game::{ScoreStore, TileState};
use crate::output::formatters::{guess_meter, letter_list, round_title};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Screen regions, top to bottom
#[derive(Debug, Clone, Copy)]
pub struct Areas {
    pub header: Rect,
    pub title: Rect,
    pub status: Rect,
    pub board: Rect,
    pub misses: Rect,
    pub keyboard: Rect,
    pub controls: Rect,
    pub messages: Rect,
}

#[must_use]
pub fn layout(screen: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(1),               // Title
            Constraint::Length(1),               // Status row
            Constraint::Length(3),               // Word board
            Constraint::Length(1),               // Misses
            Constraint::Length(KEYBOARD_HEIGHT), // Keyboard
            Constraint::Length(1),               // Controls
            Constraint::Min(3),                  // Messages
        ])
        .split(screen);

    Areas {
        header: chunks[0],
        title: chunks[1],
        status: chunks[2],
        board: chunks[3],
        misses: chunks[4],
        keyboard: chunks[5],
        controls: chunks[6],
        messages: chunks[7],
    }
}

fn keyboard_block() -> Block<'static> {
    Block::default()
        .title(" Keyboard ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Where keys are drawn inside the keyboard area
#[must_use]
pub fn keyboard_inner(area: Rect) -> Rect {
    keyboard_block().inner(area)
}

/// Main UI rendering function
pub fn ui<S: ScoreStore>(f: &mut Frame, app: &App<S>) {
    let screen = f.area();
    let areas = layout(screen);

    render_header(f, app, areas.header);
    render_title(f, app, areas.title);
    render_status(f, app, areas.status);
    render_board(f, app, areas.board);
    render_misses(f, app, areas.misses);
    render_keyboard(f, app, areas.keyboard);
    render_controls(f, app, areas.controls);
    render_messages(f, app, areas.messages);

    if app.game.is_over() {
        render_dialog(f, app, screen);
    }
}

fn render_header<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("🎯 Score: {}", app.game.score()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            format!("🏆 High Score: {}", app.game.high_score()),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" WordPlay Hangman ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);

    if app.is_celebrating() {
        render_sparkles(f, app, area);
    }
}

fn render_sparkles<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let colors = [Color::Yellow, Color::Magenta, Color::Green, Color::Cyan];
    let buf = f.buffer_mut();

    for (i, sparkle) in app.sparkles.iter().enumerate() {
        // Fractions are in [0, 1); truncation keeps the cell inside the area
        let x = area.x + (sparkle.x * f32::from(area.width)) as u16;
        let y = area.y + (sparkle.y * f32::from(area.height)) as u16;
        if x < area.right() && y < area.bottom() {
            buf[(x, y)]
                .set_char(sparkle.glyph)
                .set_fg(colors[i % colors.len()]);
        }
    }
}

fn render_title<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let color = if app.game.is_win() {
        Color::Green
    } else if app.game.is_lose() {
        Color::Red
    } else {
        Color::White
    };

    let title = Paragraph::new(round_title(app.game.is_win(), app.game.is_lose()))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn render_status<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ])
        .split(area);

    let difficulty = Paragraph::new(format!("Difficulty: {}", app.game.difficulty()))
        .alignment(Alignment::Center);
    f.render_widget(difficulty, chunks[0]);

    let remaining = app.game.guesses_remaining();
    let guesses = Paragraph::new(format!(
        "Guesses Left: {remaining} {}",
        guess_meter(remaining, MAX_GUESSES)
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(if remaining <= 2 {
        Color::Red
    } else {
        Color::White
    }));
    f.render_widget(guesses, chunks[1]);

    let hints = Paragraph::new(format!("Hints Left: {}", app.game.hints_left()))
        .alignment(Alignment::Center);
    f.render_widget(hints, chunks[2]);

    let sound = Paragraph::new(if app.sound_enabled {
        "🔊 Sound on"
    } else {
        "🔇 Sound off"
    })
    .alignment(Alignment::Center);
    f.render_widget(sound, chunks[3]);
}

fn render_board<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut spans = Vec::new();
    for tile in app.game.board() {
        let style = match tile.state {
            TileState::Guessed => Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            TileState::Revealed => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            TileState::Hidden => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!(" {} ", tile.display()), style));
    }

    // Red frame once a guess has missed, until the word is found
    let missed = !app.game.incorrect_letters().is_empty() && !app.game.is_win();
    let border = if missed { Color::Red } else { Color::Magenta };

    let board = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(border)),
        );
    f.render_widget(board, area);
}

fn render_misses<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let misses = Paragraph::new(Line::from(vec![
        Span::raw("Misses: "),
        Span::styled(
            letter_list(&app.game.incorrect_letters()),
            Style::default().fg(Color::Red),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(misses, area);
}

fn render_keyboard<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    f.render_widget(keyboard_block(), area);

    let cursor = app.keyboard.cursor_letter();
    let guessed = app.game.guessed();

    for (letter, rect) in key_rects(keyboard_inner(area)) {
        let disabled = app.keyboard.is_disabled(letter, guessed);
        let mut style = if disabled {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White).bg(Color::Blue)
        };
        if letter == cursor {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }

        f.render_widget(Paragraph::new(format!("[ {letter} ]")).style(style), rect);
    }
}

fn render_controls<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let hint_style = if app.game.can_hint() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let controls = Paragraph::new(Line::from(vec![
        Span::styled(format!("F1: Hint ({})", app.game.hints_left()), hint_style),
        Span::styled(
            " | F2: Play Again | F3: Difficulty | F4: Sound | ←↑↓→ Enter: Key | Esc: Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(controls, area);
}

fn render_messages<S: ScoreStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn centered(screen: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);
    Rect::new(
        screen.x + (screen.width - width) / 2,
        screen.y + (screen.height - height) / 2,
        width,
        height,
    )
}

fn render_dialog<S: ScoreStore>(f: &mut Frame, app: &App<S>, screen: Rect) {
    let (title, body, color) = if app.game.is_win() {
        (
            " 🎉 Congratulations! ",
            Line::from(format!("You Won with a Score of {}!", app.game.score())),
            Color::Green,
        )
    } else {
        (
            " 💀 Game Over! ",
            Line::from(vec![
                Span::raw("The word was: "),
                Span::styled(
                    app.game.target().text().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Color::Red,
        )
    };
    let action = if app.game.is_win() {
        "Enter: Play Again"
    } else {
        "Enter: Try Again"
    };

    let area = centered(screen, 44, 6);
    let dialog = Paragraph::new(vec![
        Line::from(""),
        body,
        Line::from(Span::styled(action, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;
    use crate::game::{Game, MemoryStore};
    use crate::wordlists::{WordSource, loader::words_from_slice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn app(word: &str) -> App<MemoryStore> {
        let words = WordSource::new(words_from_slice(&[word])).unwrap();
        let game = Game::new(words, MemoryStore::new(), StdRng::seed_from_u64(5));
        App::new(game, true)
    }

    fn draw(app: &App<MemoryStore>) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn layout_fits_keyboard() {
        let areas = layout(Rect::new(0, 0, 100, 32));
        assert_eq!(areas.keyboard.height, KEYBOARD_HEIGHT);
        assert_eq!(key_rects(keyboard_inner(areas.keyboard)).len(), 26);
    }

    #[test]
    fn board_masks_hidden_letters() {
        let mut app = app("rocket");
        app.game.submit_letter(Letter::new('k').unwrap());
        let text = screen_text(&draw(&app));
        assert!(text.contains(" R  _  _  K  _  _ "), "{text}");
        assert!(text.contains("Guess the Word!"));
        assert!(text.contains("Guesses Left: 5"));
    }

    #[test]
    fn loss_dialog_reveals_word() {
        let mut app = app("dog");
        for c in "xyzqwe".chars() {
            app.game.submit_letter(Letter::new(c).unwrap());
        }
        let text = screen_text(&draw(&app));
        assert!(text.contains("Game Over!"));
        assert!(text.contains("The word was: DOG"));
        assert!(text.contains(" D  O  G "));
        assert!(text.contains("Misses: X Y Z Q W E"));
    }

    #[test]
    fn win_dialog_shows_score() {
        let mut app = app("cat");
        for c in "cat".chars() {
            app.game.submit_letter(Letter::new(c).unwrap());
        }
        let text = screen_text(&draw(&app));
        assert!(text.contains("You Won with a Score of 30!"));
    }

    #[test]
    fn centered_rect_clamps_to_screen() {
        let rect = centered(Rect::new(0, 0, 20, 4), 44, 6);
        assert_eq!(rect, Rect::new(0, 0, 20, 4));
        let rect = centered(Rect::new(0, 0, 100, 30), 44, 6);
        assert_eq!(rect, Rect::new(28, 12, 44, 6));
    }
}
