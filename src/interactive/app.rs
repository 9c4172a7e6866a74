//! TUI application state and logic

use crate::core::{Difficulty, SEPARATOR};
use crate::game::{GameError, GuessingGame};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: GuessingGame,
    pub rng: StdRng,
    pub preset: Option<Difficulty>,
    pub input_mode: InputMode,
    pub menu_index: usize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    SelectDifficulty,
    Guessing,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_won: usize,
    pub total_tries: usize,
    pub best_tries: Option<usize>,
}

impl Statistics {
    #[must_use]
    pub fn average_tries(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.total_tries as f64 / self.games_won as f64
        }
    }
}

impl App {
    /// Create the app; with a preset difficulty the menu is skipped
    #[must_use]
    pub fn new(preset: Option<Difficulty>, rng: StdRng) -> Self {
        let mut app = Self {
            game: GuessingGame::new(),
            rng,
            preset,
            input_mode: InputMode::SelectDifficulty,
            menu_index: 0,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Find the secret digits.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        };

        if let Some(difficulty) = preset {
            app.start_game(difficulty);
        }

        app
    }

    /// Difficulty under the menu cursor
    #[must_use]
    pub fn highlighted_difficulty(&self) -> Difficulty {
        Difficulty::ALL[self.menu_index % Difficulty::ALL.len()]
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % Difficulty::ALL.len();
    }

    pub fn menu_previous(&mut self) {
        self.menu_index = (self.menu_index + Difficulty::ALL.len() - 1) % Difficulty::ALL.len();
    }

    pub fn confirm_difficulty(&mut self) {
        self.start_game(self.highlighted_difficulty());
    }

    pub fn start_game(&mut self, difficulty: Difficulty) {
        self.game = GuessingGame::new();
        self.input_buffer.clear();

        if let Err(err) = self.game.configure(difficulty, &mut self.rng) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }

        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!(
                "{} mode: enter {} digits separated by '{SEPARATOR}'",
                difficulty,
                difficulty.code_length()
            ),
            MessageStyle::Info,
        );
    }

    pub fn new_game(&mut self) {
        self.messages.clear();
        match self.preset {
            Some(difficulty) => self.start_game(difficulty),
            None => {
                self.game = GuessingGame::new();
                self.input_buffer.clear();
                self.input_mode = InputMode::SelectDifficulty;
                self.add_message("Choose a mode to start.", MessageStyle::Info);
            }
        }
    }

    /// Longest input that could still be valid: N digits and N-1 separators
    fn max_input_len(&self) -> usize {
        self.game
            .difficulty()
            .map_or(0, |d| d.code_length() * 2 - 1)
    }

    /// Append a typed character if it is a digit or separator
    pub fn push_char(&mut self, c: char) {
        if (c.is_ascii_digit() || c == SEPARATOR) && self.input_buffer.len() < self.max_input_len()
        {
            self.input_buffer.push(c);
        }
    }

    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit_guess(&input) {
            Ok(_) if self.game.is_solved() => {
                let tries = self.game.try_count();
                self.stats.games_won += 1;
                self.stats.total_tries += tries;
                self.stats.best_tries = Some(self.stats.best_tries.map_or(tries, |b| b.min(tries)));

                self.input_mode = InputMode::WinCelebration;
                self.add_message(
                    &self.game.report().replace('\n', " "),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Ok(score) => {
                self.add_message(
                    &format!("{input} → Hit: {} Blow: {}", score.hits, score.blows),
                    MessageStyle::Info,
                );
            }
            Err(GameError::InvalidGuessFormat(err)) => {
                self.add_message(&format!("Invalid input: {err}"), MessageStyle::Error);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::SelectDifficulty => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Up | KeyCode::Char('k') => self.menu_previous(),
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.menu_next(),
                KeyCode::Enter => self.confirm_difficulty(),
                _ => {}
            },
            InputMode::Guessing => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.push_char(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::WinCelebration => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {
                    // In celebration mode, ignore other keys
                }
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;
    use rand::SeedableRng;

    const SEED: u64 = 11;

    fn app(preset: Option<Difficulty>) -> App {
        App::new(preset, StdRng::seed_from_u64(SEED))
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    /// Secret the app draws for its first game with `SEED`
    fn first_secret(difficulty: Difficulty) -> Code {
        Code::random(difficulty, &mut StdRng::seed_from_u64(SEED))
    }

    #[test]
    fn starts_in_menu_without_preset() {
        let app = app(None);
        assert_eq!(app.input_mode, InputMode::SelectDifficulty);
        assert_eq!(app.game.difficulty(), None);
    }

    #[test]
    fn preset_skips_menu() {
        let app = app(Some(Difficulty::Hard));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.difficulty(), Some(Difficulty::Hard));
    }

    #[test]
    fn menu_navigation_wraps() {
        let mut app = app(None);
        assert_eq!(app.highlighted_difficulty(), Difficulty::Normal);
        app.handle_key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.highlighted_difficulty(), Difficulty::Hard);
        app.handle_key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.highlighted_difficulty(), Difficulty::Normal);
        app.handle_key(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(app.highlighted_difficulty(), Difficulty::Hard);

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.game.difficulty(), Some(Difficulty::Hard));
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn typing_filters_and_limits_input() {
        let mut app = app(Some(Difficulty::Normal));
        for c in "1a,2 ,3,4,5".chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        assert_eq!(app.input_buffer, "1,2,3");

        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "1,2,");
    }

    #[test]
    fn invalid_guess_is_reported() {
        let mut app = app(Some(Difficulty::Normal));
        type_line(&mut app, "1,1,2");

        assert_eq!(app.game.try_count(), 0);
        assert!(app.input_buffer.is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.starts_with("Invalid input"));
    }

    #[test]
    fn winning_updates_stats_and_mode() {
        let secret = first_secret(Difficulty::Normal);
        let mut app = app(Some(Difficulty::Normal));

        type_line(&mut app, &secret.to_string());

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.best_tries, Some(1));
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Correct! Tries: 1" && m.style == MessageStyle::Success)
        );

        // Digits are ignored while celebrating
        app.handle_key(KeyCode::Char('1'), KeyModifiers::NONE);
        assert!(app.input_buffer.is_empty());

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.try_count(), 0);
    }

    #[test]
    fn new_game_without_preset_returns_to_menu() {
        let secret = first_secret(Difficulty::Normal);
        let mut app = app(None);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        type_line(&mut app, &secret.to_string());
        assert_eq!(app.input_mode, InputMode::WinCelebration);

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::SelectDifficulty);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = app(Some(Difficulty::Normal));
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn q_is_not_typed_while_guessing() {
        let mut app = app(Some(Difficulty::Normal));
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!app.should_quit);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn average_tries() {
        let stats = Statistics {
            games_won: 2,
            total_tries: 7,
            best_tries: Some(3),
        };
        assert!((stats.average_tries() - 3.5).abs() < f64::EPSILON);
        assert!(Statistics::default().average_tries().abs() < f64::EPSILON);
    }
}
