//! TUI application state and logic
//!
//! The event loop owns a [`GameSession`] and drives it with typed actions
//! mapped from key events. Service calls run on short-lived worker threads
//! and report back over a channel the loop drains between frames; results
//! are tagged with the game they were issued for, so anything that arrives
//! after a restart is dropped on the floor.

use crate::core::{Action, GameSession, GameStatus, MAX_GUESSES, Mark, Word};
use crate::services::{Dictionary, ServiceError, WordSource};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::seq::IndexedRandom;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tracing::warn;

/// Result of a background service call, tagged with the game it belongs to
enum ServiceEvent {
    TargetFetched {
        game: u64,
        result: Result<Vec<Word>, ServiceError>,
    },
    GuessValidated {
        game: u64,
        word: Word,
        result: Result<bool, ServiceError>,
    },
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

/// Application state
pub struct App {
    pub session: GameSession,
    source: Arc<dyn WordSource>,
    dictionary: Arc<dyn Dictionary>,
    events_tx: Sender<ServiceEvent>,
    events_rx: Receiver<ServiceEvent>,
    /// Monotonic game counter for discarding stale service results
    game_id: u64,
    /// Guess currently out at the dictionary; board input is held meanwhile
    pub pending_guess: Option<Word>,
    pub fetching: bool,
    fixed_target: bool,
    /// Best-known mark per guessed letter, for the keyboard display
    pub letter_marks: FxHashMap<char, Mark>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(
        source: Arc<dyn WordSource>,
        dictionary: Arc<dyn Dictionary>,
        initial_target: Word,
        fixed_target: bool,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel();

        let mut app = Self {
            session: GameSession::new(initial_target),
            source,
            dictionary,
            events_tx,
            events_rx,
            game_id: 0,
            pending_guess: None,
            fetching: false,
            fixed_target,
            letter_marks: FxHashMap::default(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };

        app.add_message(
            &format!("Guess the five-letter word in {MAX_GUESSES} tries!"),
            MessageStyle::Info,
        );
        app.add_message(
            "Misplaced tiles can over-count repeated letters.",
            MessageStyle::Info,
        );
        app.request_target();
        app
    }

    /// Reset for a fresh game and fetch a new target
    pub fn start_new_game(&mut self) {
        self.game_id += 1;
        self.session.start_new();
        self.pending_guess = None;
        self.letter_marks.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.request_target();
    }

    /// Route a board action through the session
    ///
    /// Held while a confirmation is in flight, so a guess can never overlap
    /// another guess's validation.
    pub fn handle_action(&mut self, action: Action) {
        if self.pending_guess.is_some() {
            return;
        }

        if let Some(word) = self.session.apply(action) {
            self.request_validation(word);
        }
    }

    /// Kick off a candidate fetch on a worker thread
    fn request_target(&mut self) {
        if self.fixed_target {
            return;
        }

        self.fetching = true;
        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();
        let game = self.game_id;

        thread::spawn(move || {
            let result = source.fetch_candidates();
            let _ = tx.send(ServiceEvent::TargetFetched { game, result });
        });
    }

    /// Send the confirmed buffer out for dictionary validation
    fn request_validation(&mut self, word: Word) {
        self.pending_guess = Some(word.clone());
        let dictionary = Arc::clone(&self.dictionary);
        let tx = self.events_tx.clone();
        let game = self.game_id;

        thread::spawn(move || {
            let result = dictionary.validate(&word);
            let _ = tx.send(ServiceEvent::GuessValidated { game, word, result });
        });
    }

    /// Apply any service results that have arrived since the last frame
    pub fn drain_service_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_service_event(event);
        }
    }

    fn handle_service_event(&mut self, event: ServiceEvent) {
        match event {
            ServiceEvent::TargetFetched { game, result } => {
                if game != self.game_id {
                    return;
                }
                self.fetching = false;

                match result {
                    Ok(candidates) => {
                        if let Some(word) = candidates.choose(&mut rand::rng()) {
                            self.session.set_target(word.clone());
                        } else {
                            // Soft failure: keep playing against the current target.
                            warn!("word source returned no candidates");
                        }
                    }
                    Err(err) => warn!(error = %err, "word fetch failed"),
                }
            }
            ServiceEvent::GuessValidated { game, word, result } => {
                if game != self.game_id {
                    return;
                }
                self.pending_guess = None;

                if self.session.status() != GameStatus::InProgress {
                    return;
                }

                let valid = result.unwrap_or_else(|err| {
                    warn!(error = %err, word = word.text(), "dictionary lookup failed");
                    false
                });

                if valid {
                    self.record_guess(word);
                } else {
                    self.add_message(
                        &format!("'{}' isn't in the dictionary!", word.text().to_uppercase()),
                        MessageStyle::Error,
                    );
                }
            }
        }
    }

    /// Record a confirmed, dictionary-valid guess
    fn record_guess(&mut self, word: Word) {
        let feedback = self.session.score(&word);

        // Upgrade the keyboard state; a letter never regresses to a worse mark.
        for (letter, mark) in word.text().chars().zip(feedback.iter()) {
            let entry = self.letter_marks.entry(letter).or_insert(mark);
            if mark.rank() > entry.rank() {
                *entry = mark;
            }
        }

        self.session.accept_guess(word);

        match self.session.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                let turns = self.session.guesses().len();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if turns <= MAX_GUESSES {
                    self.stats.guess_distribution[turns] += 1;
                }

                let celebration = match turns {
                    1 => "Unbelievable, first try!",
                    2 => "Magnificent!",
                    3 => "Splendid!",
                    4 => "Great job!",
                    5 => "Nice work!",
                    _ => "Phew, that was close!",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameStatus::Lost => {
                self.stats.total_games += 1;
                self.add_message(
                    &format!(
                        "Out of guesses! The word was '{}'.",
                        self.session.target().text().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
            }
        }
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Short poll keeps the loop responsive to service results.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key);
                }
            }
        }

        app.drain_service_events();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.session.status() {
        GameStatus::InProgress => match key.code {
            KeyCode::Esc => app.should_quit = true,
            KeyCode::Char(c) => app.handle_action(Action::Append(c)),
            KeyCode::Backspace => app.handle_action(Action::Delete),
            KeyCode::Enter => app.handle_action(Action::Confirm),
            _ => {}
        },
        // Game-over overlay: restart or quit only.
        GameStatus::Won | GameStatus::Lost => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('n') | KeyCode::Enter => app.start_new_game(),
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptySource;

    impl WordSource for EmptySource {
        fn fetch_candidates(&self) -> Result<Vec<Word>, ServiceError> {
            Ok(Vec::new())
        }
    }

    struct YesDictionary;

    impl Dictionary for YesDictionary {
        fn validate(&self, _word: &Word) -> Result<bool, ServiceError> {
            Ok(true)
        }
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    /// App against fakes, fixed target so no worker threads are spawned.
    fn app() -> App {
        App::new(
            Arc::new(EmptySource),
            Arc::new(YesDictionary),
            word("react"),
            true,
        )
    }

    fn type_word(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::Append(c));
        }
    }

    #[test]
    fn stale_target_result_is_dropped() {
        let mut app = app();

        app.handle_service_event(ServiceEvent::TargetFetched {
            game: 7,
            result: Ok(vec![word("mouse")]),
        });
        assert_eq!(app.session.target().text(), "react");

        // The same payload for the current game installs the target.
        app.handle_service_event(ServiceEvent::TargetFetched {
            game: 0,
            result: Ok(vec![word("mouse")]),
        });
        assert_eq!(app.session.target().text(), "mouse");
    }

    #[test]
    fn empty_candidate_set_keeps_current_target() {
        let mut app = app();

        app.handle_service_event(ServiceEvent::TargetFetched {
            game: 0,
            result: Ok(Vec::new()),
        });

        assert_eq!(app.session.target().text(), "react");
        assert_eq!(app.session.status(), GameStatus::InProgress);
    }

    #[test]
    fn stale_validation_result_is_dropped() {
        let mut app = app();
        type_word(&mut app, "house");

        app.handle_service_event(ServiceEvent::GuessValidated {
            game: 3,
            word: word("house"),
            result: Ok(true),
        });

        assert!(app.session.guesses().is_empty());
        assert_eq!(app.session.buffer(), "house");
    }

    #[test]
    fn valid_result_records_guess_and_updates_keyboard() {
        let mut app = app();
        type_word(&mut app, "house");

        app.handle_service_event(ServiceEvent::GuessValidated {
            game: 0,
            word: word("house"),
            result: Ok(true),
        });

        assert_eq!(app.session.guesses().len(), 1);
        assert_eq!(app.session.buffer(), "");
        assert_eq!(app.letter_marks.get(&'e'), Some(&Mark::Misplaced));
        assert_eq!(app.letter_marks.get(&'h'), Some(&Mark::Incorrect));
    }

    #[test]
    fn invalid_result_keeps_buffer_and_raises_notice() {
        let mut app = app();
        type_word(&mut app, "xyzzy");
        let before = app.messages.len();

        app.handle_service_event(ServiceEvent::GuessValidated {
            game: 0,
            word: word("xyzzy"),
            result: Ok(false),
        });

        assert!(app.session.guesses().is_empty());
        assert_eq!(app.session.buffer(), "xyzzy");
        assert!(app.messages.len() > before);
    }

    #[test]
    fn dictionary_error_reads_as_invalid() {
        let mut app = app();
        type_word(&mut app, "house");

        app.handle_service_event(ServiceEvent::GuessValidated {
            game: 0,
            word: word("house"),
            result: Err(ServiceError::UnexpectedStatus(
                reqwest::StatusCode::BAD_GATEWAY,
            )),
        });

        assert!(app.session.guesses().is_empty());
        assert_eq!(app.session.buffer(), "house");
    }

    #[test]
    fn board_input_held_while_guess_is_pending() {
        let mut app = app();
        app.pending_guess = Some(word("house"));

        app.handle_action(Action::Append('a'));
        assert_eq!(app.session.buffer(), "");

        app.pending_guess = None;
        app.handle_action(Action::Append('a'));
        assert_eq!(app.session.buffer(), "a");
    }

    #[test]
    fn win_updates_statistics_and_distribution() {
        let mut app = app();
        type_word(&mut app, "react");

        app.handle_service_event(ServiceEvent::GuessValidated {
            game: 0,
            word: word("react"),
            result: Ok(true),
        });

        assert_eq!(app.session.status(), GameStatus::Won);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
    }

    #[test]
    fn new_game_bumps_generation_and_clears_board() {
        let mut app = app();
        type_word(&mut app, "react");
        app.handle_service_event(ServiceEvent::GuessValidated {
            game: 0,
            word: word("react"),
            result: Ok(true),
        });

        app.start_new_game();

        assert!(app.session.guesses().is_empty());
        assert_eq!(app.session.buffer(), "");
        assert_eq!(app.session.status(), GameStatus::InProgress);
        assert!(app.letter_marks.is_empty());

        // Anything issued for the finished game is now stale.
        app.handle_service_event(ServiceEvent::TargetFetched {
            game: 0,
            result: Ok(vec![word("mouse")]),
        });
        assert_eq!(app.session.target().text(), "react");
    }
}
