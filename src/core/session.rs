//! Game session state machine
//!
//! `GameSession` owns the target word, the confirmed guess history, the
//! in-progress input buffer, and the derived game status. Input arrives as
//! typed [`Action`] values; the physical source (key event, prompt line) is
//! mapped to actions by thin adapters in the play modes.
//!
//! Confirming a guess is two-phase: [`GameSession::apply`] hands back the
//! buffered word once it is full, the caller asks the dictionary about it,
//! and only a positive answer is recorded via [`GameSession::accept_guess`].
//! A rejected word costs nothing and stays in the buffer.

use super::{Feedback, WORD_LENGTH, Word};

/// Maximum number of confirmed guesses per game.
pub const MAX_GUESSES: usize = 6;

/// Player input, normalized from whatever surface produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a letter to the input buffer
    Append(char),
    /// Remove the last buffered letter
    Delete,
    /// Submit the buffer as a guess
    Confirm,
}

/// Derived game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One game's worth of state: target, history, buffer, status
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    guesses: Vec<Word>,
    buffer: String,
    status: GameStatus,
}

impl GameSession {
    /// Start a session against the given target
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            guesses: Vec::with_capacity(MAX_GUESSES),
            buffer: String::with_capacity(WORD_LENGTH),
            status: GameStatus::InProgress,
        }
    }

    /// Apply one input action
    ///
    /// Returns the buffered word when a `Confirm` finds the buffer full;
    /// the caller validates it and then calls [`Self::accept_guess`] (or
    /// nothing, leaving the buffer as typed). Every other case mutates the
    /// buffer or is a no-op. All input is ignored once the game is over.
    pub fn apply(&mut self, action: Action) -> Option<Word> {
        if self.status != GameStatus::InProgress {
            return None;
        }

        match action {
            Action::Append(c) => {
                if c.is_ascii_alphabetic() && self.buffer.len() < WORD_LENGTH {
                    self.buffer.push(c.to_ascii_lowercase());
                }
                None
            }
            Action::Delete => {
                self.buffer.pop();
                None
            }
            Action::Confirm => {
                if self.buffer.len() == WORD_LENGTH {
                    Word::new(self.buffer.clone()).ok()
                } else {
                    None
                }
            }
        }
    }

    /// Record a dictionary-confirmed guess and update the game status
    ///
    /// Appends to history, clears the buffer, then ends the game when the
    /// guess matches the target or the guess limit is reached. Ignored if
    /// the game already ended or the history is somehow full.
    pub fn accept_guess(&mut self, guess: Word) {
        if self.status != GameStatus::InProgress || self.guesses.len() >= MAX_GUESSES {
            return;
        }

        let won = guess == self.target;
        self.guesses.push(guess);
        self.buffer.clear();

        if won {
            self.status = GameStatus::Won;
        } else if self.guesses.len() >= MAX_GUESSES {
            self.status = GameStatus::Lost;
        }
    }

    /// Reset history, buffer, and status for a fresh game
    ///
    /// The target is kept until [`Self::set_target`] installs a new one, so
    /// the session stays playable while a word fetch is in flight (or after
    /// it fails).
    pub fn start_new(&mut self) {
        self.guesses.clear();
        self.buffer.clear();
        self.status = GameStatus::InProgress;
    }

    /// Install a freshly selected target and mark the game in progress
    pub fn set_target(&mut self, target: Word) {
        self.target = target;
        self.status = GameStatus::InProgress;
    }

    /// Score a guess against this session's target
    #[must_use]
    pub fn score(&self, guess: &Word) -> Feedback {
        Feedback::score(guess, &self.target)
    }

    /// The secret word
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// Confirmed guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// The unconfirmed, in-progress guess
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Guesses still available before the game is lost
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES - self.guesses.len()
    }
}
