//! Core game types
//!
//! The domain lives here with zero service or UI dependencies: validated
//! words, per-letter feedback, and the session state machine. Everything is
//! pure and directly testable.

mod mark;
mod session;
mod word;

pub use mark::{Feedback, Mark};
pub use session::{Action, GameSession, GameStatus, MAX_GUESSES};
pub use word::{WORD_LENGTH, Word, WordError};
