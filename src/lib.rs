//! Terminal Wordle
//!
//! A Wordle game for the terminal. Targets come from the Datamuse word
//! service, guesses are checked against a dictionary service, and the board
//! renders in a TUI or a plain line-based CLI mode.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{GameSession, Word};
//!
//! let session = GameSession::new(Word::new("react").unwrap());
//! let feedback = session.score(&Word::new("plant").unwrap());
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// External word services
pub mod services;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
