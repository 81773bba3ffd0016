//! External word services
//!
//! The game talks to two collaborators: a word source that supplies target
//! candidates and a dictionary that answers "is this a word". Both sit
//! behind traits so play modes can be driven by HTTP clients, the embedded
//! list, or test fakes interchangeably.
//!
//! Failure policy follows the game rules rather than the transport: a failed
//! candidate fetch is logged and the current target keeps playing, and a
//! dictionary error counts as "not a word" so a flaky network can never
//! consume a guess.

mod builtin;
mod datamuse;
mod dictionary;

pub use builtin::{BuiltinSource, ListDictionary};
pub use datamuse::DatamuseSource;
pub use dictionary::DictionaryApi;

use crate::core::Word;
use thiserror::Error;

/// User agent sent with every service request
const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Errors from the word services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}

/// Supplies candidate target words
pub trait WordSource: Send + Sync {
    /// Fetch the current candidate set
    ///
    /// An empty set is a soft failure the caller handles (keep the current
    /// target); only transport-level problems surface as errors.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the candidate set cannot be retrieved.
    fn fetch_candidates(&self) -> Result<Vec<Word>, ServiceError>;
}

/// Answers whether a word exists
pub trait Dictionary: Send + Sync {
    /// Look the word up
    ///
    /// `Ok(false)` means the service answered "no such word". Callers treat
    /// `Err` the same way, after logging it.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when the lookup itself fails.
    fn validate(&self, word: &Word) -> Result<bool, ServiceError>;
}
