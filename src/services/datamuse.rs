//! Datamuse word-source client
//!
//! Asks Datamuse for words matching the five-letter wildcard pattern and
//! keeps whatever parses as a playable word. Datamuse matches the pattern
//! per character, so entries with hyphens, spaces, or diacritics can still
//! come back and are filtered out here.

use super::{APP_USER_AGENT, ServiceError, WordSource};
use crate::core::Word;
use reqwest::blocking::Client;
use serde::Deserialize;

const DATAMUSE_URL: &str = "https://api.datamuse.com";

/// Wildcard spelled-like pattern: any five characters.
const FIVE_LETTER_PATTERN: &str = "?????";

/// Candidate pool size per fetch.
const MAX_CANDIDATES: &str = "100";

/// One entry of a Datamuse `/words` response
#[derive(Debug, Deserialize)]
struct Candidate {
    word: String,
}

/// Word source backed by the Datamuse API
pub struct DatamuseSource {
    client: Client,
    base_url: String,
}

impl DatamuseSource {
    /// Create a client against the public Datamuse endpoint
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, ServiceError> {
        Self::with_base_url(DATAMUSE_URL)
    }

    /// Create a client against a custom endpoint
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ServiceError> {
        let client = Client::builder().user_agent(APP_USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl WordSource for DatamuseSource {
    fn fetch_candidates(&self) -> Result<Vec<Word>, ServiceError> {
        let entries: Vec<Candidate> = self
            .client
            .get(format!("{}/words", self.base_url))
            .query(&[("sp", FIVE_LETTER_PATTERN), ("max", MAX_CANDIDATES)])
            .send()?
            .error_for_status()?
            .json()?;

        Ok(playable_words(entries))
    }
}

/// Keep the entries that are valid playable words
fn playable_words(entries: Vec<Candidate>) -> Vec<Word> {
    entries
        .into_iter()
        .filter_map(|entry| Word::new(entry.word).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<Candidate> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn response_entries_deserialize() {
        let entries = parse(r#"[{"word":"house","score":3000},{"word":"mouse","score":2500}]"#);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word, "house");
        assert_eq!(entries[1].word, "mouse");
    }

    #[test]
    fn playable_words_keeps_valid_entries() {
        let entries = parse(r#"[{"word":"house"},{"word":"plant"},{"word":"react"}]"#);
        let words = playable_words(entries);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "house");
    }

    #[test]
    fn playable_words_drops_unplayable_entries() {
        // Pattern matching is per character, so these all slip through the
        // sp=????? filter on the service side.
        let entries = parse(r#"[{"word":"a cat"},{"word":"e-ten"},{"word":"house"},{"word":"néant"}]"#);
        let words = playable_words(entries);

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "house");
    }

    #[test]
    fn playable_words_empty_response() {
        assert!(playable_words(Vec::new()).is_empty());
    }
}
