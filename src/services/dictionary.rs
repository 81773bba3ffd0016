//! Dictionary lookup client
//!
//! Checks word existence against the Free Dictionary API. The service
//! answers with an entry payload for known words and 404 for unknown ones;
//! the payload itself is irrelevant here, only the status matters.

use super::{APP_USER_AGENT, Dictionary, ServiceError};
use crate::core::Word;
use reqwest::{StatusCode, blocking::Client};

const DICTIONARY_URL: &str = "https://api.dictionaryapi.dev";

/// Dictionary backed by dictionaryapi.dev
pub struct DictionaryApi {
    client: Client,
    base_url: String,
}

impl DictionaryApi {
    /// Create a client against the public endpoint
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, ServiceError> {
        Self::with_base_url(DICTIONARY_URL)
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

impl Dictionary for DictionaryApi {
    fn validate(&self, word: &Word) -> Result<bool, ServiceError> {
        let url = format!("{}/api/v2/entries/en/{}", self.base_url, word.text());
        let response = self.client.get(url).send()?;

        existence_from_status(response.status())
    }
}

/// Map a lookup response status to word existence
fn existence_from_status(status: StatusCode) -> Result<bool, ServiceError> {
    if status.is_success() {
        Ok(true)
    } else if status == StatusCode::NOT_FOUND {
        Ok(false)
    } else {
        Err(ServiceError::UnexpectedStatus(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_status_means_word_exists() {
        assert!(existence_from_status(StatusCode::OK).unwrap());
    }

    #[test]
    fn not_found_means_word_does_not_exist() {
        assert!(!existence_from_status(StatusCode::NOT_FOUND).unwrap());
    }

    #[test]
    fn other_statuses_are_errors() {
        assert!(matches!(
            existence_from_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(ServiceError::UnexpectedStatus(_))
        ));
        assert!(matches!(
            existence_from_status(StatusCode::TOO_MANY_REQUESTS),
            Err(ServiceError::UnexpectedStatus(_))
        ));
    }
}
