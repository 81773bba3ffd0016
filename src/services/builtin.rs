//! Offline word services
//!
//! Backed by an in-memory word list (the embedded fallback or a file the
//! player supplied). The same list doubles as candidate pool and dictionary
//! universe, so offline targets are always guessable words.

use super::{Dictionary, ServiceError, WordSource};
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Word source that serves a fixed, in-memory candidate list
pub struct BuiltinSource {
    words: Vec<Word>,
}

impl BuiltinSource {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }
}

impl WordSource for BuiltinSource {
    fn fetch_candidates(&self) -> Result<Vec<Word>, ServiceError> {
        Ok(self.words.clone())
    }
}

/// Dictionary that accepts exactly the words of a list
pub struct ListDictionary {
    known: FxHashSet<String>,
}

impl ListDictionary {
    #[must_use]
    pub fn new(words: &[Word]) -> Self {
        Self {
            known: words.iter().map(|w| w.text().to_string()).collect(),
        }
    }
}

impl Dictionary for ListDictionary {
    fn validate(&self, word: &Word) -> Result<bool, ServiceError> {
        Ok(self.known.contains(word.text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    #[test]
    fn builtin_source_serves_its_list() {
        let words = words_from_slice(&["house", "plant", "react"]);
        let source = BuiltinSource::new(words);

        let candidates = source.fetch_candidates().unwrap();
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[1].text(), "plant");
    }

    #[test]
    fn list_dictionary_accepts_only_listed_words() {
        let words = words_from_slice(&["house", "plant"]);
        let dictionary = ListDictionary::new(&words);

        assert!(dictionary.validate(&Word::new("house").unwrap()).unwrap());
        assert!(dictionary.validate(&Word::new("PLANT").unwrap()).unwrap());
        assert!(!dictionary.validate(&Word::new("react").unwrap()).unwrap());
    }
}
