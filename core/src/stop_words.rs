use crate::error::{Result, SearchError};
use crate::tokenizer::{is_valid_text, tokenize};
use std::collections::BTreeSet;

/// Case-sensitive words excluded from both indexing and queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Parse a space-separated list of stop words.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_words(tokenize(text))
    }

    /// Collect stop words from any container; empty entries are skipped.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_text(word) {
                return Err(SearchError::InvalidCharacters("stop word"));
            }
            set.insert(word.to_string());
        }
        Ok(Self { words: set })
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &str> { self.words.iter().map(String::as_str) }
}
