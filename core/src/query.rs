use crate::error::{Result, SearchError};
use crate::stop_words::StopWords;
use crate::tokenizer::{is_valid_text, tokenize};
use std::collections::BTreeSet;

/// A parsed query. Plus terms raise relevance; any minus term excludes a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_terms: BTreeSet<String>,
    pub minus_terms: BTreeSet<String>,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.plus_terms.is_empty() && self.minus_terms.is_empty()
    }
}

struct QueryWord<'a> {
    text: &'a str,
    is_minus: bool,
}

fn parse_query_word(word: &str) -> Result<QueryWord<'_>> {
    if !is_valid_text(word) {
        return Err(SearchError::InvalidCharacters("query word"));
    }
    match word.strip_prefix('-') {
        Some(rest) if rest.starts_with('-') => Err(SearchError::DoubleMinus(word.to_string())),
        Some("") => Err(SearchError::DanglingMinus),
        Some(rest) => Ok(QueryWord { text: rest, is_minus: true }),
        None => Ok(QueryWord { text: word, is_minus: false }),
    }
}

/// Parse raw query text. Stop words are dropped whether or not they carry a minus.
pub fn parse_query(text: &str, stop_words: &StopWords) -> Result<Query> {
    let mut query = Query::default();
    for word in tokenize(text) {
        let word = parse_query_word(word)?;
        if stop_words.contains(word.text) {
            continue;
        }
        let terms = if word.is_minus { &mut query.minus_terms } else { &mut query.plus_terms };
        terms.insert(word.text.to_string());
    }
    // a minus term always wins
    let Query { plus_terms, minus_terms } = &mut query;
    plus_terms.retain(|term| !minus_terms.contains(term));
    tracing::trace!(plus = query.plus_terms.len(), minus = query.minus_terms.len(), "parsed query");
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn splits_plus_and_minus_terms() {
        let stop = StopWords::from_text("and").unwrap();
        let query = parse_query("fluffy cat -dog and cat", &stop).unwrap();
        assert_eq!(query.plus_terms, set(&["cat", "fluffy"]));
        assert_eq!(query.minus_terms, set(&["dog"]));
    }

    #[test]
    fn minus_stop_word_is_dropped() {
        let stop = StopWords::from_text("in").unwrap();
        let query = parse_query("-in city", &stop).unwrap();
        assert_eq!(query.plus_terms, set(&["city"]));
        assert!(query.minus_terms.is_empty());
    }

    #[test]
    fn term_is_never_both_plus_and_minus() {
        let query = parse_query("cat -cat kitten", &StopWords::new()).unwrap();
        assert_eq!(query.plus_terms, set(&["kitten"]));
        assert_eq!(query.minus_terms, set(&["cat"]));
    }

    #[test]
    fn inner_hyphen_is_part_of_the_word() {
        let query = parse_query("time-out", &StopWords::new()).unwrap();
        assert_eq!(query.plus_terms, set(&["time-out"]));
    }

    #[test]
    fn rejects_malformed_words() {
        let stop = StopWords::new();
        assert_eq!(parse_query("--cat", &stop), Err(SearchError::DoubleMinus("--cat".into())));
        assert_eq!(parse_query("fluffy -", &stop), Err(SearchError::DanglingMinus));
        assert_eq!(
            parse_query("cat\u{3}", &stop),
            Err(SearchError::InvalidCharacters("query word"))
        );
    }

    #[test]
    fn empty_query_parses_to_nothing() {
        assert!(parse_query("   ", &StopWords::new()).unwrap().is_empty());
    }
}
