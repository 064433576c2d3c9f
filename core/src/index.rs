use crate::document::{DocId, DocumentData};
use std::collections::{BTreeMap, HashMap};

/// Document id -> term frequency for a single term.
pub type Postings = BTreeMap<DocId, f64>;

static NO_POSTINGS: Postings = BTreeMap::new();

/// Append-only inverted index: term -> document -> term frequency, plus
/// per-document metadata and the insertion order of ids.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Postings>,
    docs: HashMap<DocId, DocumentData>,
    doc_ids: Vec<DocId>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Record a document whose text is already tokenized and stop-word filtered.
    /// Each occurrence adds `1 / words.len()` to the term's frequency.
    /// The caller guarantees `id` is not yet present.
    pub(crate) fn insert(&mut self, id: DocId, words: &[&str], data: DocumentData) {
        debug_assert!(!self.docs.contains_key(&id), "duplicate document {id}");
        if !words.is_empty() {
            let step = 1.0 / words.len() as f64;
            for word in words {
                *self
                    .postings
                    .entry((*word).to_string())
                    .or_default()
                    .entry(id)
                    .or_insert(0.0) += step;
            }
        }
        self.docs.insert(id, data);
        self.doc_ids.push(id);
    }

    pub fn contains(&self, id: DocId) -> bool { self.docs.contains_key(&id) }

    pub fn document_count(&self) -> usize { self.doc_ids.len() }

    pub fn document(&self, id: DocId) -> Option<&DocumentData> { self.docs.get(&id) }

    /// Document ids in insertion order.
    pub fn doc_ids(&self) -> &[DocId] { &self.doc_ids }

    /// Postings of `term`; empty if the term was never indexed.
    pub fn term_postings(&self, term: &str) -> &Postings {
        self.postings.get(term).unwrap_or(&NO_POSTINGS)
    }

    pub fn term_count(&self) -> usize { self.postings.len() }
}
