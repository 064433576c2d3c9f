use crate::config::SearchConfig;
use crate::document::{average_rating, DocId, Document, DocumentData, DocumentStatus, Rating};
use crate::error::{Result, SearchError};
use crate::index::{InvertedIndex, Postings};
use crate::query::{parse_query, Query};
use crate::ranking::{find_all_documents, rank, DocumentFilter};
use crate::stop_words::StopWords;
use crate::tokenizer::{is_valid_text, tokenize};

/// In-memory TF-IDF search engine over an append-only document collection.
#[derive(Debug, Default)]
pub struct SearchServer {
    stop_words: StopWords,
    index: InvertedIndex,
    config: SearchConfig,
}

impl SearchServer {
    pub fn new(stop_words: StopWords) -> Self {
        Self::with_config(stop_words, SearchConfig::default())
    }

    pub fn with_config(stop_words: StopWords, config: SearchConfig) -> Self {
        Self { stop_words, index: InvertedIndex::new(), config }
    }

    /// Shorthand for a server whose stop words are given as space-separated text.
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Ok(Self::new(StopWords::from_text(text)?))
    }

    pub fn config(&self) -> &SearchConfig { &self.config }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    /// Index a document. Nothing is modified when validation fails.
    pub fn add_document(
        &mut self,
        id: DocId,
        text: &str,
        status: DocumentStatus,
        ratings: &[Rating],
    ) -> Result<()> {
        if id < 0 {
            return Err(SearchError::NegativeDocumentId(id));
        }
        if self.index.contains(id) {
            return Err(SearchError::DuplicateDocumentId(id));
        }
        if !is_valid_text(text) {
            return Err(SearchError::InvalidCharacters("document text"));
        }

        let words: Vec<&str> = tokenize(text)
            .into_iter()
            .filter(|word| !self.stop_words.contains(word))
            .collect();
        let rating = average_rating(ratings);
        self.index.insert(id, &words, DocumentData { rating, status });
        tracing::debug!(id, words = words.len(), ?status, rating, "added document");
        Ok(())
    }

    pub fn document_count(&self) -> usize { self.index.document_count() }

    /// Id of the document added at `position` (0-based insertion order).
    pub fn document_id_at(&self, position: usize) -> Result<DocId> {
        self.index
            .doc_ids()
            .get(position)
            .copied()
            .ok_or(SearchError::PositionOutOfRange { position, count: self.document_count() })
    }

    /// Document ids in insertion order.
    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.index.doc_ids().iter().copied()
    }

    pub fn term_postings(&self, term: &str) -> &Postings { self.index.term_postings(term) }

    pub fn parse_query(&self, raw_query: &str) -> Result<Query> {
        parse_query(raw_query, &self.stop_words)
    }

    /// Every document matching `query` that passes `filter`, unranked.
    pub fn find_all_documents<F>(&self, query: &Query, filter: &F) -> Vec<Document>
    where
        F: DocumentFilter + ?Sized,
    {
        find_all_documents(&self.index, query, filter)
    }

    /// Top active documents for `raw_query`.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, &DocumentStatus::Active)
    }

    /// Top documents for `raw_query` among those accepted by `filter`, which may be
    /// a [`DocumentStatus`] or a closure over `(id, status, rating)`.
    pub fn find_top_documents_with<F>(&self, raw_query: &str, filter: &F) -> Result<Vec<Document>>
    where
        F: DocumentFilter + ?Sized,
    {
        let query = self.parse_query(raw_query)?;
        let matched = self.find_all_documents(&query, filter);
        let total_hits = matched.len();
        let top = rank(matched, &self.config);
        tracing::debug!(total_hits, returned = top.len(), "ranked search");
        Ok(top)
    }

    /// Plus terms of `raw_query` found in the document, sorted, plus its status.
    /// The term list is empty when the document contains any minus term.
    pub fn match_document(&self, raw_query: &str, id: DocId) -> Result<(Vec<String>, DocumentStatus)> {
        let query = self.parse_query(raw_query)?;
        let status = self
            .index
            .document(id)
            .map(|data| data.status)
            .ok_or(SearchError::UnknownDocument(id))?;

        let contains = |term: &String| self.index.term_postings(term).contains_key(&id);
        if query.minus_terms.iter().any(contains) {
            return Ok((Vec::new(), status));
        }
        // BTreeSet iteration is already sorted and unique
        let matched = query.plus_terms.iter().filter(|&term| contains(term)).cloned().collect();
        Ok((matched, status))
    }
}
