//! In-memory document index with TF-IDF ranked retrieval.
//!
//! Documents are added once with a status and ratings. Queries are whitespace
//! separated words; a leading `-` marks a word that must not appear. Results
//! are ordered by relevance, near ties by rating.

pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod paginator;
pub mod query;
pub mod ranking;
pub mod request_queue;
pub mod search_server;
pub mod shared;
pub mod stop_words;
pub mod tokenizer;

pub use config::{RequestQueueConfig, SearchConfig};
pub use document::{DocId, Document, DocumentStatus, Rating};
pub use error::{ErrorKind, Result, SearchError};
pub use paginator::{paginate, Page, Paginator};
pub use query::Query;
pub use ranking::DocumentFilter;
pub use request_queue::RequestQueue;
pub use search_server::SearchServer;
pub use shared::SharedSearchServer;
pub use stop_words::StopWords;
