use crate::document::DocId;

/// Coarse classification of [`SearchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
    PreconditionViolation,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("document id must not be negative: {0}")]
    NegativeDocumentId(DocId),
    #[error("document already exists: {0}")]
    DuplicateDocumentId(DocId),
    #[error("{0} contains invalid characters (codes 0-31)")]
    InvalidCharacters(&'static str),
    #[error("more than one minus sign before query word: {0}")]
    DoubleMinus(String),
    #[error("no text after minus sign in query")]
    DanglingMinus,
    #[error("document position {position} out of range (document count {count})")]
    PositionOutOfRange { position: usize, count: usize },
    #[error("unknown document: {0}")]
    UnknownDocument(DocId),
    #[error("page size must be positive")]
    ZeroPageSize,
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::PositionOutOfRange { .. } => ErrorKind::OutOfRange,
            SearchError::UnknownDocument(_) => ErrorKind::PreconditionViolation,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
