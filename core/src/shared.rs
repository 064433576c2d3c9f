use crate::document::{DocId, Document, DocumentStatus, Rating};
use crate::error::Result;
use crate::ranking::DocumentFilter;
use crate::search_server::SearchServer;
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

/// Cloneable handle for using one [`SearchServer`] from several threads.
/// Adding documents takes the write lock; searches share the read lock.
#[derive(Debug, Clone, Default)]
pub struct SharedSearchServer {
    inner: Arc<RwLock<SearchServer>>,
}

impl SharedSearchServer {
    pub fn new(server: SearchServer) -> Self {
        Self { inner: Arc::new(RwLock::new(server)) }
    }

    pub fn add_document(
        &self,
        id: DocId,
        text: &str,
        status: DocumentStatus,
        ratings: &[Rating],
    ) -> Result<()> {
        self.inner.write().add_document(id, text, status, ratings)
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.inner.read().find_top_documents(raw_query)
    }

    pub fn find_top_documents_with<F>(&self, raw_query: &str, filter: &F) -> Result<Vec<Document>>
    where
        F: DocumentFilter + ?Sized,
    {
        self.inner.read().find_top_documents_with(raw_query, filter)
    }

    pub fn match_document(&self, raw_query: &str, id: DocId) -> Result<(Vec<String>, DocumentStatus)> {
        self.inner.read().match_document(raw_query, id)
    }

    pub fn document_count(&self) -> usize { self.inner.read().document_count() }

    /// Hold the read lock for several calls, e.g. to drive a [`RequestQueue`](crate::RequestQueue).
    pub fn read(&self) -> RwLockReadGuard<'_, SearchServer> { self.inner.read() }
}
