use crate::config::RequestQueueConfig;
use crate::document::{Document, DocumentStatus};
use crate::error::Result;
use crate::ranking::DocumentFilter;
use crate::search_server::SearchServer;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy)]
struct QueryResult {
    timestamp: u64,
    result_count: usize,
}

/// Forwards searches to a [`SearchServer`] and counts how many of the most
/// recent requests returned nothing. Time advances one tick per request.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    config: RequestQueueConfig,
    requests: VecDeque<QueryResult>,
    no_result_requests: usize,
    current_time: u64,
}

impl<'a> RequestQueue<'a> {
    pub fn new(server: &'a SearchServer) -> Self {
        Self::with_config(server, RequestQueueConfig::default())
    }

    pub fn with_config(server: &'a SearchServer, config: RequestQueueConfig) -> Self {
        Self {
            server,
            config,
            requests: VecDeque::new(),
            no_result_requests: 0,
            current_time: 0,
        }
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        self.add_find_request_with(raw_query, &DocumentStatus::Active)
    }

    /// A request whose query fails to parse is not recorded.
    pub fn add_find_request_with<F>(&mut self, raw_query: &str, filter: &F) -> Result<Vec<Document>>
    where
        F: DocumentFilter + ?Sized,
    {
        let result = self.server.find_top_documents_with(raw_query, filter)?;
        self.add_result(result.len());
        Ok(result)
    }

    /// Requests in the current window that returned no documents.
    pub fn no_result_requests(&self) -> usize { self.no_result_requests }

    /// Requests currently inside the window.
    pub fn len(&self) -> usize { self.requests.len() }

    pub fn is_empty(&self) -> bool { self.requests.is_empty() }

    fn add_result(&mut self, result_count: usize) {
        self.current_time += 1;
        let window = self.config.window as u64;
        while let Some(oldest) = self.requests.front() {
            if self.current_time - oldest.timestamp < window {
                break;
            }
            if oldest.result_count == 0 {
                self.no_result_requests -= 1;
            }
            tracing::trace!(timestamp = oldest.timestamp, "request left window");
            self.requests.pop_front();
        }

        self.requests.push_back(QueryResult { timestamp: self.current_time, result_count });
        if result_count == 0 {
            self.no_result_requests += 1;
        }
    }
}
