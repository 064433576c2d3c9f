use serde::Deserialize;

/// Ranking parameters owned by a [`SearchServer`](crate::SearchServer).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Upper bound on the number of documents a search returns.
    pub max_results: usize,
    /// Relevances closer than this are ranked by rating instead.
    pub relevance_epsilon: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: 5, relevance_epsilon: 1e-6 }
    }
}

/// Settings for a [`RequestQueue`](crate::RequestQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequestQueueConfig {
    /// Number of most recent requests kept, one logical tick per request.
    pub window: usize,
}

impl Default for RequestQueueConfig {
    fn default() -> Self {
        Self { window: 1440 }
    }
}
