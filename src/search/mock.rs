use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;

use super::error::SearchProviderError;
use super::provider::{CandidateArticle, SearchProvider};

/// Scriptable in-memory search provider.
///
/// Responses are served from a queue in push order; once the queue is
/// drained, further searches return an empty result. Every call is counted,
/// so tests can assert which providers the orchestrator actually consulted.
pub struct MockSearchProvider {
    name: &'static str,
    responses: Mutex<VecDeque<Result<Vec<CandidateArticle>, SearchProviderError>>>,
    calls: AtomicUsize,
}

impl MockSearchProvider {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            responses: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Queues a successful response.
    pub fn push_results(&self, articles: Vec<CandidateArticle>) {
        self.responses.lock().push_back(Ok(articles));
    }

    /// Queues a failure.
    pub fn push_error(&self, error: SearchProviderError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Number of times `search` was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn search(&self, _query: &str) -> Result<Vec<CandidateArticle>, SearchProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Builds a candidate article with the given title and description.
pub fn candidate(title: &str, description: &str) -> CandidateArticle {
    CandidateArticle {
        source: "Mock Source".to_string(),
        author: "Mock Author".to_string(),
        title: title.to_string(),
        description: description.to_string(),
        url: format!("https://example.com/{}", title.replace(' ', "-")),
        published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}
