use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::error::ContentError;
use super::ContentSource;

/// Scriptable in-memory content source.
///
/// Responses are served from a queue in push order; a drained queue fails
/// the fetch, so a test that forgets to script a response notices.
#[derive(Default)]
pub struct MockContentSource {
    responses: Mutex<VecDeque<Result<String, ContentError>>>,
}

impl MockContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the content returned by the next fetch.
    pub fn push_content(&self, content: impl Into<String>) {
        self.responses.lock().push_back(Ok(content.into()));
    }

    /// Queues a failure for the next fetch.
    pub fn push_error(&self, error: ContentError) {
        self.responses.lock().push_back(Err(error));
    }
}

#[async_trait]
impl ContentSource for MockContentSource {
    async fn fetch(&self, url: &str) -> Result<String, ContentError> {
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ContentError::Fetch {
                    url: url.to_string(),
                    message: "no scripted response".to_string(),
                })
            })
    }
}
