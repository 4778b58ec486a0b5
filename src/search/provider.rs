use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::SearchProviderError;

/// A similar article returned by a search backend.
///
/// Ephemeral by design: produced by a [`SearchProvider`], scored, and either
/// discarded or persisted by the caller's sink as part of the article's
/// similar-article snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateArticle {
    /// Publishing outlet.
    pub source: String,
    /// Author, or empty when the backend does not report one.
    pub author: String,
    /// Headline.
    pub title: String,
    /// Snippet or abstract, or empty when not reported.
    pub description: String,
    /// Canonical link, or empty when not reported.
    pub url: String,
    /// Publish timestamp.
    pub published_at: DateTime<Utc>,
}

#[async_trait]
/// One external search backend, keyed by a title-derived query.
pub trait SearchProvider: Send + Sync {
    /// Searches for articles similar to `query`.
    ///
    /// A fully valid response with zero items is an empty `Ok`, not an
    /// error; transport failures, non-success statuses and malformed
    /// payloads are [`SearchProviderError`]s.
    async fn search(&self, query: &str) -> Result<Vec<CandidateArticle>, SearchProviderError>;

    /// Provider name used in logs and error messages.
    fn name(&self) -> &'static str;
}
