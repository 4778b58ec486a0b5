//! Primary/fallback search orchestration.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use super::error::SearchProviderError;
use super::provider::{CandidateArticle, SearchProvider};

/// Drives one or two [`SearchProvider`]s with a primary/fallback policy.
///
/// The fallback is consulted strictly after the primary, never in parallel:
/// when the primary returns an empty result or fails, and a fallback is
/// configured, the fallback gets one attempt. When both providers fail, the
/// primary's error is the one propagated; it attempted first, so its error
/// is authoritative for reporting.
pub struct SearchOrchestrator {
    primary: Arc<dyn SearchProvider>,
    fallback: Option<Arc<dyn SearchProvider>>,
}

impl SearchOrchestrator {
    /// Creates an orchestrator with a single provider.
    pub fn new(primary: Arc<dyn SearchProvider>) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    /// Creates an orchestrator with a primary and a fallback provider.
    pub fn with_fallback(
        primary: Arc<dyn SearchProvider>,
        fallback: Arc<dyn SearchProvider>,
    ) -> Self {
        Self {
            primary,
            fallback: Some(fallback),
        }
    }

    /// Returns the primary provider's name.
    pub fn primary_name(&self) -> &'static str {
        self.primary.name()
    }

    /// Returns `true` if a fallback provider is configured.
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Searches for candidate articles.
    ///
    /// An empty result from the primary is "try the fallback", not a
    /// terminal answer; the fallback's result is returned as-is, even when
    /// also empty.
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn search(&self, query: &str) -> Result<Vec<CandidateArticle>, SearchProviderError> {
        match self.primary.search(query).await {
            Ok(articles) if !articles.is_empty() => Ok(articles),
            Ok(_) => {
                let Some(fallback) = &self.fallback else {
                    return Ok(Vec::new());
                };

                info!(
                    provider = fallback.name(),
                    "primary search provider returned no results, attempting fallback provider"
                );

                fallback.search(query).await
            }
            Err(primary_error) => {
                let Some(fallback) = &self.fallback else {
                    return Err(primary_error);
                };

                warn!(
                    provider = fallback.name(),
                    error = %primary_error,
                    "primary search provider failed, attempting fallback provider"
                );

                match fallback.search(query).await {
                    Ok(articles) => Ok(articles),
                    Err(fallback_error) => {
                        error!(
                            primary_error = %primary_error,
                            fallback_error = %fallback_error,
                            "both search providers failed"
                        );

                        // The primary tried first; its error is the one the
                        // caller sees.
                        Err(primary_error)
                    }
                }
            }
        }
    }
}
