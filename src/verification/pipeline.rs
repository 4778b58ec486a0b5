//! One verification attempt, from pending record to terminal state.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{error, info, instrument};

use crate::article::Article;
use crate::keywords::{DEFAULT_MIN_LENGTH, KeywordExtractor};
use crate::scoring::{ScoreAggregator, ScoredCandidate};
use crate::search::{CandidateArticle, SearchOrchestrator};
use crate::similarity;

use super::error::VerifyError;
use super::store::VerificationStore;
use super::types::{Verification, VerificationMetadata, VerificationResult};

/// Orchestrates keyword extraction, candidate search, similarity scoring and
/// aggregation into one verification attempt.
///
/// One attempt per article may be in flight at a time. Callers that run
/// attempts concurrently must serialize them per article id, or the terminal
/// writes will race.
pub struct VerificationPipeline {
    search: SearchOrchestrator,
    keywords: KeywordExtractor,
    aggregator: ScoreAggregator,
    store: Arc<dyn VerificationStore>,
}

impl VerificationPipeline {
    /// Creates a pipeline over the given stages and sink.
    pub fn new(
        search: SearchOrchestrator,
        keywords: KeywordExtractor,
        aggregator: ScoreAggregator,
        store: Arc<dyn VerificationStore>,
    ) -> Self {
        Self {
            search,
            keywords,
            aggregator,
            store,
        }
    }

    /// Runs one verification attempt to completion.
    ///
    /// On success the article carries `verified_at` and a fresh
    /// similar-article snapshot. On failure both the article and the
    /// verification carry `errored_at`, and the triggering error is
    /// returned unchanged. Either way the verification is terminated and
    /// persisted before this returns.
    #[instrument(skip(self, article), fields(article_id = %article.id))]
    pub async fn verify(
        &self,
        article: &mut Article,
    ) -> Result<Vec<ScoredCandidate>, VerifyError> {
        let mut verification = Verification::pending(article.id);
        info!(title = %article.title, "verifying article");

        let attempt = self.attempt(article, &mut verification).await;
        self.finish(article, &mut verification, attempt).await
    }

    /// Like [`verify`](Self::verify), but aborts the attempt once `deadline`
    /// elapses. The in-flight provider call (and any pending fallback) is
    /// dropped, the failure path still records the errored/terminated state,
    /// and [`VerifyError::DeadlineExceeded`] propagates.
    #[instrument(skip(self, article), fields(article_id = %article.id, deadline_secs = deadline.as_secs()))]
    pub async fn verify_with_deadline(
        &self,
        article: &mut Article,
        deadline: Duration,
    ) -> Result<Vec<ScoredCandidate>, VerifyError> {
        let mut verification = Verification::pending(article.id);
        info!(title = %article.title, "verifying article");

        let attempt =
            match tokio::time::timeout(deadline, self.attempt(article, &mut verification)).await {
                Ok(attempt) => attempt,
                Err(_) => Err(VerifyError::DeadlineExceeded {
                    secs: deadline.as_secs(),
                }),
            };

        self.finish(article, &mut verification, attempt).await
    }

    /// The fallible part of an attempt: everything whose failure must flip
    /// the record into the errored state.
    async fn attempt(
        &self,
        article: &mut Article,
        verification: &mut Verification,
    ) -> Result<Vec<ScoredCandidate>, VerifyError> {
        let search_title = self.build_search_query(&article.title);

        let candidates = self.search.search(&search_title).await?;
        info!(count = candidates.len(), "found candidate articles");

        let scored = self.score_candidates(article, candidates);
        let score = self.aggregator.calculate(&scored);
        info!(
            average_score = score.average_score,
            outcome = %score.outcome,
            "scored candidate articles"
        );

        verification.result = score.outcome;
        verification.metadata = Some(VerificationMetadata {
            original_title: article.title.clone(),
            search_title,
            average_score: score.average_score,
            considered_articles: score.considered_candidates,
            total_articles: score.total_candidates,
        });

        article.verified_at = Some(Utc::now());
        article.errored_at = None;

        self.store
            .replace_similar_articles(article.id, &scored)
            .await
            .map_err(VerifyError::Persistence)?;

        Ok(scored)
    }

    /// Terminal step shared by both paths: flip failed attempts into the
    /// errored state, terminate the record, persist article + verification.
    async fn finish(
        &self,
        article: &mut Article,
        verification: &mut Verification,
        attempt: Result<Vec<ScoredCandidate>, VerifyError>,
    ) -> Result<Vec<ScoredCandidate>, VerifyError> {
        let attempt = match attempt {
            Ok(scored) => Ok(scored),
            Err(err) => {
                error!(error = %err, "verification attempt failed");

                verification.result = VerificationResult::Rejected;
                verification.errored_at = Some(Utc::now());
                article.errored_at = Some(Utc::now());
                article.verified_at = None;

                Err(err)
            }
        };

        // Runs unconditionally, including when the attempt failed above.
        verification.terminated_at = Some(Utc::now());

        let saved = self.save_final_state(article, verification).await;

        match (attempt, saved) {
            (Ok(scored), Ok(())) => Ok(scored),
            (Ok(_), Err(save_error)) => Err(save_error),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(save_error)) => {
                // The attempt's error is authoritative for the caller.
                error!(error = %save_error, "failed to persist terminal verification state");
                Err(err)
            }
        }
    }

    async fn save_final_state(
        &self,
        article: &Article,
        verification: &Verification,
    ) -> Result<(), VerifyError> {
        self.store
            .save_article(article)
            .await
            .map_err(VerifyError::Persistence)?;

        self.store
            .save_verification(verification)
            .await
            .map_err(VerifyError::Persistence)?;

        Ok(())
    }

    /// Builds the provider query from the title's most relevant words,
    /// falling back to the raw title when extraction yields nothing.
    fn build_search_query(&self, title: &str) -> String {
        let tokens = self.keywords.extract(title, 0, DEFAULT_MIN_LENGTH);

        if tokens.is_empty() {
            title.to_string()
        } else {
            tokens.join(" ")
        }
    }

    /// Scores every candidate against the article and ranks the batch by
    /// descending score.
    fn score_candidates(
        &self,
        article: &Article,
        candidates: Vec<CandidateArticle>,
    ) -> Vec<ScoredCandidate> {
        let original = article.comparison_text();

        let texts: Vec<&str> = candidates
            .iter()
            .map(|candidate| {
                if candidate.description.is_empty() {
                    candidate.title.as_str()
                } else {
                    candidate.description.as_str()
                }
            })
            .collect();

        let scores = similarity::compare_many(original, &texts);

        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .zip(scores)
            .map(|(candidate, score)| ScoredCandidate::from_candidate(candidate, score))
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored
    }
}
