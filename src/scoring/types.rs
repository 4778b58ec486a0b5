use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::search::CandidateArticle;
use crate::verification::VerificationResult;

/// Candidate article annotated with its similarity score.
///
/// The top-ranked subset of these becomes the article's persisted
/// similar-article snapshot, replacing whatever the previous attempt stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub source: String,
    pub author: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    /// Lexical similarity to the original article, in `[0.0, 1.0]`.
    pub score: f64,
}

impl ScoredCandidate {
    /// Annotates a candidate with its similarity score.
    pub fn from_candidate(candidate: CandidateArticle, score: f64) -> Self {
        Self {
            source: candidate.source,
            author: candidate.author,
            title: candidate.title,
            description: candidate.description,
            url: candidate.url,
            published_at: candidate.published_at,
            score,
        }
    }
}

/// Outcome of aggregating a batch of scored candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Average similarity over the considered candidates (0.0 with none).
    pub average_score: f64,
    /// Approved when the average strictly exceeds the threshold.
    pub outcome: VerificationResult,
    /// Candidates handed to the aggregator.
    pub total_candidates: usize,
    /// Candidates that entered the average: `min(total, limit)`.
    pub considered_candidates: usize,
}
