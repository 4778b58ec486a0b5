//! Ranking and aggregation of scored candidates into a verdict.

pub mod types;


pub use types::{ScoreResult, ScoredCandidate};

use std::cmp::Ordering;

use tracing::debug;

use crate::verification::VerificationResult;

/// Default number of top candidates entering the average.
pub const DEFAULT_SCORE_LIMIT: usize = 10;

/// Default approval threshold for the average score.
pub const DEFAULT_APPROVAL_THRESHOLD: f64 = 0.5;

/// Ranks scored candidates, averages the top slice and maps the average to
/// an approve/reject verdict.
#[derive(Debug, Clone)]
pub struct ScoreAggregator {
    limit: usize,
    approval_threshold: f64,
}

impl Default for ScoreAggregator {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SCORE_LIMIT,
            approval_threshold: DEFAULT_APPROVAL_THRESHOLD,
        }
    }
}

impl ScoreAggregator {
    /// Creates an aggregator with explicit limit and threshold.
    pub fn new(limit: usize, approval_threshold: f64) -> Self {
        Self {
            limit,
            approval_threshold,
        }
    }

    /// Returns the configured candidate limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the configured approval threshold.
    pub fn approval_threshold(&self) -> f64 {
        self.approval_threshold
    }

    /// Aggregates `candidates` into a [`ScoreResult`].
    ///
    /// Candidates are ranked by descending score (stable, so ties keep their
    /// input order), the first `limit` are averaged, and the verdict is
    /// `Approved` iff the average strictly exceeds the threshold. With no
    /// candidates the result is an unconditional rejection at score 0.0.
    pub fn calculate(&self, candidates: &[ScoredCandidate]) -> ScoreResult {
        let total_candidates = candidates.len();

        if total_candidates == 0 {
            return ScoreResult {
                average_score: 0.0,
                outcome: VerificationResult::Rejected,
                total_candidates: 0,
                considered_candidates: 0,
            };
        }

        let mut ranked: Vec<&ScoredCandidate> = candidates.iter().collect();
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let considered = &ranked[..total_candidates.min(self.limit)];
        let sum: f64 = considered.iter().map(|candidate| candidate.score).sum();
        let average_score = sum / considered.len() as f64;

        let outcome = if average_score > self.approval_threshold {
            VerificationResult::Approved
        } else {
            VerificationResult::Rejected
        };

        debug!(
            average_score,
            total = total_candidates,
            considered = considered.len(),
            outcome = %outcome,
            "aggregated candidate scores"
        );

        ScoreResult {
            average_score,
            outcome,
            total_candidates,
            considered_candidates: considered.len(),
        }
    }
}
