use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Kind tag recorded on every similar-content verification.
pub const VERIFICATION_KIND: &str = "SIMILAR_CONTENT";

/// State of a verification attempt.
///
/// A record is created `Pending` and transitions exactly once to `Approved`
/// or `Rejected`; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationResult {
    Pending,
    Approved,
    Rejected,
}

impl VerificationResult {
    /// Returns the persisted string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationResult::Pending => "PENDING",
            VerificationResult::Approved => "APPROVED",
            VerificationResult::Rejected => "REJECTED",
        }
    }

    /// Returns `true` once the attempt has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, VerificationResult::Pending)
    }

    /// Returns `true` if the article was approved.
    pub fn is_approved(&self) -> bool {
        matches!(self, VerificationResult::Approved)
    }
}

impl std::fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata persisted with a completed verification.
///
/// Field names serialize to the keys the callers' dashboards already read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMetadata {
    /// Title as submitted.
    pub original_title: String,
    /// Query actually sent to the search providers.
    pub search_title: String,
    /// Average similarity over the considered candidates.
    pub average_score: f64,
    /// Candidates that entered the average.
    pub considered_articles: usize,
    /// Candidates returned by the search.
    pub total_articles: usize,
}

/// One verification attempt for an article.
///
/// Append-only history: an article accumulates one record per attempt, and a
/// record is never mutated after `terminated_at` is set.
#[derive(Debug, Clone, Serialize)]
pub struct Verification {
    pub id: Uuid,
    pub article_id: Uuid,
    pub kind: &'static str,
    pub result: VerificationResult,
    pub metadata: Option<VerificationMetadata>,
    pub started_at: DateTime<Utc>,
    pub terminated_at: Option<DateTime<Utc>>,
    pub errored_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Verification {
    /// Creates a pending record for a new attempt on `article_id`.
    pub fn pending(article_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            article_id,
            kind: VERIFICATION_KIND,
            result: VerificationResult::Pending,
            metadata: None,
            started_at: now,
            terminated_at: None,
            errored_at: None,
            created_at: now,
        }
    }

    /// Returns `true` once `terminated_at` is set.
    pub fn is_terminated(&self) -> bool {
        self.terminated_at.is_some()
    }
}
