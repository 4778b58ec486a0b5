use async_trait::async_trait;
use uuid::Uuid;

use crate::article::Article;
use crate::scoring::ScoredCandidate;

use super::types::Verification;

#[async_trait]
/// Persistence sink for articles, verification records and similar-article
/// snapshots.
///
/// The core calls these as the final step of each verification path; storage
/// format and transactional discipline belong to the implementor.
pub trait VerificationStore: Send + Sync {
    /// Persists a verification record.
    async fn save_verification(&self, verification: &Verification) -> anyhow::Result<()>;

    /// Persists an article's current state.
    async fn save_article(&self, article: &Article) -> anyhow::Result<()>;

    /// Replaces the article's similar-article snapshot with `candidates`.
    ///
    /// Delete-then-insert semantics: the previous snapshot is discarded even
    /// when `candidates` is empty.
    async fn replace_similar_articles(
        &self,
        article_id: Uuid,
        candidates: &[ScoredCandidate],
    ) -> anyhow::Result<()>;
}
