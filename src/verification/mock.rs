use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::article::Article;
use crate::scoring::ScoredCandidate;

use super::store::VerificationStore;
use super::types::Verification;

/// In-memory [`VerificationStore`] recording every write.
#[derive(Default)]
pub struct MockVerificationStore {
    state: Mutex<State>,
    fail_replacements: AtomicBool,
    fail_saves: AtomicBool,
}

#[derive(Default)]
struct State {
    articles: Vec<Article>,
    verifications: Vec<Verification>,
    snapshots: HashMap<Uuid, Vec<ScoredCandidate>>,
    replace_calls: usize,
}

impl MockVerificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent snapshot replacement fail.
    pub fn fail_replacements(&self) {
        self.fail_replacements.store(true, Ordering::SeqCst);
    }

    /// Makes every subsequent article/verification save fail.
    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }

    /// Articles saved, in order.
    pub fn saved_articles(&self) -> Vec<Article> {
        self.state.lock().articles.clone()
    }

    /// Verification records saved, in order.
    pub fn saved_verifications(&self) -> Vec<Verification> {
        self.state.lock().verifications.clone()
    }

    /// Current similar-article snapshot for `article_id`.
    pub fn snapshot(&self, article_id: Uuid) -> Option<Vec<ScoredCandidate>> {
        self.state.lock().snapshots.get(&article_id).cloned()
    }

    /// Number of snapshot replacements performed.
    pub fn replace_calls(&self) -> usize {
        self.state.lock().replace_calls
    }
}

#[async_trait]
impl VerificationStore for MockVerificationStore {
    async fn save_verification(&self, verification: &Verification) -> anyhow::Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(anyhow!("verification save rejected"));
        }

        self.state.lock().verifications.push(verification.clone());
        Ok(())
    }

    async fn save_article(&self, article: &Article) -> anyhow::Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(anyhow!("article save rejected"));
        }

        self.state.lock().articles.push(article.clone());
        Ok(())
    }

    async fn replace_similar_articles(
        &self,
        article_id: Uuid,
        candidates: &[ScoredCandidate],
    ) -> anyhow::Result<()> {
        if self.fail_replacements.load(Ordering::SeqCst) {
            return Err(anyhow!("similar-article snapshot rejected"));
        }

        let mut state = self.state.lock();
        state.replace_calls += 1;
        state.snapshots.insert(article_id, candidates.to_vec());
        Ok(())
    }
}
