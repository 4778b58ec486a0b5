use thiserror::Error;

use crate::search::SearchProviderError;

#[derive(Debug, Error)]
/// Errors surfaced by a verification attempt.
///
/// By the time one of these reaches the caller, the failure has already been
/// recorded: the verification carries `errored_at` and `terminated_at`, and
/// the article carries `errored_at`.
pub enum VerifyError {
    /// Candidate search failed on every configured provider.
    #[error(transparent)]
    Search(#[from] SearchProviderError),

    /// The persistence sink rejected a write.
    #[error("persistence sink failed: {0}")]
    Persistence(#[source] anyhow::Error),

    /// The caller-supplied deadline elapsed mid-attempt.
    #[error("verification deadline of {secs}s exceeded")]
    DeadlineExceeded {
        /// Deadline in seconds.
        secs: u64,
    },
}
