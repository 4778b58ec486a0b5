//! Veracity library crate (used by callers and integration tests).
//!
//! Verifies the originality of a submitted article by searching the web for
//! similar articles and scoring lexical similarity against them.
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`VerificationPipeline`] - One verification attempt, end to end
//! - [`Verification`], [`VerificationResult`], [`VerificationMetadata`] -
//!   The attempt's record and lifecycle
//! - [`VerifyError`] - Failure taxonomy of an attempt
//!
//! ## Stages
//! - [`KeywordExtractor`], [`StopwordConfig`] - Search-query construction
//! - [`SearchOrchestrator`], [`SearchProvider`] - Candidate search with
//!   primary/fallback policy ([`NewsApiProvider`], [`SerpNewsProvider`])
//! - [`similarity`] - Lexical cosine similarity
//! - [`ScoreAggregator`], [`ScoreResult`] - Top-N averaging into a verdict
//!
//! ## Collaborator seams
//! HTTP serving, storage and HTML extraction stay outside this crate:
//! implement [`VerificationStore`] and [`ContentSource`] to plug them in.
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - `VERACITY_*` environment overrides
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod article;
pub mod config;
pub mod keywords;
pub mod scoring;
pub mod search;
pub mod similarity;
pub mod verification;

#[cfg(any(test, feature = "mock"))]
pub use article::MockContentSource;
pub use article::{Article, ArticleIntake, ContentError, ContentSource, IntakeError};

pub use config::{Config, ConfigError};
pub use keywords::{
    DEFAULT_LANGUAGE, DEFAULT_MAX_WORDS, DEFAULT_MIN_LENGTH, KeywordError, KeywordExtractor,
    StopwordConfig,
};
pub use scoring::{
    DEFAULT_APPROVAL_THRESHOLD, DEFAULT_SCORE_LIMIT, ScoreAggregator, ScoreResult, ScoredCandidate,
};
#[cfg(any(test, feature = "mock"))]
pub use search::MockSearchProvider;
pub use search::{
    CandidateArticle, NewsApiProvider, SearchOrchestrator, SearchProvider, SearchProviderError,
    SerpNewsProvider,
};

#[cfg(any(test, feature = "mock"))]
pub use verification::MockVerificationStore;
pub use verification::{
    VERIFICATION_KIND, Verification, VerificationMetadata, VerificationPipeline,
    VerificationResult, VerificationStore, VerifyError,
};
