//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `VERACITY_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::time::Duration;

use crate::keywords::DEFAULT_LANGUAGE;
use crate::scoring::{DEFAULT_APPROVAL_THRESHOLD, DEFAULT_SCORE_LIMIT};

/// Verifier configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VERACITY_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for newsapi.org. No default.
    pub news_api_key: Option<String>,

    /// API key for SerpAPI. No default.
    pub serp_api_key: Option<String>,

    /// Per-request search timeout in seconds. Default: `10`.
    pub search_timeout_secs: u64,

    /// Number of top candidates entering the average. Default: `10`.
    pub score_limit: usize,

    /// Approval threshold for the average score. Default: `0.5`.
    pub approval_threshold: f64,

    /// Stopword language for keyword extraction. Default: `en`.
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            news_api_key: None,
            serp_api_key: None,
            search_timeout_secs: 10,
            score_limit: DEFAULT_SCORE_LIMIT,
            approval_threshold: DEFAULT_APPROVAL_THRESHOLD,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Config {
    const ENV_NEWS_API_KEY: &'static str = "VERACITY_NEWS_API_KEY";
    const ENV_SERP_API_KEY: &'static str = "VERACITY_SERP_API_KEY";
    const ENV_SEARCH_TIMEOUT_SECS: &'static str = "VERACITY_SEARCH_TIMEOUT_SECS";
    const ENV_SCORE_LIMIT: &'static str = "VERACITY_SCORE_LIMIT";
    const ENV_APPROVAL_THRESHOLD: &'static str = "VERACITY_APPROVAL_THRESHOLD";
    const ENV_LANGUAGE: &'static str = "VERACITY_LANGUAGE";

    /// Loads configuration from environment variables (falling back to
    /// defaults), then validates it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            news_api_key: Self::parse_optional_string_from_env(Self::ENV_NEWS_API_KEY),
            serp_api_key: Self::parse_optional_string_from_env(Self::ENV_SERP_API_KEY),
            search_timeout_secs: Self::parse_u64_from_env(
                Self::ENV_SEARCH_TIMEOUT_SECS,
                defaults.search_timeout_secs,
            )?,
            score_limit: Self::parse_usize_from_env(Self::ENV_SCORE_LIMIT, defaults.score_limit)?,
            approval_threshold: Self::parse_f64_from_env(
                Self::ENV_APPROVAL_THRESHOLD,
                defaults.approval_threshold,
            )?,
            language: Self::parse_string_from_env(Self::ENV_LANGUAGE, defaults.language)
                .trim()
                .to_lowercase(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_timeout_secs == 0 {
            return Err(ConfigError::ZeroValue {
                var: Self::ENV_SEARCH_TIMEOUT_SECS,
            });
        }

        if self.score_limit == 0 {
            return Err(ConfigError::ZeroValue {
                var: Self::ENV_SCORE_LIMIT,
            });
        }

        if !(0.0..=1.0).contains(&self.approval_threshold) {
            return Err(ConfigError::ThresholdOutOfRange {
                value: self.approval_threshold,
            });
        }

        Ok(())
    }

    /// Returns the search timeout as a [`Duration`].
    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_u64_from_env(var_name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::IntParseError {
                var: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::IntParseError {
                var: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_f64_from_env(var_name: &'static str, default: f64) -> Result<f64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::FloatParseError {
                var: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }
}
