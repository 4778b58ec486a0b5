use thiserror::Error;

#[derive(Debug, Error)]
/// Errors from configuration loading and validation.
pub enum ConfigError {
    /// An integer variable failed to parse.
    #[error("invalid value for {var}: '{value}'")]
    IntParseError {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
        /// Parse error.
        #[source]
        source: std::num::ParseIntError,
    },

    /// A float variable failed to parse.
    #[error("invalid value for {var}: '{value}'")]
    FloatParseError {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
        /// Parse error.
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A variable that must be positive was zero.
    #[error("{var} must be greater than zero")]
    ZeroValue {
        /// Variable name.
        var: &'static str,
    },

    /// The approval threshold is outside `[0, 1]`.
    #[error("approval threshold must be within [0, 1], got {value}")]
    ThresholdOutOfRange {
        /// Offending value.
        value: f64,
    },
}
