//! Error types for `Fastpath`

use thiserror::Error;

/// Main error type for `Fastpath` operations
#[derive(Error, Debug)]
pub enum FastpathError {
    /// URL text could not be parsed
    #[error("invalid url {input:?}: {source}")]
    UrlParse {
        /// The offending input text
        input: String,
        /// Underlying parser error
        #[source]
        source: url::ParseError,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FastpathError>;
