//! Error types for linkharvest.
//!
//! Anchors that cannot produce a candidate are skipped, never reported.
//! Everything here is a failure of the whole operation.

/// Error type for configuration and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `title_from` holds a value outside `auto`, `url`, `title`, `link`, `contents`.
    #[error("Unknown title_from value {0}")]
    UnknownTitleFrom(String),

    /// The page URL is missing, relative, or otherwise unusable as a base.
    #[error("Invalid page url {url}: {reason}")]
    InvalidUrl {
        /// The offending URL text.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A `links_re` entry is not a valid regular expression.
    #[error("Invalid links_re pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The configuration document could not be read.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Result type alias for linkharvest operations.
pub type Result<T> = std::result::Result<T, Error>;
