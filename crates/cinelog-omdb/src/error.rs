//! Error types for the OMDb client.

use thiserror::Error;

/// Errors that can occur when talking to OMDb.
#[derive(Debug, Error)]
pub enum OmdbError {
    /// An HTTP request failed at the transport or status level.
    #[error("HTTP error from OMDb: {message}")]
    Http { message: String },

    /// OMDb returned a rate-limit response.
    #[error("rate limited by OMDb")]
    RateLimited,

    /// OMDb reported no match for the title. The message is OMDb's own
    /// ("Movie not found!"), surfaced to the user verbatim.
    #[error("{message}")]
    NotFound { title: String, message: String },

    /// A response could not be parsed into movie metadata.
    #[error("parse error from OMDb: {message}")]
    Parse { message: String },

    /// An error propagated from `reqwest`.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// No API key is configured.
    #[error("no OMDb API key configured (set CINE_OMDB_API_KEY or run `cinelog config set omdb_api_key <key>`)")]
    MissingApiKey,

    /// An error propagated from the core domain layer.
    #[error("database error: {0}")]
    Database(#[from] cinelog_core::Error),
}

impl OmdbError {
    /// Returns `true` when the error is transient and the operation may
    /// succeed if retried.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http { .. } | Self::RateLimited => true,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` when the error indicates the title was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Convenience alias for OMDb results.
pub type OmdbResult<T> = std::result::Result<T, OmdbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(OmdbError::RateLimited.is_transient());
        assert!(OmdbError::Http {
            message: "502 Bad Gateway".to_string()
        }
        .is_transient());
        assert!(!OmdbError::MissingApiKey.is_transient());
        assert!(!OmdbError::NotFound {
            title: "x".to_string(),
            message: "Movie not found!".to_string()
        }
        .is_transient());
    }
}
