//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`bbrev_api_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: bbrev_api_interface::ApiError,
    },

    /// Malformed reviewer page body.
    #[error("Could not decode reviewer page,\n  caused by: {source}")]
    PageDecodeError { source: serde_json::Error },

    /// A reviewer could not be added.
    #[error("Failed to create reviewer {} got code {}", uuid, status)]
    ReviewerCreateError { uuid: String, status: u16 },

    /// A reviewer could not be removed.
    #[error("[{}] Could not delete {} from default reviewer", status, uuid)]
    ReviewerDeleteError { uuid: String, status: u16 },

    /// Status code outside the documented success set.
    #[error("Unexpected status code {} on {}", status, path)]
    UnexpectedStatusError { path: String, status: u16 },
}

impl From<bbrev_api_interface::ApiError> for DomainError {
    fn from(e: bbrev_api_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
