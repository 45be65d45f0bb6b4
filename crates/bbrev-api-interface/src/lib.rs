//! Bitbucket API interface.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod types;

use async_trait::async_trait;

pub use self::errors::{ApiError, Result};

/// Raw API response: status code plus the drained body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, fully read.
    pub body: String,
}

impl ApiResponse {
    /// Build a response from a status code and a body.
    pub fn new<T: Into<String>>(status: u16, body: T) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Bitbucket API adapter interface.
///
/// Only the three verbs the default-reviewers resource needs. Status
/// interpretation belongs to the caller; a driver fails only on
/// transport-level errors.
#[cfg_attr(feature = "testkit", mockall::automock)]
#[async_trait]
pub trait BitbucketService: Send + Sync {
    /// Issue a GET request on an API path.
    async fn get(&self, path: &str) -> Result<ApiResponse>;

    /// Issue a PUT request with an empty body on an API path.
    async fn put_only(&self, path: &str) -> Result<ApiResponse>;

    /// Issue a DELETE request on an API path.
    async fn delete(&self, path: &str) -> Result<ApiResponse>;
}
