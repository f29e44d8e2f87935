//! Client construction error types.

/// Errors from building an HTTP binding.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The CSRF token contains characters not valid in an HTTP header.
    #[error("CSRF token is not a valid HTTP header value")]
    InvalidToken,
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}
