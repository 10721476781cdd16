//! Error types for the BookStack integration.

/// Error from BookStack API operations.
#[derive(Debug, thiserror::Error)]
pub enum BookStackError {
    /// HTTP request failed (network error, timeout, malformed response
    /// body on a success status).
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    /// The API returned an error status. The response body is kept
    /// verbatim so the operator log shows what the server said.
    #[error("BookStack API error: {status} - {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },
}
