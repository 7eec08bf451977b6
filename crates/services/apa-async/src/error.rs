use thiserror::Error;

/// Errors that can occur when using the league API clients
///
/// Client-error statuses (4xx) are deliberately NOT represented here: they
/// come back as ordinary [`ApiResult`](crate::ApiResult)s with an empty
/// payload, and callers branch on `status_code` to detect them.
#[derive(Debug, Error)]
pub enum ApaError {
    /// Transport-layer failure (connection, DNS, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Response body was not valid JSON
    ///
    /// Checked before status classification, so an error-status response
    /// with an undecodable body reports as this variant.
    #[error("Bad JSON in response: {0}")]
    MalformedResponse(String),

    /// Server-side (5xx) or otherwise unclassifiable status
    #[error("{status}: {reason}")]
    Server {
        /// Numeric status code of the response
        status: u16,
        /// Reason phrase reported with the status line
        reason: String,
    },

    /// No refresh token was provided and none is configured
    #[error("{0}")]
    MissingCredential(String),

    /// Token mutation completed with a non-200 result
    #[error("Failed to generate access token: {0}")]
    TokenRequestFailed(String),

    /// Token response did not contain a usable access token
    #[error("No access token found in response")]
    TokenExtractionFailed,
}

/// Maps a serde deserialization error to an `ApaError` with body context
pub(crate) fn map_deser(e: &serde_json::Error, body: &[u8]) -> ApaError {
    // Cap the echoed body to avoid log/memory bloat on large HTML pages
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    ApaError::MalformedResponse(format!("{e}: {snippet}"))
}
