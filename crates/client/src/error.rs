//! Error taxonomy of the REST boundary.
//!
//! Three families, mirroring how the UI reacts: transport/decoding failures
//! (generic inline message), API rejections (the server's `error` string,
//! surfaced verbatim), and 401s (global forced logout, not locally
//! recoverable). Nothing is retried automatically.

/// Fallback message when the server's envelope carries no `error` string.
pub const GENERIC_ERROR: &str = "Une erreur est survenue";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with an error envelope or a non-success status.
    /// `message` is what the UI renders, verbatim when the server sent one.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-provided `error` string, or [`GENERIC_ERROR`].
        message: String,
    },

    /// The server rejected the bearer token. The session has already been
    /// invalidated and the logout hook fired by the time this is returned.
    #[error("Unauthorized (401): session invalidated")]
    Unauthorized,

    /// A 2xx body that did not match the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}
