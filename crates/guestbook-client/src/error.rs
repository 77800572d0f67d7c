use thiserror::Error;

/// Failure modes of the comment-list client. Nothing here is retried
/// automatically; every error is surfaced to the user and the action must
/// be re-triggered manually.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The max-results form value did not parse to a non-negative integer.
    /// Caught before any request is issued.
    #[error("max results must be a non-negative integer, got {0:?}")]
    InvalidMaxResults(String),

    /// A delete was attempted without an active session.
    #[error("you must be logged in to delete comments")]
    AuthRequired,

    /// Transport-level failure: connection refused, timeout, non-success
    /// status on a fetch.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered, but the body was not what the contract says.
    #[error("could not decode server response: {0}")]
    Decode(String),

    /// The delete/upload endpoint answered with a non-success status.
    /// Terminal for that action.
    #[error("server rejected the request ({status}): {message}")]
    ServerRejection {
        status: reqwest::StatusCode,
        message: String,
    },
}
