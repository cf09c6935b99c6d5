//! Domain Layer - Errors
//!
//! One error type for everything that can go wrong between the page and the
//! remote script: transport, server-reported failures, bad payloads and the
//! local rejections the claim protocol short-circuits on.

use thiserror::Error;

/// Common result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Request never produced a response (DNS, CORS, connection reset, ...)
    #[error("could not reach server: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    /// Non-2xx response whose body carried no usable message
    #[error("HTTP {0}")]
    Status(u16),

    /// `ok: false` from the script, with its message when it sent one
    #[error("{}", .0.as_deref().unwrap_or("server rejected the request"))]
    Server(Option<String>),

    /// Body was not JSON or did not have the expected shape
    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("item {0} is already taken by someone else")]
    ClaimedByOther(String),

    #[error("a request for item {0} is still in flight")]
    Pending(String),

    #[error("unknown item {0}")]
    UnknownItem(String),

    #[error("no guest token in link")]
    MissingToken,
}

impl RegistryError {
    /// Message worth showing to a guest, if the server provided one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RegistryError::Server(Some(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RegistryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RegistryError::Timeout
        } else if e.is_decode() {
            RegistryError::Malformed(e.to_string())
        } else {
            RegistryError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(e: serde_json::Error) -> Self {
        RegistryError::Malformed(e.to_string())
    }
}
