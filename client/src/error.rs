//! Error taxonomy for every data-access call.
//!
//! ERROR HANDLING
//! ==============
//! Auth failures are split in two: `Unauthenticated` never touches the
//! network, `SessionExpired` means the server rejected the credential and
//! the session has already been cleared. Callers that only log (dashboard
//! loaders) can treat both alike; forms surface `Api::detail` to the user.

use crate::state::storage::StorageError;

/// Errors produced by the gateway and the typed API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No credential is stored; the request was not sent.
    #[error("missing session token; log in first")]
    Unauthenticated,

    /// The server answered 401; the credential was discarded.
    #[error("session expired; log in again")]
    SessionExpired,

    /// The server answered with a non-success status other than 401.
    #[error("API error: {status} {status_text}")]
    Api {
        status: u16,
        status_text: String,
        /// Server-provided `detail` message, when the body carries one.
        detail: Option<String>,
    },

    /// The HTTP request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the expected JSON shape.
    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The session storage backend failed.
    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),

    /// The request could not be built (bad header value, bad input).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Stable machine-readable code for logs and CLI exit messages.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "E_UNAUTHENTICATED",
            Self::SessionExpired => "E_SESSION_EXPIRED",
            Self::Api { .. } => "E_API",
            Self::Request(_) => "E_REQUEST",
            Self::Decode(_) => "E_DECODE",
            Self::Storage(_) => "E_STORAGE",
            Self::InvalidRequest(_) => "E_INVALID_REQUEST",
        }
    }

    /// True when the caller must log in again before retrying.
    #[must_use]
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::SessionExpired)
    }

    /// HTTP status for `Api` errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::SessionExpired => Some(401),
            _ => None,
        }
    }

    /// Most specific human-readable message: the server `detail` when present.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { detail: Some(detail), .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
