//! Error types for the SMS Gateway client.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when calling the SMS Gateway API.
///
/// The taxonomy keeps "no response received" (`Request`), "response with an
/// error status" (`Unauthorized` / `NotFound` / `InvalidRequest` / `Api`),
/// and "response that did not match the expected shape" (`InvalidResponse`)
/// distinguishable, and no variant discards the server's status or message.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure: the request never produced a usable response.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server rejected the credential (401/403).
    #[error("Unauthorized ({status}): {message}")]
    Unauthorized {
        /// HTTP status code.
        status: u16,
        /// Error message from server.
        message: String,
    },

    /// Server reported the addressed resource missing (404).
    #[error("Not found: {message}")]
    NotFound {
        /// Error message from server.
        message: String,
    },

    /// Server rejected the request payload (400/422).
    #[error("Invalid request ({status}): {message}")]
    InvalidRequest {
        /// HTTP status code.
        status: u16,
        /// Error message from server.
        message: String,
    },

    /// Any other non-success status, 5xx included.
    #[error("Server error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message or raw body from server.
        message: String,
    },

    /// Response body did not deserialize into the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Key rotation was attempted without a bearer token configured.
    #[error("No bearer token configured for key rotation")]
    MissingBearerToken,
}

/// Error envelope the gateway uses for rejections.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl ClientError {
    /// Map a non-success HTTP response to an error variant, extracting the
    /// gateway's `{"message": "..."}` envelope when present.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|e| e.message)
            .unwrap_or_else(|_| body.to_string());

        match status {
            401 | 403 => Self::Unauthorized { status, message },
            404 => Self::NotFound { message },
            400 | 422 => Self::InvalidRequest { status, message },
            _ => Self::Api { status, message },
        }
    }

    /// The HTTP status carried by this error, if the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. }
            | Self::InvalidRequest { status, .. }
            | Self::Api { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidResponse(_) | Self::MissingBearerToken => None,
        }
    }

    /// Whether this failure means the credential was missing or rejected.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::MissingBearerToken)
    }

    /// Whether the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
