//! API Error Type
//!
//! Every client operation fails with exactly one of these variants.

use thiserror::Error;

/// Error surfaced by [`crate::api::ApiClient`] operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The backend rejected the token with a 401. The session has
    /// already been cleared and the login redirect triggered by the
    /// time callers see this.
    #[error("unauthorized")]
    Unauthorized,

    /// Login was rejected. Kept separate from `Request` so the login
    /// form can show a friendlier message than "401 Unauthorized".
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Any other non-success HTTP response.
    #[error("API error: {status} {reason}")]
    Request { status: u16, reason: String },

    /// The request never produced an HTTP response (offline, DNS,
    /// CORS). Distinct from `Request` so callers can tell "offline"
    /// from "server rejected".
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("parse error: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status carried by this error, if it reached the server.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
