//! Error types for the API crate.
//!
//! Errors are designed for layered context using rootcause: functions
//! return `readybag_core::Result<T, ApiError>`, a `Report<ApiError>`
//! that callers can add their own context on top of.

use readybag_session::clean_error_message;
use std::fmt;

/// Errors from building, sending, or interpreting backend requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Method string is not a valid HTTP token.
    InvalidMethod { method: String },
    /// URL could not be resolved against the client's base URL.
    InvalidUrl { url: String, reason: String },
    /// Request payload could not be encoded as JSON.
    Serialize { reason: String },
    /// The HTTP client could not be constructed.
    ClientBuild { reason: String },
    /// The request never produced a response.
    Transport {
        method: String,
        url: String,
        reason: String,
    },
    /// The backend answered with a non-success status.
    Rejected { status: u16, message: String },
    /// A success response body did not match the expected shape.
    Decode { reason: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMethod { method } => write!(f, "invalid HTTP method '{method}'"),
            Self::InvalidUrl { url, reason } => write!(f, "invalid url '{url}': {reason}"),
            Self::Serialize { reason } => write!(f, "failed to encode request body: {reason}"),
            Self::ClientBuild { reason } => write!(f, "failed to build HTTP client: {reason}"),
            Self::Transport {
                method,
                url,
                reason,
            } => write!(f, "{method} {url} failed: {reason}"),
            Self::Rejected { status, message } => write!(f, "{status}: {message}"),
            Self::Decode { reason } => write!(f, "failed to decode response body: {reason}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Message suitable for showing to the user.
    ///
    /// Backend rejections keep the server's wording; everything else
    /// collapses to a generic network message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => clean_error_message(message),
            Self::Transport { .. } => "Could not reach the server. Please try again.".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }

    /// HTTP status of a backend rejection.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
