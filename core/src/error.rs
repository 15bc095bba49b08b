//! Error types for the todo API client.
//!
//! # Design
//! The first five variants are the network taxonomy a caller records and
//! shows: a malformed reply, an undecodable body, and the three status-code
//! classes. The remaining variants come from building or sending a request
//! and sit outside that taxonomy; `normalized` folds them into
//! `UnknownError(0)` for callers that only deal in the taxonomy.

use thiserror::Error;

/// Errors returned by the request builder, transport client and service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The transport produced a reply without an HTTP status code.
    #[error("invalid response received from the server")]
    InvalidResponse,

    /// The body was present but did not decode into the expected type.
    #[error("failed to decode the response data")]
    DecodingFailed,

    /// The server returned a 4xx status.
    #[error("client error, status code {0}")]
    ClientError(u16),

    /// The server returned a 5xx status.
    #[error("server error, status code {0}")]
    ServerError(u16),

    /// Any other status, or the generic fallback with code 0.
    #[error("unknown error, status code {0}")]
    UnknownError(u16),

    /// The endpoint parameters could not be encoded as a JSON object.
    #[error("failed to encode request parameters: {0}")]
    EncodingError(String),

    /// The base URL and path did not resolve to a valid URL.
    #[error("invalid request url: {0}")]
    InvalidUrl(String),

    /// The request never produced a response (connect, DNS, I/O).
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ApiError {
    /// Returns `true` for the variants a caller records as-is.
    pub fn is_network_kind(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidResponse
                | ApiError::DecodingFailed
                | ApiError::ClientError(_)
                | ApiError::ServerError(_)
                | ApiError::UnknownError(_)
        )
    }

    /// Keep taxonomy kinds, coerce everything else to `UnknownError(0)`.
    pub fn normalized(self) -> Self {
        if self.is_network_kind() {
            self
        } else {
            ApiError::UnknownError(0)
        }
    }

    /// The status code carried by the variant, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::ClientError(code) | ApiError::ServerError(code) | ApiError::UnknownError(code) => {
                Some(*code)
            }
            _ => None,
        }
    }
}
