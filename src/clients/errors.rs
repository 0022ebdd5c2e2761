//! Error types for Shopee API calls.
//!
//! Every failure of a call surfaces as one [`ApiError`] variant:
//!
//! - [`ApiError::Connection`]: the server could not be reached (never retried)
//! - [`ApiError::Decode`]: the body was not valid JSON or did not match the target type
//! - [`ApiError::RateLimited`]: HTTP 429 after the retry budget was spent
//! - [`ApiError::ServiceUnavailable`]: HTTP 503 after the retry budget was spent
//! - [`ApiError::Response`]: an application error (including HTTP 200 with a
//!   non-empty `error` field) or any other non-2xx status
//! - [`ApiError::InvalidRequest`]: the request could not be assembled
//! - [`ApiError::Io`]: an upload file could not be read
//!
//! # Example
//!
//! ```rust,ignore
//! use shopee_api::ApiError;
//!
//! match client.shop().get_shop_info(&scope).await {
//!     Ok(info) => println!("{}", info.shop_name),
//!     Err(e) if e.error_code() == Some("invalid_access_token") => {
//!         // refresh the token and try again
//!     }
//!     Err(ApiError::RateLimited(e)) => {
//!         println!("slow down, retry after {}s", e.retry_after);
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use std::fmt;

use thiserror::Error;

/// An error reported by the API, either in the body or through the HTTP status.
///
/// `error` is the machine-readable code from the body (e.g.
/// `error_param`); it is empty when the status alone signalled failure, in
/// which case `message` holds the HTTP status text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The `error` code from the response body, if any.
    pub error: String,
    /// Human-readable description.
    pub message: String,
    /// The `request_id` from the response body, if any.
    pub request_id: Option<String>,
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.error.is_empty() {
            write!(f, "HTTP {}: {}", self.status, self.message)?;
        } else {
            write!(
                f,
                "shopee-{} [{}] (HTTP {})",
                self.error, self.message, self.status
            )?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " request_id={request_id}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ResponseError {}

/// Error returned when HTTP 429 persisted until the retry budget ran out.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Rate limited (retry after {retry_after}s): {response}")]
pub struct RateLimitError {
    /// The response that signalled the rate limit.
    pub response: ResponseError,
    /// Seconds the server asked to wait (`Retry-After`), `0` if absent.
    pub retry_after: f64,
}

/// Error returned when a response body could not be decoded.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Failed to decode response (HTTP {status}): {message}")]
pub struct ResponseDecodingError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The raw response body, for diagnostics.
    pub body: String,
    /// The decoder's error message.
    pub message: String,
}

/// Error returned when a request cannot be assembled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The path could not be resolved against the API URL.
    #[error("Invalid request path '{path}': {reason}")]
    InvalidPath {
        /// The path that was provided.
        path: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Query options did not serialize to a flat object.
    #[error("Unsupported query options: {reason}")]
    UnsupportedQuery {
        /// Why the options were rejected.
        reason: String,
    },

    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {reason}")]
    Serialization {
        /// The serializer's error message.
        reason: String,
    },

    /// A shop or merchant scope carried the ID `0`.
    #[error("Invalid {scope} scope: the account ID must be non-zero")]
    ZeroAccountId {
        /// `"shop"` or `"merchant"`.
        scope: &'static str,
    },

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for Shopee API calls.
///
/// Errors are returned exactly as classified: exhausting the retry budget on
/// a 429 yields [`ApiError::RateLimited`], on a 503
/// [`ApiError::ServiceUnavailable`], with no extra wrapping.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport failed to reach the server.
    #[error("Network error: {0}")]
    Connection(#[from] reqwest::Error),

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] ResponseDecodingError),

    /// HTTP 429, retry budget exhausted.
    #[error(transparent)]
    RateLimited(#[from] RateLimitError),

    /// HTTP 503, retry budget exhausted.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(ResponseError),

    /// Application-level error or non-retryable HTTP status.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The request could not be assembled.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// An upload file could not be read.
    #[error("Failed to read upload file: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// The HTTP status of the failed response, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Decode(e) => Some(e.status),
            Self::RateLimited(e) => Some(e.response.status),
            Self::ServiceUnavailable(e) | Self::Response(e) => Some(e.status),
            Self::Connection(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidRequest(_) | Self::Io(_) => None,
        }
    }

    /// The application error code (`error` field of the body), if any.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.response_error()
            .map(|e| e.error.as_str())
            .filter(|code| !code.is_empty())
    }

    /// The `request_id` reported by the server, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.response_error()
            .and_then(|e| e.request_id.as_deref())
    }

    /// Returns `true` for the classifications the executor retries.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited(_) | Self::ServiceUnavailable(_))
    }

    const fn response_error(&self) -> Option<&ResponseError> {
        match self {
            Self::RateLimited(e) => Some(&e.response),
            Self::ServiceUnavailable(e) | Self::Response(e) => Some(e),
            _ => None,
        }
    }
}
