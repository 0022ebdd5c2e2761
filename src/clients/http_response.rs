//! HTTP response types for the Shopee API SDK.
//!
//! This module provides the [`HttpResponse`] type and the classifier that
//! maps a raw response onto a [`ResponseOutcome`].
//!
//! The Shopee API reports application errors in the body, often with
//! HTTP 200, so the status code alone never decides success:
//!
//! | Status | Body                          | Outcome                        |
//! |--------|-------------------------------|--------------------------------|
//! | 2xx    | empty                         | `Success(Value::Null)`         |
//! | 2xx    | valid JSON, empty `error`     | [`ResponseOutcome::Success`]   |
//! | 2xx    | valid JSON, non-empty `error` | `Failed(ApiError::Response)`   |
//! | 2xx    | invalid JSON                  | `Failed(ApiError::Decode)`     |
//! | 429    | any                           | [`ResponseOutcome::RateLimited`] |
//! | 503    | any                           | [`ResponseOutcome::ServiceUnavailable`] |
//! | other  | any                           | `Failed(ApiError::Response)`   |

use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use serde_json::Value;

use crate::clients::errors::{ApiError, RateLimitError, ResponseDecodingError, ResponseError};

/// A response received from the API, with the body read into memory.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Parsed `Retry-After` header in seconds, if present and valid.
    pub retry_request_after: Option<f64>,
    /// The raw response body.
    pub body: String,
}

/// The classification of a single response.
#[derive(Debug)]
pub enum ResponseOutcome {
    /// The call succeeded; holds the parsed body.
    Success(Value),
    /// HTTP 429. Retryable.
    RateLimited(RateLimitError),
    /// HTTP 503. Retryable.
    ServiceUnavailable(ResponseError),
    /// A terminal failure.
    Failed(ApiError),
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(code: u16, headers: &HeaderMap, body: impl Into<String>) -> Self {
        let retry_request_after = headers
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_retry_after);

        Self {
            code,
            retry_request_after,
            body: body.into(),
        }
    }

    /// Reads a `reqwest` response to completion.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Connection`] if the body cannot be read.
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self, ApiError> {
        let code = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self::new(code, &headers, body))
    }

    /// Returns `true` if the status code is 2xx.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Classifies this response.
    #[must_use]
    pub fn classify(&self) -> ResponseOutcome {
        if self.is_ok() && self.body.trim().is_empty() {
            return ResponseOutcome::Success(Value::Null);
        }

        let parsed: Result<Value, _> = serde_json::from_str(&self.body);

        if self.is_ok() {
            return match parsed {
                Err(e) => ResponseOutcome::Failed(self.decoding_error(&e).into()),
                Ok(body) => match error_code(&body) {
                    Some(code) => ResponseOutcome::Failed(ApiError::Response(ResponseError {
                        status: self.code,
                        error: code.to_string(),
                        message: string_field(&body, "message").unwrap_or_default().to_string(),
                        request_id: string_field(&body, "request_id").map(String::from),
                    })),
                    None => ResponseOutcome::Success(body),
                },
            };
        }

        let body = parsed.ok();
        let body = body.as_ref();
        let error = ResponseError {
            status: self.code,
            error: body.and_then(error_code).unwrap_or_default().to_string(),
            message: body
                .and_then(|b| string_field(b, "message"))
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| status_text(self.code))
                .to_string(),
            request_id: body
                .and_then(|b| string_field(b, "request_id"))
                .map(String::from),
        };

        match self.code {
            429 => ResponseOutcome::RateLimited(RateLimitError {
                response: error,
                retry_after: self.retry_request_after.unwrap_or(0.0),
            }),
            503 => ResponseOutcome::ServiceUnavailable(error),
            _ => ResponseOutcome::Failed(ApiError::Response(error)),
        }
    }

    /// Builds the decode error for this response's body.
    pub(crate) fn decoding_error(&self, error: &serde_json::Error) -> ResponseDecodingError {
        ResponseDecodingError {
            status: self.code,
            body: self.body.clone(),
            message: error.to_string(),
        }
    }
}

/// Parses a `Retry-After` value given in (possibly fractional) seconds.
///
/// HTTP-date values, negative numbers and values too large for a
/// [`Duration`] yield `None`.
#[must_use]
pub fn parse_retry_after(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| *secs >= 0.0 && Duration::try_from_secs_f64(*secs).is_ok())
}

fn string_field<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str)
}

fn error_code(body: &Value) -> Option<&str> {
    string_field(body, "error").filter(|code| !code.is_empty())
}

fn status_text(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("Unknown Status")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn response(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(code, &HeaderMap::new(), body)
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        assert!(response(200, "{}").is_ok());
        assert!(response(204, "").is_ok());
        assert!(!response(404, "{}").is_ok());
        assert!(!response(503, "{}").is_ok());
    }

    #[test]
    fn test_success_with_empty_error_field() {
        let outcome = response(200, r#"{"error":"","message":"","response":{"x":1}}"#).classify();
        match outcome {
            ResponseOutcome::Success(body) => assert_eq!(body["response"]["x"], 1),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn test_http_200_with_error_is_application_error() {
        let outcome = response(
            200,
            r#"{"error":"error_x","message":"bad thing","request_id":"r-1"}"#,
        )
        .classify();

        match outcome {
            ResponseOutcome::Failed(ApiError::Response(e)) => {
                assert_eq!(e.status, 200);
                assert_eq!(e.error, "error_x");
                assert_eq!(e.message, "bad thing");
                assert_eq!(e.request_id.as_deref(), Some("r-1"));
            }
            other => panic!("expected application error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_success_body_is_null() {
        for body in ["", "  \n"] {
            match response(200, body).classify() {
                ResponseOutcome::Success(value) => assert!(value.is_null()),
                other => panic!("expected success, got {other:?}"),
            }
        }
        assert!(matches!(
            response(204, "").classify(),
            ResponseOutcome::Success(Value::Null)
        ));
    }

    #[test]
    fn test_unrepresentable_retry_after_is_ignored() {
        assert_eq!(parse_retry_after("1e300"), None);
        assert_eq!(parse_retry_after("inf"), None);
        assert_eq!(parse_retry_after("NaN"), None);
        assert_eq!(parse_retry_after("-1"), None);
        assert_eq!(parse_retry_after(" 0.5 "), Some(0.5));
    }

    #[test]
    fn test_invalid_json_on_success_is_decode_error() {
        match response(200, "<html>oops</html>").classify() {
            ResponseOutcome::Failed(ApiError::Decode(e)) => {
                assert_eq!(e.status, 200);
                assert_eq!(e.body, "<html>oops</html>");
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_error_status_uses_status_text() {
        match response(404, "not here").classify() {
            ResponseOutcome::Failed(ApiError::Response(e)) => {
                assert_eq!(e.status, 404);
                assert!(e.error.is_empty());
                assert_eq!(e.message, "Not Found");
            }
            other => panic!("expected response error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_status_prefers_body_message() {
        match response(403, r#"{"error":"error_auth","message":"no permission"}"#).classify() {
            ResponseOutcome::Failed(ApiError::Response(e)) => {
                assert_eq!(e.error, "error_auth");
                assert_eq!(e.message, "no permission");
            }
            other => panic!("expected response error, got {other:?}"),
        }
    }

    #[test]
    fn test_503_is_service_unavailable() {
        match response(503, "").classify() {
            ResponseOutcome::ServiceUnavailable(e) => {
                assert_eq!(e.status, 503);
                assert_eq!(e.message, "Service Unavailable");
            }
            other => panic!("expected service unavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_429_carries_retry_after() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("2.5"));
        let outcome = HttpResponse::new(429, &headers, "{}").classify();

        match outcome {
            ResponseOutcome::RateLimited(e) => {
                assert!((e.retry_after - 2.5).abs() < f64::EPSILON);
                assert_eq!(e.response.status, 429);
            }
            other => panic!("expected rate limit, got {other:?}"),
        }
    }

    #[test]
    fn test_429_without_retry_after_defaults_to_zero() {
        match response(429, "").classify() {
            ResponseOutcome::RateLimited(e) => assert!(e.retry_after.abs() < f64::EPSILON),
            other => panic!("expected rate limit, got {other:?}"),
        }
    }

    #[test]
    fn test_retry_after_parsing() {
        assert_eq!(parse_retry_after("2"), Some(2.0));
        assert_eq!(parse_retry_after(" 0.5 "), Some(0.5));
        assert_eq!(parse_retry_after("-1"), None);
        assert_eq!(parse_retry_after("Wed, 21 Oct 2015 07:28:00 GMT"), None);
        assert_eq!(parse_retry_after("inf"), None);
    }
}
