//! HTTP client layer for the Shopee partner API.
//!
//! Every call goes through one pipeline: assemble the URL and query, inject
//! the partner identity and a fresh signature, send, classify the response,
//! and retry transient failures.
//!
//! # Overview
//!
//! - [`ShopeeClient`]: the public entry point with verb methods and resource
//!   service accessors
//! - [`HttpClient`]: the signing and retry loop around `reqwest`
//! - [`HttpRequest`]: a method, a relative path, query options and a body
//! - [`HttpResponse`]: a received response and its classification
//! - [`ApiError`]: every failure a call can produce
//!
//! # Retry Behavior
//!
//! `tries` in [`ShopeeConfig`](crate::ShopeeConfig) is the total number of
//! attempts:
//!
//! - **429 (Rate Limited)**: waits for `Retry-After` (fractional seconds),
//!   or [`RETRY_WAIT_TIME`] when the header is absent, capped at
//!   [`MAX_RETRY_WAIT`]
//! - **503 (Service Unavailable)**: retries immediately
//! - **Anything else**: returned without retry
//!
//! When attempts run out the last classified error is returned as is.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod shopee_client;

pub use errors::{
    ApiError, InvalidRequestError, RateLimitError, ResponseDecodingError, ResponseError,
};
pub use http_client::{HttpClient, MAX_RETRY_WAIT, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{
    query_from_options, HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody, UploadFile,
};
pub use http_response::{parse_retry_after, HttpResponse, ResponseOutcome};
pub use shopee_client::ShopeeClient;
