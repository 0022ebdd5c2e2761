//! HTTP client for Shopee API communication.
//!
//! This module provides the [`HttpClient`] type, which signs, sends and
//! retries requests against the Shopee Open Platform.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::signature::sign_now;
use crate::auth::RequestScope;
use crate::clients::errors::{ApiError, InvalidRequestError};
use crate::clients::http_request::{HttpRequest, RequestBody, UploadFile};
use crate::clients::http_response::{HttpResponse, ResponseOutcome};
use crate::config::ShopeeConfig;
use crate::error::ConfigError;

/// Wait applied before retrying a 429 that carried no usable `Retry-After`.
pub const RETRY_WAIT_TIME: Duration = Duration::from_secs(1);

/// Upper bound on a single rate-limit wait, whatever `Retry-After` asks for.
pub const MAX_RETRY_WAIT: Duration = Duration::from_secs(60);

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Shopee API.
///
/// The client handles:
/// - URL construction under the versioned API root
/// - Per-attempt signing: a fresh `timestamp` and `sign` for every attempt
/// - Identity parameters for the [`RequestScope`] passed to each call
/// - Retry logic for 429 and 503 responses, bounded by the configured tries
/// - Classification of body-level errors, including errors sent with HTTP 200
///
/// The client holds no per-call state, so a single instance can serve many
/// shops concurrently.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopee_api::clients::{HttpClient, HttpMethod, HttpRequest};
/// use shopee_api::RequestScope;
///
/// let client = HttpClient::new(config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "shop/get_shop_info")
///     .build()?;
/// let scope = RequestScope::shop(1234567, "access-token");
///
/// let info: serde_json::Value = client.request(&request, &scope).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Partner credentials and transport settings.
    config: ShopeeConfig,
    /// Versioned API root, always ending in `/` (e.g. `https://host/api/v2/`).
    base_url: Url,
    /// The `User-Agent` header value.
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client with a transport built from `config`.
    ///
    /// The transport uses rustls, the configured timeout and, if set, the
    /// configured proxy for all traffic.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProxy`] if the proxy URL is rejected and
    /// [`ConfigError::HttpTransport`] if the transport cannot be built.
    pub fn new(config: ShopeeConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .connect_timeout(config.timeout());

        if let Some(proxy) = config.proxy() {
            let proxy = reqwest::Proxy::all(proxy).map_err(|e| ConfigError::InvalidProxy {
                url: proxy.to_string(),
                reason: e.to_string(),
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| ConfigError::HttpTransport {
            reason: e.to_string(),
        })?;

        Self::with_http_client(config, client)
    }

    /// Creates a client around an existing `reqwest` client.
    ///
    /// The configured timeout and proxy are not applied; the supplied client
    /// is used as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the API URL and version do
    /// not form a valid URL.
    pub fn with_http_client(config: ShopeeConfig, client: reqwest::Client) -> Result<Self, ConfigError> {
        let root = format!(
            "{}/{}/",
            config.api_url().as_ref(),
            config.api_version().path_prefix()
        );
        let base_url = Url::parse(&root).map_err(|_| ConfigError::InvalidApiUrl { url: root })?;

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Shopee API Library v{SDK_VERSION} | Rust {rust_version}");

        Ok(Self {
            client,
            config,
            base_url,
            user_agent,
        })
    }

    /// Returns the configuration this client signs with.
    #[must_use]
    pub const fn config(&self) -> &ShopeeConfig {
        &self.config
    }

    /// Returns the versioned API root.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Sends a request on behalf of `scope` and decodes the body into `T`.
    ///
    /// Each attempt is signed with the current timestamp. HTTP 429 waits for
    /// `Retry-After` seconds (or [`RETRY_WAIT_TIME`] when absent, at most
    /// [`MAX_RETRY_WAIT`]) before the next attempt; HTTP 503 retries
    /// immediately. When the configured number of tries is spent the last
    /// classification is returned unchanged. A scope with a zero account ID
    /// is rejected before anything is sent.
    /// Connection errors are returned at once.
    ///
    /// Dropping the returned future cancels the call, including any pending
    /// retry wait.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] as classified for the final attempt, or
    /// [`ApiError::Decode`] if a successful body does not match `T`.
    pub async fn request<T>(&self, request: &HttpRequest, scope: &RequestScope) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        request.verify()?;
        verify_scope(scope)?;
        let (url, query) = request.resolve(&self.base_url)?;
        let body = self.prepare_body(request.body.as_ref())?;
        let tries = self.config.tries().max(1);

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            let attempt_url = self.signed_url(&url, &query, scope);

            tracing::debug!(
                method = %request.http_method,
                path = url.path(),
                attempt,
                "Sending request to Shopee API"
            );

            let mut req_builder = self
                .client
                .request(request.http_method.as_reqwest(), attempt_url)
                .header(USER_AGENT, &self.user_agent)
                .header(ACCEPT, "application/json");

            req_builder = match &body {
                Some(PreparedBody::Json(bytes)) => {
                    tracing::debug!(body = %String::from_utf8_lossy(bytes), "SENT");
                    req_builder
                        .header(CONTENT_TYPE, "application/json")
                        .body(bytes.clone())
                }
                Some(PreparedBody::Multipart(upload)) => req_builder.multipart(upload.to_form()),
                None => req_builder,
            };

            let response = HttpResponse::from_reqwest(req_builder.send().await?).await?;
            tracing::debug!(status = response.code, body = %response.body, "RECV");

            match response.classify() {
                ResponseOutcome::Success(value) => {
                    return serde_json::from_value(value)
                        .map_err(|e| response.decoding_error(&e).into());
                }
                ResponseOutcome::RateLimited(error) => {
                    if attempt >= tries {
                        tracing::warn!(path = url.path(), tries, "Rate limited, retries exhausted");
                        return Err(error.into());
                    }
                    let wait = retry_delay(error.retry_after);
                    tracing::warn!(
                        path = url.path(),
                        attempt,
                        wait_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX),
                        "Rate limited, retrying"
                    );
                    tokio::time::sleep(wait).await;
                }
                ResponseOutcome::ServiceUnavailable(error) => {
                    if attempt >= tries {
                        tracing::warn!(
                            path = url.path(),
                            tries,
                            "Service unavailable, retries exhausted"
                        );
                        return Err(ApiError::ServiceUnavailable(error));
                    }
                    tracing::warn!(path = url.path(), attempt, "Service unavailable, retrying");
                }
                ResponseOutcome::Failed(error) => return Err(error),
            }
        }
    }

    /// Serializes the body once; JSON objects get the partner ID added.
    fn prepare_body<'a>(&self, body: Option<&'a RequestBody>) -> Result<Option<PreparedBody<'a>>, ApiError> {
        let Some(body) = body else {
            return Ok(None);
        };

        match body {
            RequestBody::Json(value) => {
                let mut value = value.clone();
                if let Value::Object(fields) = &mut value {
                    fields.insert(
                        "partner_id".to_string(),
                        Value::from(self.config.partner_id().get()),
                    );
                }
                let bytes = serde_json::to_vec(&value).map_err(|e| {
                    InvalidRequestError::Serialization {
                        reason: e.to_string(),
                    }
                })?;
                Ok(Some(PreparedBody::Json(bytes)))
            }
            RequestBody::Multipart(upload) => Ok(Some(PreparedBody::Multipart(upload))),
        }
    }

    /// Builds the URL for one attempt: merged query plus fresh identity parameters.
    fn signed_url(&self, url: &Url, query: &BTreeMap<String, String>, scope: &RequestScope) -> Url {
        let signature = sign_now(
            self.config.partner_id(),
            self.config.partner_key(),
            url.path(),
            scope,
        );

        let mut params = query.clone();
        params.insert(
            "partner_id".to_string(),
            self.config.partner_id().to_string(),
        );
        params.insert("timestamp".to_string(), signature.timestamp.to_string());
        params.insert("sign".to_string(), signature.sign);
        for (key, value) in scope.query_params() {
            params.insert(key.to_string(), value);
        }

        let mut signed = url.clone();
        signed.query_pairs_mut().clear().extend_pairs(&params);
        signed
    }
}

enum PreparedBody<'a> {
    Json(Vec<u8>),
    Multipart(&'a UploadFile),
}

fn retry_delay(retry_after: f64) -> Duration {
    if retry_after > 0.0 {
        Duration::try_from_secs_f64(retry_after)
            .map_or(RETRY_WAIT_TIME, |wait| wait.min(MAX_RETRY_WAIT))
    } else {
        RETRY_WAIT_TIME
    }
}

fn verify_scope(scope: &RequestScope) -> Result<(), InvalidRequestError> {
    match scope {
        RequestScope::Shop { shop_id: 0, .. } => {
            Err(InvalidRequestError::ZeroAccountId { scope: "shop" })
        }
        RequestScope::Merchant { merchant_id: 0, .. } => {
            Err(InvalidRequestError::ZeroAccountId { scope: "merchant" })
        }
        _ => Ok(()),
    }
}
