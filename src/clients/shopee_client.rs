//! The Shopee partner API client.
//!
//! This module provides the [`ShopeeClient`] type, the verb-oriented façade
//! (`get`, `post`, `put`, `delete`, `upload`) every resource service goes
//! through.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::RequestScope;
use crate::clients::errors::{ApiError, InvalidRequestError};
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{query_from_options, HttpMethod, HttpRequest, UploadFile};
use crate::config::ShopeeConfig;
use crate::error::ConfigError;
use crate::rest::resources::v2::{
    AuthApi, DiscountApi, LogisticsApi, MediaSpaceApi, MerchantApi, OrderApi, ProductApi, ShopApi,
};

/// Client for the Shopee Open Platform partner API.
///
/// The client owns the partner credentials and the connection pool. The
/// identity a call acts on behalf of is passed to every call as a
/// [`RequestScope`] and is never stored, so one client can be shared by any
/// number of tasks serving different shops.
///
/// # Thread Safety
///
/// `ShopeeClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopee_api::{PartnerId, PartnerKey, RequestScope, ShopeeClient, ShopeeConfig};
///
/// let config = ShopeeConfig::builder()
///     .partner_id(PartnerId::new(2001887)?)
///     .partner_key(PartnerKey::new("partner-key")?)
///     .tries(3)
///     .build()?;
/// let client = ShopeeClient::new(config)?;
///
/// let scope = RequestScope::shop(1234567, "access-token");
/// let info = client.shop().get_shop_info(&scope).await?;
/// println!("{}", info.shop_name);
///
/// // Or go through the verbs directly
/// let raw: serde_json::Value = client
///     .get("product/get_category", &serde_json::json!({"language": "en"}), &scope)
///     .await?;
/// ```
#[derive(Debug)]
pub struct ShopeeClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify ShopeeClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopeeClient>();
};

impl ShopeeClient {
    /// Creates a new client, building the HTTP transport from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the proxy, API URL or transport are invalid.
    pub fn new(config: ShopeeConfig) -> Result<Self, ConfigError> {
        let http_client = HttpClient::new(config)?;
        tracing::debug!(
            base_url = %http_client.base_url(),
            tries = http_client.config().tries(),
            "Created Shopee client"
        );
        Ok(Self { http_client })
    }

    /// Creates a new client around an existing `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the API URL and version do
    /// not form a valid URL.
    pub fn with_http_client(config: ShopeeConfig, client: reqwest::Client) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::with_http_client(config, client)?,
        })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ShopeeConfig {
        self.http_client.config()
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request.
    ///
    /// `options` is any value serializing to a flat object (use `&()` for
    /// none); its fields become query parameters and override parameters
    /// already present in `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for assembly, transport, classification or
    /// decoding failures.
    pub async fn get<T, Q>(&self, path: &str, options: &Q, scope: &RequestScope) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(query_from_options(options)?)
            .build()?;
        self.http_client.request(&request, scope).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for assembly, transport, classification or
    /// decoding failures.
    pub async fn post<T, B>(&self, path: &str, body: &B, scope: &RequestScope) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(HttpMethod::Post, path, body, scope).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for assembly, transport, classification or
    /// decoding failures.
    pub async fn put<T, B>(&self, path: &str, body: &B, scope: &RequestScope) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(HttpMethod::Put, path, body, scope).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for assembly, transport, classification or
    /// decoding failures.
    pub async fn delete<T>(&self, path: &str, scope: &RequestScope) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.http_client.request(&request, scope).await
    }

    /// Uploads `file_path` as the multipart field `field_name`.
    ///
    /// The file is read once before the first attempt; the form is rebuilt
    /// for every attempt and goes through the same signing and retry path as
    /// other calls.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the file cannot be read, otherwise as for
    /// other calls.
    pub async fn upload<T>(
        &self,
        path: &str,
        field_name: &str,
        file_path: impl AsRef<Path>,
        scope: &RequestScope,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let file = UploadFile::from_path(field_name, file_path).await?;
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .upload(file)
            .build()?;
        self.http_client.request(&request, scope).await
    }

    async fn send_json<T, B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
        scope: &RequestScope,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(|e| InvalidRequestError::Serialization {
            reason: e.to_string(),
        })?;
        let request = HttpRequest::builder(method, path).json(body).build()?;
        self.http_client.request(&request, scope).await
    }

    /// Token exchange and refresh.
    #[must_use]
    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Shop information.
    #[must_use]
    pub const fn shop(&self) -> ShopApi<'_> {
        ShopApi::new(self)
    }

    /// Merchant (main account) operations.
    #[must_use]
    pub const fn merchant(&self) -> MerchantApi<'_> {
        MerchantApi::new(self)
    }

    /// Product catalog.
    #[must_use]
    pub const fn product(&self) -> ProductApi<'_> {
        ProductApi::new(self)
    }

    /// Discount campaigns.
    #[must_use]
    pub const fn discount(&self) -> DiscountApi<'_> {
        DiscountApi::new(self)
    }

    /// Logistics channels.
    #[must_use]
    pub const fn logistics(&self) -> LogisticsApi<'_> {
        LogisticsApi::new(self)
    }

    /// Orders.
    #[must_use]
    pub const fn order(&self) -> OrderApi<'_> {
        OrderApi::new(self)
    }

    /// Media space uploads.
    #[must_use]
    pub const fn media_space(&self) -> MediaSpaceApi<'_> {
        MediaSpaceApi::new(self)
    }
}
