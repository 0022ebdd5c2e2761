//! Configuration types for the Shopee API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for communication with the Shopee Open Platform.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ShopeeConfig`]: The partner credentials plus transport settings
//! - [`ShopeeConfigBuilder`]: A builder for constructing [`ShopeeConfig`] instances
//! - [`PartnerId`]: A validated, non-zero partner ID
//! - [`PartnerKey`]: A validated partner key with masked debug output
//! - [`HostUrl`]: A validated API or redirect URL
//! - [`ApiVersion`]: The API version requests are routed to
//!
//! # Example
//!
//! ```rust
//! use shopee_api::{ShopeeConfig, PartnerId, PartnerKey, HostUrl};
//!
//! let config = ShopeeConfig::builder()
//!     .partner_id(PartnerId::new(2001887).unwrap())
//!     .partner_key(PartnerKey::new("my-partner-key").unwrap())
//!     .api_url(HostUrl::sandbox())
//!     .tries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.tries(), 3);
//! ```

mod newtypes;
mod version;

pub use newtypes::{HostUrl, PartnerId, PartnerKey};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Default connect/read timeout for the HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable holding the partner ID.
pub const ENV_PARTNER_ID: &str = "SHOPEE_PARTNER_ID";
/// Environment variable holding the partner key.
pub const ENV_PARTNER_KEY: &str = "SHOPEE_PARTNER_KEY";
/// Environment variable holding the OAuth redirect URL.
pub const ENV_REDIRECT_URL: &str = "SHOPEE_REDIRECT_URL";
/// Environment variable holding the API host URL.
pub const ENV_API_URL: &str = "SHOPEE_API_URL";

/// Configuration for the Shopee API SDK.
///
/// Holds the partner credentials, which never change for the lifetime of a
/// client, plus transport settings such as the retry budget and timeout.
///
/// # Thread Safety
///
/// `ShopeeConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ShopeeConfig {
    partner_id: PartnerId,
    partner_key: PartnerKey,
    api_url: HostUrl,
    redirect_url: Option<HostUrl>,
    api_version: ApiVersion,
    tries: u32,
    timeout: Duration,
    proxy: Option<String>,
    user_agent_prefix: Option<String>,
}

impl ShopeeConfig {
    /// Creates a new builder for constructing a `ShopeeConfig`.
    #[must_use]
    pub fn builder() -> ShopeeConfigBuilder {
        ShopeeConfigBuilder::new()
    }

    /// Builds a configuration from the `SHOPEE_*` environment variables.
    ///
    /// `SHOPEE_PARTNER_ID` and `SHOPEE_PARTNER_KEY` are required;
    /// `SHOPEE_API_URL` defaults to the production host and
    /// `SHOPEE_REDIRECT_URL` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvironment`] if a required variable is
    /// missing or unparseable, or the validation error of a malformed URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let partner_id = lookup(ENV_PARTNER_ID)
            .and_then(|value| value.parse::<PartnerId>().ok())
            .ok_or(ConfigError::InvalidEnvironment {
                name: ENV_PARTNER_ID,
            })?;
        let partner_key = lookup(ENV_PARTNER_KEY)
            .and_then(|value| PartnerKey::new(value).ok())
            .ok_or(ConfigError::InvalidEnvironment {
                name: ENV_PARTNER_KEY,
            })?;

        let mut builder = Self::builder()
            .partner_id(partner_id)
            .partner_key(partner_key);

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            builder = builder.api_url(HostUrl::new(url)?);
        }
        if let Some(url) = lookup(ENV_REDIRECT_URL).filter(|v| !v.trim().is_empty()) {
            builder = builder.redirect_url(HostUrl::new(url)?);
        }

        builder.build()
    }

    /// Returns the partner ID.
    #[must_use]
    pub const fn partner_id(&self) -> PartnerId {
        self.partner_id
    }

    /// Returns the partner key.
    #[must_use]
    pub const fn partner_key(&self) -> &PartnerKey {
        &self.partner_key
    }

    /// Returns the API host URL.
    #[must_use]
    pub const fn api_url(&self) -> &HostUrl {
        &self.api_url
    }

    /// Returns the OAuth redirect URL, if configured.
    #[must_use]
    pub const fn redirect_url(&self) -> Option<&HostUrl> {
        self.redirect_url.as_ref()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the total number of attempts per logical call (at least 1).
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the HTTP connect/read timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the proxy URL, if configured.
    #[must_use]
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ShopeeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopeeConfig>();
};

/// Builder for constructing [`ShopeeConfig`] instances.
///
/// Required fields are `partner_id` and `partner_key`.
///
/// # Defaults
///
/// - `api_url`: [`HostUrl::production()`]
/// - `api_version`: [`ApiVersion::V2`]
/// - `tries`: `1` (no retries)
/// - `timeout`: 10 seconds
/// - `redirect_url`, `proxy`, `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ShopeeConfigBuilder {
    partner_id: Option<PartnerId>,
    partner_key: Option<PartnerKey>,
    api_url: Option<HostUrl>,
    redirect_url: Option<HostUrl>,
    api_version: Option<ApiVersion>,
    tries: Option<u32>,
    timeout: Option<Duration>,
    proxy: Option<String>,
    user_agent_prefix: Option<String>,
}

impl ShopeeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the partner ID (required).
    #[must_use]
    pub const fn partner_id(mut self, id: PartnerId) -> Self {
        self.partner_id = Some(id);
        self
    }

    /// Sets the partner key (required).
    #[must_use]
    pub fn partner_key(mut self, key: PartnerKey) -> Self {
        self.partner_key = Some(key);
        self
    }

    /// Sets the API host URL.
    #[must_use]
    pub fn api_url(mut self, url: HostUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the OAuth redirect URL.
    #[must_use]
    pub fn redirect_url(mut self, url: HostUrl) -> Self {
        self.redirect_url = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the total number of attempts per logical call, including the first.
    ///
    /// `0` is treated as `1`. Retries only happen for HTTP 429 and 503.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Sets the HTTP connect/read timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Routes all requests through the given proxy URL.
    #[must_use]
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ShopeeConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `partner_id` or
    /// `partner_key` are not set.
    pub fn build(self) -> Result<ShopeeConfig, ConfigError> {
        let partner_id = self.partner_id.ok_or(ConfigError::MissingRequiredField {
            field: "partner_id",
        })?;
        let partner_key = self
            .partner_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "partner_key",
            })?;

        Ok(ShopeeConfig {
            partner_id,
            partner_key,
            api_url: self.api_url.unwrap_or_else(HostUrl::production),
            redirect_url: self.redirect_url,
            api_version: self.api_version.unwrap_or_default(),
            tries: self.tries.unwrap_or(1).max(1),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            proxy: self.proxy,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
