//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around raw values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated Shopee partner ID.
///
/// Partner IDs are issued by the Shopee Open Platform and are always non-zero.
///
/// # Example
///
/// ```rust
/// use shopee_api::PartnerId;
///
/// let id = PartnerId::new(2001887).unwrap();
/// assert_eq!(id.get(), 2001887);
/// assert_eq!(id.to_string(), "2001887");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PartnerId(u64);

impl PartnerId {
    /// Creates a new validated partner ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPartnerId`] if `id` is zero.
    pub const fn new(id: u64) -> Result<Self, ConfigError> {
        if id == 0 {
            return Err(ConfigError::ZeroPartnerId);
        }
        Ok(Self(id))
    }

    /// Returns the raw numeric ID.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PartnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PartnerId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::ZeroPartnerId)?;
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for PartnerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        Self::new(id).map_err(de::Error::custom)
    }
}

/// A validated Shopee partner key (the HMAC signing secret).
///
/// This newtype ensures the key is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use shopee_api::PartnerKey;
///
/// let key = PartnerKey::new("my-partner-key").unwrap();
/// assert_eq!(format!("{:?}", key), "PartnerKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PartnerKey(String);

impl PartnerKey {
    /// Creates a new validated partner key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPartnerKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyPartnerKey);
        }
        Ok(Self(key))
    }

    /// Returns the key as raw bytes, as used for the HMAC key.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<str> for PartnerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PartnerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PartnerKey(*****)")
    }
}

/// A validated absolute URL, used for the API host and the OAuth redirect.
///
/// Only `http` and `https` URLs with a host are accepted. A trailing slash is
/// ignored so that `https://host` and `https://host/` are equal.
///
/// # Example
///
/// ```rust
/// use shopee_api::HostUrl;
///
/// let url = HostUrl::new("https://partner.shopeemobile.com").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("partner.shopeemobile.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(Url);

impl HostUrl {
    /// Production host of the Shopee Open Platform.
    pub const PRODUCTION: &'static str = "https://partner.shopeemobile.com";

    /// Sandbox host of the Shopee Open Platform.
    pub const SANDBOX: &'static str = "https://partner.test-stable.shopeemobile.com";

    /// Creates a new validated URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL cannot be parsed, is
    /// not `http(s)`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let trimmed = raw.trim();
        let invalid = || ConfigError::InvalidApiUrl { url: raw.clone() };

        let parsed = Url::parse(trimmed).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(invalid());
        }

        Ok(Self(parsed))
    }

    /// The production API host.
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub fn production() -> Self {
        Self(Url::parse(Self::PRODUCTION).expect("production URL is valid"))
    }

    /// The sandbox API host.
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub fn sandbox() -> Self {
        Self(Url::parse(Self::SANDBOX).expect("sandbox URL is valid"))
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl Serialize for HostUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> Deserialize<'de> for HostUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
