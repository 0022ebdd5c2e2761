//! Shopee Open Platform API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the partner API requests are routed to.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Shopee Open Platform API version.
///
/// Every endpoint lives under `/api/{version}/`. Version 2 is the only
/// generally available version; `Custom` exists for future versions.
///
/// # Example
///
/// ```rust
/// use shopee_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.path_prefix(), "api/v2");
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// Open Platform API v2.
    #[default]
    V2,
    /// Custom version segment for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2
    }

    /// Returns the path prefix requests are resolved under, without slashes.
    #[must_use]
    pub fn path_prefix(&self) -> String {
        format!("api/{self}")
    }

    fn is_valid_segment(segment: &str) -> bool {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2 => f.write_str("v2"),
            Self::Custom(segment) => f.write_str(segment),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segment = s.trim().trim_matches('/');
        if !Self::is_valid_segment(segment) {
            return Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            });
        }

        match segment {
            "v2" => Ok(Self::V2),
            other => Ok(Self::Custom(other.to_string())),
        }
    }
}
