//! Error types for the Shopee API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors. Errors raised while talking to the API live in
//! [`crate::clients::ApiError`].
//!
//! # Example
//!
//! ```rust
//! use shopee_api::{PartnerKey, ConfigError};
//!
//! let result = PartnerKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyPartnerKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Partner ID cannot be zero.
    #[error("Partner ID cannot be zero. Please provide the partner ID issued by the Shopee Open Platform.")]
    ZeroPartnerId,

    /// Partner key cannot be empty.
    #[error("Partner key cannot be empty. Please provide a valid Shopee partner key.")]
    EmptyPartnerKey,

    /// API URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://partner.shopeemobile.com').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected a single path segment such as 'v2'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Proxy URL could not be used by the HTTP transport.
    #[error("Invalid proxy URL '{url}': {reason}")]
    InvalidProxy {
        /// The proxy URL that was provided.
        url: String,
        /// Why the transport rejected it.
        reason: String,
    },

    /// The HTTP transport could not be constructed.
    #[error("Failed to build HTTP transport: {reason}")]
    HttpTransport {
        /// The underlying transport error message.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// An environment variable is missing or malformed.
    #[error("Environment variable '{name}' is missing or invalid.")]
    InvalidEnvironment {
        /// The variable name.
        name: &'static str,
    },
}
