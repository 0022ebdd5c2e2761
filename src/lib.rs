//! # Shopee API Rust SDK
//!
//! A Rust client for the Shopee Open Platform partner API (v2), providing
//! type-safe configuration, request signing, retry handling and typed
//! resource services.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ShopeeConfig`] and [`ShopeeConfigBuilder`]
//! - Validated newtypes for partner credentials and URLs
//! - HMAC-SHA256 request signing via [`auth::signature`]
//! - Per-call identity scoping with [`RequestScope`]
//! - Token exchange and refresh producing a [`Session`]
//! - An async HTTP pipeline with rate limit and availability retries
//! - Typed services for shop, merchant, product, discount, logistics, order
//!   and media space endpoints
//!
//! ## Quick Start
//!
//! ```rust
//! use shopee_api::{HostUrl, PartnerId, PartnerKey, ShopeeConfig};
//!
//! let config = ShopeeConfig::builder()
//!     .partner_id(PartnerId::new(2001887).unwrap())
//!     .partner_key(PartnerKey::new("your-partner-key").unwrap())
//!     .api_url(HostUrl::sandbox())
//!     .tries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.partner_id().get(), 2001887);
//! ```
//!
//! ## Authorizing a Shop
//!
//! ```rust,ignore
//! use shopee_api::{AuthTarget, ShopeeClient};
//!
//! let client = ShopeeClient::new(config)?;
//!
//! // `code` and `shop_id` arrive on the partner's redirect URL
//! let session = client
//!     .auth()
//!     .session_from_code(&code, AuthTarget::Shop(shop_id))
//!     .await?;
//!
//! // Refresh before the access token expires
//! let session = client.auth().refresh_session(&session).await?;
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use shopee_api::RequestScope;
//!
//! let scope = RequestScope::shop(shop_id, &session.access_token);
//!
//! let info = client.shop().get_shop_info(&scope).await?;
//! let orders = client
//!     .order()
//!     .get_order_detail(&["201214JAJXU6G7"], &[], &scope)
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **No stored identity**: the shop or merchant a call acts for is an argument
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AuthTarget, RequestScope, Session};
pub use config::{ApiVersion, HostUrl, PartnerId, PartnerKey, ShopeeConfig, ShopeeConfigBuilder};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ApiError, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidRequestError, RateLimitError, ResponseDecodingError, ResponseError, ShopeeClient,
};

// Re-export response envelope types
pub use rest::{ApiResponse, BaseResponse};
