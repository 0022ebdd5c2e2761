//! Session management for Shopee API authentication.
//!
//! This module provides the [`Session`] type, the result of exchanging an
//! authorization code for an access token. A session turns into explicit
//! per-call [`RequestScope`] values; it is never stored on the client.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::RequestScope;
use crate::rest::resources::v2::{AccessTokenResponse, RefreshAccessTokenResponse};

/// The account an authorization code or refresh token belongs to.
///
/// Shops authorize individually; cross-border sellers authorize through a
/// main account that owns several shops and merchants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthTarget {
    /// A single shop, sent as `shop_id`.
    Shop(u64),
    /// A main account, sent as `main_account_id`.
    MainAccount(u64),
}

/// An authenticated session for Shopee API calls.
///
/// # Example
///
/// ```rust
/// use shopee_api::auth::{AuthTarget, Session};
///
/// let session = Session::new(AuthTarget::Shop(1234567), "access", "refresh", None);
/// assert!(session.is_active());
/// assert_eq!(session.default_scope().unwrap().shop_id(), Some(1234567));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    /// The account the session was issued for.
    pub target: AuthTarget,

    /// The access token for API authentication.
    pub access_token: String,

    /// The token used to obtain a new access token.
    pub refresh_token: String,

    /// When the access token expires, if known.
    pub expires: Option<DateTime<Utc>>,

    /// Shops reachable with this token (main-account sessions).
    #[serde(default)]
    pub shop_ids: Vec<u64>,

    /// Merchants reachable with this token (main-account sessions).
    #[serde(default)]
    pub merchant_ids: Vec<u64>,
}

impl Session {
    /// Creates a new session with the specified parameters.
    #[must_use]
    pub fn new(
        target: AuthTarget,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            target,
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires,
            shop_ids: Vec::new(),
            merchant_ids: Vec::new(),
        }
    }

    /// Builds a session from an `auth/token/get` response.
    #[must_use]
    pub fn from_token_response(target: AuthTarget, response: &AccessTokenResponse) -> Self {
        Self {
            target,
            access_token: response.access_token.clone(),
            refresh_token: response.refresh_token.clone(),
            expires: expiry_from_now(response.expire_in),
            shop_ids: response.shop_id_list.clone(),
            merchant_ids: response.merchant_id_list.clone(),
        }
    }

    /// Returns a copy of this session with the tokens from an
    /// `auth/access_token/get` response.
    #[must_use]
    pub fn refreshed(&self, response: &RefreshAccessTokenResponse) -> Self {
        Self {
            access_token: response.access_token.clone(),
            refresh_token: response.refresh_token.clone(),
            expires: expiry_from_now(response.expire_in),
            ..self.clone()
        }
    }

    /// The natural scope of the session: shop scope for shop sessions,
    /// `None` for main-account sessions, which must pick a shop or merchant.
    #[must_use]
    pub fn default_scope(&self) -> Option<RequestScope> {
        match self.target {
            AuthTarget::Shop(shop_id) => Some(self.shop_scope(shop_id)),
            AuthTarget::MainAccount(_) => None,
        }
    }

    /// Scope for calls on behalf of `shop_id` using this session's token.
    #[must_use]
    pub fn shop_scope(&self, shop_id: u64) -> RequestScope {
        RequestScope::shop(shop_id, self.access_token.clone())
    }

    /// Scope for calls on behalf of `merchant_id` using this session's token.
    #[must_use]
    pub fn merchant_scope(&self, merchant_id: u64) -> RequestScope {
        RequestScope::merchant(merchant_id, self.access_token.clone())
    }

    /// Returns `true` if this session has expired.
    ///
    /// Sessions without an expiration time are considered never expired.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires.is_some_and(|expires| Utc::now() > expires)
    }

    /// Returns `true` if the token expires within `margin` from now.
    #[must_use]
    pub fn expires_within(&self, margin: Duration) -> bool {
        self.expires
            .is_some_and(|expires| Utc::now() + margin > expires)
    }

    /// Returns `true` if this session is active (not expired and has access token).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.access_token.is_empty() && !self.expired()
    }
}

fn expiry_from_now(expire_in: i64) -> Option<DateTime<Utc>> {
    (expire_in > 0).then(|| Utc::now() + Duration::seconds(expire_in))
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
