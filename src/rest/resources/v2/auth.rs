//! Token exchange and refresh.
//!
//! Both endpoints are public (partner-signed only). The account the token is
//! issued for travels in the JSON body as `shop_id` or `main_account_id`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopee_api::auth::AuthTarget;
//!
//! // After the seller authorizes, the redirect carries `code` and `shop_id`
//! let session = client.auth().session_from_code(&code, AuthTarget::Shop(shop_id)).await?;
//!
//! // Later, before the access token expires
//! let session = client.auth().refresh_session(&session).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::auth::{AuthTarget, RequestScope, Session};
use crate::clients::ApiError;
use crate::rest::BaseResponse;
use crate::ShopeeClient;

/// Response of `auth/token/get`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessTokenResponse {
    /// The envelope fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Access token, valid for `expire_in` seconds.
    pub access_token: String,
    /// Token used to obtain the next access token.
    pub refresh_token: String,
    /// Lifetime of the access token in seconds.
    pub expire_in: i64,
    /// Merchants the token covers (main-account authorizations).
    pub merchant_id_list: Vec<u64>,
    /// Shops the token covers (main-account authorizations).
    pub shop_id_list: Vec<u64>,
}

/// Response of `auth/access_token/get`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshAccessTokenResponse {
    /// The envelope fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The new access token.
    pub access_token: String,
    /// The new refresh token; the previous one is invalidated.
    pub refresh_token: String,
    /// Lifetime of the access token in seconds.
    pub expire_in: i64,
    /// The partner the token was issued to.
    pub partner_id: u64,
    /// The merchant the token covers, `0` for shop tokens.
    pub merchant_id: u64,
    /// The shop the token covers, `0` for merchant tokens.
    pub shop_id: u64,
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shop_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    main_account_id: Option<u64>,
}

impl<'a> TokenRequest<'a> {
    const fn new(target: AuthTarget) -> Self {
        let (shop_id, main_account_id) = match target {
            AuthTarget::Shop(id) => (Some(id), None),
            AuthTarget::MainAccount(id) => (None, Some(id)),
        };
        Self {
            code: None,
            refresh_token: None,
            shop_id,
            main_account_id,
        }
    }
}

/// Token endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ShopeeClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) const fn new(client: &'a ShopeeClient) -> Self {
        Self { client }
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails, e.g. with `error_auth` for an
    /// expired or reused code.
    pub async fn get_access_token(
        &self,
        code: &str,
        target: AuthTarget,
    ) -> Result<AccessTokenResponse, ApiError> {
        let body = TokenRequest {
            code: Some(code),
            ..TokenRequest::new(target)
        };
        self.client
            .post("auth/token/get", &body, &RequestScope::Public)
            .await
    }

    /// Exchanges a refresh token for a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
        target: AuthTarget,
    ) -> Result<RefreshAccessTokenResponse, ApiError> {
        let body = TokenRequest {
            refresh_token: Some(refresh_token),
            ..TokenRequest::new(target)
        };
        self.client
            .post("auth/access_token/get", &body, &RequestScope::Public)
            .await
    }

    /// Exchanges an authorization code and wraps the result in a [`Session`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn session_from_code(
        &self,
        code: &str,
        target: AuthTarget,
    ) -> Result<Session, ApiError> {
        let response = self.get_access_token(code, target).await?;
        Ok(Session::from_token_response(target, &response))
    }

    /// Refreshes `session`, returning a session holding the new tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn refresh_session(&self, session: &Session) -> Result<Session, ApiError> {
        let response = self
            .refresh_access_token(&session.refresh_token, session.target)
            .await?;
        tracing::debug!(target_account = ?session.target, "Refreshed access token");
        Ok(session.refreshed(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_request_for_shop() {
        let body = TokenRequest {
            code: Some("abc"),
            ..TokenRequest::new(AuthTarget::Shop(42))
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"code": "abc", "shop_id": 42})
        );
    }

    #[test]
    fn test_token_request_for_main_account() {
        let body = TokenRequest {
            refresh_token: Some("r"),
            ..TokenRequest::new(AuthTarget::MainAccount(9))
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"refresh_token": "r", "main_account_id": 9})
        );
    }

    #[test]
    fn test_access_token_response_tolerates_missing_fields() {
        let response: AccessTokenResponse =
            serde_json::from_str(r#"{"access_token":"accesstoken","expire_in":3600}"#).unwrap();
        assert_eq!(response.access_token, "accesstoken");
        assert_eq!(response.expire_in, 3600);
        assert!(response.shop_id_list.is_empty());
        assert!(response.base.request_id.is_empty());
    }
}
