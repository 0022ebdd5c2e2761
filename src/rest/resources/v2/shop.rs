//! Shop information.

use serde::{Deserialize, Serialize};

use crate::auth::RequestScope;
use crate::clients::ApiError;
use crate::rest::{ApiResponse, BaseResponse};
use crate::ShopeeClient;

/// Response of `shop/get_shop_info`. Fields sit at the top level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetShopInfoResponse {
    /// The envelope fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Shop name.
    pub shop_name: String,
    /// Region code (e.g. `SG`).
    pub region: String,
    /// Shop status (`NORMAL`, `BANNED`, `FROZEN`).
    pub status: String,
    /// Affiliate shops of a SIP primary shop.
    pub sip_affi_shops: Vec<SipAffiShop>,
    /// Cross-border shop.
    pub is_cb: bool,
    /// Shop upgraded to the China seller center.
    pub is_cnsc: bool,
    /// When the shop authorized the partner (Unix seconds).
    pub auth_time: i64,
    /// When the authorization expires (Unix seconds).
    pub expire_time: i64,
}

/// A SIP affiliate shop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SipAffiShop {
    /// Affiliate shop ID.
    pub affi_shop_id: u64,
    /// Affiliate shop region.
    pub region: String,
}

/// Payload of `shop/get_profile`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopProfile {
    /// Logo URL.
    pub shop_logo: String,
    /// Shop description.
    pub description: String,
    /// Shop name.
    pub shop_name: String,
}

/// Response of `shop/get_profile`.
pub type GetProfileResponse = ApiResponse<ShopProfile>;

/// Shop endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ShopApi<'a> {
    client: &'a ShopeeClient,
}

impl<'a> ShopApi<'a> {
    pub(crate) const fn new(client: &'a ShopeeClient) -> Self {
        Self { client }
    }

    /// Fetches the shop's basic information.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_shop_info(&self, scope: &RequestScope) -> Result<GetShopInfoResponse, ApiError> {
        self.client.get("shop/get_shop_info", &(), scope).await
    }

    /// Fetches the shop's public profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_profile(&self, scope: &RequestScope) -> Result<GetProfileResponse, ApiError> {
        self.client.get("shop/get_profile", &(), scope).await
    }
}
