//! Merchant (main account) operations.

use serde::{Deserialize, Serialize};

use crate::auth::RequestScope;
use crate::clients::ApiError;
use crate::rest::BaseResponse;
use crate::ShopeeClient;

/// Response of `merchant/get_shop_list_by_merchant`. Fields sit at the top level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetShopListByMerchantResponse {
    /// The envelope fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Merchant upgraded to the China seller center.
    pub is_cnsc: bool,
    /// Shops of this page.
    pub shop_list: Vec<MerchantShop>,
    /// More pages are available.
    pub more: bool,
}

/// A shop owned by a merchant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantShop {
    /// Shop ID.
    pub shop_id: u64,
    /// SIP affiliate shops.
    pub sip_affi_shops: Vec<MerchantAffiShop>,
    /// Shop upgraded to the China seller center.
    pub shop_is_cnsc: bool,
}

/// A SIP affiliate shop of a merchant's shop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantAffiShop {
    /// Affiliate shop ID.
    pub affi_shop_id: u64,
}

#[derive(Debug, Serialize)]
struct ShopListParams {
    page_no: u32,
    page_size: u32,
}

/// Merchant endpoints. Calls require a merchant scope.
#[derive(Debug, Clone, Copy)]
pub struct MerchantApi<'a> {
    client: &'a ShopeeClient,
}

impl<'a> MerchantApi<'a> {
    pub(crate) const fn new(client: &'a ShopeeClient) -> Self {
        Self { client }
    }

    /// Lists the shops owned by the merchant, one page at a time.
    ///
    /// `page_no` starts at 1.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_shop_list_by_merchant(
        &self,
        page_no: u32,
        page_size: u32,
        scope: &RequestScope,
    ) -> Result<GetShopListByMerchantResponse, ApiError> {
        let params = ShopListParams { page_no, page_size };
        self.client
            .get("merchant/get_shop_list_by_merchant", &params, scope)
            .await
    }
}
