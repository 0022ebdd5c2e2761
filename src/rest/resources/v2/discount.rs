//! Shop discounts (time-boxed promotional prices).

use serde::{Deserialize, Serialize};

use crate::auth::RequestScope;
use crate::clients::ApiError;
use crate::rest::ApiResponse;
use crate::ShopeeClient;

/// Filter for `discount/get_discount_list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountStatus {
    /// Not started yet.
    Upcoming,
    /// Running now.
    Ongoing,
    /// Ended.
    Expired,
    /// Any status.
    #[default]
    All,
}

/// Who created a discount.
pub mod discount_source {
    /// Created by the seller or a partner.
    pub const OTHERS: u32 = 0;
    /// Created by Shopee admins.
    pub const ADMIN: u32 = 1;
    /// Created for a live stream.
    pub const LIVE_STREAM: u32 = 7;
}

/// Query of `discount/get_discount_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetDiscountListParams {
    /// Status filter.
    pub discount_status: DiscountStatus,
    /// Page number, starting at 1.
    pub page_no: u32,
    /// Page size.
    pub page_size: u32,
    /// Only discounts updated at or after this time (Unix seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time_from: Option<i64>,
    /// Only discounts updated at or before this time (Unix seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time_to: Option<i64>,
}

/// A discount summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discount {
    /// Status (`upcoming`, `ongoing`, `expired`).
    pub status: String,
    /// Discount name.
    pub discount_name: String,
    /// Start (Unix seconds).
    pub start_time: i64,
    /// End (Unix seconds).
    pub end_time: i64,
    /// Discount ID.
    pub discount_id: u64,
    /// Creator, see [`discount_source`].
    pub source: u32,
}

/// Payload of `discount/get_discount_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountList {
    /// Discounts of this page.
    pub discount_list: Vec<Discount>,
    /// More pages are available.
    pub more: bool,
}

/// Response of `discount/get_discount_list`.
pub type GetDiscountListResponse = ApiResponse<DiscountList>;

/// Body of `discount/add_discount`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddDiscountRequest {
    /// Discount name.
    pub discount_name: String,
    /// Start (Unix seconds), at least one hour from now.
    pub start_time: i64,
    /// End (Unix seconds).
    pub end_time: i64,
}

/// Payload of `discount/add_discount`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountId {
    /// The discount.
    pub discount_id: u64,
}

/// Response of `discount/add_discount`.
pub type AddDiscountResponse = ApiResponse<DiscountId>;

/// Model-level promotion settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountModel {
    /// Model ID.
    pub model_id: u64,
    /// Promotional price.
    pub model_promotion_price: f64,
    /// Stock reserved for the promotion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_promotion_stock: Option<u32>,
}

/// An item to add to a discount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountItem {
    /// Item ID.
    pub item_id: u64,
    /// Per-model prices, for items with models.
    #[serde(default)]
    pub model_list: Vec<DiscountModel>,
    /// Promotional price, for items without models.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_promotion_price: Option<f64>,
    /// Maximum quantity per buyer, `0` for no limit.
    pub purchase_limit: u32,
    /// Stock reserved for the promotion, for items without models.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_promotion_stock: Option<u32>,
}

/// Body of `discount/add_discount_item`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddDiscountItemRequest {
    /// Target discount.
    pub discount_id: u64,
    /// Items to add.
    pub item_list: Vec<DiscountItem>,
}

/// A per-item failure in a batch discount call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountItemError {
    /// Item ID.
    pub item_id: u64,
    /// Model ID, `0` for item-level failures.
    pub model_id: u64,
    /// Human-readable reason.
    pub fail_message: String,
    /// Error code.
    pub fail_error: String,
}

/// Payload of the batch discount item calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountItemResult {
    /// The discount.
    pub discount_id: u64,
    /// Number of items processed successfully.
    pub count: u32,
    /// Items that failed.
    pub error_list: Vec<DiscountItemError>,
}

/// Response of `discount/add_discount_item`.
pub type AddDiscountItemResponse = ApiResponse<DiscountItemResult>;

/// Response of `discount/delete_discount_item`.
pub type DeleteDiscountItemResponse = ApiResponse<DiscountItemResult>;

/// Model-level price update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDiscountModel {
    /// Model ID.
    pub model_id: u64,
    /// New promotional price.
    pub model_promotion_price: f64,
}

/// An item whose promotion settings change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDiscountItem {
    /// Item ID.
    pub item_id: u64,
    /// New promotional price, for items without models.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_promotion_price: Option<f64>,
    /// New purchase limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_limit: Option<u32>,
    /// Per-model price updates.
    #[serde(default)]
    pub model_list: Vec<UpdateDiscountModel>,
}

/// Body of `discount/update_discount_item`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDiscountItemRequest {
    /// Target discount.
    pub discount_id: u64,
    /// Items to update.
    pub item_list: Vec<UpdateDiscountItem>,
}

/// Response of `discount/update_discount_item`.
pub type UpdateDiscountItemResponse = ApiResponse<DiscountItemResult>;

#[derive(Serialize)]
struct DeleteDiscountItemBody {
    discount_id: u64,
    item_id: u64,
    model_id: u64,
}

/// Discount endpoints. Calls require a shop scope.
#[derive(Debug, Clone, Copy)]
pub struct DiscountApi<'a> {
    client: &'a ShopeeClient,
}

impl<'a> DiscountApi<'a> {
    pub(crate) const fn new(client: &'a ShopeeClient) -> Self {
        Self { client }
    }

    /// Lists the shop's discounts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_discount_list(
        &self,
        params: &GetDiscountListParams,
        scope: &RequestScope,
    ) -> Result<GetDiscountListResponse, ApiError> {
        self.client
            .get("discount/get_discount_list", params, scope)
            .await
    }

    /// Creates an empty discount.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn add_discount(
        &self,
        request: &AddDiscountRequest,
        scope: &RequestScope,
    ) -> Result<AddDiscountResponse, ApiError> {
        self.client.post("discount/add_discount", request, scope).await
    }

    /// Adds items to a discount.
    ///
    /// A successful response may still list per-item failures in
    /// `error_list`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn add_discount_item(
        &self,
        request: &AddDiscountItemRequest,
        scope: &RequestScope,
    ) -> Result<AddDiscountItemResponse, ApiError> {
        self.client
            .post("discount/add_discount_item", request, scope)
            .await
    }

    /// Removes one item or model from a discount. Pass `model_id = 0` for
    /// items without models.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn delete_discount_item(
        &self,
        discount_id: u64,
        item_id: u64,
        model_id: u64,
        scope: &RequestScope,
    ) -> Result<DeleteDiscountItemResponse, ApiError> {
        let body = DeleteDiscountItemBody {
            discount_id,
            item_id,
            model_id,
        };
        self.client
            .post("discount/delete_discount_item", &body, scope)
            .await
    }

    /// Changes promotional prices or limits of items in a discount.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update_discount_item(
        &self,
        request: &UpdateDiscountItemRequest,
        scope: &RequestScope,
    ) -> Result<UpdateDiscountItemResponse, ApiError> {
        self.client
            .post("discount/update_discount_item", request, scope)
            .await
    }
}
