//! Orders.
//!
//! # Example
//!
//! ```rust,ignore
//! let detail = client
//!     .order()
//!     .get_order_detail(
//!         &["201214JAJXU6G7", "201214JASXYXY6"],
//!         &["buyer_user_id", "item_list"],
//!         &scope,
//!     )
//!     .await?;
//!
//! for order in &detail.order_list {
//!     println!("{} {}", order.order_sn, order.order_status);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::auth::RequestScope;
use crate::clients::ApiError;
use crate::rest::ApiResponse;
use crate::ShopeeClient;

/// A shipping address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Recipient name.
    pub name: String,
    /// Recipient phone.
    pub phone: String,
    /// Town.
    pub town: String,
    /// District.
    pub district: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Region code.
    pub region: String,
    /// Postal code.
    pub zipcode: String,
    /// The whole address on one line.
    pub full_address: String,
}

/// A line of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItem {
    /// Item ID.
    pub item_id: u64,
    /// Item name.
    pub item_name: String,
    /// Item SKU.
    pub item_sku: String,
    /// Model ID.
    pub model_id: u64,
    /// Model name.
    pub model_name: String,
    /// Model SKU.
    pub model_sku: String,
    /// Quantity bought.
    pub model_quantity_purchased: u32,
    /// Price before discounts.
    pub model_original_price: f64,
    /// Price after discounts.
    pub model_discounted_price: f64,
    /// Bought at a wholesale price.
    pub wholesale: bool,
    /// Weight in kilograms.
    pub weight: f64,
    /// Part of an add-on deal.
    pub add_on_deal: bool,
    /// Main item of the add-on deal.
    pub main_item: bool,
    /// Add-on deal ID.
    pub add_on_deal_id: u64,
    /// Promotion type.
    pub promotion_type: String,
    /// Promotion ID.
    pub promotion_id: u64,
}

/// An item inside a package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderPackageItem {
    /// Item ID.
    pub item_id: u64,
    /// Model ID.
    pub model_id: u64,
}

/// A package of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderPackage {
    /// Package number.
    pub package_number: String,
    /// Logistics status.
    pub logistics_status: String,
    /// Carrier.
    pub shipping_carrier: String,
    /// Contents.
    pub item_list: Vec<OrderPackageItem>,
}

/// Invoice data (Brazil).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    /// Invoice number.
    pub number: String,
    /// Series number.
    pub series_number: String,
    /// Access key.
    pub access_key: String,
    /// Issue date (Unix seconds).
    pub issue_date: i64,
    /// Total value.
    pub total_value: f64,
    /// Total value of the products.
    pub products_total_value: f64,
    /// Tax code.
    pub tax_code: String,
}

/// An order.
///
/// Fields outside the default set are only filled when requested through
/// `response_optional_fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub order_sn: String,
    pub region: String,
    pub currency: String,
    pub cod: bool,
    pub total_amount: f64,
    pub order_status: String,
    pub shipping_carrier: String,
    pub payment_method: String,
    pub estimated_shipping_fee: f64,
    pub message_to_seller: String,
    pub create_time: i64,
    pub update_time: i64,
    pub days_to_ship: u32,
    pub ship_by_date: i64,
    pub buyer_user_id: u64,
    pub buyer_username: String,
    pub recipient_address: Address,
    pub actual_shipping_fee: f64,
    pub goods_to_declare: bool,
    pub note: String,
    pub note_update_time: i64,
    pub item_list: Vec<OrderItem>,
    pub pay_time: i64,
    pub dropshipper: String,
    pub credit_card_number: String,
    pub dropshipper_phone: String,
    pub split_up: bool,
    pub buyer_cancel_reason: String,
    pub cancel_by: String,
    pub cancel_reason: String,
    pub actual_shipping_fee_confirmed: bool,
    pub buyer_cpf_id: String,
    pub fulfillment_flag: String,
    pub pickup_done_time: i64,
    pub package_list: Vec<OrderPackage>,
    pub invoice_data: Invoice,
    pub checkout_shipping_carrier: String,
}

/// Payload of `order/get_order_detail`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderList {
    /// The requested orders.
    pub order_list: Vec<Order>,
}

/// Response of `order/get_order_detail`.
pub type GetOrderDetailResponse = ApiResponse<OrderList>;

#[derive(Debug, Serialize)]
struct OrderDetailParams<'a> {
    order_sn_list: &'a [&'a str],
    #[serde(skip_serializing_if = "no_fields")]
    response_optional_fields: &'a [&'a str],
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn no_fields(fields: &&[&str]) -> bool {
    fields.is_empty()
}

/// Order endpoints. Calls require a shop scope.
#[derive(Debug, Clone, Copy)]
pub struct OrderApi<'a> {
    client: &'a ShopeeClient,
}

impl<'a> OrderApi<'a> {
    pub(crate) const fn new(client: &'a ShopeeClient) -> Self {
        Self { client }
    }

    /// Fetches orders by serial number.
    ///
    /// Both lists are sent comma-joined. `response_optional_fields` may be
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_order_detail(
        &self,
        order_sn_list: &[&str],
        response_optional_fields: &[&str],
        scope: &RequestScope,
    ) -> Result<GetOrderDetailResponse, ApiError> {
        let params = OrderDetailParams {
            order_sn_list,
            response_optional_fields,
        };
        self.client
            .get("order/get_order_detail", &params, scope)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::query_from_options;

    #[test]
    fn test_order_detail_params_join_lists() {
        let query = query_from_options(&OrderDetailParams {
            order_sn_list: &["A1", "B2"],
            response_optional_fields: &["buyer_user_id", "item_list"],
        })
        .unwrap();

        assert_eq!(query["order_sn_list"], "A1,B2");
        assert_eq!(query["response_optional_fields"], "buyer_user_id,item_list");
    }

    #[test]
    fn test_order_detail_params_skip_empty_optional_fields() {
        let query = query_from_options(&OrderDetailParams {
            order_sn_list: &["A1"],
            response_optional_fields: &[],
        })
        .unwrap();

        assert_eq!(query.len(), 1);
        assert_eq!(query["order_sn_list"], "A1");
    }

    #[test]
    fn test_order_deserializes_nested_fields() {
        let response: GetOrderDetailResponse = serde_json::from_str(
            r#"{"request_id":"r-9","response":{"order_list":[{
                "order_sn":"A1",
                "order_status":"READY_TO_SHIP",
                "total_amount":12.5,
                "recipient_address":{"name":"Jo","city":"Singapore"},
                "item_list":[{"item_id":1,"model_quantity_purchased":2}],
                "package_list":[{"package_number":"P1","item_list":[{"item_id":1,"model_id":0}]}]
            }]}}"#,
        )
        .unwrap();

        let order = &response.order_list[0];
        assert_eq!(response.request_id(), "r-9");
        assert_eq!(order.order_sn, "A1");
        assert_eq!(order.recipient_address.city, "Singapore");
        assert_eq!(order.item_list[0].model_quantity_purchased, 2);
        assert_eq!(order.package_list[0].item_list[0].item_id, 1);
        assert!(order.invoice_data.number.is_empty());
    }
}
