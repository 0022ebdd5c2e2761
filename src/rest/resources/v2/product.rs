//! Product catalog: categories, brands, attributes, items and models.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopee_api::rest::resources::GetBrandListParams;
//!
//! let scope = RequestScope::shop(1234567, "access-token");
//!
//! let brands = client
//!     .product()
//!     .get_brand_list(
//!         &GetBrandListParams {
//!             category_id: 100_644,
//!             status: 1,
//!             offset: 0,
//!             page_size: 100,
//!         },
//!         &scope,
//!     )
//!     .await?;
//!
//! if brands.has_next_page {
//!     // fetch from brands.next_offset
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::auth::RequestScope;
use crate::clients::ApiError;
use crate::rest::{ApiResponse, BaseResponse};
use crate::ShopeeClient;

// ---------------------------------------------------------------------------
// Categories, brands, attributes
// ---------------------------------------------------------------------------

/// A product category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Category ID.
    pub category_id: u64,
    /// Parent category ID, `0` for roots.
    pub parent_category_id: u64,
    /// Name in the default language.
    pub original_category_name: String,
    /// Name in the requested language.
    pub display_category_name: String,
    /// The category has sub-categories.
    pub has_children: bool,
}

/// Payload of `product/get_category`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryList {
    /// All categories.
    pub category_list: Vec<Category>,
}

/// Response of `product/get_category`.
pub type GetCategoryResponse = ApiResponse<CategoryList>;

/// Query of `product/get_brand_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBrandListParams {
    /// Leaf category ID.
    pub category_id: u64,
    /// `1` for normal brands, `2` for pending.
    pub status: u32,
    /// Paging offset.
    pub offset: u32,
    /// Page size.
    pub page_size: u32,
}

/// A brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    /// Brand ID.
    pub brand_id: u64,
    /// Name in the default language.
    pub original_brand_name: String,
    /// Name in the shop's language.
    pub display_brand_name: String,
}

/// Payload of `product/get_brand_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandList {
    /// Brands of this page.
    pub brand_list: Vec<Brand>,
    /// More pages are available.
    pub has_next_page: bool,
    /// Offset of the next page.
    pub next_offset: u32,
    /// A brand is mandatory for this category.
    pub is_mandatory: bool,
    /// Input type of the brand field.
    pub input_type: String,
}

/// Response of `product/get_brand_list`.
pub type GetBrandListResponse = ApiResponse<BrandList>;

/// Allowed days-to-ship range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaysToShipLimit {
    /// Minimum days to ship for pre-order items.
    pub min_limit: u32,
    /// Maximum days to ship for pre-order items.
    pub max_limit: u32,
}

/// Payload of `product/get_dts_limit`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DtsLimit {
    /// Pre-order range.
    pub days_to_ship_limit: DaysToShipLimit,
    /// Days to ship for non-pre-order items.
    pub non_pre_order_days_to_ship: u32,
}

/// Response of `product/get_dts_limit`.
pub type GetDtsLimitResponse = ApiResponse<DtsLimit>;

/// A category attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    /// Attribute ID.
    pub attribute_id: u64,
    /// Name in the default language.
    pub original_attribute_name: String,
    /// Name in the requested language.
    pub display_attribute_name: String,
    /// The attribute must be set when adding an item.
    pub is_mandatory: bool,
    /// Validation applied to input values.
    pub input_validation_type: String,
    /// Format of the value.
    pub format_type: String,
    /// Date format, for date attributes.
    pub date_format_type: String,
    /// How the value is entered.
    pub input_type: String,
    /// Accepted units.
    pub attribute_unit: Vec<String>,
    /// Predefined values.
    pub attribute_value_list: Vec<AttributeValue>,
}

/// A predefined attribute value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeValue {
    /// Value ID.
    pub value_id: u64,
    /// Name in the default language.
    pub original_value_name: String,
    /// Name in the requested language.
    pub display_value_name: String,
    /// Unit of the value.
    pub value_unit: String,
    /// Attribute values this value depends on.
    pub parent_attribute_list: Vec<ParentAttribute>,
    /// Brands this value depends on.
    pub parent_brand_list: Vec<ParentBrand>,
}

/// A parent attribute value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentAttribute {
    /// Parent attribute ID.
    pub parent_attribute_id: u64,
    /// Parent value ID.
    pub parent_value_id: u64,
}

/// A parent brand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentBrand {
    /// Parent brand ID.
    pub parent_brand_id: u64,
}

/// Payload of `product/get_attributes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeList {
    /// Attributes of the category.
    pub attribute_list: Vec<Attribute>,
}

/// Response of `product/get_attributes`.
pub type GetAttributesResponse = ApiResponse<AttributeList>;

/// Payload of `product/support_size_chart`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeChartSupport {
    /// The category accepts size charts.
    pub support_size_chart: bool,
}

/// Response of `product/support_size_chart`.
pub type SupportSizeChartResponse = ApiResponse<SizeChartSupport>;

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Package dimensions in centimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimension {
    /// Height.
    pub package_height: u32,
    /// Length.
    pub package_length: u32,
    /// Width.
    pub package_width: u32,
}

/// Logistics settings of an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticInfo {
    /// Size ID, for channels priced by size.
    pub size_id: u64,
    /// Shipping fee, for channels with custom pricing.
    pub shipping_fee: f64,
    /// The channel is enabled for this item.
    pub enabled: bool,
    /// Logistics channel ID.
    pub logistic_id: u64,
    /// The seller covers shipping.
    pub is_free: bool,
}

/// An attribute set on an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemAttribute {
    /// Attribute ID.
    pub attribute_id: u64,
    /// Values of the attribute.
    pub attribute_value_list: Vec<ItemAttributeValue>,
}

/// A value of an item attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemAttributeValue {
    /// Predefined value ID, `0` for free text.
    pub value_id: u64,
    /// Free-text value.
    pub original_value_name: String,
    /// Unit of the value.
    pub value_unit: String,
}

/// Images of an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemImage {
    /// IDs returned by `media_space/upload_image`.
    pub image_id_list: Vec<String>,
}

/// Pre-order settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemPreOrder {
    /// The item is a pre-order.
    pub is_pre_order: bool,
    /// Days to ship.
    pub days_to_ship: u32,
}

/// A wholesale price tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemWholesale {
    /// Minimum quantity.
    pub min_count: u32,
    /// Maximum quantity.
    pub max_count: u32,
    /// Unit price in this tier.
    pub unit_price: f64,
}

/// Brand of an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemBrand {
    /// Brand ID, `0` for no brand.
    pub brand_id: u64,
    /// Brand name.
    pub original_brand_name: String,
}

/// The editable fields of an item; the body of `product/add_item`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemBase {
    /// Item name.
    pub item_name: String,
    /// Item description.
    pub description: String,
    /// Price before discounts.
    pub original_price: f64,
    /// Weight in kilograms.
    pub weight: f64,
    /// `NORMAL` or `UNLIST`.
    pub item_status: String,
    /// Package dimensions.
    pub dimension: Dimension,
    /// Stock for items without models.
    pub normal_stock: u32,
    /// Logistics channels.
    pub logistic_info: Vec<LogisticInfo>,
    /// Attribute values.
    pub attribute_list: Vec<ItemAttribute>,
    /// Leaf category ID.
    pub category_id: u64,
    /// Images.
    pub image: ItemImage,
    /// Pre-order settings.
    pub pre_order: ItemPreOrder,
    /// Seller SKU.
    pub item_sku: String,
    /// `NEW` or `USED`.
    pub condition: String,
    /// Wholesale tiers.
    pub wholesale: Vec<ItemWholesale>,
    /// IDs of uploaded videos.
    pub video_upload_id: Vec<String>,
    /// Brand.
    pub brand: ItemBrand,
    /// `0` for non-dangerous goods, `1` for dangerous goods.
    pub item_dangerous: u32,
}

/// Body of `product/add_item`.
pub type AddItemRequest = ItemBase;

/// An item as returned by `product/add_item`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// The new item's ID.
    pub item_id: u64,
    /// The item's fields.
    #[serde(flatten)]
    pub details: ItemBase,
}

/// Response of `product/add_item`.
pub type AddItemResponse = ApiResponse<Item>;

// ---------------------------------------------------------------------------
// Variations and models
// ---------------------------------------------------------------------------

/// A variation tier (e.g. "Color") and its options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierVariation {
    /// Tier name.
    pub name: String,
    /// Options of the tier.
    pub option_list: Vec<TierVariationOption>,
}

/// One option of a variation tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierVariationOption {
    /// Option name (e.g. "Red").
    pub option: String,
    /// Option image.
    pub image: TierVariationImage,
}

/// Image of a variation option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierVariationImage {
    /// Uploaded image ID (requests).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_id: String,
    /// Image URL (responses).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_url: String,
}

/// A model to create, addressed by its tier option indexes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewModel {
    /// Index into each tier's option list.
    pub tier_index: Vec<u32>,
    /// Stock.
    pub normal_stock: u32,
    /// Price before discounts.
    pub original_price: f64,
    /// Seller SKU.
    pub model_sku: String,
}

/// Body of `product/init_tier_variation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitTierVariationRequest {
    /// Item to add variations to.
    pub item_id: u64,
    /// The tiers (at most two).
    pub tier_variation: Vec<TierVariation>,
    /// One entry per option combination.
    pub model: Vec<NewModel>,
}

/// Stock of a model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockInfo {
    /// Stock type.
    pub stock_type: u32,
    /// Seller stock.
    pub normal_stock: u32,
    /// Available stock.
    pub current_stock: u32,
    /// Stock reserved for promotions.
    pub reserved_stock: u32,
}

/// Price of a model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceInfo {
    /// Price before discounts.
    pub original_price: f64,
    /// Price after discounts.
    pub current_price: f64,
    /// Original price including taxes.
    pub inflated_price_of_original_price: f64,
    /// Current price including taxes.
    pub inflated_price_of_current_price: f64,
    /// Price of the SIP affiliate item.
    pub sip_item_price: f64,
    /// Source of the SIP price.
    pub sip_item_price_source: String,
}

/// A model of an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Model {
    /// Index into each tier's option list.
    pub tier_index: Vec<u32>,
    /// Model ID.
    pub model_id: u64,
    /// Seller SKU.
    pub model_sku: String,
    /// Stock entries.
    pub stock_info: Vec<StockInfo>,
    /// Price entries.
    pub price_info: Vec<PriceInfo>,
    /// Active promotion, `0` for none.
    pub promotion_id: u64,
}

/// Payload of `product/init_tier_variation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierVariationResult {
    /// The item.
    pub item_id: u64,
    /// The stored tiers.
    pub tier_variation: Vec<TierVariation>,
    /// The created models.
    pub model: Vec<Model>,
}

/// Response of `product/init_tier_variation`.
pub type InitTierVariationResponse = ApiResponse<TierVariationResult>;

/// Body of `product/add_model`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddModelRequest {
    /// Item to add models to.
    pub item_id: u64,
    /// Models to add.
    pub model_list: Vec<NewModel>,
}

/// Payload of `product/add_model`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddModelResult {
    /// The created models.
    pub model: Vec<Model>,
}

/// Response of `product/add_model`.
pub type AddModelResponse = ApiResponse<AddModelResult>;

/// Payload of `product/get_model_list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelList {
    /// The item's tiers.
    pub tier_variation: Vec<TierVariation>,
    /// The item's models.
    pub model: Vec<Model>,
}

/// Response of `product/get_model_list`.
pub type GetModelListResponse = ApiResponse<ModelList>;

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct LanguageParams<'a> {
    language: &'a str,
}

#[derive(Serialize)]
struct CategoryParams<'a> {
    category_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

#[derive(Serialize)]
struct SizeChartBody<'a> {
    item_id: u64,
    size_chart: &'a str,
}

#[derive(Serialize)]
struct ItemParams {
    item_id: u64,
}

/// Product endpoints. Calls require a shop scope.
#[derive(Debug, Clone, Copy)]
pub struct ProductApi<'a> {
    client: &'a ShopeeClient,
}

impl<'a> ProductApi<'a> {
    pub(crate) const fn new(client: &'a ShopeeClient) -> Self {
        Self { client }
    }

    /// Lists all categories, with display names in `language`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_category(
        &self,
        language: &str,
        scope: &RequestScope,
    ) -> Result<GetCategoryResponse, ApiError> {
        self.client
            .get("product/get_category", &LanguageParams { language }, scope)
            .await
    }

    /// Lists the brands of a category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_brand_list(
        &self,
        params: &GetBrandListParams,
        scope: &RequestScope,
    ) -> Result<GetBrandListResponse, ApiError> {
        self.client.get("product/get_brand_list", params, scope).await
    }

    /// Fetches the days-to-ship limits of a category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_dts_limit(
        &self,
        category_id: u64,
        scope: &RequestScope,
    ) -> Result<GetDtsLimitResponse, ApiError> {
        let params = CategoryParams {
            category_id,
            language: None,
        };
        self.client.get("product/get_dts_limit", &params, scope).await
    }

    /// Lists the attributes of a category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_attributes(
        &self,
        category_id: u64,
        language: &str,
        scope: &RequestScope,
    ) -> Result<GetAttributesResponse, ApiError> {
        let params = CategoryParams {
            category_id,
            language: Some(language),
        };
        self.client.get("product/get_attributes", &params, scope).await
    }

    /// Checks whether a category accepts size charts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn support_size_chart(
        &self,
        category_id: u64,
        scope: &RequestScope,
    ) -> Result<SupportSizeChartResponse, ApiError> {
        let params = CategoryParams {
            category_id,
            language: None,
        };
        self.client
            .get("product/support_size_chart", &params, scope)
            .await
    }

    /// Sets the size chart image of an item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update_size_chart(
        &self,
        item_id: u64,
        size_chart: &str,
        scope: &RequestScope,
    ) -> Result<BaseResponse, ApiError> {
        let body = SizeChartBody {
            item_id,
            size_chart,
        };
        self.client
            .post("product/update_size_chart", &body, scope)
            .await
    }

    /// Creates an item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn add_item(
        &self,
        item: &AddItemRequest,
        scope: &RequestScope,
    ) -> Result<AddItemResponse, ApiError> {
        self.client.post("product/add_item", item, scope).await
    }

    /// Initializes the variation tiers and models of an item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn init_tier_variation(
        &self,
        request: &InitTierVariationRequest,
        scope: &RequestScope,
    ) -> Result<InitTierVariationResponse, ApiError> {
        self.client
            .post("product/init_tier_variation", request, scope)
            .await
    }

    /// Adds models to an item that already has tiers.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn add_model(
        &self,
        request: &AddModelRequest,
        scope: &RequestScope,
    ) -> Result<AddModelResponse, ApiError> {
        self.client.post("product/add_model", request, scope).await
    }

    /// Lists the tiers and models of an item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_model_list(
        &self,
        item_id: u64,
        scope: &RequestScope,
    ) -> Result<GetModelListResponse, ApiError> {
        self.client
            .get("product/get_model_list", &ItemParams { item_id }, scope)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::query_from_options;

    #[test]
    fn test_brand_list_params_flatten_to_query() {
        let query = query_from_options(&GetBrandListParams {
            category_id: 10,
            status: 1,
            offset: 0,
            page_size: 50,
        })
        .unwrap();
        assert_eq!(query["category_id"], "10");
        assert_eq!(query["status"], "1");
        assert_eq!(query["page_size"], "50");
    }

    #[test]
    fn test_category_params_skip_absent_language() {
        let query = query_from_options(&CategoryParams {
            category_id: 3,
            language: None,
        })
        .unwrap();
        assert!(!query.contains_key("language"));
    }

    #[test]
    fn test_item_flattens_base_fields() {
        let response: AddItemResponse = serde_json::from_str(
            r#"{"response":{"item_id":800,"item_name":"Shirt","original_price":9.5,
                "image":{"image_id_list":["img-1"]}}}"#,
        )
        .unwrap();

        assert_eq!(response.item_id, 800);
        assert_eq!(response.details.item_name, "Shirt");
        assert_eq!(response.details.image.image_id_list, vec!["img-1"]);
    }

    #[test]
    fn test_tier_variation_image_omits_empty_fields() {
        let option = TierVariationOption {
            option: "Red".to_string(),
            image: TierVariationImage {
                image_id: "img-9".to_string(),
                image_url: String::new(),
            },
        };
        assert_eq!(
            serde_json::to_value(&option).unwrap(),
            serde_json::json!({"option": "Red", "image": {"image_id": "img-9"}})
        );
    }

    #[test]
    fn test_model_list_deserializes() {
        let response: GetModelListResponse = serde_json::from_str(
            r#"{"response":{
                "tier_variation":[{"name":"Color","option_list":[{"option":"Red"}]}],
                "model":[{"tier_index":[0],"model_id":77,"price_info":[{"current_price":5.0}]}]
            }}"#,
        )
        .unwrap();

        assert_eq!(response.tier_variation[0].name, "Color");
        assert_eq!(response.model[0].model_id, 77);
        assert!((response.model[0].price_info[0].current_price - 5.0).abs() < f64::EPSILON);
    }
}
