//! Resource services for version 2 of the partner API.
//!
//! Each service is a thin borrow of [`ShopeeClient`](crate::ShopeeClient)
//! obtained through an accessor such as
//! [`ShopeeClient::order`](crate::ShopeeClient::order). Services build typed
//! requests and decode typed responses; signing, retries and error
//! classification happen in the shared pipeline.
//!
//! | Accessor | Endpoints | Scope |
//! |----------|-----------|-------|
//! | `auth()` | `auth/token/get`, `auth/access_token/get` | public |
//! | `shop()` | `shop/get_shop_info`, `shop/get_profile` | shop |
//! | `merchant()` | `merchant/get_shop_list_by_merchant` | merchant |
//! | `product()` | categories, brands, attributes, items, models | shop |
//! | `discount()` | `discount/*` | shop |
//! | `logistics()` | `logistics/get_channel_list` | shop |
//! | `order()` | `order/get_order_detail` | shop |
//! | `media_space()` | `media_space/upload_image` | public |

mod auth;
mod discount;
mod logistics;
mod media_space;
mod merchant;
mod order;
mod product;
mod shop;

pub use auth::{AccessTokenResponse, AuthApi, RefreshAccessTokenResponse};
pub use discount::{
    discount_source, AddDiscountItemRequest, AddDiscountItemResponse, AddDiscountRequest,
    AddDiscountResponse, DeleteDiscountItemResponse, Discount, DiscountApi, DiscountId,
    DiscountItem, DiscountItemError, DiscountItemResult, DiscountList, DiscountModel,
    DiscountStatus, GetDiscountListParams, GetDiscountListResponse, UpdateDiscountItem,
    UpdateDiscountItemRequest, UpdateDiscountItemResponse, UpdateDiscountModel,
};
pub use logistics::{
    ChannelList, GetChannelListResponse, ItemMaxDimension, LogisticsApi, LogisticsChannel,
    LogisticsSize, VolumeLimit, WeightLimit,
};
pub use media_space::{ImageInfo, ImageUrl, MediaSpaceApi, UploadImageResponse, UploadedImage};
pub use merchant::{
    GetShopListByMerchantResponse, MerchantAffiShop, MerchantApi, MerchantShop,
};
pub use order::{
    Address, GetOrderDetailResponse, Invoice, Order, OrderApi, OrderItem, OrderList,
    OrderPackage, OrderPackageItem,
};
pub use product::{
    AddItemRequest, AddItemResponse, AddModelRequest, AddModelResponse, AddModelResult,
    Attribute, AttributeList, AttributeValue, Brand, BrandList, Category, CategoryList,
    DaysToShipLimit, Dimension, DtsLimit, GetAttributesResponse, GetBrandListParams,
    GetBrandListResponse, GetCategoryResponse, GetDtsLimitResponse, GetModelListResponse,
    InitTierVariationRequest, InitTierVariationResponse, Item, ItemAttribute,
    ItemAttributeValue, ItemBase, ItemBrand, ItemImage, ItemPreOrder, ItemWholesale,
    LogisticInfo, Model, ModelList, NewModel, ParentAttribute, ParentBrand, PriceInfo,
    ProductApi, SizeChartSupport, StockInfo, SupportSizeChartResponse, TierVariation,
    TierVariationImage, TierVariationOption, TierVariationResult,
};
pub use shop::{GetProfileResponse, GetShopInfoResponse, ShopApi, ShopProfile, SipAffiShop};
