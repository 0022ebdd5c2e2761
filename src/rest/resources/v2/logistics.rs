//! Logistics channels.

use serde::{Deserialize, Serialize};

use crate::auth::RequestScope;
use crate::clients::ApiError;
use crate::rest::ApiResponse;
use crate::ShopeeClient;

/// A parcel size offered by a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticsSize {
    /// Size ID.
    pub size_id: String,
    /// Size name.
    pub name: String,
    /// Default price for this size.
    pub default_price: f64,
}

/// Weight limits in kilograms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightLimit {
    /// Maximum item weight.
    pub item_max_weight: f64,
    /// Minimum item weight.
    pub item_min_weight: f64,
}

/// Maximum item dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemMaxDimension {
    /// Height.
    pub height: f64,
    /// Width.
    pub width: f64,
    /// Length.
    pub length: f64,
    /// Unit of the dimensions.
    pub unit: String,
}

/// Volume limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeLimit {
    /// Maximum item volume.
    pub item_max_volume: f64,
    /// Minimum item volume.
    pub item_min_volume: f64,
}

/// A logistics channel available to the shop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticsChannel {
    /// Channel ID.
    pub logistics_channel_id: u64,
    /// Preferred channel.
    pub preferred: bool,
    /// Channel name.
    pub logistics_channel_name: String,
    /// Cash on delivery is supported.
    pub cod_enabled: bool,
    /// Enabled for the shop.
    pub enabled: bool,
    /// How the shipping fee is computed (`SIZE_SELECTION`, `CUSTOM_PRICE`, ...).
    pub fee_type: String,
    /// Parcel sizes.
    pub size_list: Vec<LogisticsSize>,
    /// Weight limits.
    pub weight_limit: WeightLimit,
    /// Dimension limits.
    pub item_max_dimension: ItemMaxDimension,
    /// Volume limits.
    pub volume_limit: VolumeLimit,
}

/// Payload of `logistics/get_channel_list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelList {
    /// Channels.
    #[serde(alias = "logistics")]
    pub logistics_channel_list: Vec<LogisticsChannel>,
    /// Description of the channels.
    pub logistics_description: String,
    /// Sellers cannot disable the channels.
    pub force_enabled: bool,
    /// Mask channel the channels belong to, `0` for none.
    pub mask_channel_id: u64,
}

/// Response of `logistics/get_channel_list`.
pub type GetChannelListResponse = ApiResponse<ChannelList>;

/// Logistics endpoints. Calls require a shop scope.
#[derive(Debug, Clone, Copy)]
pub struct LogisticsApi<'a> {
    client: &'a ShopeeClient,
}

impl<'a> LogisticsApi<'a> {
    pub(crate) const fn new(client: &'a ShopeeClient) -> Self {
        Self { client }
    }

    /// Lists the logistics channels of the shop.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_channel_list(
        &self,
        scope: &RequestScope,
    ) -> Result<GetChannelListResponse, ApiError> {
        self.client
            .get("logistics/get_channel_list", &(), scope)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_list_deserializes() {
        let response: GetChannelListResponse = serde_json::from_str(
            r#"{"request_id":"r","response":{"logistics_channel_list":[{
                "logistics_channel_id": 18025,
                "logistics_channel_name": "Standard Delivery",
                "cod_enabled": true,
                "enabled": true,
                "fee_type": "SIZE_SELECTION",
                "size_list": [{"size_id":"S","name":"Small","default_price":2.5}],
                "weight_limit": {"item_max_weight": 30.0, "item_min_weight": 0.01},
                "item_max_dimension": {"height":50,"width":50,"length":50,"unit":"cm"}
            }]}}"#,
        )
        .unwrap();

        let channel = &response.logistics_channel_list[0];
        assert_eq!(channel.logistics_channel_id, 18025);
        assert!(channel.cod_enabled);
        assert_eq!(channel.size_list[0].size_id, "S");
        assert_eq!(channel.item_max_dimension.unit, "cm");
        assert!(!response.force_enabled);
    }

    #[test]
    fn test_channel_list_accepts_short_key() {
        let response: GetChannelListResponse = serde_json::from_str(
            r#"{"response":{"logistics":[{"logistics_channel_id": 1}]}}"#,
        )
        .unwrap();
        assert_eq!(response.logistics_channel_list[0].logistics_channel_id, 1);
    }
}
