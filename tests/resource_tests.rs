//! Integration tests for the typed resource services.

use std::collections::BTreeMap;

use serde_json::json;
use shopee_api::rest::resources::{
    AddDiscountRequest, AddItemRequest, DiscountStatus, GetBrandListParams, GetDiscountListParams,
    InitTierVariationRequest, NewModel, TierVariation, TierVariationOption,
};
use shopee_api::{
    ApiError, AuthTarget, HostUrl, PartnerId, PartnerKey, RequestScope, Session, ShopeeClient,
    ShopeeConfig,
};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PARTNER_ID: u64 = 2_001_887;

fn create_client(server: &MockServer) -> ShopeeClient {
    let config = ShopeeConfig::builder()
        .partner_id(PartnerId::new(PARTNER_ID).unwrap())
        .partner_key(PartnerKey::new("test-partner-key").unwrap())
        .api_url(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    ShopeeClient::new(config).unwrap()
}

fn shop_scope() -> RequestScope {
    RequestScope::shop(1_234_567, "shop-token")
}

fn query_of(request: &wiremock::Request) -> BTreeMap<String, String> {
    request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_get_access_token_for_shop() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/auth/token/get"))
        .and(body_partial_json(json!({
            "code": "testcode",
            "shop_id": 42,
            "partner_id": PARTNER_ID
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "request_id": "r-1",
            "error": "",
            "message": "",
            "access_token": "accesstoken",
            "refresh_token": "refreshtoken",
            "expire_in": 3600
        })))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let response = client
        .auth()
        .get_access_token("testcode", AuthTarget::Shop(42))
        .await
        .unwrap();

    assert_eq!(response.access_token, "accesstoken");
    assert_eq!(response.refresh_token, "refreshtoken");
    assert_eq!(response.expire_in, 3600);

    let requests = mock_server.received_requests().await.unwrap();
    let query = query_of(&requests[0]);
    assert!(!query.contains_key("shop_id"));
    assert!(!query.contains_key("access_token"));
}

#[tokio::test]
async fn test_session_from_code_and_refresh() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/auth/token/get"))
        .and(body_partial_json(json!({"code": "c", "main_account_id": 9})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "a1",
            "refresh_token": "r1",
            "expire_in": 14400,
            "shop_id_list": [11, 12],
            "merchant_id_list": [21]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/auth/access_token/get"))
        .and(body_partial_json(json!({"refresh_token": "r1", "main_account_id": 9})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "a2",
            "refresh_token": "r2",
            "expire_in": 14400,
            "partner_id": PARTNER_ID
        })))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let session = client
        .auth()
        .session_from_code("c", AuthTarget::MainAccount(9))
        .await
        .unwrap();

    assert_eq!(session.access_token, "a1");
    assert_eq!(session.shop_ids, vec![11, 12]);
    assert!(session.default_scope().is_none());
    assert!(session.is_active());

    let refreshed: Session = client.auth().refresh_session(&session).await.unwrap();
    assert_eq!(refreshed.access_token, "a2");
    assert_eq!(refreshed.refresh_token, "r2");
    assert_eq!(refreshed.shop_ids, vec![11, 12]);
    assert_eq!(
        refreshed.merchant_scope(21),
        RequestScope::merchant(21, "a2")
    );
}

#[tokio::test]
async fn test_expired_code_surfaces_error_code() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/auth/token/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "error_auth",
            "message": "Invalid code",
            "request_id": "abc"
        })))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let error = client
        .auth()
        .get_access_token("expired", AuthTarget::Shop(1))
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Response(_)));
    assert_eq!(error.error_code(), Some("error_auth"));
}

// ============================================================================
// Shop and merchant
// ============================================================================

#[tokio::test]
async fn test_get_shop_info() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/shop/get_shop_info"))
        .and(query_param("shop_id", "1234567"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "request_id": "r",
            "error": "",
            "message": "",
            "shop_name": "Acme Store",
            "region": "SG",
            "status": "NORMAL",
            "is_cb": false,
            "auth_time": 1_650_000_000,
            "expire_time": 1_680_000_000
        })))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let info = client.shop().get_shop_info(&shop_scope()).await.unwrap();

    assert_eq!(info.shop_name, "Acme Store");
    assert_eq!(info.region, "SG");
    assert_eq!(info.expire_time, 1_680_000_000);
}

#[tokio::test]
async fn test_get_shop_list_by_merchant() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/merchant/get_shop_list_by_merchant"))
        .and(query_param("merchant_id", "21"))
        .and(query_param("page_no", "1"))
        .and(query_param("page_size", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "is_cnsc": true,
            "shop_list": [{"shop_id": 11, "sip_affi_shops": [{"affi_shop_id": 111}]}],
            "more": false
        })))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let response = client
        .merchant()
        .get_shop_list_by_merchant(1, 100, &RequestScope::merchant(21, "m"))
        .await
        .unwrap();

    assert!(response.is_cnsc);
    assert_eq!(response.shop_list[0].shop_id, 11);
    assert_eq!(response.shop_list[0].sip_affi_shops[0].affi_shop_id, 111);
    assert!(!response.more);
}

// ============================================================================
// Product
// ============================================================================

#[tokio::test]
async fn test_get_category_sends_language() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/product/get_category"))
        .and(query_param("language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"category_list": [
                {"category_id": 100, "parent_category_id": 0, "display_category_name": "Women", "has_children": true}
            ]}
        })))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let response = client
        .product()
        .get_category("en", &shop_scope())
        .await
        .unwrap();

    assert_eq!(response.category_list[0].category_id, 100);
    assert!(response.category_list[0].has_children);
}

#[tokio::test]
async fn test_get_brand_list_sends_paging() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/product/get_brand_list"))
        .and(query_param("category_id", "100644"))
        .and(query_param("offset", "0"))
        .and(query_param("page_size", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {
                "brand_list": [{"brand_id": 1, "original_brand_name": "NoBrand"}],
                "has_next_page": true,
                "next_offset": 50,
                "is_mandatory": false
            }
        })))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let response = client
        .product()
        .get_brand_list(
            &GetBrandListParams {
                category_id: 100_644,
                status: 1,
                offset: 0,
                page_size: 50,
            },
            &shop_scope(),
        )
        .await
        .unwrap();

    assert!(response.has_next_page);
    assert_eq!(response.next_offset, 50);
}

#[tokio::test]
async fn test_get_attributes_and_dts_limit() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/product/get_attributes"))
        .and(query_param("category_id", "5"))
        .and(query_param("language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"attribute_list": [{
                "attribute_id": 7,
                "is_mandatory": true,
                "attribute_unit": ["kg"],
                "attribute_value_list": [{"value_id": 70, "parent_brand_list": [{"parent_brand_id": 3}]}]
            }]}
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/product/get_dts_limit"))
        .and(query_param("category_id", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {
                "days_to_ship_limit": {"min_limit": 7, "max_limit": 30},
                "non_pre_order_days_to_ship": 3
            }
        })))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let attributes = client
        .product()
        .get_attributes(5, "en", &shop_scope())
        .await
        .unwrap();
    let dts = client.product().get_dts_limit(5, &shop_scope()).await.unwrap();

    let attribute = &attributes.attribute_list[0];
    assert!(attribute.is_mandatory);
    assert_eq!(attribute.attribute_unit, vec!["kg"]);
    assert_eq!(
        attribute.attribute_value_list[0].parent_brand_list[0].parent_brand_id,
        3
    );
    assert_eq!(dts.days_to_ship_limit.max_limit, 30);
    assert_eq!(dts.non_pre_order_days_to_ship, 3);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(!query_of(&requests[1]).contains_key("language"));
}

#[tokio::test]
async fn test_size_chart_calls() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/product/support_size_chart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"support_size_chart": true}
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/product/update_size_chart"))
        .and(body_partial_json(json!({"item_id": 800, "size_chart": "img-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "request_id": "r-2",
            "warning": ""
        })))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let support = client
        .product()
        .support_size_chart(9, &shop_scope())
        .await
        .unwrap();
    let updated = client
        .product()
        .update_size_chart(800, "img-1", &shop_scope())
        .await
        .unwrap();

    assert!(support.support_size_chart);
    assert_eq!(updated.request_id, "r-2");
    assert!(!updated.has_warning());
}

#[tokio::test]
async fn test_add_item_posts_item_fields() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/product/add_item"))
        .and(body_partial_json(json!({
            "item_name": "Cotton Shirt",
            "category_id": 100,
            "image": {"image_id_list": ["img-1"]},
            "partner_id": PARTNER_ID
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"item_id": 800, "item_name": "Cotton Shirt", "category_id": 100}
        })))
        .mount(&mock_server)
        .await;

    let mut item = AddItemRequest {
        item_name: "Cotton Shirt".to_string(),
        category_id: 100,
        original_price: 19.9,
        ..AddItemRequest::default()
    };
    item.image.image_id_list.push("img-1".to_string());

    let client = create_client(&mock_server);
    let response = client.product().add_item(&item, &shop_scope()).await.unwrap();

    assert_eq!(response.item_id, 800);
    assert_eq!(response.details.item_name, "Cotton Shirt");
}

#[tokio::test]
async fn test_init_tier_variation_and_get_model_list() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/product/init_tier_variation"))
        .and(body_partial_json(json!({
            "item_id": 800,
            "tier_variation": [{"name": "Color", "option_list": [{"option": "Red"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {
                "item_id": 800,
                "model": [{"tier_index": [0], "model_id": 5001, "model_sku": "RED"}]
            }
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/product/get_model_list"))
        .and(query_param("item_id", "800"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {
                "tier_variation": [{"name": "Color"}],
                "model": [{"model_id": 5001, "stock_info": [{"normal_stock": 10}]}]
            }
        })))
        .mount(&mock_server)
        .await;

    let request = InitTierVariationRequest {
        item_id: 800,
        tier_variation: vec![TierVariation {
            name: "Color".to_string(),
            option_list: vec![TierVariationOption {
                option: "Red".to_string(),
                ..TierVariationOption::default()
            }],
        }],
        model: vec![NewModel {
            tier_index: vec![0],
            normal_stock: 10,
            original_price: 9.9,
            model_sku: "RED".to_string(),
        }],
    };

    let client = create_client(&mock_server);
    let created = client
        .product()
        .init_tier_variation(&request, &shop_scope())
        .await
        .unwrap();
    let models = client
        .product()
        .get_model_list(800, &shop_scope())
        .await
        .unwrap();

    assert_eq!(created.model[0].model_id, 5001);
    assert_eq!(models.model[0].stock_info[0].normal_stock, 10);
}

// ============================================================================
// Discount, logistics, order, media space
// ============================================================================

#[tokio::test]
async fn test_discount_list_and_add() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/discount/get_discount_list"))
        .and(query_param("discount_status", "upcoming"))
        .and(query_param("page_no", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {
                "discount_list": [{"discount_id": 10, "discount_name": "Sale", "status": "upcoming"}],
                "more": false
            }
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/discount/add_discount"))
        .and(body_partial_json(json!({"discount_name": "Flash", "start_time": 1_700_000_000})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"discount_id": 11}
        })))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let list = client
        .discount()
        .get_discount_list(
            &GetDiscountListParams {
                discount_status: DiscountStatus::Upcoming,
                page_no: 1,
                page_size: 20,
                ..GetDiscountListParams::default()
            },
            &shop_scope(),
        )
        .await
        .unwrap();
    let added = client
        .discount()
        .add_discount(
            &AddDiscountRequest {
                discount_name: "Flash".to_string(),
                start_time: 1_700_000_000,
                end_time: 1_700_086_400,
            },
            &shop_scope(),
        )
        .await
        .unwrap();

    assert_eq!(list.discount_list[0].discount_name, "Sale");
    assert_eq!(added.discount_id, 11);
}

#[tokio::test]
async fn test_delete_discount_item_posts_ids() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/discount/delete_discount_item"))
        .and(body_partial_json(json!({"discount_id": 10, "item_id": 3, "model_id": 0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"discount_id": 10, "error_list": []}
        })))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let response = client
        .discount()
        .delete_discount_item(10, 3, 0, &shop_scope())
        .await
        .unwrap();

    assert_eq!(response.discount_id, 10);
    assert!(response.error_list.is_empty());
}

#[tokio::test]
async fn test_get_channel_list() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/logistics/get_channel_list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"logistics_channel_list": [
                {"logistics_channel_id": 18025, "enabled": true, "fee_type": "SIZE_SELECTION"}
            ]}
        })))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let response = client
        .logistics()
        .get_channel_list(&shop_scope())
        .await
        .unwrap();

    assert_eq!(response.logistics_channel_list.len(), 1);
    assert!(response.logistics_channel_list[0].enabled);
}

#[tokio::test]
async fn test_get_order_detail_joins_lists() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/order/get_order_detail"))
        .and(query_param("order_sn_list", "A1,B2"))
        .and(query_param("response_optional_fields", "buyer_user_id,item_list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "request_id": "r",
            "response": {"order_list": [
                {"order_sn": "A1", "order_status": "READY_TO_SHIP", "buyer_user_id": 99},
                {"order_sn": "B2", "order_status": "COMPLETED"}
            ]}
        })))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let response = client
        .order()
        .get_order_detail(&["A1", "B2"], &["buyer_user_id", "item_list"], &shop_scope())
        .await
        .unwrap();

    assert_eq!(response.order_list.len(), 2);
    assert_eq!(response.order_list[0].buyer_user_id, 99);
    assert_eq!(response.order_list[1].order_status, "COMPLETED");
}

#[tokio::test]
async fn test_upload_image_is_public_multipart() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/media_space/upload_image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"image_info": {
                "image_id": "sg-1",
                "image_url_list": [{"image_url_region": "SG", "image_url": "https://cf/sg-1"}]
            }}
        })))
        .mount(&mock_server)
        .await;

    let file_path = std::env::temp_dir().join(format!(
        "shopee-api-image-{}.jpg",
        std::process::id()
    ));
    std::fs::write(&file_path, b"JPEGBYTES").unwrap();

    let client = create_client(&mock_server);
    let result = client.media_space().upload_image(&file_path).await;
    std::fs::remove_file(&file_path).unwrap();
    let response = result.unwrap();

    assert_eq!(response.image_info.image_id, "sg-1");

    let requests = mock_server.received_requests().await.unwrap();
    let query = query_of(&requests[0]);
    assert!(!query.contains_key("shop_id"));
    assert!(!query.contains_key("access_token"));
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"image\""));
    assert!(body.contains("JPEGBYTES"));
}
