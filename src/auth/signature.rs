//! HMAC-SHA256 request signing for the Shopee Open Platform.
//!
//! Every request carries a `sign` query parameter computed over a baseline
//! string made of the partner ID, the request path, the Unix timestamp and,
//! for scoped requests, the access token followed by the shop or merchant ID:
//!
//! | Scope    | Baseline                                               |
//! |----------|--------------------------------------------------------|
//! | Public   | `partner_id` `path` `timestamp`                        |
//! | Shop     | `partner_id` `path` `timestamp` `access_token` `shop_id`     |
//! | Merchant | `partner_id` `path` `timestamp` `access_token` `merchant_id` |
//!
//! Fields are concatenated without separators. The signature is the
//! lowercase hex HMAC-SHA256 of the baseline keyed with the partner key.
//!
//! The upstream service rejects stale timestamps, so a signature must be
//! recomputed for every attempt of a request.
//!
//! # Example
//!
//! ```rust
//! use shopee_api::auth::signature::{sign, verify};
//! use shopee_api::{PartnerId, PartnerKey, RequestScope};
//!
//! let partner_id = PartnerId::new(2001887).unwrap();
//! let key = PartnerKey::new("hush").unwrap();
//! let scope = RequestScope::shop(1234567, "access-token");
//!
//! let sig = sign(partner_id, &key, "/api/v2/shop/get_shop_info", 1_700_000_000, &scope);
//! assert_eq!(sig.len(), 64);
//! assert!(verify(partner_id, &key, "/api/v2/shop/get_shop_info", 1_700_000_000, &scope, &sig));
//! ```

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::auth::RequestScope;
use crate::config::{PartnerId, PartnerKey};

type HmacSha256 = Hmac<Sha256>;

/// A signature together with the timestamp it was computed for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// Unix epoch seconds the signature is bound to.
    pub timestamp: i64,
    /// Lowercase hex HMAC-SHA256.
    pub sign: String,
}

/// Builds the signature baseline string for a request.
#[must_use]
pub fn signature_base(
    partner_id: PartnerId,
    path: &str,
    timestamp: i64,
    scope: &RequestScope,
) -> String {
    match scope {
        RequestScope::Public => format!("{partner_id}{path}{timestamp}"),
        RequestScope::Shop {
            shop_id,
            access_token,
        } => format!("{partner_id}{path}{timestamp}{access_token}{shop_id}"),
        RequestScope::Merchant {
            merchant_id,
            access_token,
        } => format!("{partner_id}{path}{timestamp}{access_token}{merchant_id}"),
    }
}

/// Computes the hex-encoded request signature.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn sign(
    partner_id: PartnerId,
    partner_key: &PartnerKey,
    path: &str,
    timestamp: i64,
    scope: &RequestScope,
) -> String {
    let mut mac =
        HmacSha256::new_from_slice(partner_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(signature_base(partner_id, path, timestamp, scope).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Signs a request with the current Unix timestamp.
#[must_use]
pub fn sign_now(
    partner_id: PartnerId,
    partner_key: &PartnerKey,
    path: &str,
    scope: &RequestScope,
) -> Signature {
    let timestamp = current_timestamp();
    Signature {
        timestamp,
        sign: sign(partner_id, partner_key, path, timestamp, scope),
    }
}

/// Checks a signature against the baseline formula in constant time.
#[must_use]
pub fn verify(
    partner_id: PartnerId,
    partner_key: &PartnerKey,
    path: &str,
    timestamp: i64,
    scope: &RequestScope,
    signature: &str,
) -> bool {
    let expected = sign(partner_id, partner_key, path, timestamp, scope);
    expected.as_bytes().ct_eq(signature.as_bytes()).into()
}

/// Current Unix epoch seconds.
#[must_use]
pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
