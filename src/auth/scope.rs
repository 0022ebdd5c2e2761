//! Per-call identity scoping.
//!
//! Every Shopee request is either public (partner credentials only), or acts
//! on behalf of a shop or a merchant account. The scope is passed explicitly
//! into each call and is never stored on a shared client.

use std::fmt;

/// The identity a single request acts on behalf of.
///
/// A scope is a value, not client state: build one per call (or keep one per
/// tenant) and pass it by reference. Because shop and merchant scope are
/// separate variants, a request can never carry both.
///
/// # Example
///
/// ```rust
/// use shopee_api::RequestScope;
///
/// let scope = RequestScope::shop(1234567, "access-token");
/// assert_eq!(scope.shop_id(), Some(1234567));
/// assert!(RequestScope::Public.access_token().is_none());
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub enum RequestScope {
    /// Partner-level endpoints (e.g. `auth/token/get`).
    #[default]
    Public,
    /// Endpoints acting on behalf of a single shop.
    Shop {
        /// The shop ID.
        shop_id: u64,
        /// The OAuth access token issued for the shop.
        access_token: String,
    },
    /// Endpoints acting on behalf of a merchant (main account).
    Merchant {
        /// The merchant ID.
        merchant_id: u64,
        /// The OAuth access token issued for the merchant.
        access_token: String,
    },
}

impl RequestScope {
    /// Creates a shop scope.
    ///
    /// `shop_id` must be non-zero; a zero ID is rejected when the request is
    /// sent. Use [`RequestScope::resolve`] when `0` means "no shop".
    #[must_use]
    pub fn shop(shop_id: u64, access_token: impl Into<String>) -> Self {
        Self::Shop {
            shop_id,
            access_token: access_token.into(),
        }
    }

    /// Creates a merchant scope.
    ///
    /// `merchant_id` must be non-zero; a zero ID is rejected when the request
    /// is sent.
    #[must_use]
    pub fn merchant(merchant_id: u64, access_token: impl Into<String>) -> Self {
        Self::Merchant {
            merchant_id,
            access_token: access_token.into(),
        }
    }

    /// Resolves a scope from loosely-typed IDs where `0` means "absent".
    ///
    /// When both IDs are non-zero the shop ID takes precedence. When both are
    /// zero the request is public and the access token is ignored.
    ///
    /// ```rust
    /// use shopee_api::RequestScope;
    ///
    /// let scope = RequestScope::resolve(11, 22, "tok");
    /// assert_eq!(scope, RequestScope::shop(11, "tok"));
    /// ```
    #[must_use]
    pub fn resolve(shop_id: u64, merchant_id: u64, access_token: impl Into<String>) -> Self {
        if shop_id != 0 {
            Self::shop(shop_id, access_token)
        } else if merchant_id != 0 {
            Self::merchant(merchant_id, access_token)
        } else {
            Self::Public
        }
    }

    /// Returns `true` for partner-level requests.
    #[must_use]
    pub const fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }

    /// Returns the shop ID for shop-scoped requests.
    #[must_use]
    pub const fn shop_id(&self) -> Option<u64> {
        match self {
            Self::Shop { shop_id, .. } => Some(*shop_id),
            _ => None,
        }
    }

    /// Returns the merchant ID for merchant-scoped requests.
    #[must_use]
    pub const fn merchant_id(&self) -> Option<u64> {
        match self {
            Self::Merchant { merchant_id, .. } => Some(*merchant_id),
            _ => None,
        }
    }

    /// Returns the access token, if the scope carries one.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        match self {
            Self::Public => None,
            Self::Shop { access_token, .. } | Self::Merchant { access_token, .. } => {
                Some(access_token)
            }
        }
    }

    /// Returns the identity query parameters injected next to the signature.
    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Public => Vec::new(),
            Self::Shop {
                shop_id,
                access_token,
            } => vec![
                ("shop_id", shop_id.to_string()),
                ("access_token", access_token.clone()),
            ],
            Self::Merchant {
                merchant_id,
                access_token,
            } => vec![
                ("merchant_id", merchant_id.to_string()),
                ("access_token", access_token.clone()),
            ],
        }
    }
}

impl fmt::Debug for RequestScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("Public"),
            Self::Shop { shop_id, .. } => f
                .debug_struct("Shop")
                .field("shop_id", shop_id)
                .field("access_token", &"*****")
                .finish(),
            Self::Merchant { merchant_id, .. } => f
                .debug_struct("Merchant")
                .field("merchant_id", merchant_id)
                .field("access_token", &"*****")
                .finish(),
        }
    }
}
