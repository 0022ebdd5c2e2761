//! Authentication for the Shopee Open Platform.
//!
//! - [`signature`]: HMAC-SHA256 request signing
//! - [`RequestScope`]: the per-call identity (public, shop, or merchant)
//! - [`Session`]: tokens obtained from the auth endpoints
//!
//! Obtaining and refreshing tokens goes through
//! [`ShopeeClient::auth`](crate::ShopeeClient::auth).

mod scope;
pub mod session;
pub mod signature;

pub use scope::RequestScope;
pub use session::{AuthTarget, Session};
pub use signature::Signature;
