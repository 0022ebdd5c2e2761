//! Typed access to the Shopee REST endpoints.
//!
//! - [`ApiResponse<T>`]: the common envelope around an endpoint's payload
//! - [`BaseResponse`]: the envelope fields every response carries
//! - [`resources`]: per-resource services and their request/response types
//!
//! Services are reached through accessors on [`ShopeeClient`](crate::ShopeeClient):
//!
//! ```rust,ignore
//! let scope = RequestScope::shop(1234567, "access-token");
//!
//! let categories = client.product().get_category("en", &scope).await?;
//! for category in &categories.category_list {
//!     println!("{} {}", category.category_id, category.display_category_name);
//! }
//! ```

pub mod resources;
mod response;

pub use response::{ApiResponse, BaseResponse};
pub(crate) use response::null_as_default;
