//! Version-specific REST resource implementations.
//!
//! Resources are organized by API version:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports latest version)
//!   v2/
//!     mod.rs         <- Version-specific resources
//! ```
//!
//! The latest version is re-exported at this module level:
//!
//! ```rust,ignore
//! use shopee_api::rest::resources::GetOrderDetailResponse; // latest version
//! use shopee_api::rest::resources::v2::GetOrderDetailResponse; // explicit
//! ```

pub mod v2;

pub use v2::*;
