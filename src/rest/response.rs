//! Response envelope shared by every Shopee API endpoint.
//!
//! Each response carries the same envelope fields (`request_id`, `error`,
//! `message`, `warning`), usually next to a `response` object holding the
//! endpoint's payload. [`ApiResponse<T>`] models that shape and implements
//! `Deref<Target = T>` for direct access to the payload:
//!
//! ```rust
//! use shopee_api::rest::ApiResponse;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct Profile {
//!     shop_name: String,
//! }
//!
//! let response: ApiResponse<Profile> = serde_json::from_str(
//!     r#"{"request_id":"abc","error":"","message":"","response":{"shop_name":"Acme"}}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(response.shop_name, "Acme"); // via Deref
//! assert_eq!(response.request_id(), "abc");
//! ```
//!
//! By the time a value of these types reaches the caller, the client has
//! already turned a non-empty `error` into an [`ApiError`](crate::ApiError).

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Deserializer, Serialize};

/// The envelope fields every response carries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseResponse {
    /// Identifier of the API call, for support requests.
    #[serde(deserialize_with = "null_as_default")]
    pub request_id: String,
    /// Error code; empty on success.
    #[serde(deserialize_with = "null_as_default")]
    pub error: String,
    /// Error details; empty on success.
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// Non-fatal warning attached to a successful call.
    #[serde(deserialize_with = "null_as_default")]
    pub warning: String,
}

impl BaseResponse {
    /// Returns `true` if the server attached a warning.
    #[must_use]
    pub fn has_warning(&self) -> bool {
        !self.warning.is_empty()
    }
}

/// A response whose payload lives under the `response` key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// The envelope fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The endpoint payload.
    #[serde(default = "Default::default", deserialize_with = "null_as_default")]
    #[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
    pub response: T,
}

impl<T> ApiResponse<T> {
    /// Consumes the envelope and returns the payload.
    pub fn into_inner(self) -> T {
        self.response
    }

    /// Returns the `request_id` of the call.
    #[must_use]
    pub fn request_id(&self) -> &str {
        &self.base.request_id
    }

    /// Returns the warning attached to the call, if any.
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.base.has_warning().then_some(self.base.warning.as_str())
    }

    /// Maps the payload, keeping the envelope.
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            base: self.base,
            response: f(self.response),
        }
    }
}

impl<T> Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.response
    }
}

impl<T> DerefMut for ApiResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.response
    }
}

/// Deserializes `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
