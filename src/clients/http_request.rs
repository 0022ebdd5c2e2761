//! HTTP request types for the Shopee API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests, plus the helpers that turn typed query options
//! into flat `key=value` pairs.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::{ApiError, InvalidRequestError};

/// HTTP methods supported by the Shopee API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and uploads.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the matching `reqwest` method.
    #[must_use]
    pub const fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A file to send as a multipart upload.
///
/// The contents are read once; the multipart form is rebuilt from them for
/// every attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// The multipart form field name (e.g. `image`).
    pub field: String,
    /// The file name sent with the part (the basename of the source path).
    pub file_name: String,
    /// The file contents.
    pub data: Vec<u8>,
}

impl UploadFile {
    /// Creates an upload from in-memory contents.
    #[must_use]
    pub fn new(field: impl Into<String>, file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            data,
        }
    }

    /// Reads `path` into an upload under the form field `field`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the file cannot be read.
    pub async fn from_path(field: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(field, file_name, data))
    }

    /// Builds a fresh multipart form holding this file.
    pub(crate) fn to_form(&self) -> reqwest::multipart::Form {
        let part = reqwest::multipart::Part::bytes(self.data.clone()).file_name(self.file_name.clone());
        reqwest::multipart::Form::new().part(self.field.clone(), part)
    }
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadFile")
            .field("field", &self.field)
            .field("file_name", &self.file_name)
            .field("len", &self.data.len())
            .finish()
    }
}

/// The body of a request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A JSON document sent as `application/json`.
    Json(Value),
    /// A single file sent as `multipart/form-data`.
    Multipart(UploadFile),
}

/// An HTTP request to be sent to the Shopee API.
///
/// The request carries only what the caller controls. Identity parameters
/// (`partner_id`, `timestamp`, `sign` and the scope's IDs and token) are
/// added by [`HttpClient`](crate::clients::HttpClient) for every attempt.
///
/// # Example
///
/// ```rust
/// use shopee_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "product/get_category")
///     .query_param("language", "en")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "auth/token/get")
///     .json(json!({"code": "abc", "shop_id": 1234567}))
///     .build()
///     .unwrap();
/// assert!(post_request.body.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the versioned API root, optionally with a query.
    pub path: String,
    /// Query parameters; these override parameters already in `path`.
    pub query: BTreeMap<String, String>,
    /// The request body, if any.
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::MissingBody`] if `http_method` is
    /// `Post` or `Put` but `body` is `None`.
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }
        Ok(())
    }

    /// Resolves the request against the versioned API root.
    ///
    /// Returns the absolute URL with its query removed, and the merged query
    /// parameters: those already in `path` first, overridden by
    /// [`query`](Self::query).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::InvalidPath`] if the path cannot be
    /// joined onto `base`.
    pub fn resolve(&self, base: &Url) -> Result<(Url, BTreeMap<String, String>), InvalidRequestError> {
        let relative = self.path.trim_start_matches('/');
        let mut url = base
            .join(relative)
            .map_err(|e| InvalidRequestError::InvalidPath {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        let mut query: BTreeMap<String, String> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        query.extend(self.query.iter().map(|(k, v)| (k.clone(), v.clone())));

        url.set_query(None);
        url.set_fragment(None);
        Ok((url, query))
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: BTreeMap<String, String>,
    body: Option<RequestBody>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: BTreeMap::new(),
            body: None,
        }
    }

    /// Sets a JSON request body.
    #[must_use]
    pub fn json(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(RequestBody::Json(body.into()));
        self
    }

    /// Sets a multipart file body.
    #[must_use]
    pub fn upload(mut self, file: UploadFile) -> Self {
        self.body = Some(RequestBody::Multipart(file));
        self
    }

    /// Adds all query parameters from `query`, replacing existing keys.
    #[must_use]
    pub fn query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query.extend(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}

/// Flattens typed query options into `key=value` pairs.
///
/// `options` must serialize to a JSON object (or `null`/unit for "no
/// options"). Scalars are rendered as strings, arrays of scalars are
/// comma-joined and `null` fields are omitted.
///
/// ```rust
/// use shopee_api::clients::query_from_options;
/// use serde_json::json;
///
/// let query = query_from_options(&json!({
///     "order_sn_list": ["A1", "B2"],
///     "page_size": 20,
///     "cursor": null,
/// }))
/// .unwrap();
///
/// assert_eq!(query["order_sn_list"], "A1,B2");
/// assert_eq!(query["page_size"], "20");
/// assert!(!query.contains_key("cursor"));
/// ```
///
/// # Errors
///
/// Returns [`InvalidRequestError::UnsupportedQuery`] if the options are not
/// an object or contain nested objects.
pub fn query_from_options<T>(options: &T) -> Result<BTreeMap<String, String>, InvalidRequestError>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(options).map_err(|e| InvalidRequestError::UnsupportedQuery {
        reason: e.to_string(),
    })?;

    let fields = match value {
        Value::Null => return Ok(BTreeMap::new()),
        Value::Object(fields) => fields,
        other => {
            return Err(InvalidRequestError::UnsupportedQuery {
                reason: format!("expected an object, got {}", json_kind(&other)),
            })
        }
    };

    let mut query = BTreeMap::new();
    for (key, value) in fields {
        let rendered = match value {
            Value::Null => continue,
            Value::Array(items) => items
                .iter()
                .map(|item| scalar_to_string(&key, item))
                .collect::<Result<Vec<_>, _>>()?
                .join(","),
            other => scalar_to_string(&key, &other)?,
        };
        query.insert(key, rendered);
    }
    Ok(query)
}

fn scalar_to_string(key: &str, value: &Value) -> Result<String, InvalidRequestError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(InvalidRequestError::UnsupportedQuery {
            reason: format!("field '{key}' is {}", json_kind(other)),
        }),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Url {
        Url::parse("https://partner.shopeemobile.com/api/v2/").unwrap()
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
        assert_eq!(HttpMethod::Delete.as_reqwest(), reqwest::Method::DELETE);
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "shop/get_shop_info")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "shop/get_shop_info");
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_verify_requires_body_for_post_and_put() {
        let post = HttpRequest::builder(HttpMethod::Post, "auth/token/get").build();
        assert!(matches!(
            post,
            Err(InvalidRequestError::MissingBody { method }) if method == "post"
        ));

        let put = HttpRequest::builder(HttpMethod::Put, "x").build();
        assert!(matches!(
            put,
            Err(InvalidRequestError::MissingBody { method }) if method == "put"
        ));
    }

    #[test]
    fn test_upload_counts_as_body() {
        let request = HttpRequest::builder(HttpMethod::Post, "media_space/upload_image")
            .upload(UploadFile::new("image", "a.png", vec![1, 2, 3]))
            .build()
            .unwrap();
        assert!(matches!(request.body, Some(RequestBody::Multipart(_))));
    }

    #[test]
    fn test_resolve_strips_leading_slash() {
        let request = HttpRequest::builder(HttpMethod::Get, "/shop/get_profile")
            .build()
            .unwrap();
        let (url, query) = request.resolve(&base()).unwrap();
        assert_eq!(url.as_str(), "https://partner.shopeemobile.com/api/v2/shop/get_profile");
        assert_eq!(url.path(), "/api/v2/shop/get_profile");
        assert!(query.is_empty());
    }

    #[test]
    fn test_resolve_options_override_path_query() {
        let request = HttpRequest::builder(HttpMethod::Get, "product/get_category?language=en&x=1")
            .query_param("language", "zh-hant")
            .build()
            .unwrap();
        let (url, query) = request.resolve(&base()).unwrap();

        assert!(url.query().is_none());
        assert_eq!(url.path(), "/api/v2/product/get_category");
        assert_eq!(query["language"], "zh-hant");
        assert_eq!(query["x"], "1");
    }

    #[test]
    fn test_query_from_options_flattens_scalars_and_lists() {
        #[derive(Serialize)]
        struct Options {
            order_sn_list: Vec<String>,
            page_size: u32,
            need_brand: bool,
            cursor: Option<String>,
        }

        let query = query_from_options(&Options {
            order_sn_list: vec!["A".into(), "B".into()],
            page_size: 50,
            need_brand: true,
            cursor: None,
        })
        .unwrap();

        assert_eq!(query["order_sn_list"], "A,B");
        assert_eq!(query["page_size"], "50");
        assert_eq!(query["need_brand"], "true");
        assert!(!query.contains_key("cursor"));
    }

    #[test]
    fn test_query_from_options_accepts_unit() {
        assert!(query_from_options(&()).unwrap().is_empty());
    }

    #[test]
    fn test_query_from_options_rejects_nested_objects() {
        let result = query_from_options(&json!({"filter": {"a": 1}}));
        assert!(matches!(
            result,
            Err(InvalidRequestError::UnsupportedQuery { .. })
        ));

        let result = query_from_options(&json!([1, 2]));
        assert!(matches!(
            result,
            Err(InvalidRequestError::UnsupportedQuery { .. })
        ));
    }

    #[test]
    fn test_upload_debug_omits_contents() {
        let upload = UploadFile::new("image", "a.png", vec![0xAB; 4]);
        let debug_str = format!("{upload:?}");
        assert!(debug_str.contains("a.png"));
        assert!(debug_str.contains("len: 4"));
    }

    #[tokio::test]
    async fn test_upload_from_missing_path_is_io_error() {
        let result = UploadFile::from_path("image", "/nonexistent/definitely/missing.png").await;
        assert!(matches!(result, Err(ApiError::Io(_))));
    }
}
