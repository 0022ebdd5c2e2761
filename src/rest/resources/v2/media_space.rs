//! Image uploads.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::auth::RequestScope;
use crate::clients::ApiError;
use crate::rest::ApiResponse;
use crate::ShopeeClient;

/// Multipart field carrying the image.
const IMAGE_FIELD: &str = "image";

/// URL of an uploaded image in one region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageUrl {
    /// Region the URL serves.
    pub image_url_region: String,
    /// The URL.
    pub image_url: String,
}

/// An uploaded image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageInfo {
    /// ID to reference the image from items.
    pub image_id: String,
    /// Per-region URLs.
    pub image_url_list: Vec<ImageUrl>,
}

/// Payload of `media_space/upload_image`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadedImage {
    /// The stored image.
    pub image_info: ImageInfo,
}

/// Response of `media_space/upload_image`.
pub type UploadImageResponse = ApiResponse<UploadedImage>;

/// Media space endpoints. Calls are partner-signed only.
#[derive(Debug, Clone, Copy)]
pub struct MediaSpaceApi<'a> {
    client: &'a ShopeeClient,
}

impl<'a> MediaSpaceApi<'a> {
    pub(crate) const fn new(client: &'a ShopeeClient) -> Self {
        Self { client }
    }

    /// Uploads an image file.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the file cannot be read, or another
    /// [`ApiError`] if the call fails.
    pub async fn upload_image(
        &self,
        file_path: impl AsRef<Path>,
    ) -> Result<UploadImageResponse, ApiError> {
        self.client
            .upload(
                "media_space/upload_image",
                IMAGE_FIELD,
                file_path,
                &RequestScope::Public,
            )
            .await
    }
}
