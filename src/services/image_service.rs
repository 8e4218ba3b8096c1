use std::time::Duration;

use serde_json::Value;

use crate::config;

#[derive(Debug, thiserror::Error)]
pub enum ImageHostError {
    #[error("Image host API key is not configured")]
    MissingKey,
    #[error("Image host request failed: {0}")]
    Upload(#[from] reqwest::Error),
    #[error("Image host rejected the upload: {0}")]
    Rejected(String),
}

impl From<ImageHostError> for crate::error::ApiError {
    fn from(err: ImageHostError) -> Self {
        match err {
            ImageHostError::MissingKey => {
                crate::error::ApiError::internal_server_error(err.to_string())
            }
            other => {
                tracing::error!("Image upload failed: {}", other);
                crate::error::ApiError::bad_gateway("Image upload failed")
            }
        }
    }
}

/// Client for the third-party image host. Uploads a center photo and
/// returns the hosted URL; the record stores only that URL. Unlike the
/// advisory upstream this is required data, so failures are fatal to the
/// save that triggered them.
pub struct ImageHostService {
    client: reqwest::Client,
}

impl ImageHostService {
    pub fn new() -> Self {
        let timeout = config::config().image_host.timeout_secs;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Upload image bytes under the tenant's key override when present,
    /// else the globally configured key.
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        filename: String,
        tenant_key: Option<&str>,
    ) -> Result<String, ImageHostError> {
        let host = &config::config().image_host;
        let api_key = tenant_key
            .or(host.api_key.as_deref())
            .ok_or(ImageHostError::MissingKey)?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(&host.endpoint)
            .query(&[("key", api_key)])
            .multipart(form)
            .send()
            .await?;

        let body: Value = response.json().await?;

        if body.get("success").and_then(Value::as_bool) == Some(true) {
            if let Some(url) = body.pointer("/data/url").and_then(Value::as_str) {
                return Ok(url.to_string());
            }
        }

        let reason = body
            .pointer("/error/message")
            .and_then(Value::as_str)
            .unwrap_or("unexpected response")
            .to_string();
        Err(ImageHostError::Rejected(reason))
    }
}

impl Default for ImageHostService {
    fn default() -> Self {
        Self::new()
    }
}
