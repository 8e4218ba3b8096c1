use axum::{
    extract::{Extension, Multipart},
    Json,
};
use serde_json::json;

use crate::error::ApiError;
use crate::middleware::TenantId;
use crate::services::{ImageHostService, TenantService};

/// POST /images - proxy a center photo to the image host.
///
/// The tenant's api_key override takes precedence over the global key.
/// Unlike the advisory upstream, a failure here is fatal: the client's
/// enclosing save must not proceed without the hosted URL.
pub async fn upload(
    Extension(TenantId(tenant_id)): Extension<TenantId>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::bad_request("Malformed multipart body"))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| ApiError::bad_request("Unreadable image field"))?
            .to_vec();

        if bytes.is_empty() {
            return Err(ApiError::validation("Image field is empty"));
        }

        // The directory row may be gone for a deleted-but-cached tenant;
        // fall back to the global key in that case.
        let service = TenantService::new().await?;
        let tenant = service.get(tenant_id).await?;
        let tenant_key = tenant.as_ref().and_then(|t| t.api_key.as_deref());

        let url = ImageHostService::new()
            .upload(bytes, filename, tenant_key)
            .await?;

        return Ok(Json(json!({ "url": url })));
    }

    Err(ApiError::validation("Missing image field"))
}
