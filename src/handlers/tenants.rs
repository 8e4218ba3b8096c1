use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use uuid::Uuid;

use crate::database::models::Tenant;
use crate::error::ApiError;
use crate::services::tenant_service::{TenantPayload, TenantService};

/// GET /tenants - full directory listing
pub async fn list() -> Result<Json<Vec<Tenant>>, ApiError> {
    let service = TenantService::new().await?;
    let tenants = service.list().await?;
    Ok(Json(tenants))
}

/// POST /tenants - provision a new tenant configuration
pub async fn create(Json(payload): Json<TenantPayload>) -> Result<impl IntoResponse, ApiError> {
    // Field validation runs before the directory pool is touched
    payload.validate()?;

    let service = TenantService::new().await?;
    let tenant = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(tenant)))
}

/// PUT /tenants/:id - replace a tenant configuration
pub async fn update(
    Path(id): Path<Uuid>,
    Json(payload): Json<TenantPayload>,
) -> Result<Json<Tenant>, ApiError> {
    payload.validate()?;

    let service = TenantService::new().await?;
    let tenant = service.update(id, payload).await?;
    Ok(Json(tenant))
}

/// DELETE /tenants/:id - remove a tenant from the directory.
///
/// Partition data is left in place (orphaned partitions are an accepted
/// gap) and an already-cached partition connection keeps serving.
pub async fn delete(Path(id): Path<Uuid>) -> Result<impl IntoResponse, ApiError> {
    let service = TenantService::new().await?;
    service.delete(id).await?;
    Ok(Json(json!({ "success": true })))
}
