use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::{Area, AreaKind};
use crate::error::ApiError;
use crate::middleware::{PartitionPool, TenantId};

#[derive(Debug, Deserialize)]
pub struct AreaPayload {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    pub kind: AreaKind,
}

/// GET /areas - all areas for the request's tenant
pub async fn list(
    Extension(PartitionPool(pool)): Extension<PartitionPool>,
    Extension(TenantId(tenant_id)): Extension<TenantId>,
) -> Result<Json<Vec<Area>>, ApiError> {
    let areas = sqlx::query_as::<_, Area>(
        "SELECT * FROM areas WHERE tenant_id = $1 ORDER BY created_at ASC",
    )
    .bind(tenant_id)
    .fetch_all(&pool)
    .await?;

    Ok(Json(areas))
}

/// POST /areas - create an area in the tenant's partition
pub async fn create(
    Extension(PartitionPool(pool)): Extension<PartitionPool>,
    Extension(TenantId(tenant_id)): Extension<TenantId>,
    Json(payload): Json<AreaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::validation("Missing required field: name"));
    }

    // Clients may submit their own collision-resistant id
    let id = payload.id.unwrap_or_else(Uuid::new_v4);

    let area = sqlx::query_as::<_, Area>(
        r#"
        INSERT INTO areas (id, tenant_id, name, kind)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(tenant_id)
    .bind(payload.name.trim())
    .bind(payload.kind.as_str())
    .fetch_one(&pool)
    .await?;

    tracing::info!("Area created: {} ({})", area.name, area.id);
    Ok((StatusCode::CREATED, Json(area)))
}
