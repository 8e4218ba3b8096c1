use axum::{extract::Extension, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::middleware::{PartitionPool, TenantId};
use crate::services::AdvisoryService;

/// GET /stats - area/center counts for the tenant plus a best-effort
/// capacity analysis from the advisory upstream.
pub async fn stats(
    Extension(PartitionPool(pool)): Extension<PartitionPool>,
    Extension(TenantId(tenant_id)): Extension<TenantId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (area_count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM areas WHERE tenant_id = $1")
            .bind(tenant_id)
            .fetch_one(&pool)
            .await?;

    let (center_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM centers")
        .fetch_one(&pool)
        .await?;

    let advisory = AdvisoryService::new()
        .capacity_analysis(area_count, center_count)
        .await;

    Ok(Json(json!({
        "area_count": area_count,
        "center_count": center_count,
        "advisory": advisory,
    })))
}
