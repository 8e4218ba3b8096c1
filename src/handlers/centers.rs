use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use sqlx::types::Json as Jsonb;
use uuid::Uuid;

use crate::database::models::{CenterCategory, CenterSummary, Officer, VotingCenter};
use crate::error::ApiError;
use crate::middleware::PartitionPool;
use crate::services::AdvisoryService;

/// Create/update body: the full projection is the only writable form.
#[derive(Debug, Deserialize)]
pub struct CenterPayload {
    pub id: Option<Uuid>,
    pub area_id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub map_link: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub presiding_officer: Officer,
    #[serde(default)]
    pub assistant_presiding_officer: Officer,
    #[serde(default)]
    pub police_officer: Officer,
    pub category: Option<CenterCategory>,
    pub comment: Option<String>,
}

impl CenterPayload {
    fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("Missing required field: name"));
        }
        if self.location.trim().is_empty() {
            return Err(ApiError::validation("Missing required field: location"));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub area_id: Option<Uuid>,
}

/// GET /centers?area_id= - lite projection for listings
pub async fn list(
    Extension(PartitionPool(pool)): Extension<PartitionPool>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<CenterSummary>>, ApiError> {
    let area_id = query
        .area_id
        .ok_or_else(|| ApiError::bad_request("Missing area_id query parameter"))?;

    let centers = sqlx::query_as::<_, CenterSummary>(
        r#"
        SELECT id, area_id, name, location, category
        FROM centers
        WHERE area_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(area_id)
    .fetch_all(&pool)
    .await?;

    Ok(Json(centers))
}

/// GET /centers/:id - full projection for detail/edit
pub async fn get(
    Extension(PartitionPool(pool)): Extension<PartitionPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<VotingCenter>, ApiError> {
    let center = fetch_center(&pool, id).await?;
    Ok(Json(center))
}

/// POST /centers - create from the full projection
pub async fn create(
    Extension(PartitionPool(pool)): Extension<PartitionPool>,
    Json(payload): Json<CenterPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let id = payload.id.unwrap_or_else(Uuid::new_v4);

    let center = sqlx::query_as::<_, VotingCenter>(
        r#"
        INSERT INTO centers (
            id, area_id, name, location, map_link, image_url,
            presiding_officer, assistant_presiding_officer, police_officer,
            category, comment
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.area_id)
    .bind(payload.name.trim())
    .bind(payload.location.trim())
    .bind(&payload.map_link)
    .bind(&payload.image_url)
    .bind(Jsonb(&payload.presiding_officer))
    .bind(Jsonb(&payload.assistant_presiding_officer))
    .bind(Jsonb(&payload.police_officer))
    .bind(payload.category.map(|c| c.as_str()))
    .bind(&payload.comment)
    .fetch_one(&pool)
    .await?;

    tracing::info!("Center created: {} ({})", center.name, center.id);
    Ok((StatusCode::CREATED, Json(center)))
}

/// PUT /centers/:id - replace with the submitted full projection
pub async fn update(
    Extension(PartitionPool(pool)): Extension<PartitionPool>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CenterPayload>,
) -> Result<Json<VotingCenter>, ApiError> {
    payload.validate()?;

    let center = sqlx::query_as::<_, VotingCenter>(
        r#"
        UPDATE centers
        SET area_id = $2, name = $3, location = $4, map_link = $5, image_url = $6,
            presiding_officer = $7, assistant_presiding_officer = $8, police_officer = $9,
            category = $10, comment = $11
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.area_id)
    .bind(payload.name.trim())
    .bind(payload.location.trim())
    .bind(&payload.map_link)
    .bind(&payload.image_url)
    .bind(Jsonb(&payload.presiding_officer))
    .bind(Jsonb(&payload.assistant_presiding_officer))
    .bind(Jsonb(&payload.police_officer))
    .bind(payload.category.map(|c| c.as_str()))
    .bind(&payload.comment)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ApiError::not_found(format!("Center not found: {}", id)))?;

    tracing::info!("Center updated: {} ({})", center.name, center.id);
    Ok(Json(center))
}

/// POST /centers/:id/advisory - best-effort security plan text
pub async fn advisory(
    Extension(PartitionPool(pool)): Extension<PartitionPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let center = fetch_center(&pool, id).await?;
    let plan = AdvisoryService::new().security_plan(&center).await;
    Ok(Json(json!({ "advisory": plan })))
}

async fn fetch_center(pool: &sqlx::PgPool, id: Uuid) -> Result<VotingCenter, ApiError> {
    sqlx::query_as::<_, VotingCenter>("SELECT * FROM centers WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Center not found: {}", id)))
}
