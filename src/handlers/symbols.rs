use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::database::models::Symbol;
use crate::error::ApiError;
use crate::middleware::PartitionPool;

#[derive(Debug, Deserialize)]
pub struct SymbolPayload {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub nominee: String,
    pub image_url: Option<String>,
}

impl SymbolPayload {
    fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("Missing required field: name"));
        }
        Ok(())
    }
}

/// GET /symbols
pub async fn list(
    Extension(PartitionPool(pool)): Extension<PartitionPool>,
) -> Result<Json<Vec<Symbol>>, ApiError> {
    let symbols = sqlx::query_as::<_, Symbol>("SELECT * FROM symbols ORDER BY name ASC")
        .fetch_all(&pool)
        .await?;
    Ok(Json(symbols))
}

/// POST /symbols
pub async fn create(
    Extension(PartitionPool(pool)): Extension<PartitionPool>,
    Json(payload): Json<SymbolPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let id = payload.id.unwrap_or_else(Uuid::new_v4);

    let symbol = sqlx::query_as::<_, Symbol>(
        r#"
        INSERT INTO symbols (id, name, party, nominee, image_url)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.name.trim())
    .bind(payload.party.trim())
    .bind(payload.nominee.trim())
    .bind(&payload.image_url)
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(symbol)))
}

/// PUT /symbols/:id
pub async fn update(
    Extension(PartitionPool(pool)): Extension<PartitionPool>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SymbolPayload>,
) -> Result<Json<Symbol>, ApiError> {
    payload.validate()?;

    let symbol = sqlx::query_as::<_, Symbol>(
        r#"
        UPDATE symbols
        SET name = $2, party = $3, nominee = $4, image_url = $5
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.name.trim())
    .bind(payload.party.trim())
    .bind(payload.nominee.trim())
    .bind(&payload.image_url)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ApiError::not_found(format!("Symbol not found: {}", id)))?;

    Ok(Json(symbol))
}

/// DELETE /symbols/:id
pub async fn delete(
    Extension(PartitionPool(pool)): Extension<PartitionPool>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let result = sqlx::query("DELETE FROM symbols WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found(format!("Symbol not found: {}", id)));
    }

    Ok(Json(json!({ "success": true })))
}
