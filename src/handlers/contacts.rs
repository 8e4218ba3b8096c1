use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::database::models::contact::{order_by_rank, ContactCategory, KeyContact};
use crate::error::ApiError;
use crate::middleware::PartitionPool;

#[derive(Debug, Deserialize)]
pub struct ContactPayload {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub phone: String,
    pub category: ContactCategory,
    #[serde(default)]
    pub rank: i32,
}

impl ContactPayload {
    fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("Missing required field: name"));
        }
        if self.phone.trim().is_empty() {
            return Err(ApiError::validation("Missing required field: phone"));
        }
        Ok(())
    }
}

/// GET /contacts - ascending by rank; equal ranks keep creation order
pub async fn list(
    Extension(PartitionPool(pool)): Extension<PartitionPool>,
) -> Result<Json<Vec<KeyContact>>, ApiError> {
    // Fetched in insertion order; the stable sort layers rank on top
    let mut contacts =
        sqlx::query_as::<_, KeyContact>("SELECT * FROM contacts ORDER BY seq ASC")
            .fetch_all(&pool)
            .await?;

    order_by_rank(&mut contacts);
    Ok(Json(contacts))
}

/// POST /contacts
pub async fn create(
    Extension(PartitionPool(pool)): Extension<PartitionPool>,
    Json(payload): Json<ContactPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let id = payload.id.unwrap_or_else(Uuid::new_v4);

    let contact = sqlx::query_as::<_, KeyContact>(
        r#"
        INSERT INTO contacts (id, name, designation, phone, category, rank)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.name.trim())
    .bind(payload.designation.trim())
    .bind(payload.phone.trim())
    .bind(payload.category.as_str())
    .bind(payload.rank)
    .fetch_one(&pool)
    .await?;

    tracing::info!("Contact created: {} ({})", contact.name, contact.id);
    Ok((StatusCode::CREATED, Json(contact)))
}

/// PUT /contacts/:id
pub async fn update(
    Extension(PartitionPool(pool)): Extension<PartitionPool>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<KeyContact>, ApiError> {
    payload.validate()?;

    let contact = sqlx::query_as::<_, KeyContact>(
        r#"
        UPDATE contacts
        SET name = $2, designation = $3, phone = $4, category = $5, rank = $6
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.name.trim())
    .bind(payload.designation.trim())
    .bind(payload.phone.trim())
    .bind(payload.category.as_str())
    .bind(payload.rank)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| ApiError::not_found(format!("Contact not found: {}", id)))?;

    Ok(Json(contact))
}

/// DELETE /contacts/:id
pub async fn delete(
    Extension(PartitionPool(pool)): Extension<PartitionPool>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found(format!("Contact not found: {}", id)));
    }

    Ok(Json(json!({ "success": true })))
}
