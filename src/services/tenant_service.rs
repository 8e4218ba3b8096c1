use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{ConnectionManager, DatabaseError};
use crate::database::models::Tenant;

#[derive(Debug, thiserror::Error)]
pub enum TenantError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Connection manager error: {0}")]
    Manager(#[from] DatabaseError),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("{0}")]
    InvalidPartitionUrl(String),
    #[error("Username already in use: {0}")]
    DuplicateUsername(String),
    #[error("Tenant not found: {0}")]
    NotFound(Uuid),
}

/// Request body for tenant create/update. The record id is always
/// server-generated for directory entries.
#[derive(Debug, Clone, Deserialize)]
pub struct TenantPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub partition_url: String,
    pub port: Option<String>,
    pub api_key: Option<String>,
}

impl TenantPayload {
    /// Field validation, runs before any directory access so a malformed
    /// request never touches the database.
    pub fn validate(&self) -> Result<(), TenantError> {
        if self.name.trim().is_empty() {
            return Err(TenantError::MissingField("name"));
        }
        if self.username.trim().is_empty() {
            return Err(TenantError::MissingField("username"));
        }
        if self.password.is_empty() {
            return Err(TenantError::MissingField("password"));
        }
        if self.partition_url.trim().is_empty() {
            return Err(TenantError::MissingField("partition_url"));
        }
        ConnectionManager::validate_partition_url(&self.partition_url).map_err(|_| {
            TenantError::InvalidPartitionUrl(format!(
                "Partition URL must be a postgres:// URL: {}",
                self.partition_url
            ))
        })?;
        Ok(())
    }
}

/// Tenant Directory operations against the shared directory database.
pub struct TenantService {
    directory: PgPool,
}

impl TenantService {
    pub async fn new() -> Result<Self, TenantError> {
        let directory = ConnectionManager::directory_pool().await?;
        Ok(Self { directory })
    }

    /// All tenants in insertion order.
    pub async fn list(&self) -> Result<Vec<Tenant>, TenantError> {
        let tenants = sqlx::query_as::<_, Tenant>(
            "SELECT * FROM tenants ORDER BY created_at ASC",
        )
        .fetch_all(&self.directory)
        .await?;
        Ok(tenants)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Tenant>, TenantError> {
        let tenant = sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.directory)
            .await?;
        Ok(tenant)
    }

    pub async fn create(&self, payload: TenantPayload) -> Result<Tenant, TenantError> {
        payload.validate()?;

        // Usernames are unique across the directory (decided; the system
        // this replaces allowed duplicates and resolved logins first-match)
        if self.username_taken(&payload.username, None).await? {
            return Err(TenantError::DuplicateUsername(payload.username));
        }

        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            INSERT INTO tenants (id, name, username, password, partition_url, port, api_key)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(payload.name.trim())
        .bind(payload.username.trim())
        .bind(&payload.password)
        .bind(payload.partition_url.trim())
        .bind(&payload.port)
        .bind(&payload.api_key)
        .fetch_one(&self.directory)
        .await?;

        tracing::info!("Tenant created: {} ({})", tenant.name, tenant.id);
        Ok(tenant)
    }

    /// Replace a tenant record by id, then evict its cached partition pool
    /// so an edited partition URL takes effect on the next request.
    pub async fn update(&self, id: Uuid, payload: TenantPayload) -> Result<Tenant, TenantError> {
        payload.validate()?;

        if self.username_taken(&payload.username, Some(id)).await? {
            return Err(TenantError::DuplicateUsername(payload.username));
        }

        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            UPDATE tenants
            SET name = $2, username = $3, password = $4, partition_url = $5, port = $6, api_key = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.name.trim())
        .bind(payload.username.trim())
        .bind(&payload.password)
        .bind(payload.partition_url.trim())
        .bind(&payload.port)
        .bind(&payload.api_key)
        .fetch_optional(&self.directory)
        .await?
        .ok_or(TenantError::NotFound(id))?;

        ConnectionManager::invalidate(id).await;

        tracing::info!("Tenant updated: {} ({})", tenant.name, tenant.id);
        Ok(tenant)
    }

    /// Remove a tenant from the directory. Does not cascade into the
    /// tenant's partition data, and does not evict an already-cached
    /// partition pool: an open connection keeps serving until restart.
    pub async fn delete(&self, id: Uuid) -> Result<(), TenantError> {
        let result = sqlx::query("DELETE FROM tenants WHERE id = $1")
            .bind(id)
            .execute(&self.directory)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TenantError::NotFound(id));
        }

        tracing::info!("Tenant deleted: {}", id);
        Ok(())
    }

    async fn username_taken(
        &self,
        username: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, TenantError> {
        let count: (i64,) = match exclude {
            Some(id) => {
                sqlx::query_as("SELECT COUNT(*) FROM tenants WHERE username = $1 AND id <> $2")
                    .bind(username.trim())
                    .bind(id)
                    .fetch_one(&self.directory)
                    .await?
            }
            None => sqlx::query_as("SELECT COUNT(*) FROM tenants WHERE username = $1")
                .bind(username.trim())
                .fetch_one(&self.directory)
                .await?,
        };
        Ok(count.0 > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> TenantPayload {
        TenantPayload {
            name: "Sadar".to_string(),
            username: "admin1".to_string(),
            password: "pw1".to_string(),
            partition_url: "postgres://localhost:5432/sadar".to_string(),
            port: None,
            api_key: None,
        }
    }

    #[test]
    fn accepts_a_complete_payload() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn rejects_missing_required_fields() {
        for field in ["name", "username", "password"] {
            let mut p = payload();
            match field {
                "name" => p.name.clear(),
                "username" => p.username = "   ".to_string(),
                _ => p.password.clear(),
            }
            let err = p.validate().unwrap_err();
            assert!(matches!(err, TenantError::MissingField(f) if f == field));
        }
    }

    #[test]
    fn rejects_non_postgres_partition_urls() {
        let mut p = payload();
        p.partition_url = "mongodb+srv://cluster0.example.net/sadar".to_string();
        assert!(matches!(
            p.validate(),
            Err(TenantError::InvalidPartitionUrl(_))
        ));
    }
}
