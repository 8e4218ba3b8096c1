use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A regional ("Upazilla") configuration in the directory database.
///
/// `partition_url` points at the tenant's private Postgres database;
/// `api_key` optionally overrides the global image-host key. The password
/// is stored in plaintext, matching the system this replaces.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub password: String,
    pub partition_url: String,
    pub port: Option<String>,
    pub api_key: Option<String>,
    pub created_at: DateTime<Utc>,
}
