use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Candidate symbol ("markha") record, a later addition to the system.
/// Partition-scoped, same addressing as key contacts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Symbol {
    pub id: Uuid,
    pub name: String,
    pub party: String,
    pub nominee: String,
    pub image_url: Option<String>,
}
