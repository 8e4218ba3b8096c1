use axum::Json;
use serde::Deserialize;

use crate::auth::{self, Role, Session};
use crate::config;
use crate::error::ApiError;
use crate::services::TenantService;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub role: Role,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /auth/login - session gate for both roles.
///
/// Super-admin checks the configuration-supplied pair and never touches
/// the directory; tenant-admin scans the directory for a credential match.
pub async fn login(Json(req): Json<LoginRequest>) -> Result<Json<Session>, ApiError> {
    match req.role {
        Role::SuperAdmin => {
            if auth::super_admin_matches(&config::config().security, &req.username, &req.password) {
                Ok(Json(Session::super_admin()))
            } else {
                tracing::warn!("Super admin login rejected for: {}", req.username);
                Err(ApiError::unauthorized("Invalid super admin credentials"))
            }
        }
        Role::TenantAdmin => {
            let service = TenantService::new().await?;
            let tenants = service.list().await?;
            match auth::find_tenant_admin(&tenants, &req.username, &req.password) {
                Some(tenant) => Ok(Json(Session::tenant_admin(tenant))),
                None => {
                    tracing::warn!("Tenant admin login rejected for: {}", req.username);
                    Err(ApiError::unauthorized("Invalid tenant admin credentials"))
                }
            }
        }
    }
}
