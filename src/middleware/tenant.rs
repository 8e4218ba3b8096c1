use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::ConnectionManager;
use crate::error::ApiError;

/// Header carrying the tenant id on every tenant-scoped request.
pub const TENANT_HEADER: &str = "x-tenant-id";

/// Resolved partition pool, injected by [`partition_middleware`]
#[derive(Clone)]
pub struct PartitionPool(pub PgPool);

/// Tenant id from the request header, injected alongside the pool
#[derive(Clone, Copy, Debug)]
pub struct TenantId(pub Uuid);

/// Middleware for tenant-scoped routes: reads the tenant id header,
/// resolves the partition pool through the connection cache, and injects
/// both into the request.
///
/// The header is checked before anything touches a database, so a missing
/// or malformed id is always a plain client error. Resolution goes through
/// the cache first: a tenant deleted from the directory keeps serving on
/// its cached pool until the process restarts.
pub async fn partition_middleware(
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let raw = request
        .headers()
        .get(TENANT_HEADER)
        .ok_or_else(|| ApiError::bad_request("Missing tenant id header"))?
        .to_str()
        .map_err(|_| ApiError::bad_request("Invalid tenant id header"))?;

    let tenant_id = Uuid::parse_str(raw)
        .map_err(|_| ApiError::bad_request(format!("Invalid tenant id: {}", raw)))?;

    let pool = ConnectionManager::partition_pool(tenant_id).await?;

    tracing::debug!("Partition pool acquired for tenant: {}", tenant_id);

    request.extensions_mut().insert(TenantId(tenant_id));
    request.extensions_mut().insert(PartitionPool(pool));

    Ok(next.run(request).await)
}
