use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware::from_fn,
    routing::{get, post, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use election_admin_api::config;
use election_admin_api::database::ConnectionManager;
use election_admin_api::handlers;
use election_admin_api::middleware::{partition_middleware, TENANT_HEADER};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL and friends
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!(
        "Starting election admin API in {:?} mode",
        config.environment
    );

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("ELECTION_API_PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(config.server.port);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Election admin API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .route("/auth/login", post(handlers::auth::login))
        // Directory (super admin)
        .merge(directory_routes())
        // Tenant-scoped record operations
        .merge(partition_routes())
        // Global middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn directory_routes() -> Router {
    Router::new()
        .route(
            "/tenants",
            get(handlers::tenants::list).post(handlers::tenants::create),
        )
        .route(
            "/tenants/:id",
            put(handlers::tenants::update).delete(handlers::tenants::delete),
        )
}

/// Every route here requires the tenant id header; the middleware resolves
/// the partition pool before any handler runs.
fn partition_routes() -> Router {
    Router::new()
        .route(
            "/areas",
            get(handlers::areas::list).post(handlers::areas::create),
        )
        .route(
            "/centers",
            get(handlers::centers::list).post(handlers::centers::create),
        )
        .route(
            "/centers/:id",
            get(handlers::centers::get).put(handlers::centers::update),
        )
        .route("/centers/:id/advisory", post(handlers::centers::advisory))
        .route(
            "/contacts",
            get(handlers::contacts::list).post(handlers::contacts::create),
        )
        .route(
            "/contacts/:id",
            put(handlers::contacts::update).delete(handlers::contacts::delete),
        )
        .route(
            "/symbols",
            get(handlers::symbols::list).post(handlers::symbols::create),
        )
        .route(
            "/symbols/:id",
            put(handlers::symbols::update).delete(handlers::symbols::delete),
        )
        .route("/images", post(handlers::images::upload))
        .route("/stats", get(handlers::stats::stats))
        .layer(from_fn(partition_middleware))
}

fn cors_layer() -> CorsLayer {
    let security = &config::config().security;
    if !security.enable_cors {
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(TENANT_HEADER),
        ])
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Election Admin API",
        "version": version,
        "description": "Multi-tenant election logistics administration with per-upazilla data partitions",
        "endpoints": {
            "health": "/health (public)",
            "login": "/auth/login (public)",
            "tenants": "/tenants[/:id] (super admin)",
            "areas": "/areas (tenant)",
            "centers": "/centers[/:id], /centers/:id/advisory (tenant)",
            "contacts": "/contacts[/:id] (tenant)",
            "symbols": "/symbols[/:id] (tenant)",
            "images": "/images (tenant)",
            "stats": "/stats (tenant)",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match ConnectionManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "directory": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "error": e.to_string()
            })),
        ),
    }
}
