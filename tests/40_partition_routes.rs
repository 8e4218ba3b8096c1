mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn tenant_scoped_routes_require_the_tenant_header() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for path in ["/areas", "/centers", "/contacts", "/symbols", "/stats"] {
        let res = client
            .get(format!("{}{}", server.base_url, path))
            .send()
            .await?;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "path: {}", path);

        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["error"], "Missing tenant id header", "path: {}", path);
    }
    Ok(())
}

#[tokio::test]
async fn tenant_header_must_be_a_uuid() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/areas", server.base_url))
        .header("x-tenant-id", "sadar")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<serde_json::Value>().await?;
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .starts_with("Invalid tenant id"));
    Ok(())
}

#[tokio::test]
async fn unknown_tenant_cannot_reach_record_routes() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Valid uuid, but no such tenant in any directory
    let res = client
        .get(format!("{}/contacts", server.base_url))
        .header("x-tenant-id", "00000000-0000-4000-8000-000000000000")
        .send()
        .await?;

    // NotFound when the directory is reachable, unavailable when it is not
    assert!(
        res.status() == StatusCode::NOT_FOUND
            || res.status() == StatusCode::SERVICE_UNAVAILABLE,
        "unexpected status: {}",
        res.status()
    );

    let body = res.json::<serde_json::Value>().await?;
    assert!(body["error"].is_string());
    Ok(())
}
