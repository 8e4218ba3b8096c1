mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn tenant_create_rejects_missing_name() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/tenants", server.base_url))
        .json(&json!({
            "username": "admin1",
            "password": "pw1",
            "partition_url": "postgres://localhost:5432/sadar"
        }))
        .send()
        .await?;

    // Validation runs before any directory access
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Missing required field: name");
    Ok(())
}

#[tokio::test]
async fn tenant_create_rejects_non_postgres_partition_url() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/tenants", server.base_url))
        .json(&json!({
            "name": "Sadar",
            "username": "admin1",
            "password": "pw1",
            "partition_url": "mongodb+srv://cluster0.example.net/sadar"
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<serde_json::Value>().await?;
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .contains("postgres"));
    Ok(())
}

#[tokio::test]
async fn tenant_delete_rejects_malformed_id() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{}/tenants/not-a-uuid", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
