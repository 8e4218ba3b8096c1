mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn super_admin_login_succeeds_regardless_of_directory() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({
            "role": "super_admin",
            "username": "admin",
            "password": "admin"
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);

    let session = res.json::<serde_json::Value>().await?;
    assert_eq!(session["role"], "super_admin");
    assert_eq!(session["display_name"], "Super Admin");
    assert!(session["tenant_id"].is_null());
    Ok(())
}

#[tokio::test]
async fn super_admin_login_rejects_wrong_password() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({
            "role": "super_admin",
            "username": "admin",
            "password": "wrong"
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = res.json::<serde_json::Value>().await?;
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn tenant_admin_login_fails_without_a_directory_match() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({
            "role": "tenant_admin",
            "username": "nobody",
            "password": "nothing"
        }))
        .send()
        .await?;

    // Unauthorized when the directory is reachable and has no match,
    // unavailable when there is no directory database at all
    assert!(
        res.status() == StatusCode::UNAUTHORIZED
            || res.status() == StatusCode::SERVICE_UNAVAILABLE,
        "unexpected status: {}",
        res.status()
    );
    Ok(())
}

#[tokio::test]
async fn login_rejects_a_body_without_a_role() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "username": "admin", "password": "admin" }))
        .send()
        .await?;

    assert!(res.status().is_client_error(), "status: {}", res.status());
    Ok(())
}
