use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum TenantCommands {
    #[command(about = "List all tenants in the directory")]
    List,

    #[command(about = "Create a new tenant configuration")]
    Create {
        #[arg(help = "Display name (e.g. the upazilla name)")]
        name: String,

        #[arg(help = "Admin username for the tenant")]
        username: String,

        #[arg(help = "Admin password for the tenant")]
        password: String,

        #[arg(help = "Postgres URL of the tenant's private partition")]
        partition_url: String,

        #[arg(long, help = "Optional serving port recorded for the tenant")]
        port: Option<String>,

        #[arg(long, help = "Optional image-host API key override")]
        api_key: Option<String>,
    },

    #[command(about = "Delete a tenant from the directory")]
    Delete {
        #[arg(help = "Tenant id")]
        id: String,
    },
}

pub async fn handle(
    cmd: TenantCommands,
    server: &str,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let client = reqwest::Client::new();

    match cmd {
        TenantCommands::List => {
            let response = client.get(format!("{}/tenants", server)).send().await?;
            let tenants: Vec<Value> = parse_or_bail(response).await?;

            match output_format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&json!({ "tenants": tenants }))?)
                }
                OutputFormat::Text => {
                    if tenants.is_empty() {
                        println!("No tenants configured");
                        return Ok(());
                    }
                    println!("{:<38} {:<20} {:<15} {}", "ID", "NAME", "USERNAME", "PARTITION");
                    println!("{}", "-".repeat(100));
                    for t in &tenants {
                        println!(
                            "{:<38} {:<20} {:<15} {}",
                            t["id"].as_str().unwrap_or("-"),
                            t["name"].as_str().unwrap_or("-"),
                            t["username"].as_str().unwrap_or("-"),
                            t["partition_url"].as_str().unwrap_or("-"),
                        );
                    }
                }
            }
            Ok(())
        }

        TenantCommands::Create {
            name,
            username,
            password,
            partition_url,
            port,
            api_key,
        } => {
            let body = json!({
                "name": name,
                "username": username,
                "password": password,
                "partition_url": partition_url,
                "port": port,
                "api_key": api_key,
            });

            let response = client
                .post(format!("{}/tenants", server))
                .json(&body)
                .send()
                .await?;
            let tenant: Value = parse_or_bail(response).await?;

            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tenant)?),
                OutputFormat::Text => println!(
                    "Created tenant {} ({})",
                    tenant["name"].as_str().unwrap_or("-"),
                    tenant["id"].as_str().unwrap_or("-"),
                ),
            }
            Ok(())
        }

        TenantCommands::Delete { id } => {
            let response = client
                .delete(format!("{}/tenants/{}", server, id))
                .send()
                .await?;
            let _: Value = parse_or_bail(response).await?;

            match output_format {
                OutputFormat::Json => println!("{}", json!({ "deleted": id })),
                OutputFormat::Text => println!("Deleted tenant {}", id),
            }
            Ok(())
        }
    }
}

/// Deserialize a success body, or surface the server's `{"error": ...}`
async fn parse_or_bail<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> anyhow::Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body: Value = response.json().await.unwrap_or(Value::Null);
    let message = body["error"].as_str().unwrap_or("request failed");
    anyhow::bail!("{} ({})", message, status)
}
