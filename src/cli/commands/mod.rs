pub mod tenant;

use super::OutputFormat;

pub async fn health(server: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let response = reqwest::get(format!("{}/health", server)).await?;
    let status = response.status();
    let body: serde_json::Value = response.json().await?;

    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&body)?),
        OutputFormat::Text => {
            let state = body["status"].as_str().unwrap_or("unknown");
            println!("server: {} ({})", state, status);
        }
    }

    Ok(())
}
