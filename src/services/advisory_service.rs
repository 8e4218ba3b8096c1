use std::time::Duration;

use serde_json::{json, Value};

use crate::config;
use crate::database::models::VotingCenter;

/// Shown when the upstream key is absent; mirrors the behavior of the
/// system this replaces, which surfaced a fixed string instead of failing.
pub const KEY_MISSING: &str = "Advisory service API key is not configured.";

/// Shown when the upstream call fails for any reason.
pub const UNAVAILABLE: &str = "Advisory service is unavailable right now.";

#[derive(Debug, thiserror::Error)]
enum AdvisoryError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("malformed upstream response")]
    MalformedResponse,
}

/// Client for the external prompt-in/text-out advisory endpoint.
///
/// Best-effort enrichment only: every failure degrades to a fixed
/// placeholder string and never fails the enclosing request.
pub struct AdvisoryService {
    client: reqwest::Client,
}

impl AdvisoryService {
    pub fn new() -> Self {
        let timeout = config::config().advisory.timeout_secs;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Brief security plan for one voting center, built from the full
    /// projection.
    pub async fn security_plan(&self, center: &VotingCenter) -> String {
        self.generate_or_placeholder(security_plan_prompt(center))
            .await
    }

    /// Whether the area/center ratio of an upazilla looks administratively
    /// manageable.
    pub async fn capacity_analysis(&self, area_count: i64, center_count: i64) -> String {
        self.generate_or_placeholder(capacity_prompt(area_count, center_count))
            .await
    }

    async fn generate_or_placeholder(&self, prompt: String) -> String {
        let advisory = &config::config().advisory;
        let Some(api_key) = advisory.api_key.as_deref() else {
            return KEY_MISSING.to_string();
        };

        match self.generate(&advisory.endpoint, &advisory.model, api_key, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Advisory generation failed: {}", e);
                UNAVAILABLE.to_string()
            }
        }
    }

    async fn generate(
        &self,
        endpoint: &str,
        model: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<String, AdvisoryError> {
        let response = self
            .client
            .post(endpoint)
            .bearer_auth(api_key)
            .json(&json!({ "model": model, "prompt": prompt }))
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        body.get("text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(AdvisoryError::MalformedResponse)
    }
}

impl Default for AdvisoryService {
    fn default() -> Self {
        Self::new()
    }
}

fn security_plan_prompt(center: &VotingCenter) -> String {
    format!(
        "Act as a security expert for an election.\n\
         Create a brief, bulleted security plan for a voting center with the following details:\n\n\
         Center Name: {}\n\
         Location: {}\n\
         Key Personnel:\n\
         - Presiding Officer: {} ({})\n\
         - Police Officer: {}\n\n\
         The plan should include crowd control, ballot box security, and communication protocols.\n\
         Keep it under 200 words.",
        center.name,
        center.location,
        or_na(&center.presiding_officer.name),
        or_na(&center.presiding_officer.phone),
        or_na(&center.police_officer.name),
    )
}

fn capacity_prompt(area_count: i64, center_count: i64) -> String {
    format!(
        "I have an upazilla with {} administrative areas and {} total voting centers.\n\
         Briefly analyze if this ratio seems manageable or if more areas might be needed\n\
         for administrative efficiency. Assume a standard rural density.",
        area_count, center_count
    )
}

fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}
