//! HTTP client for the generative-language `generateContent` endpoint.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::{timeout, Duration};

use crate::config::settings::{ApiKey, GeminiConfig};
use crate::error::PlanError;

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Client for the hosted generative-language API.
///
/// Built once at startup and shared by reference. Each call is a fresh
/// remote request, one attempt, bounded by the configured timeout. A failure
/// is surfaced to the caller rather than retried.
pub struct GeminiClient {
    http: Client,
    api_key: ApiKey,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(api_key: ApiKey, config: &GeminiConfig) -> Result<GeminiClient, PlanError> {
        let timeout_duration = Duration::from_secs(config.timeout_secs);
        let http = Client::builder()
            .timeout(timeout_duration)
            .tcp_keepalive(Duration::from_secs(30))
            .build()
            .map_err(|e| PlanError::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(GeminiClient {
            http,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: timeout_duration,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a prompt and return the generated text verbatim.
    pub async fn generate(&self, prompt: &str) -> Result<String, PlanError> {
        let start = std::time::Instant::now();
        let result = timeout(self.timeout, self.request(prompt)).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(Ok(text)) => {
                tracing::info!(
                    model = %self.model,
                    latency_ms = latency_ms,
                    "Plan generated"
                );
                Ok(text)
            }
            Ok(Err(e)) => {
                tracing::error!(
                    model = %self.model,
                    latency_ms = latency_ms,
                    error = %e,
                    "Plan generation failed"
                );
                Err(PlanError::external_service(format!("{e:#}")))
            }
            Err(_) => {
                tracing::error!(
                    model = %self.model,
                    timeout_secs = self.timeout.as_secs(),
                    "Plan generation timed out"
                );
                Err(PlanError::external_service(format!(
                    "model '{}' did not answer within {}s",
                    self.model,
                    self.timeout.as_secs()
                )))
            }
        }
    }

    async fn request(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&GenerateContentRequest {
                contents: vec![Content {
                    parts: vec![Part {
                        text: prompt.to_string(),
                    }],
                }],
            })
            .send()
            .await
            .with_context(|| format!("failed to reach the generative API at {url}"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("failed to read the API response body")?;

        if !status.is_success() {
            anyhow::bail!(
                "API returned {status}: {}",
                body.chars().take(200).collect::<String>()
            );
        }

        parse_generate_response(&body)
    }
}

/// Pull the generated text out of a `generateContent` response body.
/// Multi-part candidates are concatenated; an empty answer is an error.
pub fn parse_generate_response(body: &str) -> Result<String> {
    let parsed: GenerateContentResponse =
        serde_json::from_str(body).context("the API response is not valid JSON")?;

    let text: String = parsed
        .candidates
        .first()
        .map(|candidate| {
            candidate
                .content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        anyhow::bail!("the API returned an empty plan");
    }
    Ok(text)
}
