//! Completion client — the single point of entry for Claude API calls.
//!
//! Wraps the Anthropic completion endpoint with a sequential retry loop.
//! Attempts never overlap for one request; the backoff before attempt N is
//! linear (N x base delay).

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/complete";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Model used for all completion calls. Hardcoded to prevent drift.
pub const MODEL: &str = "claude-2.1";
const MAX_TOKENS_TO_SAMPLE: u32 = 1000;
const TEMPERATURE: f32 = 0.7;
const RETRY_BASE_DELAY: Duration = Duration::from_secs(1);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to generate response after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: String,
    max_tokens_to_sample: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    completion: String,
}

/// Client for the Anthropic completion API. Cheap to clone; the underlying
/// reqwest client pools connections.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: String,
    max_retries: u32,
}

impl LlmClient {
    pub fn new(api_url: String, api_key: String, max_retries: u32) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_url,
            api_key,
            max_retries,
        }
    }

    /// Sends the prompt and returns the raw completion text.
    ///
    /// Any transport error or non-2xx status is retried, up to the configured
    /// attempt count, sleeping `attempt x 1s` before each retry. Exhaustion
    /// surfaces the last error seen.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = CompletionRequest {
            model: MODEL,
            prompt: frame_prompt(prompt),
            max_tokens_to_sample: MAX_TOKENS_TO_SAMPLE,
            temperature: TEMPERATURE,
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..self.max_retries {
            if attempt > 0 {
                let delay = backoff_delay(attempt);
                warn!(
                    "Completion call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.api_url)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                warn!("Completion API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            let completion: CompletionResponse = match response.json().await {
                Ok(c) => c,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            debug!(
                "Completion call succeeded on attempt {} ({} chars)",
                attempt + 1,
                completion.completion.len()
            );

            return Ok(completion.completion);
        }

        Err(last_error.unwrap_or(LlmError::Exhausted {
            attempts: self.max_retries,
        }))
    }
}

/// Wraps the caller's prompt in the Human/Assistant frame the completion
/// endpoint expects.
fn frame_prompt(prompt: &str) -> String {
    format!("\n\nHuman: {prompt}\n\nAssistant:")
}

/// Linear backoff: attempt 1 waits 1s, attempt 2 waits 2s, and so on.
fn backoff_delay(attempt: u32) -> Duration {
    RETRY_BASE_DELAY * attempt
}
