/// Router Client — the single point of entry for calls to the remote query service.
///
/// ARCHITECTURAL RULE: No other module talks HTTP to the router.
/// The search controller reaches it only through the `SearchBackend` trait.
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::report::SearchReport;
use crate::models::skill::{decode_catalog, SkillDescriptor};

const BACKOFF_BASE_MS: u64 = 250;
const BACKOFF_MAX_SHIFT: u32 = 5;

/// Delay before retry number `attempt` (1-based): 250ms, 500ms, 1s, ... capped at 8s.
fn backoff_delay(attempt: u32) -> Duration {
    let shift = attempt.saturating_sub(1).min(BACKOFF_MAX_SHIFT);
    Duration::from_millis(BACKOFF_BASE_MS.saturating_mul(1 << shift))
}

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Router returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Malformed router response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The seam between the search controller and the network. `RouterClient` is
/// the production implementation; tests swap in an in-memory backend.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Sends a free-text query and decodes the report.
    async fn submit_query(&self, query: &str) -> Result<SearchReport, RouterError>;

    /// Fetches the skill catalog.
    async fn list_skills(&self) -> Result<Vec<SkillDescriptor>, RouterError>;
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

/// HTTP client for the router. Retries 429/5xx responses with exponential
/// backoff up to `max_attempts` total attempts.
#[derive(Clone)]
pub struct RouterClient {
    client: Client,
    base_url: String,
    max_attempts: u32,
}

impl RouterClient {
    pub fn new(base_url: &str, timeout: Duration, max_attempts: u32) -> Result<Self, RouterError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_attempts: max_attempts.max(1),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends the request built by `build` and returns the success body.
    async fn execute<F>(&self, route: &str, build: F) -> Result<String, RouterError>
    where
        F: Fn() -> RequestBuilder + Send + Sync,
    {
        let mut last_error: Option<RouterError> = None;

        for attempt in 0..self.max_attempts {
            if attempt > 0 {
                let delay = backoff_delay(attempt);
                warn!(
                    "Router call {route} attempt {attempt} failed, retrying after {}ms...",
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let started = Instant::now();
            // Transport failures (including timeouts) are not retried.
            let response = build().send().await?;

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Router {route} returned {status}: {body}");
                last_error = Some(RouterError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(RouterError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }

            let body = response.text().await?;
            debug!(
                "Router {route} succeeded in {}ms ({} bytes)",
                started.elapsed().as_millis(),
                body.len()
            );
            return Ok(body);
        }

        Err(last_error.unwrap_or(RouterError::Api {
            status: 0,
            message: format!("no attempt made for {route}"),
        }))
    }
}

#[async_trait]
impl SearchBackend for RouterClient {
    async fn submit_query(&self, query: &str) -> Result<SearchReport, RouterError> {
        let url = format!("{}/search", self.base_url);
        let request = SearchRequest { query };
        let body = self
            .execute("/search", || self.client.post(&url).json(&request))
            .await?;

        let value: Value = serde_json::from_str(&body)?;
        Ok(SearchReport::from_value(value)?)
    }

    async fn list_skills(&self) -> Result<Vec<SkillDescriptor>, RouterError> {
        let url = format!("{}/skills", self.base_url);
        let body = self.execute("/skills", || self.client.get(&url)).await?;

        let value: Value = serde_json::from_str(&body)?;
        Ok(decode_catalog(value)?)
    }
}
