// Pollinations API client

use super::payload;
use crate::config::UpstreamConfig;
use crate::error::{Result, ServiceError};
use crate::metrics;
use crate::models::openai::ChatCompletionResponse;
use crate::models::registry::ModelRegistry;
use crate::utils::logging::sanitize;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Client for the Pollinations chat-completion API.
///
/// Owns the pooled HTTP client, the bearer credential, and the model
/// registry. One instance is built at startup and shared across requests;
/// everything in here is read-only after construction.
pub struct PollinationsClient {
    http_client: Client,
    config: UpstreamConfig,
    registry: ModelRegistry,
}

impl PollinationsClient {
    /// Create a new client with explicit timeouts and connection pooling.
    ///
    /// The request timeout bounds the whole outbound call, so a hung
    /// upstream cannot pin the inbound request indefinitely.
    pub fn new(config: &UpstreamConfig, registry: ModelRegistry) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .use_rustls_tls()
            .build()
            .map_err(|e| ServiceError::Internal(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config: config.clone(),
            registry,
        })
    }

    /// Analyze one image: resolve the alias, send the payload, extract the
    /// description from `choices[0].message.content`.
    ///
    /// Exactly one outbound call per invocation; failures surface immediately
    /// with no retry. Cancellation propagates by dropping the returned
    /// future, which aborts the in-flight request.
    pub async fn describe_image(
        &self,
        image_reference: &str,
        prompt: &str,
        model_alias: &str,
    ) -> Result<String> {
        // Resolve before any network traffic; unknown aliases never leave
        // the process.
        let model_id = self.registry.resolve(model_alias)?.to_string();

        let request = payload::build_request(
            &model_id,
            prompt,
            image_reference,
            &self.config.sampling,
        );

        debug!("Calling chat completion for model {}", model_id);
        let started = Instant::now();

        let response = self
            .http_client
            .post(&self.config.api_base_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let (outcome, err) = classify_transport_error(e);
                metrics::record_upstream_call(&model_id, outcome, started.elapsed().as_secs_f64());
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                "Upstream error: HTTP {} - {}",
                status,
                sanitize(&body)
            );
            metrics::record_upstream_call(
                &model_id,
                "upstream_error",
                started.elapsed().as_secs_f64(),
            );
            return Err(ServiceError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let response_text = response.text().await.map_err(|e| {
            let (outcome, err) = classify_transport_error(e);
            metrics::record_upstream_call(&model_id, outcome, started.elapsed().as_secs_f64());
            err
        })?;

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!("Failed to parse upstream response: {}", e);
                metrics::record_upstream_call(&model_id, "malformed", started.elapsed().as_secs_f64());
                ServiceError::MalformedResponse(format!("response parsing error: {}", e))
            })?;

        let description = match parsed
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
        {
            Some(content) => content,
            None => {
                metrics::record_upstream_call(&model_id, "malformed", started.elapsed().as_secs_f64());
                return Err(ServiceError::MalformedResponse(
                    "missing choices[0].message.content".to_string(),
                ));
            }
        };

        metrics::record_upstream_call(&model_id, "ok", started.elapsed().as_secs_f64());
        debug!(
            "Received description ({} chars) in {:?}",
            description.len(),
            started.elapsed()
        );

        // Returned as-is: no trimming, no truncation
        Ok(description)
    }
}

/// Split transport failures into timeout vs. everything else, pairing each
/// with its metrics outcome label.
fn classify_transport_error(e: reqwest::Error) -> (&'static str, ServiceError) {
    if e.is_timeout() {
        ("timeout", ServiceError::UpstreamTimeout(e.to_string()))
    } else {
        ("network_error", ServiceError::Network(e.to_string()))
    }
}
