//! Request and response types for the service's own HTTP surface.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Body of `POST /analyze-url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeUrlRequest {
    /// Remote image URL or `data:` URL.
    pub image_url: String,

    /// Instruction for the model. Defaults to the configured prompt when
    /// absent; an explicitly empty string is passed through verbatim.
    #[serde(default)]
    pub prompt: Option<String>,

    /// Registry alias of the target model. Defaults to the configured alias.
    #[serde(default)]
    pub model: Option<String>,
}

/// Success body of `POST /analyze` and `POST /analyze-url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,

    /// Generated description, returned exactly as the upstream produced it.
    pub description: String,

    /// The alias the caller asked for, not the resolved provider id.
    pub model_used: String,

    /// Wall-clock handling time in seconds, rounded to two decimals.
    pub processing_time: f64,

    /// Stored filename; only present for the upload endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl AnalyzeResponse {
    pub fn new(
        description: String,
        model_used: String,
        elapsed: Duration,
        filename: Option<String>,
    ) -> Self {
        Self {
            success: true,
            description,
            model_used,
            processing_time: (elapsed.as_secs_f64() * 100.0).round() / 100.0,
            filename,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}
