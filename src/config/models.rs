//! Configuration data structures for the img2text service.
//!
//! This module defines the schema for the application settings, including
//! server parameters, upstream API specifics, and upload storage.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port, static assets).
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream Pollinations API settings.
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Upload storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8000`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the static frontend (`index.html` and friends).
    /// Default: `static`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Settings for the upstream chat-completion API connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Endpoint of the OpenAI-compatible chat-completion API.
    /// Default: the Pollinations text endpoint.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Bearer credential for the upstream API. Defaults to the
    /// `POLLINATIONS_API_KEY` environment variable; never ship it in code.
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Registry alias used when a request names no model.
    /// Default: `gemini`
    #[serde(default = "default_model_alias")]
    pub default_model: String,

    /// Prompt used when a request carries none.
    /// Default: `Describe this image in detail.`
    #[serde(default = "default_prompt")]
    pub default_prompt: String,

    /// Whole-request timeout for the outbound call, in seconds.
    /// Default: `60`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Connection establishment timeout, in seconds.
    /// Default: `10`
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,

    /// Sampling parameters attached to every upstream request.
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Extra alias → model id entries merged over the built-in registry.
    #[serde(default)]
    pub models: HashMap<String, String>,
}

/// Sampling parameters sent with every chat-completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Fixed seed for reproducible descriptions.
    /// Default: `101`
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Sampling temperature.
    /// Default: `0.7`
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

/// Settings for ephemeral upload storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory where uploaded images are written.
    /// Default: `uploads`
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default trait implementations linking to custom logic

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: default_api_key(),
            default_model: default_model_alias(),
            default_prompt: default_prompt(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            sampling: SamplingConfig::default(),
            models: HashMap::new(),
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            temperature: default_temperature(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults and shared constants

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_api_base_url() -> String {
    "https://text.pollinations.ai/openai".to_string()
}

fn default_api_key() -> String {
    std::env::var("POLLINATIONS_API_KEY").unwrap_or_default()
}

fn default_model_alias() -> String {
    "gemini".to_string()
}

fn default_prompt() -> String {
    "Describe this image in detail.".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_seed() -> u64 {
    101
}

fn default_temperature() -> f32 {
    0.7
}

fn default_upload_dir() -> String {
    "uploads".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
