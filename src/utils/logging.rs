//! Structured logging setup and log-line sanitization.
//!
//! Configures the `tracing` ecosystem for the service and keeps the
//! upstream bearer credential out of log sinks: upstream error bodies are
//! logged verbatim otherwise, and some upstreams echo request headers back
//! in error payloads.

use crate::config::LoggingConfig;
use crate::error::Result;
use lazy_static::lazy_static;
use regex::Regex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

lazy_static! {
    static ref BEARER_TOKEN: Regex =
        Regex::new(r"(?i)bearer\s+[A-Za-z0-9._~+/=-]+").expect("bearer redaction pattern");
}

/// Redact bearer credentials from a string before logging it.
///
/// Matches `Bearer <token>` case-insensitively wherever it appears, so
/// upstream error bodies that echo our `Authorization` header do not leak
/// the key into log sinks.
pub fn sanitize(input: &str) -> String {
    BEARER_TOKEN.replace_all(input, "Bearer [REDACTED]").to_string()
}
