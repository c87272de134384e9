// Configuration module

mod models;

pub use models::*;

use crate::error::{Result, ServiceError};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest, prefix `IMG2TEXT`, `__` separator)
    /// 2. Config file (explicit path, or `~/.img2text/config.toml` if present)
    /// 3. Defaults (lowest)
    ///
    /// An explicitly passed path must exist; the default path is optional.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let builder = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?);

        let builder = match path {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name(&Self::default_config_path()).required(false)),
        };

        let config = builder
            // Override with environment variables, e.g. IMG2TEXT_SERVER__PORT=9000
            .add_source(Environment::with_prefix("IMG2TEXT").separator("__"))
            .build()
            .map_err(|e| ServiceError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServiceError::Config(e.to_string()))
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".img2text")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_complete() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.upstream.api_base_url, "https://text.pollinations.ai/openai");
        assert_eq!(config.upstream.default_model, "gemini");
        assert_eq!(config.upstream.default_prompt, "Describe this image in detail.");
        assert_eq!(config.upstream.sampling.seed, 101);
        assert_eq!(config.upstream.sampling.temperature, 0.7);
        assert_eq!(config.storage.upload_dir, "uploads");
    }

    #[test]
    fn test_missing_explicit_config_file_fails() {
        let result = AppConfig::load(Some("/nonexistent/img2text.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9001\n\n[upstream.models]\nflux = \"flux-vision-1\"\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.upstream.models.get("flux").unwrap(), "flux-vision-1");
        assert_eq!(config.upstream.sampling.seed, 101);
    }
}
