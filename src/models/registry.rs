// Model alias registry (alias → Pollinations model id)

use crate::config::UpstreamConfig;
use crate::error::{Result, ServiceError};
use std::collections::BTreeMap;

/// Built-in alias table. Extra aliases (or overrides) come from
/// `[upstream.models]` in the config file.
static DEFAULT_MODELS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "gemini" => "gemini-2.5-flash-lite",
    "openai" => "gpt-5-mini",
    "openai-large" => "gpt-5-chat",
};

/// Immutable alias → model id mapping, built once at startup and shared
/// read-only through the router state. No locking: nothing mutates it after
/// construction.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    models: BTreeMap<String, String>,
}

impl ModelRegistry {
    /// Build the registry from the built-in table merged with config entries.
    /// Config entries win on alias collision.
    pub fn from_config(config: &UpstreamConfig) -> Self {
        let mut models: BTreeMap<String, String> = DEFAULT_MODELS
            .entries()
            .map(|(alias, id)| (alias.to_string(), id.to_string()))
            .collect();

        for (alias, id) in &config.models {
            models.insert(alias.clone(), id.clone());
        }

        Self { models }
    }

    /// Resolve an alias to its provider model id.
    ///
    /// Pure lookup; fails before any network call is made. Alias matching is
    /// case-sensitive.
    pub fn resolve(&self, alias: &str) -> Result<&str> {
        self.models
            .get(alias)
            .map(String::as_str)
            .ok_or_else(|| {
                ServiceError::UnknownModel(format!(
                    "{} (supported: {})",
                    alias,
                    self.aliases().join(", ")
                ))
            })
    }

    /// All known aliases, sorted.
    pub fn aliases(&self) -> Vec<&str> {
        self.models.keys().map(String::as_str).collect()
    }
}
