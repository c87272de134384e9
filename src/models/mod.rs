//! Data models for the service surface and the upstream API.
//!
//! This module contains the type definitions for request/response bodies used by:
//! - The service's own HTTP endpoints (`api`)
//! - The upstream OpenAI-compatible chat-completion API (`openai`)
//! - The model alias registry (`registry`)

pub mod api;
pub mod openai;
pub mod registry;

pub use api::{AnalyzeResponse, AnalyzeUrlRequest, HealthResponse};
pub use openai::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ContentPart};
pub use registry::ModelRegistry;
