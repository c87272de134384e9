//! Pollinations API client module.
//!
//! One outbound POST per inbound analysis request: resolve the model alias,
//! build the chat-completion payload, call the endpoint with the bearer
//! credential, and pull the description out of the response envelope.
//!
//! # Submodules
//!
//! - `client`: the HTTP client wrapper and response handling.
//! - `payload`: pure construction of the request body.

mod client;
pub mod payload;

pub use client::PollinationsClient;
