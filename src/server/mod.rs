//! Axum-based HTTP server for the image description service.
//!
//! This module sets up the HTTP server, configures routes, and handles
//! incoming requests: image uploads, image-URL analyses, health checks and
//! the metrics exposition.
//!
//! # Components
//!
//! - `handlers`: Implementation of individual API endpoints (analyze, analyze-url, health, metrics).
//! - `middleware`: Custom tower/axum middleware for request ID tracking and request metrics.
//! - `routes`: The main router configuration that ties everything together.

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState, MAX_BODY_BYTES};
