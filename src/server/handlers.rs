// HTTP request handlers

use super::routes::AppState;
use crate::error::ServiceError;
use crate::models::api::{AnalyzeResponse, AnalyzeUrlRequest, HealthResponse};
use crate::vision;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use std::time::Instant;
use tracing::{debug, error, info};

/// Handler for `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "Image Description API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for `GET /metrics` (Prometheus text exposition)
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::metrics::gather_metrics(),
    )
}

/// Handler for `POST /analyze`: multipart image upload.
///
/// Expected fields: `file` (required), `prompt` and `model` (optional).
/// The upload is persisted under a generated name, converted to a `data:`
/// URL, and sent upstream for description.
pub async fn analyze_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ServiceError> {
    let started = Instant::now();

    let mut file_bytes: Option<bytes::Bytes> = None;
    let mut file_name: Option<String> = None;
    let mut declared_type: Option<String> = None;
    let mut prompt: Option<String> = None;
    let mut model: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServiceError::InvalidRequest(format!("malformed multipart body: {}", e)))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("file") => {
                file_name = field.file_name().map(|n| n.to_string());
                declared_type = field.content_type().map(|ct| ct.to_string());
                file_bytes = Some(field.bytes().await.map_err(|e| {
                    ServiceError::InvalidRequest(format!("failed to read file field: {}", e))
                })?);
            }
            Some("prompt") => {
                prompt = Some(field.text().await.map_err(|e| {
                    ServiceError::InvalidRequest(format!("failed to read prompt field: {}", e))
                })?);
            }
            Some("model") => {
                model = Some(field.text().await.map_err(|e| {
                    ServiceError::InvalidRequest(format!("failed to read model field: {}", e))
                })?);
            }
            // Unknown fields are ignored
            _ => {}
        }
    }

    let bytes = file_bytes
        .ok_or_else(|| ServiceError::InvalidRequest("no file part in request".to_string()))?;

    // Browsers submit an empty filename when no file was chosen
    if file_name.as_deref().unwrap_or("").is_empty() {
        return Err(ServiceError::InvalidRequest("no file selected".to_string()));
    }

    vision::validate_image_size(bytes.len()).map_err(ServiceError::InvalidRequest)?;

    // Trust magic bytes over the declared content type; fall back to the
    // declaration for formats we do not sniff
    let mime = match (vision::detect_mime_type(&bytes), declared_type.as_deref()) {
        (Some(sniffed), _) => sniffed,
        (None, Some(declared)) if declared.starts_with("image/") => declared,
        _ => {
            return Err(ServiceError::InvalidRequest(
                "file does not appear to be an image".to_string(),
            ))
        }
    };

    let extension = file_name
        .as_deref()
        .and_then(vision::extension_from_name)
        .unwrap_or_else(|| vision::extension_for_mime(mime).to_string());

    let filename = state.uploads.save(&extension, &bytes).await?;

    let alias = model.unwrap_or_else(|| state.config.upstream.default_model.clone());
    let prompt = prompt.unwrap_or_else(|| state.config.upstream.default_prompt.clone());

    info!(
        "Received analyze request: {} bytes ({}), model={}",
        bytes.len(),
        mime,
        alias
    );

    let data_url = vision::to_data_url(mime, &bytes);
    let description = state
        .upstream
        .describe_image(&data_url, &prompt, &alias)
        .await?;

    crate::metrics::record_analysis("upload", &alias);
    debug!("Analysis complete in {:?}", started.elapsed());

    Ok(Json(AnalyzeResponse::new(
        description,
        alias,
        started.elapsed(),
        Some(filename),
    )))
}

/// Handler for `POST /analyze-url`: JSON body naming a remote image.
///
/// The URL is passed to the upstream verbatim; the image itself is never
/// fetched locally.
pub async fn analyze_url_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<AnalyzeResponse>, ServiceError> {
    let started = Instant::now();

    // Manually deserialize for better error messages
    let req: AnalyzeUrlRequest = serde_json::from_str(&body).map_err(|e| {
        error!("Failed to deserialize request: {}", e);
        ServiceError::InvalidRequest(format!("JSON deserialization error: {}", e))
    })?;

    if req.image_url.trim().is_empty() {
        return Err(ServiceError::InvalidRequest(
            "no image URL provided".to_string(),
        ));
    }
    if !vision::looks_like_image_reference(&req.image_url) {
        return Err(ServiceError::InvalidRequest(
            "image_url must be an http(s) URL or a data URL".to_string(),
        ));
    }

    let alias = req
        .model
        .unwrap_or_else(|| state.config.upstream.default_model.clone());
    let prompt = req
        .prompt
        .unwrap_or_else(|| state.config.upstream.default_prompt.clone());

    info!("Received analyze-url request: model={}", alias);

    let description = state
        .upstream
        .describe_image(&req.image_url, &prompt, &alias)
        .await?;

    crate::metrics::record_analysis("url", &alias);
    debug!("Analysis complete in {:?}", started.elapsed());

    Ok(Json(AnalyzeResponse::new(
        description,
        alias,
        started.elapsed(),
        None,
    )))
}
