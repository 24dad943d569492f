use arena_core::AppError;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// Allows the frontend origin to send credentials and bearer tokens.
pub(super) fn build_cors_layer(frontend_url: &str) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(frontend_url.trim_end_matches('/'))
        .map_err(|error| AppError::Validation(format!("invalid FRONTEND_URL: {error}")))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]))
}
