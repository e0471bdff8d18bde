//! Optional API Key Authentication (Bearer Token)

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

/// Expected bearer token; `None` leaves the guarded routes open
#[derive(Debug, Clone, Default)]
pub struct ApiKey(pub Option<String>);

/// Authentication middleware
/// Validates Bearer token against the configured API key
pub async fn auth_middleware(
    State(api_key): State<ApiKey>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let expected = match api_key.0.as_deref() {
        Some(key) if !key.is_empty() => key,
        _ => return Ok(next.run(request).await),
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) if token == expected => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!("Invalid API key attempted");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => {
            tracing::warn!("Missing or malformed Authorization header");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
