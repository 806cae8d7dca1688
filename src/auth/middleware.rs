//! Authentication middleware for axum.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::{ApiKeyContext, CredentialValidator};
use crate::error::ApiError;

/// Extract and validate the API key from the request.
///
/// Expects an `Authorization: Bearer <key>` header. A missing or malformed
/// header is Unauthorized, since no credential can be compared.
pub async fn require_api_key(
    State(validator): State<Arc<dyn CredentialValidator>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let api_key = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(String::from)
        .ok_or_else(|| ApiError::Unauthorized("Missing API key".to_string()))?;

    if !validator.validate(&api_key) {
        tracing::warn!(key_prefix = %key_prefix(&api_key), "Invalid API key attempted");
        return Err(ApiError::Unauthorized("Invalid API key".to_string()));
    }

    // Expose the key prefix to handlers for fetch logging
    request.extensions_mut().insert(ApiKeyContext {
        prefix: key_prefix(&api_key).to_string(),
    });

    Ok(next.run(request).await)
}

/// Leading characters of a key, safe to emit in log lines.
fn key_prefix(key: &str) -> &str {
    let end = key
        .char_indices()
        .nth(8)
        .map(|(i, _)| i)
        .unwrap_or(key.len());
    &key[..end]
}
