use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::application::state::AppState;
use crate::domain::errors::ApiError;

pub mod token;

pub use token::{Claims, TokenService};

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// Returns `None` for a missing header, another scheme, or an empty token.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Middleware to require a valid bearer token for protected endpoints.
///
/// On success the verified `Claims` are inserted into the request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let verified = match bearer_token(request.headers()) {
        Some(token) => state.tokens.verify(token),
        None => {
            tracing::warn!(path = %request.uri().path(), "Missing bearer token");
            return Err(ApiError::Unauthorized(
                "Token missing or not provided".to_string(),
            ));
        }
    };

    let claims = verified.map_err(|e| {
        tracing::warn!(path = %request.uri().path(), "Token verification failed: {}", e);
        ApiError::Forbidden("Token is invalid or expired".to_string())
    })?;

    tracing::debug!(user_id = claims.id, "Request authenticated");
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
