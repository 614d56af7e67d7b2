use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::json_rejection;
use crate::application::state::AppState;
use crate::auth::Claims;
use crate::domain::entities::user::Credentials;
use crate::domain::errors::{ApiError, CredentialError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(credentials) = payload.map_err(json_rejection)?;

    state.credentials.register(&credentials).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User created successfully" })),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(credentials) = payload.map_err(json_rejection)?;

    let user = state
        .credentials
        .authenticate(&credentials.email, &credentials.password)
        .await
        .map_err(|e| {
            if matches!(e, CredentialError::InvalidCredentials) {
                warn!("Login failed: invalid credentials");
            }
            ApiError::from(e)
        })?;

    let access_token = state.tokens.issue(&user)?;
    info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse { access_token }))
}

/// POST /logout
///
/// Tokens are stateless, so nothing is invalidated server-side; the token
/// stays valid until it expires.
pub async fn logout(Extension(claims): Extension<Claims>) -> Json<Value> {
    info!(user_id = claims.id, "User logged out");
    Json(json!({ "message": "Logged out successfully" }))
}
