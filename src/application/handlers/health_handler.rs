use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_body_is_status_only() {
        let Json(body) = health_check().await;
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({ "status": "ok" })
        );
    }
}
