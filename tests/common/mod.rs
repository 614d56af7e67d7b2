#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use trade_ledger::application::{build_router, AppState};
use trade_ledger::config::ServerConfig;

pub const EMAIL: &str = "trader@example.com";
pub const PASSWORD: &str = "s3cure-pass";

pub fn test_config() -> ServerConfig {
    ServerConfig {
        bcrypt_cost: 4,
        ..ServerConfig::default()
    }
}

pub fn app_with(config: ServerConfig) -> (Router, AppState) {
    let state = AppState::from_config(&config).expect("seed trades are valid");
    (build_router(state.clone(), &config), state)
}

pub fn app() -> Router {
    app_with(test_config()).0
}

/// Send a request and decode the JSON response (Null for an empty body)
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn signup(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    let body = serde_json::json!({ "email": email, "password": password }).to_string();
    send(app, Method::POST, "/signup", None, Some(&body)).await
}

pub async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    let body = serde_json::json!({ "email": email, "password": password }).to_string();
    send(app, Method::POST, "/login", None, Some(&body)).await
}

/// Register the default user and return a fresh access token
pub async fn access_token(app: &Router) -> String {
    let (status, _) = signup(app, EMAIL, PASSWORD).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = login(app, EMAIL, PASSWORD).await;
    assert_eq!(status, StatusCode::OK);
    body["accessToken"].as_str().unwrap().to_string()
}
