use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::application::handlers::{auth_handler, health_handler, trade_handler};
use crate::application::state::AppState;
use crate::auth::require_auth;
use crate::config::ServerConfig;

/// Build the HTTP API.
///
/// Public: `/health`, `/signup`, `/login`. Everything else requires a bearer
/// token; authentication runs before any body parsing. In read-only mode
/// `POST /trades` is answered by the read-only handler and the validated
/// create handler is not mounted.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let create_trade = if config.trades_read_only {
        post(trade_handler::reject_creation)
    } else {
        post(trade_handler::create_trade)
    };

    let protected = Router::new()
        .route("/trades", create_trade.get(trade_handler::list_trades))
        .route(
            "/trades/:id",
            get(trade_handler::get_trade)
                .put(trade_handler::reject_modification)
                .patch(trade_handler::reject_modification)
                .delete(trade_handler::reject_deletion),
        )
        .route("/logout", post(auth_handler::logout))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let public = Router::new()
        .route("/health", get(health_handler::health_check))
        .route("/signup", post(auth_handler::signup))
        .route("/login", post(auth_handler::login));

    public
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(config.max_body_bytes)),
        )
        .with_state(state)
}
