//! Router configuration for the HTTP API.
//!
//! This module sets up all routes and middleware (CORS, tracing) and creates
//! the axum router ready for serving.

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Development origins of the React frontend. Credentials are allowed, so the
/// origin list must stay explicit (no wildcard).
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:5174"];

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS.map(HeaderValue::from_static),
        ))
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/users", get(handlers::list_users))
        .route("/users/search", get(handlers::search_users))
        .route("/users/{user_id}/{action}", put(handlers::account_action))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
