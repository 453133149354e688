// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::post,
};
use chat::chat_handler;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Frontends allowed to call the API from a browser.
pub const ALLOWED_ORIGINS: [&str; 5] = [
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8081",
];

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/api/chat", post(chat_handler))
        // Messages have no length cap.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}

/// The full service: routes, state and the browser origin policy.
pub fn app(state: SharedState) -> Router {
    create_router()
        .with_state(state)
        .layer(cors_layer(&ALLOWED_ORIGINS))
}

/// Exact-match origin list with credentials.
///
/// Credentialed CORS forbids `*`, so methods and headers mirror whatever the
/// preflight asks for.
pub fn cors_layer(origins: &[&str]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
