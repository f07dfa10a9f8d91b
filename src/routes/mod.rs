// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    http::{HeaderValue, StatusCode, header},
    routing::{get, post},
};
use chat::{chat_handler, home_handler, preflight_handler};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub const LIVENESS_TEXT: &str = "Chatbot Server is running!";

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(home_handler).options(preflight_handler))
        .route("/chat", post(chat_handler).options(preflight_handler))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(TraceLayer::new_for_http())
        // Every response, 400s and 404s included, gets the same permissive CORS headers.
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}
