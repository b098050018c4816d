pub mod api;
pub mod chatbot;
pub mod config;
pub mod gemini;
pub mod prompts;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use gemini::TextGenerator;

pub const SERVICE_NAME: &str = "BMSPA FAQ Chatbot";

/// Shared, immutable per-process state. The provider sits behind a trait
/// object so tests can inject a double.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
}

pub fn build_app(state: AppState) -> Router {
    api::router()
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}
